/// Bookkeeping for a self-rescheduling frame callback.
///
/// The driver calls [`FrameGate::enter`] at the top of every callback and only
/// steps (and re-requests a frame) while it returns true. [`FrameGate::cancel`]
/// hands back the pending request id so the caller can cancel it with the
/// scheduler; calling it again is harmless.
#[derive(Debug, Default)]
pub struct FrameGate {
    active: bool,
    pending: Option<i32>,
    frames: u64,
}

impl FrameGate {
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn enter(&mut self) -> bool {
        self.pending = None;
        if self.active {
            self.frames += 1;
        }
        self.active
    }

    /// Record the id of the next requested frame. Dropped once cancelled.
    pub fn scheduled(&mut self, handle: i32) {
        if self.active {
            self.pending = Some(handle);
        }
    }

    pub fn cancel(&mut self) -> Option<i32> {
        self.active = false;
        self.pending.take()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
