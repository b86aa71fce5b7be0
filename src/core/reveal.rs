use super::constants::COUNTER_STEPS;

/// Fires once per instance. Each page section owns its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealOnce {
    fired: bool,
}

impl RevealOnce {
    /// True the first time only.
    pub fn trigger(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountFrame {
    pub text: String,
    pub done: bool,
}

/// Counts from 0 to `target` in `COUNTER_STEPS` equal increments, rendering
/// as `N+`.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u32,
    current: f32,
    increment: f32,
}

impl CountUp {
    pub fn new(target: u32) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f32 / COUNTER_STEPS,
        }
    }

    /// Builds a counter from existing text such as `"50+"`.
    pub fn from_text(text: &str) -> Option<Self> {
        leading_int(text).map(Self::new)
    }

    pub fn tick(&mut self) -> CountFrame {
        if self.current < self.target as f32 {
            self.current += self.increment;
            CountFrame {
                text: format!("{}+", self.current.ceil() as u32),
                done: false,
            }
        } else {
            CountFrame {
                text: format!("{}+", self.target),
                done: true,
            }
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }
}

/// Leading decimal digits after optional whitespace: `" 12 projects"` -> 12.
pub fn leading_int(text: &str) -> Option<u32> {
    let trimmed = text.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// CSS width for a `data-progress` value, clamped to 0..=100 percent.
pub fn progress_width(progress: &str) -> Option<String> {
    let pct: f64 = progress.trim().trim_end_matches('%').parse().ok()?;
    if !pct.is_finite() {
        return None;
    }
    Some(format!("{}%", pct.clamp(0.0, 100.0)))
}
