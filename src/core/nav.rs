use super::constants::*;

/// Navbar-related state derived from the page scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    pub scrolled: bool,
    pub show_scroll_top: bool,
    /// Reading progress in percent, 0..=100.
    pub progress: f64,
}

impl ScrollState {
    pub fn measure(offset: f64, scroll_height: f64, client_height: f64) -> Self {
        let range = scroll_height - client_height;
        let progress = if range > 0.0 {
            (offset / range * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            scrolled: offset > NAV_SCROLLED_OFFSET,
            show_scroll_top: offset > SCROLL_TOP_VISIBLE_OFFSET,
            progress,
        }
    }
}

/// Whether the nav link for a section at `top` with `height` is current.
#[inline]
pub fn section_is_active(offset: f64, top: f64, height: f64) -> bool {
    let start = top - SECTION_ACTIVE_LEAD;
    offset > start && offset <= start + height
}
