//! Platform-independent state and rules behind the page effects.
//!
//! Nothing here touches the DOM, so the tests build these modules on the host.

pub mod boot;
pub mod color;
pub mod config;
pub mod constants;
pub mod contact;
pub mod filter;
pub mod nav;
/// Ambient particle field: drifting points joined by distance-faded lines and
/// pushed away from the pointer. The field is a plain state holder; drawing
/// goes through [`DrawSurface`] and frame scheduling is left to the caller.
pub mod particles;
/// Scroll-reveal helpers: one-shot latches, count-up counters and skill bar
/// widths.
pub mod reveal;
pub mod schedule;
pub mod typing;

pub use boot::*;
pub use color::*;
pub use config::*;
pub use contact::*;
pub use filter::*;
pub use nav::*;
pub use particles::*;
pub use reveal::*;
pub use schedule::*;
pub use typing::*;
