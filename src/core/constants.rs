// Tuning constants for the particle engine and the page sections.

// Default field configuration
pub const DEFAULT_PARTICLE_COUNT: usize = 80;
pub const DEFAULT_PARTICLE_SIZE: f32 = 2.0; // upper bound of the random radius offset
pub const DEFAULT_PARTICLE_OPACITY: f32 = 0.5;
pub const DEFAULT_LINE_OPACITY: f32 = 0.15;
pub const DEFAULT_SPEED: f32 = 0.5; // drift components drawn from [-speed/2, speed/2]
pub const DEFAULT_CONNECT_DISTANCE: f32 = 150.0; // px
pub const DEFAULT_RESPONSIVE_BREAKPOINT: f32 = 768.0; // viewport px
pub const DEFAULT_POINTER_RADIUS: f32 = 150.0; // px

// Particle shape
pub const MIN_PARTICLE_RADIUS: f32 = 1.0;
pub const GLOW_RADIUS_FACTOR: f32 = 3.0;

// Motion
pub const VELOCITY_DAMPING: f32 = 0.05; // fraction of the gap to drift closed per frame

// Pointer interaction
pub const POINTER_LINE_OPACITY: f32 = 0.3;
pub const POINTER_IMPULSE_SCALE: f32 = 0.5;

// Stroke widths (px)
pub const CONNECTION_LINE_WIDTH: f32 = 1.0;
pub const POINTER_LINE_WIDTH: f32 = 2.0;

// Typing effect pacing (ms)
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_FULL_DELAY_MS: u32 = 2000; // pause on the complete phrase
pub const HOLD_EMPTY_DELAY_MS: u32 = 500; // pause before the next phrase

// Count-up animation
pub const COUNTER_STEPS: f32 = 50.0; // frames to reach the target

// Contact form minimum lengths (characters, after trimming)
pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 3;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const SUBMISSION_FAILURE_RATE: f64 = 0.1;

// Navigation scroll thresholds (px)
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;
pub const SCROLL_TOP_VISIBLE_OFFSET: f64 = 300.0;
pub const SECTION_ACTIVE_LEAD: f64 = 100.0;
