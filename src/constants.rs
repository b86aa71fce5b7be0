// Page wiring constants: element ids, selectors and timings used by the web
// frontend.

// Particle background
pub const PARTICLES_CONTAINER_ID: &str = "particles";
pub const ACCENT_CSS_VAR: &str = "--primary-color";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Typing effect
pub const TYPING_TEXT_ID: &str = "typingText";
pub const TYPING_ROLES: [&str; 4] = [
    "Full Stack Developer",
    "UI/UX Designer",
    "Problem Solver",
    "Creative Thinker",
];

// Scroll reveal
pub const SKILLS_SECTION_ID: &str = "skills";
pub const SKILL_BAR_SELECTOR: &str = ".skill-progress";
pub const SKILLS_THRESHOLD: f64 = 0.3; // visible fraction before bars fill
pub const ABOUT_SECTION_ID: &str = "about";
pub const COUNTER_SELECTOR: &str = ".stat-item h4";
pub const COUNTERS_THRESHOLD: f64 = 0.5;

// Project filter
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const FILTER_SHOW_DELAY_MS: i32 = 10; // let display:block apply before fading in
pub const FILTER_HIDE_DELAY_MS: i32 = 300; // matches the CSS fade-out

// Contact form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const ERROR_BORDER_COLOR: &str = "#ef4444";
pub const SUBMIT_DELAY_MS: i32 = 2000;
pub const SENDING_LABEL_HTML: &str =
    "<i class=\"fas fa-spinner fa-spin\"></i> <span>Sending...</span>";
pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

// Notifications
pub const NOTIFY_SUCCESS_BG: &str = "#10b981";
pub const NOTIFY_ERROR_BG: &str = "#ef4444";
pub const NOTIFY_LIFETIME_MS: i32 = 5000;
pub const NOTIFY_EXIT_MS: i32 = 300;

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const SCROLL_TOP_ID: &str = "scrollTop";
pub const SECTION_SELECTOR: &str = "section[id]";
