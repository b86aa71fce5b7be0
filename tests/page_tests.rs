// Host-side tests for the page section logic (typing, counters, filter, form, nav).
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod contact {
    include!("../src/core/contact.rs");
}
mod filter {
    include!("../src/core/filter.rs");
}
mod nav {
    include!("../src/core/nav.rs");
}
mod reveal {
    include!("../src/core/reveal.rs");
}
mod typing {
    include!("../src/core/typing.rs");
}

use contact::*;
use filter::ProjectFilter;
use nav::*;
use reveal::*;
use typing::*;

fn frame(text: &str, delay_ms: u32) -> TypingFrame {
    TypingFrame {
        text: text.to_string(),
        delay_ms,
    }
}

#[test]
fn typewriter_types_holds_deletes_and_advances() {
    let mut tw = Typewriter::new(["Hi", "Yo"]).unwrap();
    assert_eq!(tw.tick(), frame("H", 100));
    assert_eq!(tw.tick(), frame("Hi", 2000));
    assert!(tw.is_deleting());
    assert_eq!(tw.tick(), frame("H", 50));
    assert_eq!(tw.tick(), frame("", 500));
    assert!(!tw.is_deleting());
    assert_eq!(tw.phrase_index(), 1);
    assert_eq!(tw.tick(), frame("Y", 100));
}

#[test]
fn typewriter_wraps_to_first_phrase() {
    let mut tw = Typewriter::new(["ab"]).unwrap();
    for _ in 0..4 {
        tw.tick();
    }
    assert_eq!(tw.phrase_index(), 0);
    assert_eq!(tw.tick(), frame("a", 100));
}

#[test]
fn typewriter_counts_characters_not_bytes() {
    let mut tw = Typewriter::new(["né"]).unwrap();
    assert_eq!(tw.tick().text, "n");
    assert_eq!(tw.tick(), frame("né", 2000));
}

#[test]
fn typewriter_needs_a_phrase() {
    assert!(Typewriter::new(Vec::<String>::new()).is_none());
    let mut blank = Typewriter::new([""]).unwrap();
    assert_eq!(blank.tick(), frame("", 2000));
    assert_eq!(blank.tick(), frame("", 500));
}

#[test]
fn reveal_fires_once() {
    let mut latch = RevealOnce::default();
    assert!(!latch.has_fired());
    assert!(latch.trigger());
    assert!(!latch.trigger());
    assert!(latch.has_fired());
}

#[test]
fn counter_reaches_target_in_fifty_steps() {
    let mut counter = CountUp::from_text("50+").unwrap();
    assert_eq!(counter.target(), 50);
    let first = counter.tick();
    assert_eq!(first.text, "1+");
    assert!(!first.done);
    let mut last = first;
    for _ in 1..50 {
        last = counter.tick();
    }
    assert_eq!(last.text, "50+");
    assert!(!last.done);
    let finished = counter.tick();
    assert_eq!(finished.text, "50+");
    assert!(finished.done);
}

#[test]
fn counter_rounds_partial_steps_up() {
    let mut counter = CountUp::new(7);
    assert_eq!(counter.tick().text, "1+");
    let mut zero = CountUp::new(0);
    let done = zero.tick();
    assert_eq!(done.text, "0+");
    assert!(done.done);
}

#[test]
fn leading_int_reads_prefix_digits() {
    assert_eq!(leading_int("50+"), Some(50));
    assert_eq!(leading_int(" 12 projects"), Some(12));
    assert_eq!(leading_int("-5"), None);
    assert_eq!(leading_int("many"), None);
    assert_eq!(leading_int(""), None);
}

#[test]
fn progress_width_is_clamped_percent() {
    assert_eq!(progress_width("85").as_deref(), Some("85%"));
    assert_eq!(progress_width("72.5%").as_deref(), Some("72.5%"));
    assert_eq!(progress_width("150").as_deref(), Some("100%"));
    assert_eq!(progress_width("-3").as_deref(), Some("0%"));
    assert_eq!(progress_width("NaN"), None);
    assert_eq!(progress_width("wide"), None);
}

#[test]
fn filter_matches_by_category() {
    let all = ProjectFilter::from_attribute(Some("all"));
    assert_eq!(all, ProjectFilter::All);
    assert!(all.matches(None));
    assert!(all.matches(Some("web")));

    let web = ProjectFilter::from_attribute(Some("web"));
    assert!(web.matches(Some("web")));
    assert!(!web.matches(Some(" web ")));
    assert!(!web.matches(Some("mobile")));
    assert!(!web.matches(None));
}

#[test]
fn button_without_filter_shows_only_uncategorized_cards() {
    let bare = ProjectFilter::from_attribute(None);
    assert_eq!(bare, ProjectFilter::Uncategorized);
    assert!(bare.matches(None));
    assert!(!bare.matches(Some("web")));
    assert!(!bare.matches(Some("")));

    // An empty attribute is a real category, not "all".
    let empty = ProjectFilter::from_attribute(Some(""));
    assert!(empty.matches(Some("")));
    assert!(!empty.matches(Some("web")));
    assert!(!empty.matches(None));
}

fn message(name: &str, email: &str, subject: &str, body: &str) -> ContactMessage {
    ContactMessage {
        name: name.into(),
        email: email.into(),
        subject: subject.into(),
        message: body.into(),
    }
}

#[test]
fn valid_message_passes() {
    let v = message("Ada", "ada@example.com", "Hello", "Lovely portfolio!").validate();
    assert!(v.is_valid());
    assert_eq!(v.results.len(), 4);
    assert_eq!(v.errors().count(), 0);
}

#[test]
fn short_fields_report_their_messages() {
    let v = message(" A ", "nope", "Hi", "too short").validate();
    assert!(!v.is_valid());
    assert_eq!(v.error_for(ContactField::Name), Some(&ContactError::NameTooShort));
    assert_eq!(v.error_for(ContactField::Email), Some(&ContactError::InvalidEmail));
    assert_eq!(v.error_for(ContactField::Subject), Some(&ContactError::SubjectTooShort));
    assert_eq!(v.error_for(ContactField::Message), Some(&ContactError::MessageTooShort));
    assert_eq!(
        ContactError::MessageTooShort.to_string(),
        "Message must be at least 10 characters"
    );
    let fields: Vec<_> = v.errors().map(|(f, _)| f.id()).collect();
    assert_eq!(fields, ["name", "email", "subject", "message"]);
}

#[test]
fn email_shape_checks() {
    assert!(is_plausible_email("a@b.co"));
    assert!(is_plausible_email("first.last@sub.example.org"));
    assert!(!is_plausible_email("a@b"));
    assert!(!is_plausible_email("@b.co"));
    assert!(!is_plausible_email("a@.co"));
    assert!(!is_plausible_email("a@b."));
    assert!(!is_plausible_email("a b@c.d"));
    assert!(!is_plausible_email("a@b@c.d"));
}

#[test]
fn submission_fails_for_low_rolls() {
    assert_eq!(simulated_submission(0.05), Err(ContactError::SubmissionFailed));
    assert_eq!(simulated_submission(0.1), Err(ContactError::SubmissionFailed));
    assert_eq!(simulated_submission(0.5), Ok(()));
    assert_eq!(
        ContactError::SubmissionFailed.to_string(),
        "Failed to send message. Please try again."
    );
}

#[test]
fn scroll_state_thresholds_and_progress() {
    let top = ScrollState::measure(0.0, 2000.0, 1000.0);
    assert!(!top.scrolled && !top.show_scroll_top);
    assert_eq!(top.progress, 0.0);

    let mid = ScrollState::measure(500.0, 2000.0, 1000.0);
    assert!(mid.scrolled && mid.show_scroll_top);
    assert_eq!(mid.progress, 50.0);

    let nav_only = ScrollState::measure(60.0, 2000.0, 1000.0);
    assert!(nav_only.scrolled && !nav_only.show_scroll_top);

    assert_eq!(ScrollState::measure(1200.0, 2000.0, 1000.0).progress, 100.0);
    assert_eq!(ScrollState::measure(10.0, 800.0, 800.0).progress, 0.0);
}

#[test]
fn section_activates_ahead_of_its_top() {
    assert!(!section_is_active(400.0, 500.0, 400.0));
    assert!(section_is_active(401.0, 500.0, 400.0));
    assert!(section_is_active(800.0, 500.0, 400.0));
    assert!(!section_is_active(801.0, 500.0, 400.0));
}
