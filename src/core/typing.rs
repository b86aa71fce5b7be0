use super::constants::*;

/// One rendered state of the typing effect and how long to hold it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Type-then-delete cycle over a list of phrases.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    /// `None` when there is nothing to type.
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    pub fn tick(&mut self) -> TypingFrame {
        let phrase = &self.phrases[self.phrase_index];
        let len = phrase.chars().count();

        let mut delay_ms = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY_MS
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPE_DELAY_MS
        };
        let text: String = phrase.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay_ms = HOLD_FULL_DELAY_MS;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = HOLD_EMPTY_DELAY_MS;
        }

        TypingFrame { text, delay_ms }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }
}
