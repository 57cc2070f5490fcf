use crate::config::TypingConfig;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Text is counted in `char`s, so every frame is a well-formed prefix of the
/// current word even for non-ASCII words.
#[derive(Clone, Debug)]
pub struct TypingAnimation {
    words: Vec<Vec<char>>,
    word_index: usize,
    shown: usize,
    deleting: bool,
    type_ms: u32,
    delete_ms: u32,
    hold_ms: u32,
    next_word_ms: u32,
}

impl TypingAnimation {
    pub fn new(config: &TypingConfig) -> Option<Self> {
        let words: Vec<Vec<char>> = config
            .words
            .iter()
            .filter(|word| !word.is_empty())
            .map(|word| word.chars().collect())
            .collect();

        if words.is_empty() {
            return None;
        }

        Some(Self {
            words,
            word_index: 0,
            shown: 0,
            deleting: false,
            type_ms: config.type_ms,
            delete_ms: config.delete_ms,
            hold_ms: config.hold_ms,
            next_word_ms: config.next_word_ms,
        })
    }

    pub fn step(&mut self) -> TypingFrame {
        let word_len = self.words[self.word_index].len();

        if self.deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(word_len);
        }

        let text: String = self.words[self.word_index][..self.shown].iter().collect();

        let delay_ms = if !self.deleting && self.shown == word_len {
            self.deleting = true;
            self.hold_ms
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            self.next_word_ms
        } else if self.deleting {
            self.delete_ms
        } else {
            self.type_ms
        };

        TypingFrame { text, delay_ms }
    }
}
