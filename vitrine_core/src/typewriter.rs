// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typing-effect headline.
//!
//! A [`Typewriter`] cycles through a list of phrases: it types one character
//! at a time, holds the full phrase, erases one character at a time, then
//! moves on to the next phrase (wrapping around). Each [`step`] returns how
//! long the backend should wait before the next one.
//!
//! [`step`]: Typewriter::step

use alloc::string::String;
use alloc::vec::Vec;

/// Timing for the typing effect, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TypewriterConfig {
    /// Delay after typing a character.
    pub type_ms: u32,
    /// Delay after erasing a character.
    pub erase_ms: u32,
    /// Pause once a phrase is fully typed.
    pub hold_ms: u32,
    /// Delay before the first step.
    pub start_ms: u32,
    /// Phrases used when the page does not supply its own.
    pub phrases: &'static [&'static str],
}

impl TypewriterConfig {
    /// The portfolio headline: brisk typing, faster erasing, a two-second
    /// hold.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            type_ms: 120,
            erase_ms: 80,
            hold_ms: 2000,
            start_ms: 500,
            phrases: &["Antonio Wildson", "Tony Brito"],
        }
    }
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Cycles phrases one character at a time.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    phrase: usize,
    /// Number of characters of the current phrase currently shown.
    shown: usize,
    erasing: bool,
}

impl Typewriter {
    /// Creates a typewriter over the non-empty entries of `phrases`.
    ///
    /// Returns `None` if no phrase has any characters.
    #[must_use]
    pub fn new(
        phrases: impl IntoIterator<Item = String>,
        config: TypewriterConfig,
    ) -> Option<Self> {
        let phrases: Vec<String> = phrases.into_iter().filter(|p| !p.is_empty()).collect();
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases,
            config,
            phrase: 0,
            shown: 0,
            erasing: false,
        })
    }

    /// Types or erases one character and returns the delay, in
    /// milliseconds, before the next step.
    pub fn step(&mut self) -> u32 {
        let len = self.phrases[self.phrase].chars().count();
        if self.erasing {
            self.shown -= 1;
            if self.shown == 0 {
                self.erasing = false;
                self.phrase = (self.phrase + 1) % self.phrases.len();
                return self.config.type_ms;
            }
            self.config.erase_ms
        } else {
            self.shown += 1;
            if self.shown == len {
                self.erasing = true;
                return self.config.hold_ms;
            }
            self.config.type_ms
        }
    }

    /// The text currently shown.
    #[must_use]
    pub fn text(&self) -> &str {
        let phrase = &self.phrases[self.phrase];
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map_or(phrase.len(), |(i, _)| i);
        &phrase[..end]
    }

    /// Index of the phrase being typed or erased.
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase
    }

    /// Whether the typewriter is currently erasing.
    #[must_use]
    pub fn is_erasing(&self) -> bool {
        self.erasing
    }

    /// The configured timings.
    #[must_use]
    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn phrases(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn types_holds_erases_and_cycles() {
        let config = TypewriterConfig::portfolio();
        let mut tw = Typewriter::new(phrases(&["ab", "xyz"]), config).unwrap();
        assert_eq!(tw.text(), "");

        assert_eq!(tw.step(), 120);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.step(), 2000, "hold once the phrase is complete");
        assert_eq!(tw.text(), "ab");
        assert!(tw.is_erasing());

        assert_eq!(tw.step(), 80);
        assert_eq!(tw.text(), "a");
        assert_eq!(tw.step(), 120, "back to typing speed for the next phrase");
        assert_eq!(tw.text(), "");
        assert_eq!(tw.phrase_index(), 1);

        tw.step();
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn wraps_to_first_phrase() {
        let mut tw = Typewriter::new(phrases(&["a", "b"]), TypewriterConfig::portfolio()).unwrap();
        // "a": type, erase; "b": type, erase.
        for _ in 0..4 {
            tw.step();
        }
        assert_eq!(tw.phrase_index(), 0);
    }

    #[test]
    fn multibyte_characters_are_whole() {
        let mut tw = Typewriter::new(phrases(&["ñé"]), TypewriterConfig::portfolio()).unwrap();
        tw.step();
        assert_eq!(tw.text(), "ñ");
        tw.step();
        assert_eq!(tw.text(), "ñé");
    }

    #[test]
    fn empty_phrases_are_skipped() {
        assert!(Typewriter::new(phrases(&["", ""]), TypewriterConfig::portfolio()).is_none());
        let config = TypewriterConfig::portfolio();
        let tw = Typewriter::new(vec![String::new(), "x".to_string()], config).unwrap();
        assert_eq!(tw.config().type_ms, 120);
    }

    #[test]
    fn portfolio_phrases_are_usable() {
        let config = TypewriterConfig::portfolio();
        let tw = Typewriter::new(config.phrases.iter().map(|p| p.to_string()), config).unwrap();
        assert_eq!(tw.phrase_index(), 0);
        assert_eq!(config.start_ms, 500);
    }
}
