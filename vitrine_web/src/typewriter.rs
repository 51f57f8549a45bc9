// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typing-effect headline driven by one-shot timeouts.

use vitrine_core::typewriter::{Typewriter, TypewriterConfig};
use web_sys::{Document, HtmlElement, Node};

use crate::error::MountError;
use crate::timer::Timeout;

/// Where the typewriter writes, and where it reads its phrases from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterSelectors {
    /// The element whose text is animated.
    pub target: &'static str,
    /// Attribute on the target holding `|`-separated phrases.
    pub phrases_attribute: &'static str,
}

impl TypewriterSelectors {
    /// The hero headline of the portfolio page.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            target: ".texto-dinamico",
            phrases_attribute: "data-phrases",
        }
    }
}

impl Default for TypewriterSelectors {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Starts the typing effect on the element matching `selectors.target`.
///
/// Phrases come from the target's phrases attribute when present, otherwise
/// from `config.phrases`. The loop stops by itself once the element is
/// removed from the document.
pub fn mount_typewriter(
    document: &Document,
    selectors: &TypewriterSelectors,
    config: TypewriterConfig,
) -> Result<(), MountError> {
    let target = crate::query(document, selectors.target)?;
    let phrases: Vec<String> = match target.get_attribute(selectors.phrases_attribute) {
        Some(list) => split_phrases(&list),
        None => config.phrases.iter().map(|p| (*p).to_owned()).collect(),
    };
    let typewriter =
        Typewriter::new(phrases, config).ok_or(MountError::NoContent(selectors.target))?;

    target.set_text_content(Some(""));
    let document = document.clone();
    Timeout::spawn(config.start_ms, move || {
        tick(document, target, typewriter);
    });
    Ok(())
}

fn split_phrases(list: &str) -> Vec<String> {
    list.split('|').map(|p| p.trim().to_owned()).collect()
}

fn tick(document: Document, target: HtmlElement, mut typewriter: Typewriter) {
    let node: &Node = &target;
    let attached = document.body().is_some_and(|body| body.contains(Some(node)));
    if !attached {
        return;
    }
    let delay = typewriter.step();
    target.set_text_content(Some(typewriter.text()));
    Timeout::spawn(delay, move || tick(document, target, typewriter));
}

#[cfg(test)]
mod tests {
    use super::split_phrases;

    #[test]
    fn phrases_are_pipe_separated_and_trimmed() {
        assert_eq!(
            split_phrases("Antonio Wildson | Tony Brito"),
            ["Antonio Wildson", "Tony Brito"]
        );
        assert_eq!(split_phrases("solo"), ["solo"]);
    }
}
