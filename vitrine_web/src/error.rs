// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Why a page behavior did not mount.

use core::fmt;

use vitrine_core::carousel::Inert;
use wasm_bindgen::JsValue;

/// A page behavior could not be mounted.
///
/// All variants are local, recoverable conditions: the behavior simply stays
/// off. Callers usually log or ignore them.
#[derive(Debug)]
pub enum MountError {
    /// A required element is not in the document.
    MissingElement(&'static str),
    /// A script the behavior relies on is not loaded.
    MissingGlobal(&'static str),
    /// The element exists but holds nothing to animate.
    NoContent(&'static str),
    /// The carousel has nothing to navigate; its controls were hidden.
    Inert(Inert),
    /// A DOM call threw.
    Js(JsValue),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(what) => write!(f, "missing element: {what}"),
            Self::MissingGlobal(what) => write!(f, "missing global: {what}"),
            Self::NoContent(what) => write!(f, "nothing to show in {what}"),
            Self::Inert(reason) => write!(f, "inert: {reason}"),
            Self::Js(err) => write!(f, "DOM error: {err:?}"),
        }
    }
}

impl From<JsValue> for MountError {
    fn from(err: JsValue) -> Self {
        Self::Js(err)
    }
}

impl From<Inert> for MountError {
    fn from(reason: Inert) -> Self {
        Self::Inert(reason)
    }
}

impl From<MountError> for JsValue {
    fn from(err: MountError) -> Self {
        match err {
            MountError::Js(value) => value,
            other => Self::from_str(&other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        assert_eq!(
            MountError::MissingElement(".certificados-track").to_string(),
            "missing element: .certificados-track"
        );
        assert_eq!(
            MountError::Inert(Inert::FitsViewport).to_string(),
            "inert: carousel content fits the viewport"
        );
        assert_eq!(
            MountError::MissingGlobal("tsParticles").to_string(),
            "missing global: tsParticles"
        );
    }
}
