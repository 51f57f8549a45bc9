// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact-form submission outcome and toast feedback.
//!
//! The backend posts the form and classifies the result into a
//! [`SubmitOutcome`]; [`ContactConfig`] decides what the toast says, how long
//! it stays, and whether the form is cleared.

/// Result of posting the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubmitOutcome {
    /// The endpoint answered with a 2xx status.
    Accepted,
    /// The endpoint answered with a non-success status.
    Rejected {
        /// HTTP status code.
        status: u16,
    },
    /// The request never produced a response (network error, CORS, etc.).
    Failed,
}

impl SubmitOutcome {
    /// Classifies an HTTP status, or its absence.
    #[must_use]
    pub const fn from_status(status: Option<u16>) -> Self {
        match status {
            Some(200..=299) => Self::Accepted,
            Some(status) => Self::Rejected { status },
            None => Self::Failed,
        }
    }

    /// Whether the message was delivered.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Toast text and timing for the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContactConfig {
    /// Toast shown after a successful submission.
    pub success_message: &'static str,
    /// Toast shown after a rejected or failed submission.
    pub failure_message: &'static str,
    /// How long the toast stays visible, in milliseconds.
    pub toast_ms: u32,
    /// Class that makes the toast visible.
    pub toast_class: &'static str,
}

impl ContactConfig {
    /// The portfolio's contact form (Portuguese copy).
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            success_message: "Mensagem enviada com sucesso!",
            failure_message: "Ocorreu um erro ao enviar.",
            toast_ms: 3000,
            toast_class: "show",
        }
    }

    /// Toast text for `outcome`.
    #[must_use]
    pub const fn message(&self, outcome: SubmitOutcome) -> &'static str {
        if outcome.is_success() {
            self.success_message
        } else {
            self.failure_message
        }
    }

    /// Whether the form should be cleared after `outcome`.
    #[must_use]
    pub const fn resets_form(&self, outcome: SubmitOutcome) -> bool {
        outcome.is_success()
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::portfolio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_statuses() {
        assert_eq!(SubmitOutcome::from_status(Some(200)), SubmitOutcome::Accepted);
        assert_eq!(SubmitOutcome::from_status(Some(204)), SubmitOutcome::Accepted);
        assert_eq!(
            SubmitOutcome::from_status(Some(422)),
            SubmitOutcome::Rejected { status: 422 }
        );
        assert_eq!(SubmitOutcome::from_status(None), SubmitOutcome::Failed);
    }

    #[test]
    fn only_success_resets_the_form() {
        let c = ContactConfig::portfolio();
        assert_eq!(c.message(SubmitOutcome::Accepted), c.success_message);
        assert!(c.resets_form(SubmitOutcome::Accepted));
        for outcome in [SubmitOutcome::Rejected { status: 500 }, SubmitOutcome::Failed] {
            assert_eq!(c.message(outcome), c.failure_message);
            assert!(!c.resets_form(outcome), "{outcome:?} keeps the form");
        }
    }
}
