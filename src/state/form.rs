//! Sign-up form state: typed per-field errors and the submission flag.
//!
//! DESIGN
//! ======
//! Errors are keyed by the closed `Field` enumeration rather than raw
//! input-name strings, so a message can only ever land on a field the form
//! actually renders.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Fields on the sign-up form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Per-field error messages. `None` means the field has no active error.
///
/// A field carries a message only when a submission outcome put one there;
/// editing a field clears its message and nothing else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    email: Option<String>,
    password: Option<String>,
}

impl FieldErrors {
    /// Error mapping carrying a single email-field message.
    pub fn email(message: impl Into<String>) -> Self {
        Self {
            email: Some(message.into()),
            password: None,
        }
    }

    /// The active message for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
        }
    }

    /// Set the message for `field`, replacing any previous one.
    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        match field {
            Field::Email => self.email = Some(message.into()),
            Field::Password => self.password = Some(message.into()),
        }
    }

    /// Clear the message for `field`, leaving other fields untouched.
    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Email => self.email = None,
            Field::Password => self.password = None,
        }
    }

    /// True when no field has an active message.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Verdict of a sign-up submission as reported by the auth service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// The account was created.
    Success,
    /// The service rejected the submission with per-field errors.
    Rejected(FieldErrors),
}

/// State owned by the sign-up page.
///
/// The only lifecycle beyond the error mapping is idle vs. submitting;
/// the flag flips on submit and flips back when the outcome (or failure)
/// arrives.
#[derive(Clone, Debug, Default)]
pub struct SignUpFormState {
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl SignUpFormState {
    /// A field was edited: drop its stale error.
    pub fn field_edited(&mut self, field: Field) {
        self.errors.clear(field);
    }

    /// Begin a submission. Returns `false` if one is already in flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Apply the service's verdict and return to idle.
    pub fn apply_outcome(&mut self, outcome: SignUpOutcome) {
        match outcome {
            SignUpOutcome::Success => self.errors = FieldErrors::default(),
            SignUpOutcome::Rejected(errors) => self.errors = errors,
        }
        self.submitting = false;
    }

    /// The request itself failed: keep existing errors, return to idle.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }
}
