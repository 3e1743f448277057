//! Login and sign-up form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each form moves `Idle -> Submitting -> Idle`. `begin` validates and builds
//! the request body; `finish` applies the outcome to what the form shows.
//! Neither touches the network, so the state machine is testable on its own.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use super::flow::SubmitOutcome;
use super::validation::{Field, FieldErrors};
use crate::net::types::{LoginRequest, RegisterRequest};

/// Account type the backend assigns to storefront customers.
pub const DEFAULT_USER_TYPE: &str = "2";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Append the backend's login marker to `email`.
pub fn mark_email(email: &str, marker: Option<char>) -> String {
    let mut out = email.to_owned();
    if let Some(marker) = marker {
        out.push(marker);
    }
    out
}

// =============================================================================
// LOGIN
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub field_errors: FieldErrors,
    /// Server-side validation text shown above the form.
    pub error_message: Option<String>,
    pub phase: SubmitPhase,
}

impl LoginForm {
    /// Run the field rules.
    ///
    /// # Errors
    ///
    /// Returns every failed rule.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require_email(&self.email);
        errors.require(Field::Password, &self.password);
        errors.into_result()
    }

    /// Validate and enter `Submitting`, returning the body to send.
    ///
    /// # Errors
    ///
    /// Returns the failed rules; the form stays `Idle` and nothing is sent.
    pub fn begin(&mut self, marker: Option<char>, device_name: &str) -> Result<LoginRequest, FieldErrors> {
        if let Err(errors) = self.validate() {
            self.field_errors = errors.clone();
            return Err(errors);
        }
        self.field_errors = FieldErrors::default();
        self.error_message = None;
        self.phase = SubmitPhase::Submitting;
        Ok(LoginRequest {
            email: mark_email(&self.email, marker),
            password: self.password.clone(),
            remember_me: self.remember_me,
            device_name: device_name.to_owned(),
        })
    }

    /// Back to `Idle`; a validation rejection shows its message and clears the inputs.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.phase = SubmitPhase::Idle;
        if let SubmitOutcome::Rejected(message) = outcome {
            self.reset();
            self.error_message = Some(message.clone());
        }
    }

    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.remember_me = false;
        self.field_errors = FieldErrors::default();
    }
}

// =============================================================================
// SIGN UP
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub field_errors: FieldErrors,
    pub error_message: Option<String>,
    pub phase: SubmitPhase,
}

impl SignUpForm {
    /// Run the field rules.
    ///
    /// # Errors
    ///
    /// Returns every failed rule.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.require(Field::Name, &self.name);
        errors.require_email(&self.email);
        errors.require(Field::Phone, &self.phone);
        errors.require(Field::Password, &self.password);
        errors.into_result()
    }

    /// Validate and enter `Submitting`, returning the body to send.
    ///
    /// # Errors
    ///
    /// Returns the failed rules; the form stays `Idle` and nothing is sent.
    pub fn begin(&mut self, device_name: &str) -> Result<RegisterRequest, FieldErrors> {
        if let Err(errors) = self.validate() {
            self.field_errors = errors.clone();
            return Err(errors);
        }
        self.field_errors = FieldErrors::default();
        self.error_message = None;
        self.phase = SubmitPhase::Submitting;
        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            phone: self.phone.clone(),
            user_type: DEFAULT_USER_TYPE.to_owned(),
            device_name: device_name.to_owned(),
        })
    }

    /// Back to `Idle`; a validation rejection shows its message and clears the inputs.
    pub fn finish(&mut self, outcome: &SubmitOutcome) {
        self.phase = SubmitPhase::Idle;
        if let SubmitOutcome::Rejected(message) = outcome {
            self.reset();
            self.error_message = Some(message.clone());
        }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.password.clear();
        self.field_errors = FieldErrors::default();
    }
}
