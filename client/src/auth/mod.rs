//! Authentication forms and the credential-exchange flow.
//!
//! ARCHITECTURE
//! ============
//! `validation` holds the field rules, `form` the per-form state machine, and
//! `flow` the network exchange plus session persistence. The login and sign-up
//! panels only wire these to signals and DOM events.

pub mod flow;
pub mod form;
pub mod validation;
