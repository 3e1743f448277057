//! Local UI chrome state (auth modal, cookie consent).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session model so the
//! modal can switch views without touching auth data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which form the auth modal is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalView {
    #[default]
    Login,
    SignUp,
    ForgetPassword,
}

/// UI state for the auth modal and the cookie banner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub modal_open: bool,
    pub modal_view: ModalView,
    pub cookies_accepted: bool,
}

impl UiState {
    /// Show the modal on `view`.
    pub fn open_modal(&mut self, view: ModalView) {
        self.modal_view = view;
        self.modal_open = true;
    }

    /// Hide the modal; the last view is kept for the next open.
    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Switch views while the modal stays open.
    pub fn set_view(&mut self, view: ModalView) {
        self.modal_view = view;
    }
}
