//! Common reusable UI components
//!
//! Buttons, form fields and the dialog shell shared by the landing sections
//! and the registration modal.

pub mod button;
pub mod form;
pub mod modal;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use form::{CheckboxField, FormField, SelectField};
pub use modal::Dialog;
