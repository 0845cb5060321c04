//! Common reusable UI components shared by the pages and forms

pub mod form;
pub mod message;

pub use form::{FormField, TextAreaField};
pub use message::{ErrorMessage, WarningMessage};
