//! Core domain models and business logic for the document dashboard

mod board;
#[cfg(feature = "ssr")]
pub mod config;
mod document;
mod session;
#[cfg(test)]
mod tests;
pub mod validation;

pub use board::*;
pub use document::*;
pub use session::*;
