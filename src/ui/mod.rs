pub mod auth;
pub mod common;
pub mod icon;
pub mod navbar;
pub mod pages;

pub use icon::{Icon, icons};
pub use navbar::Navbar;
