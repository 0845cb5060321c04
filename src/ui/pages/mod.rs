//! Application pages module
//!
//! - Home page
//! - Login page
//! - Register page
//! - Dashboard (document board)
//! - Not found

mod dashboard;
mod home;
mod login;
mod not_found;
mod register;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
