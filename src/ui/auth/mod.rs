//! Authentication UI module
//!
//! Sign-in / sign-up forms and the session context they write to.

mod context;
mod login_form;
mod register_form;

pub use context::{SessionContext, provide_session_context, use_session_context};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
