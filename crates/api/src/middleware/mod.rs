//! Request middleware.
//!
//! - [`validate::validate_sign_up`] -- Sign-up validation gate.

pub mod validate;
