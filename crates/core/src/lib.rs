//! Sign-up request validation: rule types, evaluator, gate, and the sign-up
//! rule set. Pure logic with no I/O, shared by the HTTP layer and tests.

pub mod error;
pub mod signup;
pub mod validation;
