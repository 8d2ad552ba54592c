//! Since-Tag Validator.
//!
//! Cross-checks every element of the verify snapshot against the computed
//! first appearance and produces one [`Diagnostic`] per mismatch, in
//! ascending qualified-path order.

pub mod diagnostic;
pub mod validator;

pub use diagnostic::{Diagnostic, MISSING_SINCE};
pub use validator::{
    check_since_tags, validate_since_tags, MissingTagPolicy, UnseenPolicy, ValidationOptions,
};
