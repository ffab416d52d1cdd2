//! Request validation: declarative rules evaluated before any store access.

pub mod validation;

pub use validation::{FieldError, RequestValidator, Rule, CREATE_RULES, UPDATE_RULES};
