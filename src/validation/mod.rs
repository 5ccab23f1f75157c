//! Quote input validation module.

mod validate;

pub use validate::{quick_validate, validate_input, validate_material, ValidationResult};
