pub mod ordinal;
pub mod validation;
