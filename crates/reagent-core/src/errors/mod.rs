//! Error handling for Reagent.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod parse_error;

pub use parse_error::ParseError;
