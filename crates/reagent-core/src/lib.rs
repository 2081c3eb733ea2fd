//! Core types for the Reagent analysis engine: error enums and shared
//! collection aliases. No analysis logic lives here.

pub mod errors;
pub mod types;
