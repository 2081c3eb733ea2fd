//! Shared type aliases and small data types.

pub mod collections;
