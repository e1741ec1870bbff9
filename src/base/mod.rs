//! The base module contains types shared across the crate.

pub mod location;
pub mod log;
