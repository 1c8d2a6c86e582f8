//! Patterns sub-module.

pub mod singleton;
