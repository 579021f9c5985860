//! Integration tests for the dictionary workflows
//!
//! Each test builds a throwaway project under a temp directory and runs the
//! command entry points against it.

pub mod analyze;
pub mod check;
pub mod generate;
pub mod helpers;
pub mod scaffold;
