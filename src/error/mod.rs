// src/error/mod.rs
//
// Crate-wide error taxonomy. Every failure surfaces to the immediate
// caller as a typed result; nothing is logged-and-swallowed.

pub mod types;

pub use types::{AppError, AppResult};
