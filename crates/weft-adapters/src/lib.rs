//! Infrastructure adapters for weft.
//!
//! This crate implements the capability contracts defined in
//! `weft-core::domain::capabilities`: formatting authorities with concrete
//! rendering policies, plus recording doubles for tests.

pub mod authority;
pub mod logger;

// Re-export commonly used adapters
pub use authority::{ConstAuthority, MaskingAuthority, RecordingAuthority, StyleAuthority};
