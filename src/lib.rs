//! Tesseract viewer application library
//!
//! Configuration loading and the per-frame animation driver, shared by the
//! binary and the integration tests.

pub mod config;
pub mod systems;
