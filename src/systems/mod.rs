//! Application systems
//!
//! Frame-driving logic kept out of main.rs for testability.

mod animation;

pub use animation::AnimationSystem;
