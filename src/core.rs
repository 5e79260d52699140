// src/core.rs
pub mod exclude;
pub mod matcher;
pub mod pattern;
pub mod sync;
pub mod walk;
