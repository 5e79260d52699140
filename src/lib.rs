// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod git;
pub mod models;
pub mod utils;

pub use cli::{Args, Command, run};
pub use crate::core::matcher::find_matches;
pub use crate::core::pattern::{CompiledPattern, compile};
pub use crate::core::sync::{ConsoleObserver, SyncObserver, synchronize};
pub use models::{CopyTask, Entry, EntryKind, SyncReport};
