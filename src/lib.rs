pub mod config;
pub mod error;
pub mod exec;
pub mod tagger;
pub mod ui;

pub use error::{Result, TagError};
