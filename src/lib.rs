// Public API
pub mod cli;
pub mod commands;

// Core domain types
mod config;
mod environment;
mod sdk;
mod ui;

// Re-export main types
pub use config::Config;
pub use environment::{Environment, Shell};
pub use sdk::{ResolveError, SdkRoot, ToolchainConfig};
