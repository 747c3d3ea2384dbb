//! CLI command implementations

pub mod clean;
pub mod config;
pub mod data;
pub mod init;
pub mod list;
pub mod new;
