//! CLI commands

pub mod define;
pub mod init;
pub mod list;
pub mod new;
pub mod series;
pub mod show;
