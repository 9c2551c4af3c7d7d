//! `tagforge-desktop`
//!
//! **Responsibility:** the product tag designer as an interactive session.
//!
//! This crate provides:
//! - Environment-driven editor configuration
//! - The editor session wiring the live preview to persistence, identifier
//!   generation and image acquisition
//! - A line-oriented terminal shell over the editor session
//!
//! The live preview is the authority for what is shown; boundaries only feed it.

pub mod config;
pub mod session;
pub mod shell;

pub use config::EditorConfig;
pub use session::{EditorError, TagEditor};
pub use shell::{Shell, ShellCommand};
