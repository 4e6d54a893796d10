//! Packplan CLI - environment-driven build plan resolution.
//!
//! This crate exposes the `packplan` binary: it collects the process
//! environment, resolves it into build settings via `packplan-config`, and
//! prints the assembled plan for the external bundling pipeline to consume.
//!
//! Modules:
//!
//! - [`cli`] - clap argument definitions
//! - `commands` - command implementations
//! - [`error`] - structured error types
//! - [`logger`] - tracing setup
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;
