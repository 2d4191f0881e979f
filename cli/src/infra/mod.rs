//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: the AWS SDK session, process
//! execution, and the config file.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod aws;
pub mod command_runner;
pub mod config;
pub mod session_plugin;
