//! Shared test utilities for the gitconf workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`git`] — repository markers, fake and real
//! - [`sandbox`] — [`ConfigSandbox`] with a work tree, a home and an XDG base

pub mod git;
pub mod sandbox;

pub use sandbox::ConfigSandbox;
