//! # Console Connect Four
//!
//! A two-player Connect Four game played on the text console.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board engine, pieces, turn-taking session
//! - [`render`] — Plain-text board rendering
//! - [`console`] — Line-based input loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod render;
