//! # Connect Four
//!
//! A two-player Connect Four game for the terminal. The core rules engine
//! is independent of any I/O; the terminal front-end built with Ratatui
//! drives it and keeps score across games.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, session state machine
//! - [`ui`] — Terminal UI: game view, input handling, score ledger
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
