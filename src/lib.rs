//! # Rotate Connect Four
//!
//! Rules engine for a Connect Four variant played on any rectangular grid at
//! least four columns wide, where each move may also rotate one row by a
//! single cell. Rows wrap around for horizontal and diagonal lines.
//!
//! ## Modules
//!
//! - [`game`] — Board parsing and rendering, move engine, win detection, move input
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
