//! Confidant is a terminal front-end for an emotional support chat assistant.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation state machine, the HTTP client for the
//!   chat endpoint, and configuration.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that drives user input and display updates.
//! - [`cli`] parses arguments and dispatches to the chat screen, the one-shot
//!   `say` command, or configuration updates.
//! - [`api`] defines the JSON payloads exchanged with the chat endpoint.
//!
//! The binary (`src/main.rs`) routes through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
