//! Front-desk layer over `quote-core`: logging setup, session state and the
//! commands the quote and booking forms call.
//!
//! A host calls [`setup::start`] once, then passes the returned
//! [`state::AppState`] to the functions in [`commands`].

pub mod commands;
pub mod error;
pub mod logger;
pub mod setup;
pub mod state;

#[cfg(test)]
mod tests;
