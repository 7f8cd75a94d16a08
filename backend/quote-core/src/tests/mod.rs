mod config;
mod error;
mod validation;
