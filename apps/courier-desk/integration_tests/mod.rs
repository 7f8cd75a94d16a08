mod commands;
mod helpers;
mod setup;
