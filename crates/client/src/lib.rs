//! `todo-client` library crate.
//!
//! A terminal front end for the todo API. State lives in a single
//! [`state::TodoState`] container that only changes through
//! [`state::Action`]s; [`app::App`] performs the network calls and
//! dispatches the resulting actions. The binary entrypoint lives in
//! `main.rs`.

pub mod api;
pub mod app;
pub mod command;
pub mod config;
pub mod state;
pub mod view;
