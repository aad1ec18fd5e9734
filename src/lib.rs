//! Task persistence and due-date reminder engine for a single-user to-do list.
//!
//! Tasks live in a JSON file (`tasks.json`); a second file (`notified.json`)
//! remembers which reminders already went out today. [`facade::Docket`] is
//! the entry point for shells.

pub mod build_info;
pub mod commands;
pub mod config;
pub mod error;
pub mod facade;
pub mod filter;
pub mod logging;
pub mod model;
pub mod notify;
pub mod output;
pub mod reminder;
pub mod store;
