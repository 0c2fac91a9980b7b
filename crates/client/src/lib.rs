//! memberdb_client - Admin console client for the memberdb API.
//!
//! The imperative shell around `memberdb_core`: the HTTP client, the access
//! guard run on page entry, the add-user form controller, the notice bus and
//! the terminal front end.

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod notifier;
pub mod output;
pub mod page;

#[cfg(test)]
mod testing;

pub use client::MemberdbClient;
pub use config::Config;
pub use error::{ClientError, Result};
