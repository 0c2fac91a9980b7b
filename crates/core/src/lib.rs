//! memberdb_core - Functional core for the memberdb admin console.
//!
//! Pure data types and functions shared by every shell of the application:
//! the add-user form state machine, request validation, the access decision
//! made from the caller's identity, outcome notices and the route table.
//! Nothing in this crate performs I/O.

pub mod account;
pub mod auth;
pub mod notice;
pub mod routes;
pub mod views;
