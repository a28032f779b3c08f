//! Core domain types for fixtures, routes and envelopes.

pub mod bet;
pub mod envelope;
pub mod game;
pub mod money;
pub mod route;
pub mod user;
