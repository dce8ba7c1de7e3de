//! Train trip search service.
//!
//! A web application behind a simple question: "when can I get from here
//! to there?" Trip data is a presentation mock generated per search; durable
//! per-user state (accounts, favorites, search history) lives in in-process
//! stand-ins for the managed backend services.

pub mod domain;
pub mod session;
pub mod stations;
pub mod store;
pub mod trips;
pub mod web;
