//! Rock International Bullion web server.
//!
//! Serves the server-rendered marketing pages and the lead capture form.
//! Backend traffic goes through the [`bullion_core::api::BullionApi`] held in
//! [`state::AppState`], so tests can swap in a stub.

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;
