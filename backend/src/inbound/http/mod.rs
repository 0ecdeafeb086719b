//! HTTP inbound adapter exposing REST endpoints.

pub mod cache_control;
pub mod error;
pub mod health;
pub mod schemas;
pub mod services;
pub mod state;
