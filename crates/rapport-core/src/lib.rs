//! # rapport-core
//!
//! Core types shared across the Rapport crates.
//!
//! This crate provides:
//! - Numeric identifier newtypes for every backend resource
//! - Entity records as returned by the Divorce Risk Service
//! - Request payloads sent by the API client
//! - Partner and prediction-class enums
//! - Dashboard aggregation and display formatting rules
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod payloads;
pub mod stats;

pub use errors::CoreError;
