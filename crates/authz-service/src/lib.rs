//! Gateway Authorizer Service Library
//!
//! This library provides the two cores of the Turnstile gateway: a token
//! issuer that authenticates principals and mints signed bearer tokens,
//! and an access decision engine that turns a presented credential plus a
//! requested resource into an Allow/Deny decision.
//!
//! # Modules
//!
//! - `config` - Service configuration
//! - `crypto` - Cryptographic operations (token signing, password checks)
//! - `errors` - Error types
//! - `handlers` - HTTP request handlers
//! - `middleware` - Request authorization middleware
//! - `models` - Data models (decisions, resource descriptors)
//! - `repositories` - Credential source
//! - `routes` - Router assembly
//! - `services` - Business logic layer

pub mod config;
pub mod crypto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
