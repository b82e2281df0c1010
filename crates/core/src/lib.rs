//! Pulsemark Core - Shared types library.
//!
//! This crate provides the types shared across Pulsemark services:
//! - `ingest` - HTTP ingestion service for third-party customer/order data
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and pure validation logic - no I/O,
//! no database access, no HTTP clients. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, timestamps, currency codes and statuses
//! - [`schema`] - Payload contracts that turn untrusted JSON into canonical records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod schema;
pub mod types;

pub use schema::{Address, CustomerRecord, ErrorCode, FieldError, OrderItem, OrderRecord};
pub use types::*;
