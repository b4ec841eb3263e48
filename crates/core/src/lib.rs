//! Domain types and pure logic for the notification service.
//!
//! This crate holds no state and performs no I/O. The store crate owns the
//! collection; the api crate exposes it over HTTP.

pub mod error;
pub mod notification;
pub mod types;
