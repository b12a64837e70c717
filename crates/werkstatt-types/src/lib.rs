//! Shared domain types for Werkstatt.
//!
//! Chat entities, the `/ask` wire format, the page table entries, config
//! types and their error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_json and thiserror.

pub mod ask;
pub mod chat;
pub mod config;
pub mod error;
pub mod page;
