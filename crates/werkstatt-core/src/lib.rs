//! Business logic and port definitions for Werkstatt.
//!
//! This crate defines the "ports" (transport and phrase picker traits) that
//! the infrastructure layer implements. It depends only on
//! `werkstatt-types` -- never on `werkstatt-infra` or any network/IO crate.

pub mod answer;
pub mod chat;
pub mod site;
