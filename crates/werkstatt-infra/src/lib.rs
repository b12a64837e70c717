//! Infrastructure layer for Werkstatt.
//!
//! Contains implementations of the ports defined in `werkstatt-core`:
//! the reqwest-based `/ask` transport and the random phrase picker, plus
//! config loading and the template store used by the site server.

pub mod config;
pub mod picker;
pub mod templates;
pub mod transport;
