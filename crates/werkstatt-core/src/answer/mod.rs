//! Server side of the chat widget: turns an `/ask` payload into a reply.

pub mod engine;
pub mod fuzzy;
pub mod phrases;
pub mod picker;
