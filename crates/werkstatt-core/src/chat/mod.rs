//! Client side of the chat widget: the question dispatcher and the
//! transport port it talks through.

pub mod dispatcher;
pub mod transport;
