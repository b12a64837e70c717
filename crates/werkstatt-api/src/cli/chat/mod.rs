//! Interactive terminal chat against the answer service.
//!
//! Mirrors the site widget: a transcript of user and bot bubbles, a
//! spinner while a question is in flight, and a gender prompt whenever
//! the service asks for one. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
