//! `InterworxApi` — per-endpoint methods over the classified `call` core.

mod client;
mod envelope;

pub use client::InterworxApi;
pub use envelope::{Envelope, Payload};
