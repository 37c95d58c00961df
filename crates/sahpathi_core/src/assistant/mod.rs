//! Scripted study assistant.
//!
//! # Responsibility
//! - Classify a user prompt into one response category, deterministically.
//! - Sample a reply from that category's pool using an injected random source.
//!
//! # Invariants
//! - Classification depends only on the prompt text.
//! - All randomness flows through the caller-provided `RngCore`.

pub mod classifier;
pub mod responses;
pub mod sampler;

pub use classifier::{classify, ResponseCategory};
pub use sampler::{reply_delay, sample_reply};
