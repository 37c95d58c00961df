//! Random selection within a category and the simulated thinking delay.

use super::classifier::{classify, ResponseCategory};
use super::responses::{pool, WELCOME_MESSAGE};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::time::Duration;

const MIN_REPLY_DELAY_MS: u64 = 1_000;
const MAX_REPLY_DELAY_MS: u64 = 2_000;

/// Picks one reply uniformly from `category`'s pool.
pub fn sample_from(category: ResponseCategory, rng: &mut dyn RngCore) -> &'static str {
    pool(category).choose(rng).copied().unwrap_or(WELCOME_MESSAGE)
}

/// Classifies `prompt` and samples a reply for it.
pub fn sample_reply(prompt: &str, rng: &mut dyn RngCore) -> (ResponseCategory, &'static str) {
    let category = classify(prompt);
    (category, sample_from(category, rng))
}

/// Delay before the assistant reply becomes visible, in `[1s, 2s)`.
pub fn reply_delay(rng: &mut dyn RngCore) -> Duration {
    Duration::from_millis(rng.gen_range(MIN_REPLY_DELAY_MS..MAX_REPLY_DELAY_MS))
}
