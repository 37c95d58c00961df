//! Built-in reference data shipped with the app.
//!
//! # Responsibility
//! - Provide the regional holiday seed for the calendar.
//! - Provide the fixed points-of-interest catalogue.
//!
//! # Invariants
//! - Catalogue data is read-only; user collections copy from it, never
//!   reference it.

pub mod holidays;
pub mod places;
