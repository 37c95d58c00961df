//! Read-only projections recomputed from a module collection on each query.
//!
//! # Responsibility
//! - Filter, bucket and aggregate collections for display.
//!
//! # Invariants
//! - Projections never mutate their input and keep no cache.
//! - Filtering preserves the collection order unless a view states a sort.

pub mod calendar;
pub mod diary;
pub mod notes;
pub mod places;
pub mod todos;
