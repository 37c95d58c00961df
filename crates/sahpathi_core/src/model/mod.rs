//! Domain records for every module collection.
//!
//! # Responsibility
//! - Define the flat, serializable record shape each module persists.
//! - Define draft inputs and their required-field validation.
//!
//! # Invariants
//! - Records carry no references to records of another module.
//! - JSON field names are camelCase and stable across releases.

pub mod chat;
pub mod diary;
pub mod event;
pub mod id;
pub mod note;
pub mod place;
pub mod todo;
pub mod validation;
