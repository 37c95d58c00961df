//! Flutter bridge for the Sahpathi core.
//!
//! Only `api` is scanned by the bridge code generator.

pub mod api;
