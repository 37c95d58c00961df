//! Module use-case services (CRUD controllers).
//!
//! # Responsibility
//! - Validate drafts and apply create/update/toggle/delete to one module
//!   collection.
//! - Persist the full collection after every accepted mutation.
//! - Emit narration/haptic feedback through the explicit `AppContext`.
//!
//! # Invariants
//! - Rejected input never mutates memory nor storage.
//! - Unknown ids on delete/update are silent no-ops (`Ok(false)`).

pub mod calendar_service;
pub mod chat_service;
pub mod diary_service;
pub mod error;
pub mod note_service;
pub mod places_service;
pub mod todo_service;

pub use error::{ServiceError, ServiceResult};

use crate::context::AppContext;
use crate::model::validation::ValidationError;
use crate::store::StoreError;
use log::{error, warn};

/// Advises the user about rejected input and returns the matching error.
pub(crate) fn reject<T>(
    ctx: &AppContext,
    module: &'static str,
    err: ValidationError,
) -> ServiceResult<T> {
    warn!("event=validation_rejected module={module} status=rejected reason={err}");
    ctx.advise(err.advisory());
    Err(ServiceError::Validation(err))
}

/// Logs a failed write and wraps it.
pub(crate) fn storage_failure(module: &'static str, action: &'static str, err: StoreError) -> ServiceError {
    error!(
        "event={action} module={module} status=error error_code=slot_write_failed error={err}"
    );
    ServiceError::Storage(err)
}
