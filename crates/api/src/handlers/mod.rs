//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers extract, delegate to the resource service on [`AppState`], and
//! pick the status code; errors are rendered by [`AppError`].
//!
//! [`AppState`]: crate::state::AppState
//! [`AppError`]: crate::error::AppError

pub mod item;
pub mod item_detail;
