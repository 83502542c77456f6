//! Shared query parameter types for API handlers.

use serde::Deserialize;
use stockroom_core::error::CoreError;
use stockroom_core::pagination::PageRequest;
use utoipa::IntoParams;

/// Page parameters (`?page=&size=`), zero-based page index.
///
/// Omitted values fall back to the defaults in
/// [`stockroom_core::pagination`]; range checks happen in
/// [`PageParams::into_request`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// Zero-based page index (default 0).
    #[param(minimum = 0, example = 0)]
    pub page: Option<i64>,
    /// Items per page (default 3).
    #[param(minimum = 1, example = 3)]
    pub size: Option<i64>,
}

impl PageParams {
    pub fn into_request(self) -> Result<PageRequest, CoreError> {
        PageRequest::new(self.page, self.size)
    }
}
