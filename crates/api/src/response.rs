//! Response envelope used by the "response" variants of create, update and
//! delete.

use serde::Serialize;
use stockroom_core::messages::ResponseMessage;
use utoipa::ToSchema;

/// `{ "message": ..., "data": T }` pairing a fixed outcome message with the
/// operation's payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse<T: Serialize> {
    #[schema(value_type = String, example = "Added successfully")]
    pub message: &'static str,
    pub data: T,
}

impl<T: Serialize> MessageResponse<T> {
    pub fn new(message: ResponseMessage, data: T) -> Self {
        Self {
            message: message.as_str(),
            data,
        }
    }
}
