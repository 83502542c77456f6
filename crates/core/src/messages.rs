//! Fixed outcome messages paired with payloads by the "response" variants
//! of create/update/delete.

/// Human-readable outcome of a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMessage {
    SuccessfulAddition,
    SuccessfulModification,
    SuccessfulDeletion,
}

impl ResponseMessage {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuccessfulAddition => "Added successfully",
            Self::SuccessfulModification => "Modification completed successfully",
            Self::SuccessfulDeletion => "Deletion completed successfully",
        }
    }
}

impl std::fmt::Display for ResponseMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
