use rendezvous_infra::StoreError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RendezvousError {
    #[error("Internal error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    Validation(String),
    #[error("Not found. Error message: `{0}`")]
    NotFound(String),
    #[error("There was a conflict with the request. Error message: `{0}`")]
    Conflict(String),
    #[error("Unauthorized request. Error message: `{0}`")]
    Unauthorized(String),
    #[error("Stored data could not be read. Error message: `{0}`")]
    CorruptData(String),
    #[error("The operation was cancelled")]
    Cancelled,
}

impl RendezvousError {
    /// Maps an error reported by a repository. Unreadable stored values are
    /// told apart from other storage failures.
    pub fn from_storage(e: anyhow::Error) -> Self {
        match e.downcast_ref::<StoreError>() {
            Some(StoreError::Corrupt { key, .. }) => Self::CorruptData(key.clone()),
            _ => Self::InternalError,
        }
    }
}

impl From<StoreError> for RendezvousError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Corrupt { key, .. } => Self::CorruptData(key),
            _ => Self::InternalError,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_maps_corrupt_storage() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let e = anyhow::Error::new(StoreError::Corrupt {
            key: "bookings".into(),
            source,
        });
        assert_eq!(
            RendezvousError::from_storage(e),
            RendezvousError::CorruptData("bookings".into())
        );
        assert_eq!(
            RendezvousError::from_storage(anyhow::anyhow!("disk full")),
            RendezvousError::InternalError
        );
    }
}
