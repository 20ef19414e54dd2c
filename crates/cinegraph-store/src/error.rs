use thiserror::Error;

/// Failures talking to the document store. There is no retry or circuit
/// breaking anywhere in the catalog; callers surface these as a failure of the
/// whole request.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("error communicating with MongoDB: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    #[error("error decoding stored record: {0}")]
    Deserialization(#[from] mongodb::bson::de::Error),

    #[error("error encoding candidate record: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),
}
