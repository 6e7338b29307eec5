use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to retrieve version from {file}.")]
    MissingReferenceVersion { file: String },
    #[error("Invalid input version format '{input}'. Please provide a version in the format 'vX.Y.Z'")]
    InvalidInputFormat { input: String },
}
