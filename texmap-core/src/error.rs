use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TexMapError {
    #[error("invalid argument: {0}")] InvalidArgument(String),
    #[error("invalid permutation: {0}")] InvalidPermutation(String),
    #[error("invalid manifest: {0}")] Manifest(String),
}
