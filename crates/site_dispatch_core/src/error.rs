use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// The single internal-failure kind. Variants only differ in their message;
/// every one of them maps to the same 500 response.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to read static asset '{}': {source}", .path.display())]
    AssetRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("static asset '{}' is not valid UTF-8: {source}", .path.display())]
    AssetEncoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to serialize response body: {0}")]
    Serialization(#[from] serde_json::Error),
}
