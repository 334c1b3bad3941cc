use std::fs;
use std::path::{Path, PathBuf};

use site_dispatch_core::error::DispatchError;

pub trait AssetStore {
    fn load_asset(&self) -> Result<String, DispatchError>;
}

/// Reads the HTML asset from disk on every call. Nothing is cached between
/// invocations, so a redeployed file is picked up immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsAssetStore {
    path: PathBuf,
}

impl FsAssetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AssetStore for FsAssetStore {
    fn load_asset(&self) -> Result<String, DispatchError> {
        let bytes = fs::read(&self.path).map_err(|source| DispatchError::AssetRead {
            path: self.path.clone(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|source| DispatchError::AssetEncoding {
            path: self.path.clone(),
            source,
        })
    }
}
