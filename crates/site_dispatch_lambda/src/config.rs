use std::path::{Path, PathBuf};

pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";
pub const ASSET_PATH_VAR: &str = "SITE_ASSET_PATH";
pub const TASK_ROOT_VAR: &str = "LAMBDA_TASK_ROOT";

pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_ASSET_RELATIVE_PATH: &str = "dist/index.html";

/// Process-wide settings, resolved once at startup and shared by every
/// invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub environment: String,
    pub asset_path: PathBuf,
}

impl HandlerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. An empty `ENVIRONMENT`
    /// counts as unset; blank path variables do too.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup(ENVIRONMENT_VAR)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let asset_path = non_blank(lookup(ASSET_PATH_VAR))
            .map(PathBuf::from)
            .unwrap_or_else(|| default_task_root(&lookup).join(DEFAULT_ASSET_RELATIVE_PATH));

        Self {
            environment,
            asset_path,
        }
    }
}

fn default_task_root(lookup: &impl Fn(&str) -> Option<String>) -> PathBuf {
    non_blank(lookup(TASK_ROOT_VAR))
        .map(PathBuf::from)
        .or_else(executable_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn executable_dir() -> Option<PathBuf> {
    let executable = std::env::current_exe().ok()?;
    executable.parent().map(Path::to_path_buf)
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}
