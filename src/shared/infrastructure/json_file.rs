// Helpers for small JSON documents kept as whole files.
//
// A missing file is created holding `{}` and read back as the type's default.
// An empty or whitespace-only file also reads as the default. Anything else
// that fails to parse is reported as corrupt, never silently replaced.
//
// Every write goes to a scratch file next to the target first, so readers only
// ever see a complete document.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

const EMPTY_OBJECT: &[u8] = b"{}";

#[derive(Debug, Error)]
pub enum JsonFileError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt json in {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot encode json for {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl JsonFileError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub async fn load_or_init<T>(path: &Path) -> Result<T, JsonFileError>
where
    T: DeserializeOwned + Default,
{
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if create_empty(path).await? {
                return Ok(T::default());
            }
            // Someone else published the file first; its content wins.
            fs::read(path)
                .await
                .map_err(|e| JsonFileError::io(path, e))?
        }
        Err(e) => return Err(JsonFileError::io(path, e)),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(&bytes).map_err(|source| JsonFileError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Publishes `{}` at `path` unless something is already there. The content is
/// complete before the name appears, and an existing file is never touched.
/// Returns whether this call created the file.
async fn create_empty(path: &Path) -> Result<bool, JsonFileError> {
    let scratch = write_scratch(path, EMPTY_OBJECT).await?;
    let published = fs::hard_link(&scratch, path).await;
    discard_scratch(&scratch).await;

    match published {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "created empty json document");
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(JsonFileError::io(path, e)),
    }
}

/// Replaces the whole file with the pretty-printed value.
pub async fn save_pretty<T>(path: &Path, value: &T) -> Result<(), JsonFileError>
where
    T: Serialize + ?Sized,
{
    let data = serde_json::to_vec_pretty(value).map_err(|source| JsonFileError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    let scratch = write_scratch(path, &data).await?;
    if let Err(e) = fs::rename(&scratch, path).await {
        discard_scratch(&scratch).await;
        return Err(JsonFileError::io(path, e));
    }
    Ok(())
}

fn scratch_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", Uuid::now_v7()))
}

async fn write_scratch(path: &Path, data: &[u8]) -> Result<PathBuf, JsonFileError> {
    let scratch = scratch_path(path);
    fs::write(&scratch, data)
        .await
        .map_err(|e| JsonFileError::io(path, e))?;
    Ok(scratch)
}

async fn discard_scratch(scratch: &Path) {
    if let Err(e) = fs::remove_file(scratch).await {
        tracing::warn!(path = %scratch.display(), error = %e, "cannot remove scratch file");
    }
}
