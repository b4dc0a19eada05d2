//! JSON 文件存储层
//!
//! 每个集合一个 JSON 文件，放在 `DATA_DIR` 下。读请求整文件读取，
//! 写请求整文件重写 (pretty-printed)。文件不存在时由仓库决定默认值。
//!
//! | 文件 | 内容 |
//! |------|------|
//! | program.json | 节目表 (按天) |
//! | rundown.json | 流程表 |
//! | committee.json | 筹委会名单 |
//! | categories.json | 分类名单 |
//! | tables.json | 桌位 |
//! | tasks.json | 任务 |

pub mod repository;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on {file}: {source}")]
    Io {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {file}: {source}")]
    Json {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Table number {0} is already in use")]
    TableNumberTaken(u32),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io { .. } => AppError::storage(err.to_string()),
            StoreError::Json { file, source } => AppError::storage_corrupted(file, source),
            StoreError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            StoreError::Duplicate(msg) => AppError::conflict(msg),
            StoreError::TableNumberTaken(n) => AppError::table_number_taken(n),
            StoreError::Validation(msg) => AppError::validation(msg),
        }
    }
}

/// Whole-file JSON store rooted at the data directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Create the data directory if missing
    pub async fn ensure_dir(&self) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StoreError::Io {
                file: self.data_dir.display().to_string(),
                source,
            })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Read and parse a file; `None` when it does not exist
    pub async fn read<T: DeserializeOwned>(&self, file: &str) -> StoreResult<Option<T>> {
        let path = self.path(file);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    file: file.to_string(),
                    source,
                });
            }
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Json {
                file: file.to_string(),
                source,
            })
    }

    /// Read a file, falling back to `default` when it does not exist
    pub async fn read_or<T, F>(&self, file: &str, default: F) -> StoreResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        Ok(self.read(file).await?.unwrap_or_else(default))
    }

    /// Serialize and overwrite a file (temp file + rename)
    pub async fn write<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Json {
            file: file.to_string(),
            source,
        })?;
        let path = self.path(file);
        let tmp = self.path(&format!("{}.tmp", file));
        let io_err = |source: std::io::Error| StoreError::Io {
            file: file.to_string(),
            source,
        };
        tokio::fs::write(&tmp, json).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &path).await.map_err(io_err)?;
        tracing::debug!(file = %file, "Saved data file");
        Ok(())
    }

    pub async fn exists(&self, file: &str) -> bool {
        tokio::fs::try_exists(self.path(file)).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        count: u32,
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let doc: Option<Doc> = store.read("missing.json").await.unwrap();
        assert!(doc.is_none());

        let docs: Vec<Doc> = store.read_or("missing.json", Vec::new).await.unwrap();
        assert!(docs.is_empty());
        assert!(!store.exists("missing.json").await);
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("nested"));
        store.ensure_dir().await.unwrap();

        let doc = Doc {
            name: "宴会".to_string(),
            count: 3,
        };
        store.write("doc.json", &doc).await.unwrap();
        assert!(store.exists("doc.json").await);
        assert!(!store.exists("doc.json.tmp").await);

        let raw = std::fs::read_to_string(dir.path().join("nested/doc.json")).unwrap();
        assert!(raw.contains("\n  \"name\""), "file should be pretty-printed");

        let back: Option<Doc> = store.read("doc.json").await.unwrap();
        assert_eq!(back, Some(doc));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
        let store = JsonStore::new(dir.path());

        let err = store.read::<Doc>("bad.json").await.unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::StorageCorrupted);
    }

    #[test]
    fn test_error_conversion() {
        let app: AppError = StoreError::TableNumberTaken(7).into();
        assert_eq!(app.code, ErrorCode::TableNumberTaken);

        let app: AppError = StoreError::Validation("bad".into()).into();
        assert_eq!(app.code, ErrorCode::ValidationFailed);

        let app: AppError = StoreError::Duplicate("dup".into()).into();
        assert_eq!(app.code, ErrorCode::AlreadyExists);
    }
}
