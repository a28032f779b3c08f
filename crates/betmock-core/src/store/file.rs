use crate::config::parser::load_document;
use crate::store::{Store, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error};

/// Store backed by a pretty-printed JSON document.
///
/// The document is read once by [`FileStore::load`] and overwritten in full
/// on every commit. Concurrent mutations of one store are serialized.
#[derive(Debug)]
pub struct FileStore<T> {
    path: PathBuf,
    value: Mutex<T>,
}

impl<T> FileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Read the backing document at `path`.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let value = load_document(&path)
            .await
            .map_err(|source| StoreError::Load {
                path: path.clone(),
                source,
            })?;
        Ok(Self {
            path,
            value: Mutex::new(value),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(value).map_err(|source| StoreError::Serialize {
            path: self.path.clone(),
            source,
        })?;

        if let Err(source) = tokio::fs::write(&self.path, json).await {
            error!(path = %self.path.display(), %source, "failed to persist store");
            return Err(StoreError::Write {
                path: self.path.clone(),
                source,
            });
        }

        debug!(path = %self.path.display(), "store persisted");
        Ok(())
    }
}

impl<T> Store<T> for FileStore<T>
where
    T: Clone + Send + Sync + Serialize + DeserializeOwned,
{
    async fn get(&self) -> T {
        self.value.lock().await.clone()
    }

    async fn put(&self, value: T) -> Result<(), StoreError> {
        let mut current = self.value.lock().await;
        self.persist(&value).await?;
        *current = value;
        Ok(())
    }

    async fn mutate<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&mut T) -> Result<R, E> + Send,
        R: Send,
        E: From<StoreError> + Send,
    {
        let mut current = self.value.lock().await;
        let mut next = current.clone();
        let out = f(&mut next)?;
        self.persist(&next).await?;
        *current = next;
        Ok(out)
    }
}
