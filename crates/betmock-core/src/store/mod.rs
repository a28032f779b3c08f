//! Fixture state stores.
//!
//! Mutable fixtures (users, bets) live behind the [`Store`] trait so the API
//! layer never touches the filesystem directly:
//! - [`FileStore`]: JSON document on disk, rewritten wholesale on every change
//! - [`MemoryStore`]: in-process only, for tests and throwaway runs

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::error::ConfigError;
use std::future::Future;
use std::path::PathBuf;

/// Store loading/persistence error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing document could not be loaded
    #[error("Failed to load {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
    /// Value could not be serialized
    #[error("Failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Backing document could not be written
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Holder of one mutable fixture document.
///
/// `mutate` applies a change to a working copy and commits it only after it
/// has been persisted; when the closure returns `Err`, nothing is written.
pub trait Store<T>: Send + Sync
where
    T: Clone + Send + Sync,
{
    /// Snapshot of the current value.
    fn get(&self) -> impl Future<Output = T> + Send;

    /// Replace the whole value.
    fn put(&self, value: T) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Apply `f` and persist the result.
    fn mutate<R, E, F>(&self, f: F) -> impl Future<Output = Result<R, E>> + Send
    where
        F: FnOnce(&mut T) -> Result<R, E> + Send,
        R: Send,
        E: From<StoreError> + Send;
}
