use crate::store::{Store, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// Store that keeps its value in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore<T> {
    value: Mutex<T>,
    commits: AtomicUsize,
}

impl<T> MemoryStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Mutex::new(value),
            commits: AtomicUsize::new(0),
        }
    }

    /// Number of successful `put`/`mutate` commits.
    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::Relaxed)
    }
}

impl<T> Store<T> for MemoryStore<T>
where
    T: Clone + Send + Sync,
{
    async fn get(&self) -> T {
        self.value.lock().await.clone()
    }

    async fn put(&self, value: T) -> Result<(), StoreError> {
        *self.value.lock().await = value;
        self.commits.fetch_add(1, Ordering::Relaxed);
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
        *current = next;
        self.commits.fetch_add(1, Ordering::Relaxed);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    enum TestError {
        TooSmall,
        Store,
    }

    impl From<StoreError> for TestError {
        fn from(_: StoreError) -> Self {
            TestError::Store
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemoryStore::new(vec![1, 2]);
        store.put(vec![3]).await.unwrap();
        assert_eq!(store.get().await, vec![3]);
        assert_eq!(store.commits(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_mutate_commits_on_ok() {
        let store = MemoryStore::new(10_i64);
        let out: Result<i64, TestError> = store
            .mutate(|v| {
                *v += 5;
                Ok(*v)
            })
            .await;
        assert_eq!(out, Ok(15));
        assert_eq!(store.get().await, 15);
        assert_eq!(store.commits(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_mutate_discards_working_copy_on_err() {
        let store = MemoryStore::new(10_i64);
        let out: Result<(), TestError> = store
            .mutate(|v| {
                *v = 0;
                Err(TestError::TooSmall)
            })
            .await;
        assert_eq!(out, Err(TestError::TooSmall));
        assert_eq!(store.get().await, 10);
        assert_eq!(store.commits(), 0);
    }
}
