use std::{fmt::Debug, hash::Hash, sync::Arc};

use tokio::sync::RwLock;

use crate::capped_set::{CappedSet, CappedSetError};

/// A cloneable handle to one capped set shared between tasks.
/// Every call takes the lock for exactly one operation, so callers see each operation applied atomically and in order.
pub struct SharedCappedSet<K, S> {
    inner: Arc<RwLock<CappedSet<K, S>>>,
}

impl<K, S> Clone for SharedCappedSet<K, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K, S> From<CappedSet<K, S>> for SharedCappedSet<K, S> {
    fn from(set: CappedSet<K, S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(set)),
        }
    }
}

impl<K, S> SharedCappedSet<K, S>
where
    K: Hash + Eq + Clone + Debug,
    S: Ord + Copy + Debug,
{
    pub fn new(capacity: usize) -> Result<Self, CappedSetError> {
        Ok(CappedSet::new(capacity)?.into())
    }

    pub async fn insert(&self, id: K, score: S) -> Option<(K, S)> {
        self.inner.write().await.insert(id, score)
    }

    pub async fn update(&self, id: &K, score: S) -> Result<(), CappedSetError> {
        self.inner.write().await.update(id, score)
    }

    pub async fn remove(&self, id: &K) -> Result<S, CappedSetError> {
        self.inner.write().await.remove(id)
    }

    pub async fn get_value(&self, id: &K) -> Result<S, CappedSetError> {
        self.inner.read().await.get_value(id)
    }

    /// Owned copy of the entry that would be evicted next
    pub async fn min(&self) -> Option<(K, S)> {
        self.inner
            .read()
            .await
            .min()
            .map(|(id, score)| (id.clone(), score))
    }

    pub async fn contains(&self, id: &K) -> bool {
        self.inner.read().await.contains(id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn capacity(&self) -> usize {
        self.inner.read().await.capacity()
    }
}
