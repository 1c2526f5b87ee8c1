use std::{
    collections::{BTreeMap, HashMap},
    fmt::Debug,
    hash::Hash,
};

use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CappedSetError {
    #[error("Address doesn't exist")]
    IdentifierNotFound,

    #[error("Set is empty")]
    SetIsEmpty,

    #[error("Capacity must be at least 1")]
    InvalidCapacity,
}

#[derive(Debug, Clone, Copy)]
struct Slot<S> {
    score: S,
    /// Sequence number handed out when the identifier entered the set
    order: u64,
}

/// A set of identifiers with scores that never holds more than `capacity` entries.
/// Inserting a new identifier into a full set evicts the entry with the lowest score.
/// Equal lowest scores are broken by entry order: the identifier that entered the set first goes first.
#[derive(Debug, Clone)]
pub struct CappedSet<K, S> {
    capacity: usize,
    entries: HashMap<K, Slot<S>>,
    /// Ordered by (score, entry order), first key is always the next eviction victim
    ranking: BTreeMap<(S, u64), K>,
    next_order: u64,
}

impl<K, S> CappedSet<K, S>
where
    K: Hash + Eq + Clone + Debug,
    S: Ord + Copy + Debug,
{
    /// Create a new empty set. Fails if capacity is 0
    pub fn new(capacity: usize) -> Result<Self, CappedSetError> {
        if capacity == 0 {
            return Err(CappedSetError::InvalidCapacity);
        }

        Ok(Self {
            capacity,
            entries: HashMap::with_capacity(capacity),
            ranking: BTreeMap::new(),
            next_order: 0,
        })
    }

    /// Insert or upsert an identifier with a score.
    /// Returns the evicted entry if a new identifier had to make room in a full set.
    /// Upserting an existing identifier keeps its entry order and never evicts.
    pub fn insert(&mut self, id: K, score: S) -> Option<(K, S)> {
        if let Some(previous) = self.rescore(&id, score) {
            debug!("Upserted {:?}: {:?} -> {:?}", id, previous, score);
            return None;
        }

        let evicted = if self.is_full() {
            self.evict_min()
        } else {
            None
        };

        let order = self.next_order;
        self.next_order += 1;

        debug!(
            "Inserted {:?} with score {:?} ({} of {})",
            id,
            score,
            self.entries.len() + 1,
            self.capacity
        );
        self.ranking.insert((score, order), id.clone());
        self.entries.insert(id, Slot { score, order });

        evicted
    }

    /// Replace the score of an existing identifier
    pub fn update(&mut self, id: &K, score: S) -> Result<(), CappedSetError> {
        let previous = self
            .rescore(id, score)
            .ok_or(CappedSetError::IdentifierNotFound)?;
        debug!("Updated {:?}: {:?} -> {:?}", id, previous, score);
        Ok(())
    }

    /// Remove an identifier, returning the score it held
    pub fn remove(&mut self, id: &K) -> Result<S, CappedSetError> {
        let slot = self
            .entries
            .remove(id)
            .ok_or(CappedSetError::IdentifierNotFound)?;
        self.ranking.remove(&(slot.score, slot.order));

        debug!("Removed {:?} with score {:?}", id, slot.score);
        Ok(slot.score)
    }

    /// Get the score stored for an identifier
    pub fn get_value(&self, id: &K) -> Result<S, CappedSetError> {
        if self.entries.is_empty() {
            return Err(CappedSetError::SetIsEmpty);
        }

        self.entries
            .get(id)
            .map(|slot| slot.score)
            .ok_or(CappedSetError::IdentifierNotFound)
    }

    /// The entry that would be evicted next, if any
    pub fn min(&self) -> Option<(&K, S)> {
        self.ranking
            .first_key_value()
            .map(|((score, _), id)| (id, *score))
    }

    pub fn contains(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Swap the score of a present identifier, keeping the ranking in step.
    /// Returns the previous score, or None if the identifier is absent.
    fn rescore(&mut self, id: &K, score: S) -> Option<S> {
        let slot = self.entries.get_mut(id)?;
        let previous = std::mem::replace(&mut slot.score, score);

        if let Some(key) = self.ranking.remove(&(previous, slot.order)) {
            self.ranking.insert((score, slot.order), key);
        }

        Some(previous)
    }

    fn evict_min(&mut self) -> Option<(K, S)> {
        let ((score, _), id) = self.ranking.pop_first()?;
        self.entries.remove(&id);

        info!("Evicted {:?} with lowest score {:?}", id, score);
        Some((id, score))
    }

    /// Panics if the identifier map and the ranking disagree
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert!(self.entries.len() <= self.capacity, "Set exceeds its capacity");
        assert_eq!(
            self.entries.len(),
            self.ranking.len(),
            "Ranking and entries differ in size"
        );
        for ((score, order), id) in &self.ranking {
            let slot = self.entries.get(id).expect("Ranked identifier missing from entries");
            assert_eq!(slot.score, *score, "Ranking holds a stale score");
            assert_eq!(slot.order, *order, "Ranking holds a stale entry order");
        }
    }
}
