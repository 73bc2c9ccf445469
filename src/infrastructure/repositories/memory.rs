use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::goal::{Goal, GoalId};
use crate::domain::team::{Team, TeamId};

/// A document held by a [`MemoryCollection`]
pub trait Document: Clone + Send + Sync + 'static {
    type Id: Copy + PartialEq + Send + Sync;

    fn key(&self) -> Self::Id;
}

impl Document for Team {
    type Id = TeamId;

    fn key(&self) -> TeamId {
        self.id()
    }
}

impl Document for Goal {
    type Id = GoalId;

    fn key(&self) -> GoalId {
        self.id()
    }
}

/// Ordered in-memory collection of documents
///
/// Documents keep their insertion order, which stands in for a document
/// store's natural order. Every method takes the collection lock exactly
/// once, so each call is atomic on its own and nothing spans two calls.
pub struct MemoryCollection<T> {
    docs: Arc<RwLock<Vec<T>>>,
}

impl<T> Clone for MemoryCollection<T> {
    fn clone(&self) -> Self {
        Self {
            docs: Arc::clone(&self.docs),
        }
    }
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self {
            docs: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Document> MemoryCollection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a document to the collection
    pub async fn insert(&self, doc: T) {
        self.docs.write().await.push(doc);
    }

    /// Returns a copy of the addressed document
    pub async fn get(&self, id: T::Id) -> Option<T> {
        self.docs.read().await.iter().find(|d| d.key() == id).cloned()
    }

    /// Returns copies of the addressed documents in the order of `ids`,
    /// skipping identifiers that resolve to nothing
    pub async fn get_many(&self, ids: &[T::Id]) -> Vec<T> {
        let docs = self.docs.read().await;
        ids.iter()
            .filter_map(|id| docs.iter().find(|d| d.key() == *id).cloned())
            .collect()
    }

    /// Mutates the addressed document in place and returns the updated copy
    pub async fn update(&self, id: T::Id, mutate: impl FnOnce(&mut T)) -> Option<T> {
        let mut docs = self.docs.write().await;
        let doc = docs.iter_mut().find(|d| d.key() == id)?;
        mutate(doc);
        Some(doc.clone())
    }

    /// Removes and returns the addressed document
    pub async fn remove(&self, id: T::Id) -> Option<T> {
        let mut docs = self.docs.write().await;
        let at = docs.iter().position(|d| d.key() == id)?;
        Some(docs.remove(at))
    }

    /// Returns a copy of every document in insertion order
    pub async fn all(&self) -> Vec<T> {
        self.docs.read().await.clone()
    }

    /// Applies `mutate` to every document under one lock, counting the
    /// documents it reports as changed
    pub async fn modify_each(&self, mut mutate: impl FnMut(&mut T) -> bool) -> usize {
        let mut docs = self.docs.write().await;
        let mut touched = 0;
        for doc in docs.iter_mut() {
            if mutate(doc) {
                touched += 1;
            }
        }
        touched
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

/// Handle to the in-memory store: one ordered collection per document
/// type, cheap to clone and share across tasks
#[derive(Clone, Default)]
pub struct MemoryDb {
    teams: MemoryCollection<Team>,
    goals: MemoryCollection<Goal>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the team collection
    pub fn teams(&self) -> &MemoryCollection<Team> {
        &self.teams
    }

    /// Returns the goal collection
    pub fn goals(&self) -> &MemoryCollection<Goal> {
        &self.goals
    }
}
