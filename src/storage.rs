//! Backing stores for [`ResourceActor`](crate::actor_framework::ResourceActor).
//!
//! The actor never touches a global collection; it is handed a `Storage` at
//! construction time so a durable backend can replace the in-memory one without
//! changing any caller.

use crate::actor_framework::Entity;

/// Collection operations a resource actor needs from its backend.
pub trait Storage<T: Entity>: Send + 'static {
    /// Every stored item, in insertion order.
    fn all(&self) -> Vec<T>;
    fn contains(&self, id: &T::Id) -> bool;
    fn get_mut(&mut self, id: &T::Id) -> Option<&mut T>;
    fn insert(&mut self, item: T);
    fn remove(&mut self, id: &T::Id) -> Option<T>;
}

/// Insertion-ordered, process-local storage. Nothing survives a restart.
#[derive(Debug, Clone)]
pub struct MemoryStorage<T> {
    items: Vec<T>,
}

impl<T> MemoryStorage<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Storage pre-populated with fixture data.
    pub fn with_items(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> Default for MemoryStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Storage<T> for MemoryStorage<T> {
    fn all(&self) -> Vec<T> {
        self.items.clone()
    }

    fn contains(&self, id: &T::Id) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn insert(&mut self, item: T) {
        // Replacing in place keeps the original position of the entity.
        match self.items.iter().position(|existing| existing.id() == item.id()) {
            Some(index) => self.items[index] = item,
            None => self.items.push(item),
        }
    }

    fn remove(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}
