use std::fmt::{Debug, Display};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::storage::Storage;

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and DTOs)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    /// Caller-supplied condition checked against the stored item before a delete.
    type DeleteGuard: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&self, _guard: &Self::DeleteGuard) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        guard: T::DeleteGuard,
        respond_to: Response<T::Id>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns one collection. Mutations are applied as soon as a request is received;
/// the reply (always a copy) is held back for `latency` to emulate a remote call.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    storage: Box<dyn Storage<T>>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    latency: Duration,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        storage: impl Storage<T>,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
        latency: Duration,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            storage: Box::new(storage),
            next_id_fn: Box::new(next_id_fn),
            latency,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let result = self.handle_create(payload);
                    self.reply(respond_to, result);
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.storage.all();
                    debug!(count = items.len(), "Listed items");
                    self.reply(respond_to, Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let result = self.handle_update(id, patch);
                    self.reply(respond_to, result);
                }
                ResourceRequest::Delete { id, guard, respond_to } => {
                    let result = self.handle_delete(id, guard);
                    self.reply(respond_to, result);
                }
            }
        }

        info!("ResourceActor stopped");
    }

    fn handle_create(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let id = self.fresh_id();
        let mut item = T::from_create(id.clone(), payload).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.storage.insert(item.clone());
        info!(id = %id, "Item created");
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(item) = self.storage.get_mut(&id) else {
            warn!(id = %id, "Update for unknown item");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        // Work on a copy so a rejected patch leaves the stored item untouched.
        let mut updated = item.clone();
        updated.on_update(patch).map_err(FrameworkError::Rejected)?;
        *item = updated.clone();
        info!(id = %id, "Item updated");
        Ok(updated)
    }

    fn handle_delete(&mut self, id: T::Id, guard: T::DeleteGuard) -> Result<T::Id, FrameworkError> {
        let Some(item) = self.storage.get_mut(&id) else {
            warn!(id = %id, "Delete for unknown item");
            return Err(FrameworkError::NotFound(id.to_string()));
        };
        item.on_delete(&guard).map_err(FrameworkError::Rejected)?;
        self.storage.remove(&id);
        info!(id = %id, "Item deleted");
        Ok(id)
    }

    /// Generated ids are re-drawn until they do not clash with a stored item.
    fn fresh_id(&self) -> T::Id {
        loop {
            let id = (self.next_id_fn)();
            if !self.storage.contains(&id) {
                return id;
            }
        }
    }

    /// The spawned task owns the responder, so the actor keeps serving while
    /// the simulated network delay elapses.
    fn reply<R: Send + 'static>(&self, respond_to: Response<R>, result: Result<R, FrameworkError>) {
        if self.latency.is_zero() {
            let _ = respond_to.send(result);
            return;
        }
        let latency = self.latency;
        tokio::spawn(async move {
            tokio::time::sleep(latency).await;
            let _ = respond_to.send(result);
        });
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { payload, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, patch, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id, guard: T::DeleteGuard) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, guard, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
