use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tokio::task::JoinHandle;
use tracing::{error, info};

use super::error::SystemError;
use super::seed::SeedData;
use crate::actor_framework::ResourceActor;
use crate::clients::{BookingClient, DashboardApi, PackageClient, UserClient};
use crate::config::ApiConfig;
use crate::domain::{Booking, Package, User};
use crate::storage::MemoryStorage;

/// Starts the user, package and booking actors and hands out the API.
///
/// Actors stop once every clone of the [`DashboardApi`] is dropped.
pub struct DashboardSystem {
    api: DashboardApi,
    handles: Vec<JoinHandle<()>>,
}

impl DashboardSystem {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_seed(config, SeedData::demo(Utc::now()))
    }

    pub fn with_seed(config: &ApiConfig, seed: SeedData) -> Self {
        let latency = config.latency();
        info!(latency_ms = config.latency_ms, "Starting dashboard system");

        // 1. Users (trainers and clients share a collection)
        let (user_actor, user_resource_client) = ResourceActor::<User>::new(
            config.buffer_size,
            MemoryStorage::with_items(seed.users),
            timestamp_ids("t"),
            latency,
        );
        let user_handle = tokio::spawn(user_actor.run());

        // 2. Packages
        let (package_actor, package_resource_client) = ResourceActor::<Package>::new(
            config.buffer_size,
            MemoryStorage::with_items(seed.packages),
            timestamp_ids("p"),
            latency,
        );
        let package_handle = tokio::spawn(package_actor.run());

        // 3. Bookings
        let (booking_actor, booking_resource_client) = ResourceActor::<Booking>::new(
            config.buffer_size,
            MemoryStorage::with_items(seed.bookings),
            timestamp_ids("b"),
            latency,
        );
        let booking_handle = tokio::spawn(booking_actor.run());

        let api = DashboardApi {
            users: UserClient::new(user_resource_client),
            packages: PackageClient::new(package_resource_client),
            bookings: BookingClient::new(booking_resource_client),
        };

        Self {
            api,
            handles: vec![user_handle, package_handle, booking_handle],
        }
    }

    pub fn api(&self) -> DashboardApi {
        self.api.clone()
    }

    /// Waits for the actors to stop. Every `DashboardApi` obtained from
    /// [`DashboardSystem::api`] must be dropped first.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");
        drop(self.api);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

/// `prefix` + milliseconds since the epoch, bumped by one when two ids are
/// requested within the same millisecond.
pub fn timestamp_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let last = Arc::new(AtomicU64::new(0));
    move || {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let previous = last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| Some(now.max(prev + 1)))
            .unwrap_or_else(|prev| prev);
        format!("{}{}", prefix, now.max(previous + 1))
    }
}
