//! Asynchronous request/response API over the resource actors.

#[macro_use]
mod macros;

mod booking_client;
mod package_client;
mod user_client;

pub use booking_client::BookingClient;
pub use package_client::PackageClient;
pub use user_client::UserClient;

/// The full API surface the dashboard talks to.
#[derive(Clone)]
pub struct DashboardApi {
    pub users: UserClient,
    pub packages: PackageClient,
    pub bookings: BookingClient,
}
