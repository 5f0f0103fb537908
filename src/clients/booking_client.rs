use crate::actor_framework::ResourceClient;
use crate::booking_actor::BookingError;
use crate::domain::Booking;

/// Client for interacting with the Booking actor. Read-only.
#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<Booking>,
}

impl_basic_client!(BookingClient, Booking, BookingError, bookings);
