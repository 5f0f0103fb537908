use std::convert::Infallible;

use crate::actor_framework::Entity;
use crate::domain::Booking;

impl Entity for Booking {
    type Id = String;
    // No flow creates or edits bookings.
    type CreatePayload = Infallible;
    type Patch = Infallible;
    type DeleteGuard = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create(_id: String, params: Infallible) -> Result<Self, String> {
        match params {}
    }

    fn on_update(&mut self, patch: Infallible) -> Result<(), String> {
        match patch {}
    }
}
