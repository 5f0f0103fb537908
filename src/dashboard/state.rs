use crate::domain::{Booking, Notification, Package, User};

/// What the views render from. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub users: Vec<User>,
    pub packages: Vec<Package>,
    pub bookings: Vec<Booking>,
    pub notifications: Vec<Notification>,
    pub is_loading: bool,
    /// Localized blanket message after a failed initial load.
    pub error: Option<String>,
}

impl AppState {
    /// The state before the first fetch settles.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn trainers(&self) -> Vec<&User> {
        self.users.iter().filter(|u| u.is_trainer()).collect()
    }

    pub fn clients(&self) -> Vec<&User> {
        self.users.iter().filter(|u| u.is_client()).collect()
    }

    pub fn package(&self, id: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }
}
