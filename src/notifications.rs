//! Renewal reminders derived from client session counts.

use crate::domain::{Notification, Package, User};

/// Clients with this many sessions left or fewer get a reminder.
pub const SESSION_THRESHOLD: u32 = 2;

/// Recomputes the full reminder list, one entry per qualifying client in user
/// order. A client whose package no longer exists is reported under
/// `unknown_package`.
pub fn derive_notifications(
    users: &[User],
    packages: &[Package],
    unknown_package: &str,
) -> Vec<Notification> {
    users
        .iter()
        .filter(|user| user.is_client())
        .filter_map(|client| {
            let sessions_left = client.sessions_left.filter(|n| *n <= SESSION_THRESHOLD)?;
            let package_name = client
                .package_id
                .as_ref()
                .and_then(|id| packages.iter().find(|p| &p.id == id))
                .map(|p| p.name.clone())
                .unwrap_or_else(|| unknown_package.to_string());

            Some(Notification {
                id: notification_id(&client.id),
                client_id: client.id.clone(),
                client_name: client.name.clone(),
                package_name,
                sessions_left,
            })
        })
        .collect()
}

pub fn notification_id(client_id: &str) -> String {
    format!("notif-{}", client_id)
}
