use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn label_key(self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "status_confirmed",
            BookingStatus::Pending => "status_pending",
            BookingStatus::Cancelled => "status_cancelled",
        }
    }
}

/// A scheduled appointment. Client and trainer names are snapshots taken when
/// the booking was made and are not kept in sync with the users collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub trainer_id: String,
    pub trainer_name: String,
    pub booking_date: DateTime<Utc>,
    pub status: BookingStatus,
}
