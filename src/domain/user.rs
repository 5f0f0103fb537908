use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Mutually exclusive account kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Trainer,
    Client,
}

/// A person known to the dashboard.
///
/// Trainer-only (`specialization`) and client-only (`package_id`,
/// `sessions_left`) fields share one shape; `role` decides which of them carry
/// meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sessions_left: Option<u32>,
    pub join_date: NaiveDate,
}

/// Payload for creating a new user. The store assigns `id` and `join_date`.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub role: UserRole,
    pub name: String,
    pub city: Option<String>,
    pub specialization: Option<String>,
    pub package_id: Option<String>,
    pub sessions_left: Option<u32>,
}

/// The fields an administrator enters for a new trainer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewTrainer {
    pub name: String,
    pub city: Option<String>,
    pub specialization: Option<String>,
}

impl From<NewTrainer> for UserCreate {
    fn from(trainer: NewTrainer) -> Self {
        Self {
            role: UserRole::Trainer,
            name: trainer.name,
            city: trainer.city,
            specialization: trainer.specialization,
            package_id: None,
            sessions_left: None,
        }
    }
}

impl User {
    pub fn trainer(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        specialization: impl Into<String>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: UserRole::Trainer,
            city: Some(city.into()),
            specialization: Some(specialization.into()),
            package_id: None,
            sessions_left: None,
            join_date,
        }
    }

    pub fn client(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        package_id: Option<String>,
        sessions_left: Option<u32>,
        join_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role: UserRole::Client,
            city: Some(city.into()),
            specialization: None,
            package_id,
            sessions_left,
            join_date,
        }
    }

    pub fn is_trainer(&self) -> bool {
        self.role == UserRole::Trainer
    }

    pub fn is_client(&self) -> bool {
        self.role == UserRole::Client
    }
}
