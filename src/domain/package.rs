use serde::{Deserialize, Serialize};

/// Closed classification of a package. Only affects how it is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainingType {
    Normal,
    #[serde(rename = "EMS")]
    Ems,
    Platten,
}

impl TrainingType {
    pub const ALL: [TrainingType; 3] = [TrainingType::Normal, TrainingType::Ems, TrainingType::Platten];

    /// Catalog key of the display label.
    pub fn label_key(self) -> &'static str {
        match self {
            TrainingType::Normal => "training_type_normal",
            TrainingType::Ems => "training_type_ems",
            TrainingType::Platten => "training_type_platten",
        }
    }
}

/// A purchasable bundle of training sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub training_type: TrainingType,
    pub sessions: u32,
    pub price: f64,
    /// Reserved for per-trainer pricing; no flow sets it yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trainer_id: Option<String>,
}

/// Payload for creating a new package.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageCreate {
    pub name: String,
    pub training_type: TrainingType,
    pub sessions: u32,
    pub price: f64,
    pub trainer_id: Option<String>,
}

impl Package {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        training_type: TrainingType,
        sessions: u32,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            training_type,
            sessions,
            price,
            trainer_id: None,
        }
    }
}
