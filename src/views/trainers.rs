use super::form::{render_modal, DraftError, FormState};
use super::table::TextTable;
use super::Ui;
use crate::app_system::error::DashboardError;
use crate::dashboard::DashboardController;
use crate::domain::{NewTrainer, User};
use crate::i18n::Args;

/// Inputs of the add/edit trainer modal. All three fields are required.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainerDraft {
    editing: Option<User>,
    pub name: String,
    pub city: String,
    pub specialization: String,
}

/// What a submitted trainer form asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainerIntent {
    Add(NewTrainer),
    Update(User),
}

impl TrainerDraft {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn edit(trainer: &User) -> Self {
        Self {
            editing: Some(trainer.clone()),
            name: trainer.name.clone(),
            city: trainer.city.clone().unwrap_or_default(),
            specialization: trainer.specialization.clone().unwrap_or_default(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title_key(&self) -> &'static str {
        if self.is_edit() {
            "modal_edit_trainer_title"
        } else {
            "modal_add_trainer_title"
        }
    }

    pub fn submit_key(&self) -> &'static str {
        if self.is_edit() {
            "save_changes"
        } else {
            "add_trainer"
        }
    }

    pub fn into_intent(self) -> Result<TrainerIntent, DraftError> {
        let name = required(&self.name, "name")?;
        let city = required(&self.city, "city")?;
        let specialization = required(&self.specialization, "specialization")?;

        Ok(match self.editing {
            Some(existing) => TrainerIntent::Update(User {
                name,
                city: Some(city),
                specialization: Some(specialization),
                ..existing
            }),
            None => TrainerIntent::Add(NewTrainer {
                name,
                city: Some(city),
                specialization: Some(specialization),
            }),
        })
    }
}

impl TrainerIntent {
    pub async fn apply(self, controller: &mut DashboardController) -> Result<User, DashboardError> {
        match self {
            TrainerIntent::Add(trainer) => controller.add_trainer(trainer).await,
            TrainerIntent::Update(trainer) => controller.update_trainer(trainer).await,
        }
    }
}

pub(crate) fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DraftError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

pub fn delete_message(ui: &Ui<'_>, trainer: &User) -> String {
    ui.tr(
        "confirm_delete_trainer_message",
        &Args::new().text("name", trainer.name.as_str()),
    )
}

pub fn render_trainer_form(ui: &Ui<'_>, form: &FormState<TrainerDraft>) -> String {
    let draft = form.draft();
    let fields = [
        (ui.t("trainer_name"), draft.name.clone()),
        (ui.t("city"), draft.city.clone()),
        (ui.t("specialization"), draft.specialization.clone()),
    ];
    render_modal(ui, form, draft.title_key(), draft.submit_key(), &fields)
}

pub fn render_trainers(ui: &Ui<'_>, trainers: &[&User]) -> String {
    let mut table = TextTable::new([
        ui.t("trainer_name"),
        ui.t("city"),
        ui.t("specialization"),
        ui.t("join_date"),
        ui.t("actions"),
    ]);
    let actions = format!("{} / {}", ui.t("edit"), ui.t("delete"));
    for trainer in trainers {
        table.push_row([
            trainer.name.clone(),
            trainer.city.clone().unwrap_or_default(),
            trainer.specialization.clone().unwrap_or_default(),
            trainer.join_date.to_string(),
            actions.clone(),
        ]);
    }

    format!(
        "{}  [+ {}]\n\n{}",
        ui.t("trainers_management_title"),
        ui.t("add_new_trainer"),
        table.render()
    )
}
