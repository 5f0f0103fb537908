use super::form::{render_modal, DraftError, FormState};
use super::table::TextTable;
use super::trainers::required;
use super::Ui;
use crate::app_system::error::DashboardError;
use crate::dashboard::DashboardController;
use crate::domain::{Package, PackageCreate, TrainingType};
use crate::i18n::Args;

/// Inputs of the add/edit package modal.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDraft {
    pub(crate) editing: Option<Package>,
    pub name: String,
    pub training_type: TrainingType,
    pub sessions: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PackageIntent {
    Add(PackageCreate),
    Update(Package),
}

impl Default for PackageDraft {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            training_type: TrainingType::Normal,
            sessions: 0,
            price: 0.0,
        }
    }
}

impl PackageDraft {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn edit(package: &Package) -> Self {
        Self {
            editing: Some(package.clone()),
            name: package.name.clone(),
            training_type: package.training_type,
            sessions: package.sessions,
            price: package.price,
        }
    }

    pub fn title_key(&self) -> &'static str {
        if self.editing.is_some() {
            "modal_edit_package_title"
        } else {
            "modal_add_package_title"
        }
    }

    pub fn submit_key(&self) -> &'static str {
        if self.editing.is_some() {
            "save_changes"
        } else {
            "add_package"
        }
    }

    pub fn into_intent(self) -> Result<PackageIntent, DraftError> {
        let name = required(&self.name, "name")?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DraftError::OutOfRange("price"));
        }

        Ok(match self.editing {
            Some(existing) => PackageIntent::Update(Package {
                name,
                training_type: self.training_type,
                sessions: self.sessions,
                price: self.price,
                ..existing
            }),
            None => PackageIntent::Add(PackageCreate {
                name,
                training_type: self.training_type,
                sessions: self.sessions,
                price: self.price,
                trainer_id: None,
            }),
        })
    }
}

impl PackageIntent {
    pub async fn apply(self, controller: &mut DashboardController) -> Result<Package, DashboardError> {
        match self {
            PackageIntent::Add(package) => controller.add_package(package).await,
            PackageIntent::Update(package) => controller.update_package(package).await,
        }
    }
}

pub fn delete_message(ui: &Ui<'_>, package: &Package) -> String {
    ui.tr(
        "confirm_delete_package_message",
        &Args::new().text("name", package.name.as_str()),
    )
}

pub fn render_package_form(ui: &Ui<'_>, form: &FormState<PackageDraft>) -> String {
    let draft = form.draft();
    let fields = [
        (ui.t("package_name"), draft.name.clone()),
        (ui.t("training_type"), ui.t(draft.training_type.label_key())),
        (ui.t("number_of_sessions"), draft.sessions.to_string()),
        (ui.t("price_sar"), format!("{:.2}", draft.price)),
    ];
    render_modal(ui, form, draft.title_key(), draft.submit_key(), &fields)
}

pub fn render_packages(ui: &Ui<'_>, packages: &[Package]) -> String {
    let mut table = TextTable::new([
        ui.t("package_name"),
        ui.t("training_type"),
        ui.t("number_of_sessions"),
        ui.t("price_sar"),
        ui.t("actions"),
    ]);
    let actions = format!("{} / {}", ui.t("edit"), ui.t("delete"));
    for package in packages {
        table.push_row([
            package.name.clone(),
            ui.t(package.training_type.label_key()),
            package.sessions.to_string(),
            format!("{:.2}", package.price),
            actions.clone(),
        ]);
    }

    format!(
        "{}  [+ {}]\n\n{}",
        ui.t("packages_management_title"),
        ui.t("add_new_package"),
        table.render()
    )
}
