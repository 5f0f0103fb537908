//! Text renderings of the dashboard screens, plus the form and dialog state
//! machines the management screens drive.
//!
//! Renderers are pure functions of state; intents go through
//! [`DashboardController`](crate::dashboard::DashboardController).

pub mod clients;
pub mod confirm;
pub mod dashboard;
pub mod error_boundary;
pub mod form;
pub mod notifications;
pub mod packages;
pub mod settings;
pub mod sidebar;
pub mod table;
pub mod trainers;

use chrono::{DateTime, Utc};

use crate::dashboard::{DashboardController, ToastKind};
use crate::i18n::{format_number, Args, Catalog, Locale};
use crate::preferences::View;

pub use clients::{render_client_form, ClientDraft};
pub use confirm::ConfirmationDialog;
pub use form::{DraftError, FormPhase, FormState};
pub use packages::{render_package_form, PackageDraft, PackageIntent};
pub use table::TextTable;
pub use trainers::{render_trainer_form, TrainerDraft, TrainerIntent};

/// Translation handle bound to the active language.
#[derive(Clone, Copy)]
pub struct Ui<'a> {
    catalog: &'a Catalog,
    locale: Locale,
}

impl<'a> Ui<'a> {
    pub fn new(catalog: &'a Catalog, locale: Locale) -> Self {
        Self { catalog, locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.catalog.t(self.locale, key)
    }

    pub fn tr(&self, key: &str, args: &Args) -> String {
        self.catalog.translate(self.locale, key, args)
    }

    pub fn number(&self, value: f64) -> String {
        format_number(value, self.locale)
    }

    pub fn currency(&self, amount: f64) -> String {
        self.catalog.currency(self.locale, amount)
    }
}

/// Renders the whole screen: header, sidebar and the active view.
pub fn render_app(controller: &DashboardController, search: &str, now: DateTime<Utc>) -> String {
    let ui = Ui::new(controller.catalog(), controller.locale());
    let state = controller.state();
    let mut sections = vec![render_header(&ui, state.notifications.len())];

    if controller.notifications_open() {
        sections.push(notifications::render_dropdown(&ui, &state.notifications));
    }
    if controller.sidebar_open() {
        sections.push(sidebar::render_sidebar(&ui, controller.preferences().view));
    }

    let main = error_boundary::render_guarded(&ui, || render_main(&ui, controller, search, now));
    sections.push(main);

    if let Some(toast) = controller.toast() {
        let marker = match toast.kind {
            ToastKind::Success => "[ok]",
            ToastKind::Error => "[!]",
        };
        sections.push(format!("{} {}", marker, toast.message));
    }

    sections.join("\n\n")
}

fn render_header(ui: &Ui<'_>, pending: usize) -> String {
    let mut header = format!(
        "{}{} | {}",
        ui.locale().direction().mark(),
        ui.t("app_title"),
        ui.t("welcome_admin")
    );
    if pending > 0 {
        header.push_str(&format!(" | {} ({})", ui.t("notifications_title"), ui.number(pending as f64)));
    }
    header
}

/// The main content area for the active view.
pub fn render_main(
    ui: &Ui<'_>,
    controller: &DashboardController,
    search: &str,
    now: DateTime<Utc>,
) -> String {
    let state = controller.state();
    if state.is_loading {
        return ui.t("loading_data");
    }
    if let Some(error) = &state.error {
        return format!("{}\n[{}]", error, ui.t("retry"));
    }

    match controller.preferences().view {
        View::Dashboard | View::Reports => dashboard::render_dashboard(ui, state, now),
        View::Trainers => trainers::render_trainers(ui, &state.trainers()),
        View::Clients => clients::render_clients(ui, &state.clients(), &state.packages, search),
        View::Packages => packages::render_packages(ui, &state.packages),
        View::Settings => settings::render_settings(ui, controller.preferences()),
    }
}
