use super::form::{render_modal, FormState};
use super::table::TextTable;
use super::Ui;
use crate::app_system::error::DashboardError;
use crate::dashboard::DashboardController;
use crate::domain::{Package, User};

/// Edit form for a client. Only the package and the remaining sessions can
/// change; name and city are shown read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientDraft {
    client: User,
    pub package_id: Option<String>,
    pub sessions_left: u32,
}

impl ClientDraft {
    pub fn edit(client: &User) -> Self {
        Self {
            client: client.clone(),
            package_id: client.package_id.clone(),
            sessions_left: client.sessions_left.unwrap_or(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.client.name
    }

    pub fn city(&self) -> Option<&str> {
        self.client.city.as_deref()
    }

    pub fn into_update(self) -> User {
        User {
            package_id: self.package_id,
            sessions_left: Some(self.sessions_left),
            ..self.client
        }
    }

    pub async fn apply(self, controller: &mut DashboardController) -> Result<User, DashboardError> {
        controller.update_client(self.into_update()).await
    }
}

/// Colour band of the remaining-sessions badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionBadge {
    Healthy,
    Warning,
    Critical,
}

impl SessionBadge {
    pub fn for_sessions(sessions_left: Option<u32>) -> Self {
        match sessions_left.unwrap_or(0) {
            n if n > 5 => SessionBadge::Healthy,
            n if n > 2 => SessionBadge::Warning,
            _ => SessionBadge::Critical,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            SessionBadge::Healthy => "+",
            SessionBadge::Warning => "~",
            SessionBadge::Critical => "!",
        }
    }
}

/// Case-insensitive substring match on the client name. An empty query keeps
/// everyone.
pub fn filter_clients<'a>(clients: &[&'a User], query: &str) -> Vec<&'a User> {
    let needle = query.trim().to_lowercase();
    clients
        .iter()
        .copied()
        .filter(|client| client.name.to_lowercase().contains(&needle))
        .collect()
}

/// The client's package name, or the "unsubscribed" label when the client has
/// none or it was deleted.
pub fn package_label(ui: &Ui<'_>, client: &User, packages: &[Package]) -> String {
    client
        .package_id
        .as_ref()
        .and_then(|id| packages.iter().find(|p| &p.id == id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| ui.t("unsubscribed"))
}

/// Name and city are listed but not editable.
pub fn render_client_form(ui: &Ui<'_>, form: &FormState<ClientDraft>, packages: &[Package]) -> String {
    let draft = form.draft();
    let package = draft
        .package_id
        .as_ref()
        .and_then(|id| packages.iter().find(|p| &p.id == id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| ui.t("select_package"));
    let fields = [
        (ui.t("client_name"), draft.name().to_string()),
        (ui.t("city"), draft.city().unwrap_or_default().to_string()),
        (ui.t("current_package"), package),
        (ui.t("sessions_left"), draft.sessions_left.to_string()),
    ];
    render_modal(ui, form, "modal_edit_client_title", "save_changes", &fields)
}

pub fn render_clients(ui: &Ui<'_>, clients: &[&User], packages: &[Package], query: &str) -> String {
    let visible = filter_clients(clients, query);
    let mut out = format!(
        "{}\n{}: {}",
        ui.t("clients_management_title"),
        ui.t("search_client_placeholder"),
        query
    );

    if visible.is_empty() {
        out.push_str("\n\n");
        out.push_str(&ui.t("no_clients_found"));
        return out;
    }

    let mut table = TextTable::new([
        ui.t("client_name"),
        ui.t("city"),
        ui.t("current_package"),
        ui.t("sessions_left"),
        ui.t("actions"),
    ]);
    for client in visible {
        let badge = SessionBadge::for_sessions(client.sessions_left);
        let sessions = client
            .sessions_left
            .map(|n| n.to_string())
            .unwrap_or_default();
        table.push_row([
            client.name.clone(),
            client.city.clone().unwrap_or_default(),
            package_label(ui, client, packages),
            format!("{} {}", badge.marker(), sessions),
            ui.t("edit"),
        ]);
    }
    out.push_str("\n\n");
    out.push_str(&table.render());
    out
}
