use super::Ui;
use crate::domain::Notification;
use crate::i18n::Args;

/// The bell dropdown: one line per reminder with its send action.
pub fn render_dropdown(ui: &Ui<'_>, notifications: &[Notification]) -> String {
    let mut lines = vec![ui.t("notifications_title")];
    if notifications.is_empty() {
        lines.push(ui.t("no_new_notifications"));
    }
    for notification in notifications {
        lines.push(format!(
            "- {} {} [{}]",
            notification.client_name,
            notification_body(ui, notification),
            ui.t("send_whatsapp_reminder")
        ));
    }
    lines.join("\n")
}

pub fn notification_body(ui: &Ui<'_>, notification: &Notification) -> String {
    ui.tr(
        "notification_body",
        &Args::new()
            .count(u64::from(notification.sessions_left))
            .text("packageName", notification.package_name.as_str()),
    )
}
