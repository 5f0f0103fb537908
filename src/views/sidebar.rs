use super::Ui;
use crate::preferences::View;

pub fn render_sidebar(ui: &Ui<'_>, current: View) -> String {
    let mut lines = vec![ui.t("app_title")];
    for view in View::ALL {
        let marker = if view == current { ">" } else { " " };
        lines.push(format!("{} {}", marker, ui.t(view.label_key())));
    }
    lines.join("\n")
}
