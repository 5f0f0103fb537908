use super::Ui;
use crate::i18n::Locale;
use crate::preferences::{Preferences, Theme};

pub fn render_settings(ui: &Ui<'_>, preferences: Preferences) -> String {
    let mark = |selected: bool| if selected { "(*)" } else { "( )" };

    let themes: Vec<String> = [Theme::Light, Theme::Dark]
        .into_iter()
        .map(|theme| format!("{} {}", mark(theme == preferences.theme), ui.t(theme.key())))
        .collect();
    let languages: Vec<String> = [Locale::Ar, Locale::En]
        .into_iter()
        .map(|locale| format!("{} {}", mark(locale == preferences.language), locale.code()))
        .collect();

    [
        ui.t("settings_title"),
        String::new(),
        ui.t("appearance"),
        ui.t("choose_theme"),
        format!("{}: {}", ui.t("theme"), themes.join("  ")),
        String::new(),
        ui.t("choose_language"),
        format!("{}: {}", ui.t("language"), languages.join("  ")),
    ]
    .join("\n")
}
