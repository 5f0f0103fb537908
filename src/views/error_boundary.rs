use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use tracing::error;

use super::Ui;

/// Runs a renderer, replacing a panic with the localized fallback screen.
pub fn render_guarded<F>(ui: &Ui<'_>, render: F) -> String
where
    F: FnOnce() -> String,
{
    match panic::catch_unwind(AssertUnwindSafe(render)) {
        Ok(rendered) => rendered,
        Err(payload) => {
            error!(reason = panic_reason(payload.as_ref()), "View rendering panicked");
            fallback(ui)
        }
    }
}

pub fn fallback(ui: &Ui<'_>) -> String {
    format!(
        "{}\n{}\n[{}]",
        ui.t("error_boundary_title"),
        ui.t("error_boundary_message"),
        ui.t("error_boundary_button")
    )
}

fn panic_reason(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown")
}
