use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use tracing::{info, warn, Instrument};

use training_admin::app_system::{setup_tracing, DashboardSystem};
use training_admin::config::{Config, ConfigSource};
use training_admin::dashboard::DashboardController;
use training_admin::i18n::{Catalog, Locale};
use training_admin::preferences::{FilePreferenceStore, Theme, View};
use training_admin::views::{
    self, render_client_form, render_package_form, ClientDraft, FormState, PackageDraft, Ui,
};

#[derive(Parser, Debug)]
#[command(name = "training_admin")]
#[command(about = "Administration dashboard for a fitness-training studio", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, env = "TRAINING_ADMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Switch to a view before rendering (remembered for next time)
    #[arg(long)]
    view: Option<View>,

    /// Display language: ar or en (remembered for next time)
    #[arg(long)]
    lang: Option<Locale>,

    /// Colour theme: light or dark (remembered for next time)
    #[arg(long)]
    theme: Option<Theme>,

    /// Filter the clients table by name
    #[arg(long, default_value = "")]
    search: String,

    /// Override the simulated API latency
    #[arg(long)]
    latency_ms: Option<u64>,

    /// Show the notification dropdown
    #[arg(long)]
    notifications: bool,

    /// Render without the sidebar
    #[arg(long)]
    hide_sidebar: bool,

    /// Run a scripted editing session before rendering
    #[arg(long)]
    demo: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = Config::load(cli.config.as_deref())?;
    if let Some(latency_ms) = cli.latency_ms {
        config.api.latency_ms = latency_ms;
    }

    // Setup tracing once for the entire application
    setup_tracing(&config.logging.filter);
    info!("Starting training admin dashboard");
    match &source {
        ConfigSource::File(path) => info!(path = %path.display(), "Loaded config file"),
        ConfigSource::Defaults(path) => {
            info!(path = %path.display(), "Config file not found, using defaults")
        }
    }

    let catalog = Arc::new(Catalog::builtin().context("Failed to load translations")?);
    let preferences_path = config.preferences_path()?;
    let store = FilePreferenceStore::open(&preferences_path)
        .with_context(|| format!("Failed to open preferences at {}", preferences_path.display()))?;

    // Create the entire system (starts all services)
    let system = DashboardSystem::new(&config.api);
    let mut controller =
        DashboardController::new(system.api(), catalog, Box::new(store), &config.ui);

    if let Some(language) = cli.lang {
        controller.set_language(language);
    }
    if let Some(theme) = cli.theme {
        controller.set_theme(theme);
    }
    if let Some(view) = cli.view {
        controller.set_view(view);
    }

    let span = tracing::info_span!("initial_load");
    if let Err(e) = controller.load().instrument(span).await {
        warn!(error = %e, "Dashboard data unavailable");
    }

    if cli.notifications {
        controller.toggle_notifications();
    }
    if cli.hide_sidebar {
        controller.toggle_sidebar();
    }

    if cli.demo {
        let span = tracing::info_span!("demo_session");
        run_demo(&mut controller).instrument(span).await;
    }

    println!("{}", views::render_app(&controller, &cli.search, Utc::now()));

    // Actors stop once the last API handle is gone
    drop(controller);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

/// Adds a package, sends the first reminder, and takes one client down to zero
/// sessions and back, the way an administrator would through the forms. Each
/// form is printed as filled in, and each toast is closed once read.
async fn run_demo(controller: &mut DashboardController) {
    let mut form = FormState::open(PackageDraft::blank());
    if let Some(draft) = form.draft_mut() {
        draft.name = "P1".to_string();
        draft.sessions = 4;
        draft.price = 400.0;
    }
    println!("{}\n", render_package_form(&ui(controller), &form));
    if let Some(draft) = form.begin_submit() {
        match draft.into_intent() {
            Ok(intent) => {
                let result = intent.apply(controller).await;
                form.settle(&result);
                match result {
                    Ok(package) => info!(package_id = %package.id, "Demo package added"),
                    Err(e) => warn!(error = %e, "Demo package rejected"),
                }
            }
            Err(e) => form.fail(controller.t(e.message_key())),
        }
    }
    acknowledge_toast(controller);

    let first_reminder = controller.state().notifications.first().map(|n| n.id.clone());
    if let Some(id) = first_reminder {
        controller.send_reminder(&id);
        acknowledge_toast(controller);
    }

    let Some(client) = controller.state().clients().first().map(|c| (*c).clone()) else {
        return;
    };
    let original = client.sessions_left.unwrap_or(0);
    for sessions_left in [0, original] {
        let mut form = FormState::open(ClientDraft::edit(&client));
        if let Some(draft) = form.draft_mut() {
            draft.sessions_left = sessions_left;
        }
        let packages = controller.state().packages.clone();
        println!("{}\n", render_client_form(&ui(controller), &form, &packages));
        let Some(draft) = form.begin_submit() else {
            return;
        };
        if let Err(e) = draft.apply(controller).await {
            warn!(client_id = %client.id, error = %e, "Demo client update failed");
            return;
        }
    }
    info!(client_id = %client.id, "Demo client restored");
}

fn ui(controller: &DashboardController) -> Ui<'_> {
    Ui::new(controller.catalog(), controller.locale())
}

fn acknowledge_toast(controller: &mut DashboardController) {
    if let Some(toast) = controller.toast() {
        info!(kind = ?toast.kind, message = %toast.message, "Toast shown");
    }
    controller.dismiss_toast();
}
