use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use super::state::AppState;
use super::toast::Toast;
use crate::app_system::error::DashboardError;
use crate::clients::DashboardApi;
use crate::config::UiConfig;
use crate::domain::{Booking, NewTrainer, Notification, Package, PackageCreate, User};
use crate::i18n::{Args, Catalog, Locale};
use crate::notifications::derive_notifications;
use crate::preferences::{PreferenceStore, Preferences, Theme, View};

/// Owns the dashboard's state and turns view intents into API calls.
///
/// Writes are never applied locally. After the API confirms a write the three
/// collections are fetched again and replace the state, so what the views show
/// is always what the store holds. Taking `&mut self` on every intent keeps
/// mutations one at a time.
pub struct DashboardController {
    api: DashboardApi,
    catalog: Arc<Catalog>,
    store: Box<dyn PreferenceStore>,
    preferences: Preferences,
    state: AppState,
    toast: Option<Toast>,
    toast_timeout: Duration,
    notifications_open: bool,
    sidebar_open: bool,
}

impl DashboardController {
    /// Restores preferences from `store`. Nothing is fetched until
    /// [`DashboardController::load`].
    pub fn new(
        api: DashboardApi,
        catalog: Arc<Catalog>,
        store: Box<dyn PreferenceStore>,
        ui: &UiConfig,
    ) -> Self {
        let preferences = Preferences::load(store.as_ref(), ui);
        debug!(?preferences, "Restored preferences");
        Self {
            api,
            catalog,
            store,
            preferences,
            state: AppState::loading(),
            toast: None,
            toast_timeout: ui.toast_timeout(),
            notifications_open: false,
            sidebar_open: true,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn locale(&self) -> Locale {
        self.preferences.language
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Translates `key` in the active language.
    pub fn t(&self, key: &str) -> String {
        self.catalog.t(self.locale(), key)
    }

    pub fn translate(&self, key: &str, args: &Args) -> String {
        self.catalog.translate(self.locale(), key, args)
    }

    // --- Loading ---

    /// Fetches all three collections concurrently. Any failure leaves the
    /// previous collections in place and sets the blanket load error.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        self.state.is_loading = true;
        self.state.error = None;

        let result = self.refresh().await;
        if let Err(e) = &result {
            warn!(error = %e, "Failed to load dashboard data");
            self.state.error = Some(self.t("error_loading_data"));
        }

        self.state.is_loading = false;
        result
    }

    pub async fn retry(&mut self) -> Result<(), DashboardError> {
        info!("Retrying load");
        self.load().await
    }

    async fn fetch_all(&self) -> Result<(Vec<User>, Vec<Package>, Vec<Booking>), DashboardError> {
        let api = &self.api;
        tokio::try_join!(
            async { api.users.fetch_users().await.map_err(DashboardError::from) },
            async { api.packages.fetch_packages().await.map_err(DashboardError::from) },
            async { api.bookings.fetch_bookings().await.map_err(DashboardError::from) }
        )
    }

    async fn refresh(&mut self) -> Result<(), DashboardError> {
        let (users, packages, bookings) = self.fetch_all().await?;
        debug!(
            users = users.len(),
            packages = packages.len(),
            bookings = bookings.len(),
            "Collections refreshed"
        );
        self.state.users = users;
        self.state.packages = packages;
        self.state.bookings = bookings;
        self.recompute_notifications();
        Ok(())
    }

    fn recompute_notifications(&mut self) {
        let unknown = self.t("unknown_package");
        self.state.notifications =
            derive_notifications(&self.state.users, &self.state.packages, &unknown);
    }

    // --- Mutations ---

    #[instrument(skip(self, trainer), fields(trainer_name = %trainer.name))]
    pub async fn add_trainer(&mut self, trainer: NewTrainer) -> Result<User, DashboardError> {
        let result = self.api.users.add_trainer(trainer).await.map_err(DashboardError::from);
        self.settle_mutation(result, "toast_add_trainer_success").await
    }

    #[instrument(skip(self, trainer), fields(user_id = %trainer.id))]
    pub async fn update_trainer(&mut self, trainer: User) -> Result<User, DashboardError> {
        let result = self.api.users.update_trainer(trainer).await.map_err(DashboardError::from);
        self.settle_mutation(result, "toast_update_trainer_success").await
    }

    #[instrument(skip(self))]
    pub async fn delete_trainer(&mut self, id: String) -> Result<String, DashboardError> {
        let result = self.api.users.delete_trainer(id).await.map_err(DashboardError::from);
        self.settle_mutation(result, "toast_delete_trainer_success").await
    }

    #[instrument(skip(self, client), fields(user_id = %client.id))]
    pub async fn update_client(&mut self, client: User) -> Result<User, DashboardError> {
        let result = self.api.users.update_client(client).await.map_err(DashboardError::from);
        self.settle_mutation(result, "toast_update_client_success").await
    }

    #[instrument(skip(self, package), fields(package_name = %package.name))]
    pub async fn add_package(&mut self, package: PackageCreate) -> Result<Package, DashboardError> {
        let result = self.api.packages.add_package(package).await.map_err(DashboardError::from);
        self.settle_mutation(result, "toast_add_package_success").await
    }

    #[instrument(skip(self, package), fields(package_id = %package.id))]
    pub async fn update_package(&mut self, package: Package) -> Result<Package, DashboardError> {
        let result = self
            .api
            .packages
            .update_package(package)
            .await
            .map_err(DashboardError::from);
        self.settle_mutation(result, "toast_update_package_success").await
    }

    #[instrument(skip(self))]
    pub async fn delete_package(&mut self, id: String) -> Result<String, DashboardError> {
        let result = self.api.packages.delete_package(id).await.map_err(DashboardError::from);
        self.settle_mutation(result, "toast_delete_package_success").await
    }

    /// A confirmed write is followed by a full refresh. A failed refresh counts
    /// as a failed mutation so the caller's form stays open.
    async fn settle_mutation<R>(
        &mut self,
        result: Result<R, DashboardError>,
        success_key: &str,
    ) -> Result<R, DashboardError> {
        let outcome = match result {
            Ok(value) => self.refresh().await.map(|()| value),
            Err(e) => Err(e),
        };

        match &outcome {
            Ok(_) => {
                info!(toast = success_key, "Mutation succeeded");
                let message = self.t(success_key);
                self.raise(Toast::success(message));
            }
            Err(e) => {
                warn!(error = %e, "Mutation failed");
                let message = self.t("toast_operation_failed");
                self.raise(Toast::error(message));
            }
        }
        outcome
    }

    // --- Notifications ---

    /// Drops one reminder from the current list. It comes back on the next
    /// recomputation if the client still qualifies.
    #[instrument(skip(self))]
    pub fn send_reminder(&mut self, notification_id: &str) -> Option<Notification> {
        let index = self
            .state
            .notifications
            .iter()
            .position(|n| n.id == notification_id)?;
        let notification = self.state.notifications.remove(index);

        info!(client_id = %notification.client_id, "Reminder sent");
        let message = self.translate(
            "toast_reminder_sent_to",
            &Args::new().text("name", notification.client_name.as_str()),
        );
        self.raise(Toast::success(message));
        Some(notification)
    }

    pub fn notifications_open(&self) -> bool {
        self.notifications_open
    }

    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    // --- Toasts ---

    fn raise(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    /// The current toast, unless it has timed out.
    pub fn toast(&self) -> Option<&Toast> {
        self.toast
            .as_ref()
            .filter(|toast| !toast.is_expired(self.toast_timeout))
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    // --- Preferences ---

    pub fn set_view(&mut self, view: View) {
        self.preferences.view = view;
        self.persist(Preferences::VIEW_KEY, view.key());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
        self.persist(Preferences::THEME_KEY, theme.key());
    }

    /// Switching language also relabels derived notifications, which restores
    /// any that were dismissed.
    pub fn set_language(&mut self, language: Locale) {
        self.preferences.language = language;
        self.persist(Preferences::LANGUAGE_KEY, language.code());
        self.recompute_notifications();
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            warn!(key, error = %e, "Failed to persist preference");
        }
    }
}
