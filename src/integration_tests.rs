#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, Utc};
    use tokio::sync::mpsc;

    use crate::actor_framework::{FrameworkError, ResourceRequest};
    use crate::app_system::dashboard_system::DashboardSystem;
    use crate::app_system::seed::SeedData;
    use crate::clients::{BookingClient, DashboardApi, PackageClient, UserClient};
    use crate::config::{ApiConfig, UiConfig};
    use crate::dashboard::{DashboardController, ToastKind};
    use crate::domain::{Booking, Package, TrainingType, User};
    use crate::i18n::{Catalog, Locale};
    use crate::mock_framework::{create_mock_client, expect_create, expect_delete, expect_list};
    use crate::preferences::MemoryPreferenceStore;
    use crate::views::clients::{package_label, ClientDraft};
    use crate::views::packages::{PackageDraft, PackageIntent};
    use crate::views::trainers::TrainerDraft;
    use crate::views::{render_app, ConfirmationDialog, FormPhase, FormState, Ui};

    fn controller_for(api: DashboardApi) -> DashboardController {
        DashboardController::new(
            api,
            Arc::new(Catalog::builtin().unwrap()),
            Box::new(MemoryPreferenceStore::new()),
            &UiConfig::default(),
        )
    }

    async fn live(seed: SeedData) -> (DashboardSystem, DashboardController) {
        let config = ApiConfig {
            latency_ms: 0,
            ..ApiConfig::default()
        };
        let system = DashboardSystem::with_seed(&config, seed);
        let mut controller = controller_for(system.api());
        controller.load().await.unwrap();
        (system, controller)
    }

    struct Backend {
        users: mpsc::Receiver<ResourceRequest<User>>,
        packages: mpsc::Receiver<ResourceRequest<Package>>,
        bookings: mpsc::Receiver<ResourceRequest<Booking>>,
    }

    impl Backend {
        /// Answers one List request per collection.
        async fn serve_lists(&mut self, seed: &SeedData) {
            if let Some(respond_to) = expect_list(&mut self.users).await {
                let _ = respond_to.send(Ok(seed.users.clone()));
            }
            if let Some(respond_to) = expect_list(&mut self.packages).await {
                let _ = respond_to.send(Ok(seed.packages.clone()));
            }
            if let Some(respond_to) = expect_list(&mut self.bookings).await {
                let _ = respond_to.send(Ok(seed.bookings.clone()));
            }
        }
    }

    fn mocked() -> (DashboardController, Backend) {
        let (users, users_rx) = create_mock_client::<User>(8);
        let (packages, packages_rx) = create_mock_client::<Package>(8);
        let (bookings, bookings_rx) = create_mock_client::<Booking>(8);
        let api = DashboardApi {
            users: UserClient::new(users),
            packages: PackageClient::new(packages),
            bookings: BookingClient::new(bookings),
        };
        let backend = Backend {
            users: users_rx,
            packages: packages_rx,
            bookings: bookings_rx,
        };
        (controller_for(api), backend)
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[tokio::test]
    async fn test_dismissed_reminder_returns_after_unrelated_package_update() {
        let seed = SeedData {
            users: vec![User::client("c1", "Ali", "Riyadh", Some("p1".into()), Some(2), day())],
            packages: vec![
                Package::new("p1", "Starter", TrainingType::Normal, 4, 400.0),
                Package::new("p2", "Trial", TrainingType::Normal, 1, 120.0),
            ],
            bookings: Vec::new(),
        };
        let (_system, mut controller) = live(seed).await;

        assert_eq!(controller.state().notifications.len(), 1);
        assert_eq!(controller.state().notifications[0].client_id, "c1");

        controller.send_reminder("notif-c1").unwrap();
        assert!(controller.state().notifications.is_empty());

        let mut trial = controller.state().package("p2").unwrap().clone();
        trial.sessions = 2;
        controller.update_package(trial).await.unwrap();

        let notifications = &controller.state().notifications;
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].id, "notif-c1");
        assert_eq!(notifications[0].package_name, "Starter");
    }

    #[tokio::test]
    async fn test_package_form_adds_exactly_what_was_entered() {
        let (_system, mut controller) = live(SeedData::demo(Utc::now())).await;
        let before: Vec<String> = controller.state().packages.iter().map(|p| p.id.clone()).collect();

        let mut form = FormState::open(PackageDraft::blank());
        {
            let draft = form.draft_mut().unwrap();
            draft.name = "P1".into();
            draft.sessions = 4;
            draft.price = 400.0;
        }
        let intent = form.begin_submit().unwrap().into_intent().unwrap();
        let result = intent.apply(&mut controller).await;
        form.settle(&result);

        let created = result.unwrap();
        assert_eq!(form.phase(), FormPhase::Closed);
        assert!(!before.contains(&created.id));
        assert_eq!(controller.state().packages.len(), before.len() + 1);
        assert_eq!(
            controller.state().package(&created.id),
            Some(&Package::new(created.id.clone(), "P1", TrainingType::Normal, 4, 400.0))
        );
    }

    #[tokio::test]
    async fn test_deleted_package_leaves_dangling_client_reference() {
        let (_system, mut controller) = live(SeedData::demo(Utc::now())).await;

        let mut dialog = ConfirmationDialog::default();
        dialog.open(controller.state().package("p1").unwrap().clone());
        let target = dialog.begin_confirm().unwrap();
        let result = controller.delete_package(target.id).await;
        dialog.settle(&result);

        assert_eq!(result, Ok("p1".to_string()));
        assert!(!dialog.is_open());
        assert!(controller.state().package("p1").is_none());

        let c3 = controller.state().user("c3").unwrap();
        assert_eq!(c3.package_id.as_deref(), Some("p1"));

        let ui = Ui::new(controller.catalog(), Locale::En);
        assert_eq!(package_label(&ui, c3, &controller.state().packages), "Not Subscribed");
        let reminder = controller
            .state()
            .notifications
            .iter()
            .find(|n| n.client_id == "c3")
            .unwrap();
        assert_eq!(reminder.package_name, "باقة غير معروفة");
    }

    #[tokio::test]
    async fn test_sessions_round_trip_restores_state() {
        let (_system, mut controller) = live(SeedData::demo(Utc::now())).await;
        let before = controller.state().clone();
        let client = controller.state().user("c1").unwrap().clone();

        let mut draft = ClientDraft::edit(&client);
        draft.sessions_left = 0;
        draft.apply(&mut controller).await.unwrap();
        assert!(controller.state().notifications.iter().any(|n| n.client_id == "c1"));

        let mut draft = ClientDraft::edit(controller.state().user("c1").unwrap());
        draft.sessions_left = 6;
        draft.apply(&mut controller).await.unwrap();

        assert_eq!(controller.state(), &before);
    }

    #[tokio::test]
    async fn test_every_mutation_leaves_state_equal_to_store() {
        let (system, mut controller) = live(SeedData::demo(Utc::now())).await;
        let api = system.api();

        async fn assert_synced(controller: &DashboardController, api: &DashboardApi) {
            let state = controller.state();
            assert_eq!(state.users, api.users.fetch_users().await.unwrap());
            assert_eq!(state.packages, api.packages.fetch_packages().await.unwrap());
            assert_eq!(state.bookings, api.bookings.fetch_bookings().await.unwrap());
        }

        let mut trainer = TrainerDraft::blank();
        trainer.name = "Omar".into();
        trainer.city = "Jeddah".into();
        trainer.specialization = "EMS".into();
        let added = trainer.into_intent().unwrap().apply(&mut controller).await.unwrap();
        assert_synced(&controller, &api).await;

        let mut edit = TrainerDraft::edit(&added);
        edit.specialization = "Platten".into();
        edit.into_intent().unwrap().apply(&mut controller).await.unwrap();
        assert_synced(&controller, &api).await;

        controller.delete_trainer(added.id).await.unwrap();
        assert_synced(&controller, &api).await;

        let mut package = PackageDraft::edit(controller.state().package("p5").unwrap());
        package.price = 99.5;
        let PackageIntent::Update(updated) = package.into_intent().unwrap() else {
            panic!("expected an update");
        };
        controller.update_package(updated).await.unwrap();
        assert_synced(&controller, &api).await;

        controller.delete_package("p5".into()).await.unwrap();
        assert_synced(&controller, &api).await;

        assert_eq!(controller.toast().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[tokio::test]
    async fn test_rejected_edit_keeps_form_open() {
        let (_system, mut controller) = live(SeedData::demo(Utc::now())).await;
        let before = controller.state().clone();

        // c1 is a client; the trainer endpoint refuses it.
        let client = controller.state().user("c1").unwrap().clone();
        let mut form = FormState::open(TrainerDraft::edit(&User {
            specialization: Some("EMS".into()),
            ..client
        }));
        let intent = form.begin_submit().unwrap().into_intent().unwrap();
        let result = intent.apply(&mut controller).await;
        form.settle(&result);

        assert!(result.is_err());
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.error().is_some());
        assert_eq!(controller.toast().map(|t| t.kind), Some(ToastKind::Error));
        assert_eq!(controller.state(), &before);
    }

    #[tokio::test]
    async fn test_delete_dialog_is_locked_in_flight_and_reopens_on_failure() {
        let seed = SeedData::demo(Utc::now());
        let (mut controller, mut backend) = mocked();
        let (loaded, ()) = tokio::join!(controller.load(), backend.serve_lists(&seed));
        loaded.unwrap();
        let before = controller.state().clone();

        let mut dialog = ConfirmationDialog::default();
        dialog.open(controller.state().package("p2").unwrap().clone());
        let target = dialog.begin_confirm().unwrap();

        let (result, ()) = tokio::join!(controller.delete_package(target.id.clone()), async {
            let (id, respond_to) = expect_delete(&mut backend.packages).await.unwrap();
            assert_eq!(id, "p2");
            assert!(!dialog.is_confirm_enabled());
            respond_to.send(Err(FrameworkError::ActorDropped)).unwrap();
        });
        dialog.settle(&result);

        assert!(result.is_err());
        assert!(dialog.is_confirm_enabled());
        assert_eq!(dialog.target().map(|p| p.id.as_str()), Some("p2"));
        assert!(dialog.error().is_some());
        assert_eq!(controller.state(), &before);
        let toast = controller.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "فشلت العملية. يرجى المحاولة مرة أخرى.");
    }

    #[tokio::test]
    async fn test_form_is_locked_while_create_is_in_flight() {
        let seed = SeedData::demo(Utc::now());
        let (mut controller, mut backend) = mocked();
        let (loaded, ()) = tokio::join!(controller.load(), backend.serve_lists(&seed));
        loaded.unwrap();

        let mut form = FormState::open(PackageDraft {
            name: "P1".into(),
            sessions: 4,
            price: 400.0,
            ..PackageDraft::blank()
        });
        let intent = form.begin_submit().unwrap().into_intent().unwrap();

        let mut after = seed.clone();
        let (result, ()) = tokio::join!(intent.apply(&mut controller), async {
            let (payload, respond_to) = expect_create(&mut backend.packages).await.unwrap();
            assert!(!form.is_submit_enabled());
            let created = Package::new("p9", payload.name, payload.training_type, payload.sessions, payload.price);
            after.packages.push(created.clone());
            respond_to.send(Ok(created)).unwrap();
            backend.serve_lists(&after).await;
        });
        form.settle(&result);

        assert_eq!(result.unwrap().id, "p9");
        assert_eq!(form.phase(), FormPhase::Closed);
        assert_eq!(controller.state().packages, after.packages);
    }

    #[tokio::test]
    async fn test_failed_load_shows_blanket_error_until_retry() {
        let seed = SeedData::demo(Utc::now());
        let (mut controller, mut backend) = mocked();

        let failing = async {
            if let Some(respond_to) = expect_list(&mut backend.users).await {
                let _ = respond_to.send(Err(FrameworkError::ActorClosed));
            }
            if let Some(respond_to) = expect_list(&mut backend.packages).await {
                let _ = respond_to.send(Ok(seed.packages.clone()));
            }
            if let Some(respond_to) = expect_list(&mut backend.bookings).await {
                let _ = respond_to.send(Ok(seed.bookings.clone()));
            }
        };
        let (loaded, ()) = tokio::join!(controller.load(), failing);

        assert!(loaded.is_err());
        let state = controller.state();
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("فشل تحميل البيانات. يرجى تحديث الصفحة."));
        assert!(state.users.is_empty());
        assert!(state.packages.is_empty());

        let (retried, ()) = tokio::join!(controller.retry(), backend.serve_lists(&seed));
        retried.unwrap();
        let state = controller.state();
        assert_eq!(state.error, None);
        assert_eq!(state.users.len(), 7);
        assert_eq!(state.notifications.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_refetch_after_confirmed_create_is_a_failed_mutation() {
        let seed = SeedData::demo(Utc::now());
        let (mut controller, mut backend) = mocked();
        let (loaded, ()) = tokio::join!(controller.load(), backend.serve_lists(&seed));
        loaded.unwrap();
        let before = controller.state().clone();

        let mut form = FormState::open(PackageDraft {
            name: "P1".into(),
            sessions: 4,
            price: 400.0,
            ..PackageDraft::blank()
        });
        let intent = form.begin_submit().unwrap().into_intent().unwrap();

        let (result, ()) = tokio::join!(intent.apply(&mut controller), async {
            let (payload, respond_to) = expect_create(&mut backend.packages).await.unwrap();
            let created = Package::new("p9", payload.name, payload.training_type, payload.sessions, payload.price);
            respond_to.send(Ok(created)).unwrap();

            if let Some(respond_to) = expect_list(&mut backend.users).await {
                let _ = respond_to.send(Err(FrameworkError::ActorClosed));
            }
            if let Some(respond_to) = expect_list(&mut backend.packages).await {
                let _ = respond_to.send(Ok(seed.packages.clone()));
            }
            if let Some(respond_to) = expect_list(&mut backend.bookings).await {
                let _ = respond_to.send(Ok(seed.bookings.clone()));
            }
        });
        form.settle(&result);

        assert!(result.is_err());
        assert!(form.is_open());
        assert!(form.error().is_some());
        let toast = controller.toast().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "فشلت العملية. يرجى المحاولة مرة أخرى.");
        assert_eq!(controller.state(), &before);
    }

    #[tokio::test]
    async fn test_opened_bell_renders_reminders() {
        let (_system, mut controller) = live(SeedData::demo(Utc::now())).await;
        controller.set_language(Locale::En);

        let closed = render_app(&controller, "", Utc::now());
        assert!(closed.starts_with('\u{200E}'));
        assert!(!closed.contains("Send WhatsApp Reminder"));

        controller.toggle_notifications();
        assert!(controller.notifications_open());
        let opened = render_app(&controller, "", Utc::now());
        assert_eq!(opened.matches("Send WhatsApp Reminder").count(), 2);

        controller.set_language(Locale::Ar);
        assert!(render_app(&controller, "", Utc::now()).starts_with('\u{200F}'));
    }

    #[tokio::test]
    async fn test_hidden_sidebar_and_dismissed_toast_leave_the_screen() {
        let (_system, mut controller) = live(SeedData::demo(Utc::now())).await;
        controller.set_language(Locale::En);
        controller.send_reminder("notif-c3").unwrap();

        let shown = render_app(&controller, "", Utc::now());
        assert!(shown.contains("Trainers Mgt."));
        assert!(shown.contains("[ok] Reminder sent to"));

        controller.toggle_sidebar();
        controller.dismiss_toast();
        assert!(controller.toast().is_none());
        let hidden = render_app(&controller, "", Utc::now());
        assert!(!hidden.contains("Trainers Mgt."));
        assert!(!hidden.contains("[ok]"));
    }
}
