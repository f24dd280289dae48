//! Integration tests for the waymark core
//!
//! These tests drive the full stack — screen models, repository, SQLite
//! store, geofencing client — the way the app's screens would.

use std::sync::Arc;
use waymark_config::{GeofenceSettings, parse_config};
use waymark_core::{
    MapPoint, ReminderItem, ReminderListModel, ReminderRepository, SaveReminderModel, ScreenEvent,
};
use waymark_geofence::MockGeofencer;
use waymark_store::{InMemoryReminderStore, ReminderStore, SqliteReminderStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

struct App {
    list: ReminderListModel,
    save: SaveReminderModel,
    geofencer: Arc<MockGeofencer>,
    repository: ReminderRepository,
}

fn app_with_store(store: Arc<dyn ReminderStore>, geofence: GeofenceSettings) -> App {
    init_tracing();
    let repository = ReminderRepository::new(store);
    let geofencer = Arc::new(MockGeofencer::new());
    App {
        list: ReminderListModel::new(repository.clone()),
        save: SaveReminderModel::new(repository.clone(), geofencer.clone(), geofence),
        geofencer,
        repository,
    }
}

fn sqlite_app() -> App {
    app_with_store(
        Arc::new(SqliteReminderStore::in_memory().unwrap()),
        GeofenceSettings::default(),
    )
}

#[tokio::test]
async fn five_saves_then_delete_all_round_trip() {
    let app = sqlite_app();

    // Save five reminders with distinct payloads through the save flow
    for i in 0..5 {
        let item = ReminderItem::new(
            Some(format!("errand {i}")),
            Some(format!("details {i}")),
            Some(format!("place {i}")),
            Some(40.0 + i as f64),
            Some(-74.0 - i as f64),
        );
        assert!(app.save.validate_and_save_reminder(item).await);
    }

    app.list.load_reminders().await;
    let state = app.list.state();
    assert_eq!(state.reminders.len(), 5);
    assert!(!state.show_no_data);

    // Each save also armed a fence
    assert_eq!(app.geofencer.registered().len(), 5);

    app.repository.delete_all_reminders().await.unwrap();

    app.list.load_reminders().await;
    let state = app.list.state();
    assert!(state.reminders.is_empty());
    assert!(state.show_no_data);
}

#[tokio::test]
async fn select_location_then_save_arms_a_fence_at_the_picked_point() {
    let app = sqlite_app();

    app.save.set_title(Some("library books".into()));
    app.save.select_location(MapPoint {
        name: "Central Library".into(),
        latitude: 47.6067,
        longitude: -122.3325,
    });

    let item = app.save.draft_item();
    assert!(app.save.validate_and_save_reminder(item.clone()).await);

    let fences = app.geofencer.registered();
    assert_eq!(fences.len(), 1);
    assert_eq!(fences[0].id, item.id);
    assert_eq!(fences[0].latitude, 47.6067);
    assert_eq!(fences[0].longitude, -122.3325);

    // Teardown leaves a clean draft for the next entry
    app.save.on_clear();
    let state = app.save.state();
    assert!(state.title.is_none());
    assert!(state.selected_point.is_none());
}

#[tokio::test]
async fn read_fault_reaches_the_list_screen_as_data_not_a_panic() {
    let store = Arc::new(InMemoryReminderStore::new());
    let app = app_with_store(store.clone(), GeofenceSettings::default());
    store.fail_with("Couldn't load reminders");

    let mut events = app.list.take_events();
    app.list.load_reminders().await;

    let state = app.list.state();
    assert!(state.show_no_data);
    assert!(state.reminders.is_empty());
    assert!(!state.show_loading);
    assert_eq!(
        events.try_recv().unwrap(),
        ScreenEvent::ShowSnackbar("Couldn't load reminders".into())
    );
}

#[tokio::test]
async fn configured_radius_flows_from_toml_to_the_fence() {
    let settings = parse_config(
        r#"
        config_version = 1

        [geofence]
        radius_meters = 75.0
        expiration_secs = 3600
        "#,
    )
    .unwrap();

    let app = app_with_store(
        Arc::new(SqliteReminderStore::in_memory().unwrap()),
        settings.geofence,
    );

    let item = ReminderItem::new(
        Some("configured".into()),
        None,
        Some("somewhere".into()),
        Some(10.0),
        Some(20.0),
    );
    assert!(app.save.validate_and_save_reminder(item).await);

    let fences = app.geofencer.registered();
    assert_eq!(fences.len(), 1);
    assert_eq!(fences[0].radius_meters, 75.0);
    assert_eq!(
        fences[0].expiration,
        Some(std::time::Duration::from_secs(3600))
    );
}

#[tokio::test]
async fn reminders_survive_a_reopened_store() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("waymark.db");

    let item = ReminderItem::new(Some("durable".into()), None, None, None, None);
    {
        let app = app_with_store(
            Arc::new(SqliteReminderStore::open(&db_path).unwrap()),
            GeofenceSettings::default(),
        );
        assert!(app.save.validate_and_save_reminder(item.clone()).await);
    }

    // A fresh process opens the same database
    let app = app_with_store(
        Arc::new(SqliteReminderStore::open(&db_path).unwrap()),
        GeofenceSettings::default(),
    );
    let fetched = app.repository.get_reminder(&item.id).await.unwrap();
    assert_eq!(fetched.title.as_deref(), Some("durable"));
}
