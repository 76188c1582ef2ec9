use luna::config::{Config, StoreConfig};
use luna::core::context::AppContext;
use luna::core::dispatch::router;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tempfile::TempDir;

fn test_context() -> (Arc<AppContext>, TempDir) {
    let dir = TempDir::new().unwrap();
    let config = Config {
        stores: StoreConfig {
            profiles_path: dir.path().join("connections.json").display().to_string(),
            snippets_path: dir.path().join("snippets.json").display().to_string(),
        },
        ..Config::default()
    };
    let (ctx, _rx) = AppContext::new(config);
    (ctx, dir)
}

#[tokio::test]
async fn test_entityc_persists_a_profile() {
    let (ctx, _dir) = test_context();
    router::dispatch(
        &ctx,
        "luna entityc username:admin password:secret database:jpa",
    )
    .await;
    let profiles = ctx.profiles.load().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, "Person1");
    assert_eq!(profiles[0].username, "admin");
    assert_eq!(profiles[0].database, "jpa");
}

#[tokio::test]
async fn test_entityc_works_without_a_connection() {
    let (ctx, _dir) = test_context();
    router::dispatch(
        &ctx,
        "luna entityc username:u password:p database:d",
    )
    .await;
    assert_eq!(ctx.profiles.load().unwrap().len(), 1);
}

#[tokio::test]
async fn test_entityc_with_quoted_values() {
    let (ctx, _dir) = test_context();
    router::dispatch(
        &ctx,
        "luna entityc username:\"admin\" password:\"secret\" database:\"jpa\"",
    )
    .await;
    let profiles = ctx.profiles.load().unwrap();
    assert_eq!(profiles[0].username, "admin");
    assert_eq!(profiles[0].password, "secret");
}

#[tokio::test]
async fn test_snippetc_captures_the_command_to_end_of_line() {
    let (ctx, _dir) = test_context();
    router::dispatch(
        &ctx,
        "luna snippetc name:all-users command:luna select-from users",
    )
    .await;
    let snippets = ctx.snippets.load().unwrap();
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0].key, "all-users");
    assert_eq!(snippets[0].value, "luna select-from users");
}

#[tokio::test]
async fn test_snippetc_without_command_saves_nothing() {
    let (ctx, _dir) = test_context();
    router::dispatch(&ctx, "luna snippetc name:broken").await;
    assert!(ctx.snippets.load().unwrap().is_empty());
}

#[tokio::test]
async fn test_schedule_with_invalid_unit_queues_nothing() {
    let (ctx, mut rx) = {
        let dir = TempDir::new().unwrap();
        let config = Config {
            stores: StoreConfig {
                profiles_path: dir.path().join("c.json").display().to_string(),
                snippets_path: dir.path().join("s.json").display().to_string(),
            },
            ..Config::default()
        };
        AppContext::new(config)
    };
    router::dispatch(&ctx, "luna schedule command:history delay:1 unit:9").await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_schedule_queues_after_the_delay() {
    let (ctx, mut rx) = {
        let dir = TempDir::new().unwrap();
        let config = Config {
            stores: StoreConfig {
                profiles_path: dir.path().join("c.json").display().to_string(),
                snippets_path: dir.path().join("s.json").display().to_string(),
            },
            ..Config::default()
        };
        AppContext::new(config)
    };
    router::dispatch(&ctx, "luna schedule command:history delay:5 unit:1").await;
    tokio::time::sleep(std::time::Duration::from_secs(6)).await;
    let scheduled = rx.recv().await.unwrap();
    assert_eq!(scheduled.command, "history");
    assert_eq!(scheduled.delay, 5);
    assert_eq!(scheduled.unit, 1);
    assert!(scheduled.submitted_at <= chrono::Utc::now());
}

#[tokio::test]
async fn test_port_verb_updates_the_connect_port() {
    let (ctx, _dir) = test_context();
    router::dispatch(&ctx, "luna port 5433").await;
    assert_eq!(ctx.current_port.load(Ordering::Relaxed), 5433);
    router::dispatch(&ctx, "luna port port:6000").await;
    assert_eq!(ctx.current_port.load(Ordering::Relaxed), 6000);
}

#[tokio::test]
async fn test_privileged_ports_are_rejected() {
    let (ctx, _dir) = test_context();
    router::dispatch(&ctx, "luna port 80").await;
    assert_eq!(ctx.current_port.load(Ordering::Relaxed), 5432);
}

#[tokio::test]
async fn test_unknown_verb_without_session_prints_and_continues() {
    let (ctx, _dir) = test_context();
    // Must not panic or touch the stores.
    router::dispatch(&ctx, "luna frobnicate").await;
    assert!(ctx.profiles.load().unwrap().is_empty());
}

#[tokio::test]
async fn test_run_with_missing_file_reports_not_found() {
    let (ctx, _dir) = test_context();
    // The not-found diagnostic fires before the session gate.
    router::dispatch(&ctx, "luna run filepath:/no/such/file.sql").await;
}
