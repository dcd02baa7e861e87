/// End-to-end remote variant: a real listener backing a RemoteStore-driven
/// controller
use g4market::{
    config::{LoggingConfig, MarketConfig, ServiceConfig, SessionConfig, StorageConfig},
    context::AppContext,
    controller::{AuthPane, Controller, NoticeKind, Section},
    server,
    store::RemoteStore,
};
use std::path::Path;
use tempfile::TempDir;

fn test_config(dir: &Path) -> MarketConfig {
    MarketConfig {
        service: ServiceConfig {
            hostname: "127.0.0.1".to_string(),
            port: 0,
        },
        storage: StorageConfig {
            data_directory: dir.to_path_buf(),
            market_db: dir.join("market.sqlite"),
        },
        sessions: SessionConfig { ttl_hours: 24 },
        logging: LoggingConfig {
            level: "info".to_string(),
        },
    }
}

async fn spawn_server() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let ctx = AppContext::new(test_config(dir.path())).await.unwrap();
    let app = server::build_router(ctx);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (dir, format!("http://{}", addr))
}

#[tokio::test]
async fn remote_end_to_end_purchase_flow() {
    let (_dir, base_url) = spawn_server().await;

    let mut controller = Controller::new(RemoteStore::new(base_url.as_str()));
    controller.init().await;
    assert!(!controller.is_authenticated());

    controller.submit_register("alice", "pw1").await;
    assert_eq!(controller.notice().unwrap().kind, NoticeKind::Success);

    controller.submit_login("alice", "pw1").await;
    assert_eq!(controller.current_user(), Some("alice"));

    let order = controller.buy("Starter Pack (1)").await.unwrap();
    assert_eq!(order.accounts.len(), 1);
    // Remote variant navigates to the history after a purchase
    assert_eq!(controller.section(), Section::History);
    assert_eq!(controller.orders().len(), 1);
    assert_eq!(controller.orders()[0].product_name, "Starter Pack (1)");
}

#[tokio::test]
async fn remote_errors_surface_server_messages_verbatim() {
    let (_dir, base_url) = spawn_server().await;

    let mut controller = Controller::new(RemoteStore::new(base_url.as_str()));
    controller.init().await;

    controller.submit_register("alice", "pw1").await;
    controller.submit_register("alice", "pw2").await;
    let notice = controller.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Username already exists");

    controller.submit_login("alice", "wrong").await;
    let notice = controller.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Invalid username or password");
    assert!(!controller.is_authenticated());
}

#[tokio::test]
async fn remote_unauthenticated_buy_routes_to_login() {
    let (_dir, base_url) = spawn_server().await;

    let mut controller = Controller::new(RemoteStore::new(base_url.as_str()));
    controller.init().await;

    assert!(controller.buy("Mega Combo").await.is_none());
    assert_eq!(controller.section(), Section::Auth);
    assert_eq!(controller.auth_pane(), AuthPane::Login);
}

#[tokio::test]
async fn remote_logout_clears_the_session() {
    let (_dir, base_url) = spawn_server().await;

    let mut controller = Controller::new(RemoteStore::new(base_url.as_str()));
    controller.init().await;
    controller.submit_register("alice", "pw1").await;
    controller.submit_login("alice", "pw1").await;
    controller.buy("Combo 5 Pack").await.unwrap();

    controller.nav_logout().await;
    assert!(!controller.is_authenticated());
    assert_eq!(controller.section(), Section::Home);

    // History is gated again
    controller.nav_history().await;
    assert_eq!(controller.section(), Section::Home);
}
