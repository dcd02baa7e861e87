/// Controller state machine tests over the local blob store
use g4market::controller::{AuthPane, Controller, NoticeKind, Section};
use g4market::store::LocalStore;
use tempfile::TempDir;

async fn controller() -> (TempDir, Controller<LocalStore>) {
    let dir = TempDir::new().unwrap();
    let store = LocalStore::open(dir.path()).await.unwrap();
    let mut controller = Controller::new(store);
    controller.init().await;
    (dir, controller)
}

#[tokio::test]
async fn starts_logged_out_on_home() {
    let (_dir, controller) = controller().await;
    assert_eq!(controller.section(), Section::Home);
    assert!(!controller.is_authenticated());

    let nav = controller.nav_state();
    assert!(nav.show_login && nav.show_register);
    assert!(!nav.show_history && !nav.show_logout);
    assert!(nav.greeting.is_none());
}

#[tokio::test]
async fn navigation_between_sections() {
    let (_dir, mut controller) = controller().await;

    controller.nav_register();
    assert_eq!(controller.section(), Section::Auth);
    assert_eq!(controller.auth_pane(), AuthPane::Register);

    controller.switch_to_login();
    assert_eq!(controller.section(), Section::Auth);
    assert_eq!(controller.auth_pane(), AuthPane::Login);

    controller.nav_home();
    assert_eq!(controller.section(), Section::Home);
}

#[tokio::test]
async fn register_then_login() {
    let (_dir, mut controller) = controller().await;

    controller.nav_register();
    controller.submit_register("alice", "pw1").await;
    // Successful registration flips to the login pane
    assert_eq!(controller.auth_pane(), AuthPane::Login);
    assert_eq!(controller.notice().unwrap().kind, NoticeKind::Success);

    controller.submit_login("alice", "pw1").await;
    assert!(controller.is_authenticated());
    assert_eq!(controller.current_user(), Some("alice"));
    assert_eq!(controller.section(), Section::Home);

    let nav = controller.nav_state();
    assert!(nav.show_history && nav.show_logout);
    assert_eq!(nav.greeting.as_deref(), Some("Hi, alice"));
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let (_dir, mut controller) = controller().await;
    controller.submit_register("alice", "pw1").await;
    controller.submit_register("alice", "pw2").await;

    let notice = controller.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Username already exists");

    controller.dismiss_notice();
    assert!(controller.notice().is_none());
}

#[tokio::test]
async fn bad_login_keeps_user_logged_out() {
    let (_dir, mut controller) = controller().await;
    controller.submit_register("alice", "pw1").await;
    controller.submit_login("alice", "wrong").await;

    assert!(!controller.is_authenticated());
    let notice = controller.notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Invalid username or password");
}

#[tokio::test]
async fn unauthenticated_buy_routes_to_login() {
    let (_dir, mut controller) = controller().await;

    let order = controller.buy("Starter Pack (1)").await;
    assert!(order.is_none());
    assert_eq!(controller.section(), Section::Auth);
    assert_eq!(controller.auth_pane(), AuthPane::Login);
    assert_eq!(controller.notice().unwrap().kind, NoticeKind::Error);

    // No order was ever created
    controller.submit_register("alice", "pw1").await;
    controller.submit_login("alice", "pw1").await;
    controller.nav_history().await;
    assert!(controller.orders().is_empty());
}

#[tokio::test]
async fn history_nav_is_a_noop_when_logged_out() {
    let (_dir, mut controller) = controller().await;
    controller.nav_history().await;
    assert_eq!(controller.section(), Section::Home);
}

#[tokio::test]
async fn logout_forces_home_and_gates_history() {
    let (_dir, mut controller) = controller().await;
    controller.submit_register("alice", "pw1").await;
    controller.submit_login("alice", "pw1").await;
    controller.buy("Mega Combo").await;
    controller.nav_history().await;
    assert_eq!(controller.section(), Section::History);

    controller.nav_logout().await;
    assert!(!controller.is_authenticated());
    assert_eq!(controller.section(), Section::Home);
    assert!(controller.orders().is_empty());

    // History stays inaccessible until re-authentication
    controller.nav_history().await;
    assert_eq!(controller.section(), Section::Home);
}

#[tokio::test]
async fn end_to_end_purchase_flow() {
    let (_dir, mut controller) = controller().await;

    controller.submit_register("alice", "pw1").await;
    assert_eq!(controller.notice().unwrap().kind, NoticeKind::Success);

    controller.submit_login("alice", "pw1").await;
    assert_eq!(controller.current_user(), Some("alice"));

    let order = controller.buy("Starter Pack (1)").await.unwrap();
    assert_eq!(order.accounts.len(), 1);
    assert_eq!(order.username, "alice");
    assert_eq!(controller.notice().unwrap().kind, NoticeKind::Success);
    // Local variant stays put after a purchase
    assert_eq!(controller.section(), Section::Home);

    controller.nav_history().await;
    assert_eq!(controller.section(), Section::History);
    assert_eq!(controller.orders().len(), 1);
    assert_eq!(controller.orders()[0].product_name, "Starter Pack (1)");
    assert_eq!(controller.orders()[0].accounts.len(), 1);
}

#[tokio::test]
async fn session_survives_a_new_controller() {
    let dir = TempDir::new().unwrap();

    {
        let store = LocalStore::open(dir.path()).await.unwrap();
        let mut controller = Controller::new(store);
        controller.init().await;
        controller.submit_register("alice", "pw1").await;
        controller.submit_login("alice", "pw1").await;
    }

    let store = LocalStore::open(dir.path()).await.unwrap();
    let mut controller = Controller::new(store);
    controller.init().await;
    assert_eq!(controller.current_user(), Some("alice"));
}
