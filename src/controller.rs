/// Session/UI controller
///
/// One state machine over the three visible sections, generic over the
/// persistence backend so the local and remote variants share it. Event
/// handlers never fail: every error lands in the transient notice and the
/// controller stays in a stable visible state.
use crate::orders::Order;
use crate::store::{PurchaseFollowUp, Store};

/// Mutually exclusive visible sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Auth,
    History,
}

/// Sub-state while the auth section is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPane {
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient one-line notification. Each new notice replaces the previous
/// one; dismissal timing is left to the presentation layer.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

/// Which navigation links and greeting are visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub show_login: bool,
    pub show_register: bool,
    pub show_history: bool,
    pub show_logout: bool,
    pub greeting: Option<String>,
}

pub struct Controller<S: Store> {
    store: S,
    current_user: Option<String>,
    section: Section,
    auth_pane: AuthPane,
    notice: Option<Notice>,
    orders: Vec<Order>,
}

impl<S: Store> Controller<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            current_user: None,
            section: Section::Home,
            auth_pane: AuthPane::Login,
            notice: None,
            orders: Vec::new(),
        }
    }

    /// Probe the session once at startup
    pub async fn init(&mut self) {
        match self.store.current_user().await {
            Ok(user) => self.current_user = user,
            Err(e) => self.show_error(e.to_string()),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn auth_pane(&self) -> AuthPane {
        self.auth_pane
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Loaded order history (populated by `nav_history`)
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Link/greeting visibility derived from authentication status
    pub fn nav_state(&self) -> NavState {
        let authed = self.is_authenticated();
        NavState {
            show_login: !authed,
            show_register: !authed,
            show_history: authed,
            show_logout: authed,
            greeting: self.current_user.as_ref().map(|u| format!("Hi, {}", u)),
        }
    }

    pub fn nav_home(&mut self) {
        self.section = Section::Home;
    }

    pub fn nav_login(&mut self) {
        self.section = Section::Auth;
        self.auth_pane = AuthPane::Login;
    }

    pub fn nav_register(&mut self) {
        self.section = Section::Auth;
        self.auth_pane = AuthPane::Register;
    }

    /// Flip the auth sub-pane without leaving the auth section
    pub fn switch_to_login(&mut self) {
        self.auth_pane = AuthPane::Login;
    }

    pub fn switch_to_register(&mut self) {
        self.auth_pane = AuthPane::Register;
    }

    /// Open the order history. Fails closed: a no-op when unauthenticated.
    pub async fn nav_history(&mut self) {
        let user = match &self.current_user {
            Some(user) => user.clone(),
            None => return,
        };

        match self.store.list_orders(&user).await {
            Ok(orders) => {
                self.orders = orders;
                self.section = Section::History;
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    pub async fn submit_login(&mut self, username: &str, password: &str) {
        match self.store.login(username, password).await {
            Ok(user) => {
                self.current_user = Some(user);
                self.section = Section::Home;
                self.show_success("Login successful");
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    pub async fn submit_register(&mut self, username: &str, password: &str) {
        match self.store.register_user(username, password).await {
            Ok(()) => {
                self.auth_pane = AuthPane::Login;
                self.show_success("Registration successful! Please login.");
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    /// Sign out and force the home section
    pub async fn nav_logout(&mut self) {
        match self.store.logout().await {
            Ok(()) => self.show_success("Logged out successfully"),
            Err(e) => self.show_error(e.to_string()),
        }

        // Local state is cleared even if the backend call failed
        self.current_user = None;
        self.orders.clear();
        self.section = Section::Home;
    }

    /// Buy a product. Unauthenticated clicks never create an order: they
    /// route to the login pane with a rejection notice.
    pub async fn buy(&mut self, product_name: &str) -> Option<Order> {
        let user = match &self.current_user {
            Some(user) => user.clone(),
            None => {
                self.show_error("Please login to purchase");
                self.section = Section::Auth;
                self.auth_pane = AuthPane::Login;
                return None;
            }
        };

        match self.store.create_order(&user, product_name).await {
            Ok(order) => {
                self.show_success("Purchase successful! Check Order History.");
                if self.store.after_purchase() == PurchaseFollowUp::GoToHistory {
                    self.nav_history().await;
                }
                Some(order)
            }
            Err(e) => {
                self.show_error(e.to_string());
                None
            }
        }
    }

    fn show_success(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            kind: NoticeKind::Success,
        });
    }

    fn show_error(&mut self, message: impl Into<String>) {
        self.notice = Some(Notice {
            message: message.into(),
            kind: NoticeKind::Error,
        });
    }
}
