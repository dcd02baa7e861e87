/// Remote API store
///
/// Delegates persistence to the storefront server: one network round trip
/// per operation. Server-reported errors (`{"error": "..."}` bodies) are
/// surfaced verbatim; transport and decode failures map to the network
/// catch-all.
use crate::{
    account::{LoginResponse, UserInfo},
    error::{ErrorBody, MarketError, MarketResult},
    orders::{Order, OrdersResponse},
    store::{PurchaseFollowUp, Store},
};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response};
use serde_json::json;

pub struct RemoteStore {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Pass 2xx responses through; turn anything else into the
    /// server-reported error message
    async fn check(response: Response) -> MarketResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("HTTP {}", status.as_u16()));

        Err(MarketError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl Store for RemoteStore {
    async fn register_user(&self, username: &str, password: &str) -> MarketResult<()> {
        let response = self
            .http
            .post(self.url("/api/register"))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    async fn login(&mut self, username: &str, password: &str) -> MarketResult<String> {
        let response = self
            .http
            .post(self.url("/api/login"))
            .json(&json!({"username": username, "password": password}))
            .send()
            .await?;

        let body: LoginResponse = Self::check(response).await?.json().await?;
        self.token = Some(body.access_token);
        Ok(body.username)
    }

    async fn current_user(&self) -> MarketResult<Option<String>> {
        if self.token.is_none() {
            return Ok(None);
        }

        let response = self
            .authorize(self.http.get(self.url("/api/user_info")))
            .send()
            .await?;

        let info: UserInfo = Self::check(response).await?.json().await?;
        Ok(if info.is_authenticated {
            info.username
        } else {
            None
        })
    }

    async fn logout(&mut self) -> MarketResult<()> {
        let response = self
            .authorize(self.http.post(self.url("/api/logout")))
            .send()
            .await?;

        Self::check(response).await?;
        self.token = None;
        Ok(())
    }

    async fn list_orders(&self, _username: &str) -> MarketResult<Vec<Order>> {
        // The server scopes the listing to the session owner
        let response = self
            .authorize(self.http.get(self.url("/api/orders")))
            .send()
            .await?;

        let body: OrdersResponse = Self::check(response).await?.json().await?;
        Ok(body.orders)
    }

    async fn create_order(&self, _username: &str, product_name: &str) -> MarketResult<Order> {
        let response = self
            .authorize(self.http.post(self.url("/api/buy")))
            .json(&json!({"product_name": product_name}))
            .send()
            .await?;

        let order: Order = Self::check(response).await?.json().await?;
        Ok(order)
    }

    fn after_purchase(&self) -> PurchaseFollowUp {
        PurchaseFollowUp::GoToHistory
    }
}
