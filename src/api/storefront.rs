/// Storefront endpoints (/api/*)
use crate::{
    account::{LoginRequest, LoginResponse, RegisterRequest, UserInfo},
    auth::{AuthContext, OptionalAuthContext},
    context::AppContext,
    error::MarketResult,
    orders::{BuyRequest, Order, OrdersResponse},
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

/// Build storefront routes
pub fn routes() -> Router<AppContext> {
    Router::new()
        .route("/api/user_info", get(user_info))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/logout", post(logout))
        .route("/api/buy", post(buy))
        .route("/api/orders", get(orders))
}

/// Session probe endpoint. Never fails: reports unauthenticated when the
/// token is missing or stale.
async fn user_info(auth: OptionalAuthContext) -> Json<UserInfo> {
    match auth.auth {
        Some(auth) => Json(UserInfo {
            is_authenticated: true,
            username: Some(auth.username),
        }),
        None => Json(UserInfo {
            is_authenticated: false,
            username: None,
        }),
    }
}

/// Registration endpoint
async fn register(
    State(ctx): State<AppContext>,
    Json(req): Json<RegisterRequest>,
) -> MarketResult<(StatusCode, Json<serde_json::Value>)> {
    ctx.account_manager
        .register(&req.username, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({"message": "Registration successful"})),
    ))
}

/// Login endpoint
async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> MarketResult<Json<LoginResponse>> {
    let (user, session) = ctx
        .account_manager
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        username: user.username,
        access_token: session.access_token,
    }))
}

/// Logout endpoint
async fn logout(
    State(ctx): State<AppContext>,
    auth: AuthContext,
) -> MarketResult<Json<serde_json::Value>> {
    ctx.account_manager
        .delete_session(&auth.session.session_id)
        .await?;

    Ok(Json(serde_json::json!({"message": "Logged out"})))
}

/// Purchase endpoint: generates the credential batch and records the order
async fn buy(
    State(ctx): State<AppContext>,
    auth: AuthContext,
    Json(req): Json<BuyRequest>,
) -> MarketResult<Json<Order>> {
    let order = ctx
        .order_manager
        .create_order(&auth.username, &req.product_name)
        .await?;

    Ok(Json(order))
}

/// Order history endpoint
async fn orders(
    State(ctx): State<AppContext>,
    auth: AuthContext,
) -> MarketResult<Json<OrdersResponse>> {
    let orders = ctx.order_manager.list_orders(&auth.username).await?;

    Ok(Json(OrdersResponse { orders }))
}
