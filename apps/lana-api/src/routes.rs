//! # Basket Routes
//!
//! JSON endpoints over the basket store.
//!
//! ## Endpoints
//! ```text
//! ┌────────┬──────────────────────────┬──────────────────────────────────────┐
//! │ Verb   │ Path                     │ Success                              │
//! ├────────┼──────────────────────────┼──────────────────────────────────────┤
//! │ GET    │ /api/v1/basket/          │ 200 ["id", ...]                      │
//! │ POST   │ /api/v1/basket/          │ 201 {"id"} + Location                │
//! │ GET    │ /api/v1/basket/{id}      │ 200 {"id","items","amount",...}      │
//! │ DELETE │ /api/v1/basket/{id}      │ 204                                  │
//! │ POST   │ /api/v1/basket/{id}      │ 201 {"count"} new line, 200 existing │
//! │ GET    │ /health                  │ 200 OK                               │
//! └────────┴──────────────────────────┴──────────────────────────────────────┘
//! ```

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use lana_core::{Discount, ProductItem};
use lana_store::BasketStore;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiResult;

/// Prefix shared by every basket route.
pub const BASKET_PATH: &str = "/api/v1/basket";

// =============================================================================
// State & Router
// =============================================================================

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Arc<BasketStore>,
}

impl AppState {
    pub fn new(store: Arc<BasketStore>) -> Self {
        AppState { store }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let collection = get(list_baskets).post(create_basket);
    let member = get(get_basket).post(add_item).delete(delete_basket);

    Router::new()
        .route(BASKET_PATH, collection.clone())
        .route(&format!("{BASKET_PATH}/"), collection)
        .route(&format!("{BASKET_PATH}/{{id}}"), member)
        .route("/health", get(health_handler))
        .with_state(state)
}

// =============================================================================
// Response Bodies
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedBasket {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItemCount {
    pub count: i64,
}

/// Discount line with the amount in major units.
#[derive(Debug, Serialize, Deserialize)]
pub struct DiscountView {
    pub description: String,
    pub amount: f64,
}

impl From<Discount> for DiscountView {
    fn from(discount: Discount) -> Self {
        DiscountView {
            description: discount.description,
            amount: discount.amount.to_major_units(),
        }
    }
}

/// Full basket body. `amount` is the payable total in major units.
#[derive(Debug, Serialize, Deserialize)]
pub struct BasketView {
    pub id: String,
    pub items: Vec<ProductItem>,
    pub amount: f64,
    pub discounts: Vec<DiscountView>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// Every basket id. No pagination.
async fn list_baskets(State(state): State<AppState>) -> Json<Vec<String>> {
    let ids = state
        .store
        .list()
        .iter()
        .map(|basket| basket.id().to_string())
        .collect();
    Json(ids)
}

async fn create_basket(State(state): State<AppState>) -> impl IntoResponse {
    let basket = state.store.create();
    let location = format!("{BASKET_PATH}/{}", basket.id());

    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(CreatedBasket {
            id: basket.id().to_string(),
        }),
    )
}

async fn get_basket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<BasketView>> {
    let snapshot = state.store.get(&id)?.snapshot()?;

    Ok(Json(BasketView {
        id: snapshot.id,
        items: snapshot.items,
        amount: snapshot.totals.total.to_major_units(),
        discounts: snapshot
            .totals
            .discounts
            .into_iter()
            .map(DiscountView::from)
            .collect(),
    }))
}

async fn delete_basket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.store.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Adds units of a product. Answers 201 when the resulting count equals the
/// requested one (the line is new), 200 otherwise.
async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductItem>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ItemCount>)> {
    let basket = state.store.get(&id)?;
    let Json(item) = payload?;

    let count = basket.add_item(&item)?;
    let status = if count == item.count {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    debug!(basket_id = %id, product = %item.product, count, %status, "Add item answered");
    Ok((status, Json(ItemCount { count })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use axum::response::Response;
    use lana_core::{Catalog, Promotion, PEN, TSHIRT};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> (Router, Arc<BasketStore>) {
        let store = BasketStore::new(Arc::new(Catalog::lana()));
        (router(AppState::new(Arc::clone(&store))), store)
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let response = send(&app, "GET", "/health", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_create_basket() {
        let (app, store) = app();
        let response = send(&app, "POST", "/api/v1/basket/", None).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let location = response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string();
        let body = json_body(response).await;
        let id = body["id"].as_str().unwrap();

        assert_eq!(location, format!("/api/v1/basket/{id}"));
        assert!(store.get(id).is_ok());
    }

    #[tokio::test]
    async fn test_get_empty_basket() {
        let (app, store) = app();
        let basket = store.create();

        let response = send(&app, "GET", &format!("/api/v1/basket/{}", basket.id()), None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"id": basket.id(), "items": [], "amount": 0.0, "discounts": []})
        );
    }

    #[tokio::test]
    async fn test_get_basket_with_discount() {
        let (app, store) = app();
        let basket = store.create();
        basket.add_item(&ProductItem::new(TSHIRT, 3)).unwrap();

        let response = send(&app, "GET", &format!("/api/v1/basket/{}", basket.id()), None).await;
        let body = json_body(response).await;

        assert_eq!(body["amount"], json!(45.0));
        assert_eq!(body["items"], json!([{"product": "TSHIRT", "count": 3}]));
        assert_eq!(body["discounts"][0]["amount"], json!(15.0));
    }

    #[tokio::test]
    async fn test_get_missing_basket() {
        let (app, _) = app();
        let response = send(&app, "GET", "/api/v1/basket/123", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"code": "NOT_FOUND", "message": "Basket not found"})
        );
    }

    #[tokio::test]
    async fn test_list_baskets() {
        let (app, store) = app();
        let first = store.create();
        let second = store.create();

        let response = send(&app, "GET", "/api/v1/basket/", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let mut ids: Vec<String> = serde_json::from_value(body).unwrap();
        ids.sort();
        let mut expected = vec![first.id().to_string(), second.id().to_string()];
        expected.sort();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_delete_basket() {
        let (app, store) = app();
        let basket = store.create();
        let uri = format!("/api/v1/basket/{}", basket.id());

        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(store.is_empty());

        let response = send(&app, "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_item_created_then_ok() {
        let (app, store) = app();
        let basket = store.create();
        let uri = format!("/api/v1/basket/{}", basket.id());

        let response = send(&app, "POST", &uri, Some(json!({"product": PEN, "count": 2}))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(json_body(response).await, json!({"count": 2}));

        let response = send(&app, "POST", &uri, Some(json!({"product": PEN, "count": 3}))).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({"count": 5}));
    }

    #[tokio::test]
    async fn test_add_invalid_product() {
        let (app, store) = app();
        let basket = store.create();
        let uri = format!("/api/v1/basket/{}", basket.id());

        let response = send(
            &app,
            "POST",
            &uri,
            Some(json!({"product": "Rocket Fuel", "count": 1})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({"code": "VALIDATION_ERROR", "message": "Invalid product"})
        );
        assert!(basket.items().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_negative_count() {
        let (app, store) = app();
        let basket = store.create();
        let uri = format!("/api/v1/basket/{}", basket.id());

        let response = send(&app, "POST", &uri, Some(json!({"product": PEN, "count": -1}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_add_malformed_body() {
        let (app, store) = app();
        let basket = store.create();
        let uri = format!("/api/v1/basket/{}", basket.id());

        let request = Request::builder()
            .method("POST")
            .uri(&uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"product\": "))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = send(&app, "POST", &uri, Some(json!({"count": "two"}))).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_add_to_missing_basket() {
        let (app, _) = app();
        let response = send(
            &app,
            "POST",
            "/api/v1/basket/123",
            Some(json!({"product": PEN, "count": 1})),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_failing_promotion_is_internal_error() {
        let store = BasketStore::with_promotions(
            Arc::new(Catalog::lana()),
            vec![Promotion::buy_x_get_y_free(PEN, 0, 1)],
        );
        let app = router(AppState::new(Arc::clone(&store)));
        let basket = store.create();

        let response = send(&app, "GET", &format!("/api/v1/basket/{}", basket.id()), None).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json_body(response).await["code"], json!("INTERNAL"));
    }
}
