//! # Lana API
//!
//! HTTP boundary for Lana Checkout: configuration, error mapping and the
//! axum router over a shared [`BasketStore`](lana_store::BasketStore).
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Lana API Server                                │
//! │                                                                         │
//! │  Client ───► HTTP (8080) ───► routes ───► BasketStore ───► lana-core    │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                             ApiError                                    │
//! │                       {"code", "message"}                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;

pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use routes::{router, AppState};
