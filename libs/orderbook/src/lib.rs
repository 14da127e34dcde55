//! # Orderbook API Client
//!
//! ## Purpose
//!
//! Publishes signed limit orders to the off-chain orderbook and queries the
//! resting set. Transport goes through the [`HttpConnector`] trait so tests
//! run against a stub; [`ReqwestConnector`] is the production connector.
//!
//! ## What This Crate Does NOT Contain
//! - Order assembly or hashing (belongs in the codec crate)
//! - Retry or backoff policy (callers own that)
//! - Wallet key management

pub mod api;
pub mod connector;
pub mod error;
pub mod types;

pub use api::OrderbookApi;
pub use connector::{HttpConnector, ReqwestConnector};
pub use error::{ApiError, ApiResult};
pub use types::{
    ApiConfig, LimitOrderApiItem, OrderFilters, Pager, SortKey, StatusKey,
    DEV_PORTAL_LIMIT_ORDER_BASE_URL,
};
