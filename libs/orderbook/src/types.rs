//! Request and response types for the orderbook API.

use serde::Deserialize;
use types::LimitOrderV4Struct;

use crate::error::{ApiError, ApiResult};

/// Default dev-portal endpoint; overridable per [`ApiConfig`]
pub const DEV_PORTAL_LIMIT_ORDER_BASE_URL: &str = "https://api.1inch.dev/orderbook/v4.0";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Dev-portal bearer token
    pub auth_key: String,
    pub chain_id: u64,
    /// Overrides [`DEV_PORTAL_LIMIT_ORDER_BASE_URL`] when set
    pub base_url: Option<String>,
}

/// Pagination window; both fields must be positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    limit: u32,
    page: u32,
}

impl Pager {
    pub fn new(limit: u32, page: u32) -> ApiResult<Self> {
        if limit == 0 {
            return Err(ApiError::Pagination { what: "limit" });
        }
        if page == 0 {
            return Err(ApiError::Pagination { what: "page" });
        }
        Ok(Self { limit, page })
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self { limit: 100, page: 1 }
    }
}

/// Order status buckets the API can filter on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKey {
    Valid,
    TemporarilyInvalid,
    Invalid,
}

impl StatusKey {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::Valid => "1",
            Self::TemporarilyInvalid => "2",
            Self::Invalid => "3",
        }
    }
}

/// Sort orders the API supports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreateDateTime,
    TakerRate,
    MakerRate,
    MakerAmount,
    TakerAmount,
}

impl SortKey {
    pub fn as_query_value(&self) -> &'static str {
        match self {
            Self::CreateDateTime => "createDateTime",
            Self::TakerRate => "takerRate",
            Self::MakerRate => "makerRate",
            Self::MakerAmount => "makerAmount",
            Self::TakerAmount => "takerAmount",
        }
    }
}

/// Filters for the orders-by-maker listing
#[derive(Debug, Clone, Default)]
pub struct OrderFilters {
    pub pager: Option<Pager>,
    pub statuses: Vec<StatusKey>,
    pub maker_asset: Option<String>,
    pub taker_asset: Option<String>,
    pub sort_by: Option<SortKey>,
}

/// One order as the orderbook returns it
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrderApiItem {
    pub signature: String,
    pub order_hash: String,
    pub create_date_time: String,
    pub remaining_maker_amount: String,
    pub maker_balance: String,
    pub maker_allowance: String,
    pub data: LimitOrderV4Struct,
    pub maker_rate: String,
    pub taker_rate: String,
    pub is_maker_contract: bool,
    #[serde(default)]
    pub order_invalid_reason: Option<Vec<String>>,
}
