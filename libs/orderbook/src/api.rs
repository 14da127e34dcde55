//! Orderbook API client.
//!
//! URL layout is `{base}/{chain_id}{path}?{query}`; every request carries a
//! dev-portal bearer token. The client does not retry.

use serde_json::json;
use tracing::info;
use types::Address;
use url::Url;

use codec::LimitOrder;

use crate::connector::HttpConnector;
use crate::error::ApiResult;
use crate::types::{
    ApiConfig, LimitOrderApiItem, OrderFilters, DEV_PORTAL_LIMIT_ORDER_BASE_URL,
};

/// Client for one chain's orderbook
pub struct OrderbookApi<C: HttpConnector> {
    base_url: String,
    chain_id: u64,
    auth_header: String,
    connector: C,
}

impl<C: HttpConnector> OrderbookApi<C> {
    pub fn new(config: ApiConfig, connector: C) -> Self {
        Self {
            base_url: config
                .base_url
                .unwrap_or_else(|| DEV_PORTAL_LIMIT_ORDER_BASE_URL.to_string()),
            chain_id: config.chain_id,
            auth_header: format!("Bearer {}", config.auth_key),
            connector,
        }
    }

    /// Publishes a signed order.
    ///
    /// The payload carries the wire struct, the extension and the EIP-712
    /// order hash; the orderbook re-derives and checks the hash.
    pub async fn submit_order(&self, order: &LimitOrder, signature: &str) -> ApiResult<()> {
        let order_hash = order.get_order_hash(self.chain_id);
        let mut data = serde_json::to_value(order.build())?;
        data["extension"] = json!(order.extension().encode_hex());
        let body = json!({
            "orderHash": order_hash,
            "signature": signature,
            "data": data,
        });

        let url = self.url("", &[])?;
        self.connector
            .post(url.as_str(), body, &self.headers())
            .await?;
        info!(%order_hash, "order submitted");
        Ok(())
    }

    /// Lists orders created by `maker`, newest first by default.
    pub async fn get_orders_by_maker(
        &self,
        maker: &Address,
        filters: &OrderFilters,
    ) -> ApiResult<Vec<LimitOrderApiItem>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(pager) = &filters.pager {
            query.push(("limit", pager.limit().to_string()));
            query.push(("page", pager.page().to_string()));
        }
        if !filters.statuses.is_empty() {
            let statuses: Vec<&str> = filters
                .statuses
                .iter()
                .map(|s| s.as_query_value())
                .collect();
            query.push(("statuses", statuses.join(",")));
        }
        if let Some(asset) = &filters.maker_asset {
            query.push(("makerAsset", asset.clone()));
        }
        if let Some(asset) = &filters.taker_asset {
            query.push(("takerAsset", asset.clone()));
        }
        if let Some(sort) = &filters.sort_by {
            query.push(("sortBy", sort.as_query_value().to_string()));
        }

        let url = self.url(&format!("/address/{maker}"), &query)?;
        let body = self.connector.get(url.as_str(), &self.headers()).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetches a single order; unknown hashes surface as a status error.
    pub async fn get_order_by_hash(&self, hash: &str) -> ApiResult<LimitOrderApiItem> {
        let url = self.url(&format!("/order/{hash}"), &[])?;
        let body = self.connector.get(url.as_str(), &self.headers()).await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Url> {
        let mut url = Url::parse(&format!("{}/{}{}", self.base_url, self.chain_id, path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![("Authorization".to_string(), self.auth_header.clone())]
    }
}
