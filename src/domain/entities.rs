use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One side-pair of prices an island quotes for a commodity.
///
/// `None` means the island does not trade that side at all, which is distinct
/// from a quoted price of zero. Prices are validated at load time to be finite
/// and non-negative, so the engine never has to re-check them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Cost to buy one unit at this island (island → boat).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy: Option<f64>,
    /// Amount received selling one unit at this island (boat → island).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell: Option<f64>,
}

/// An island with its commodity price map.
///
/// Loaded once from the dataset and treated as read-only for the rest of the
/// session. The name doubles as the island's identifier when routes match
/// origin against destination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradingPost {
    pub name: String,
    /// Commodity key → quote. Keys outside the catalog are tolerated and
    /// simply never surface, since the catalog drives every listing.
    #[serde(default)]
    pub items: HashMap<String, PriceQuote>,
}

impl TradingPost {
    pub fn quote(&self, commodity: &str) -> Option<&PriceQuote> {
        self.items.get(commodity)
    }
}

/// One row of the per-island price table for a commodity.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceRow {
    pub island: String,
    pub buy: Option<f64>,
    pub sell: Option<f64>,
}

/// An island paired with one side's price. Best-price results and route
/// candidates both use this shape.
#[derive(Clone, Debug, PartialEq)]
pub struct PostPrice {
    pub island: String,
    pub price: f64,
}

/// Cheapest buy and priciest sell for a commodity. Either side is absent when
/// no island quotes that side; absence never means "price zero".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BestPrices {
    pub best_buy: Option<PostPrice>,
    pub best_sell: Option<PostPrice>,
}

/// A buy-here-sell-there pairing. Derived on every query, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub buy_price: f64,
    pub sell_price: f64,
    /// `sell_price - buy_price`; strictly positive by construction.
    pub profit: f64,
}
