//! Domain logic for island trading lives here.

pub mod app_state;
pub mod catalog;
pub mod entities;
pub mod pricing;
pub mod route;

#[allow(unused_imports)]
pub use app_state::{AppState, PersistedState};
#[allow(unused_imports)]
pub use catalog::{commodity_meta, CommodityMeta, CATALOG};
#[allow(unused_imports)]
pub use entities::{BestPrices, PostPrice, PriceQuote, PriceRow, Route, TradingPost};
#[allow(unused_imports)]
pub use pricing::{best_prices, buy_candidates, price_table, sell_candidates, traded_commodities};
#[allow(unused_imports)]
pub use route::{parse_min_profit, profitable_routes};
