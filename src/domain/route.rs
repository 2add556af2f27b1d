//! Profitable route enumeration.

use super::entities::{Route, TradingPost};
use super::pricing::{buy_candidates, sell_candidates};

/// All profitable buy-at-origin-sell-at-destination routes for a commodity.
///
/// Origins iterate cheapest-buy first, destinations priciest-sell first, and
/// the final stable sort is by profit descending only: equal-profit routes
/// keep the enumeration order (lower buy, then higher sell, earlier) without
/// a secondary sort key.
///
/// A route qualifies when origin and destination differ by name and
/// `profit > 0 && profit >= min_profit`. The positivity check is independent
/// of the threshold: a threshold of 0 still drops break-even pairs.
pub fn profitable_routes(posts: &[TradingPost], commodity: &str, min_profit: f64) -> Vec<Route> {
    let buys = buy_candidates(posts, commodity);
    let sells = sell_candidates(posts, commodity);

    let mut routes = Vec::new();
    for buy in &buys {
        for sell in &sells {
            if buy.island == sell.island {
                continue;
            }
            let profit = sell.price - buy.price;
            if profit <= 0.0 || profit < min_profit {
                continue;
            }
            routes.push(Route {
                origin: buy.island.clone(),
                destination: sell.island.clone(),
                buy_price: buy.price,
                sell_price: sell.price,
                profit,
            });
        }
    }

    routes.sort_by(|a, b| b.profit.total_cmp(&a.profit));
    routes
}

/// Threshold parsing for the minimum-profit input: non-numeric, non-finite
/// and negative values all mean "no threshold", i.e. 0.
pub fn parse_min_profit(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}
