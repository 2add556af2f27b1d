//! Price table and best-price computation.
//!
//! Everything in here is a pure projection over the loaded island snapshot:
//! same inputs, same outputs, no state. The UI recomputes on every input
//! change instead of caching.

use super::catalog::{CommodityMeta, CATALOG};
use super::entities::{BestPrices, PostPrice, PriceRow, TradingPost};

/// The subset of the catalog that at least one island actually trades,
/// in catalog order.
pub fn traded_commodities(posts: &[TradingPost]) -> Vec<&'static CommodityMeta> {
    CATALOG
        .iter()
        .filter(|meta| posts.iter().any(|post| post.items.contains_key(meta.key)))
        .collect()
}

/// One row per island, in input order. No filtering: islands that do not
/// trade the commodity still get a row, with both sides absent.
pub fn price_table(posts: &[TradingPost], commodity: &str) -> Vec<PriceRow> {
    posts
        .iter()
        .map(|post| {
            let quote = post.quote(commodity);
            PriceRow {
                island: post.name.clone(),
                buy: quote.and_then(|q| q.buy),
                sell: quote.and_then(|q| q.sell),
            }
        })
        .collect()
}

/// Islands quoting a buy price, cheapest first. The sort is stable, so ties
/// keep input order and the head of the list is the canonical "best buy".
pub fn buy_candidates(posts: &[TradingPost], commodity: &str) -> Vec<PostPrice> {
    let mut candidates: Vec<PostPrice> = posts
        .iter()
        .filter_map(|post| {
            post.quote(commodity).and_then(|q| q.buy).map(|price| PostPrice {
                island: post.name.clone(),
                price,
            })
        })
        .collect();
    candidates.sort_by(|a, b| a.price.total_cmp(&b.price));
    candidates
}

/// Islands quoting a sell price, priciest first. Stable, like `buy_candidates`.
pub fn sell_candidates(posts: &[TradingPost], commodity: &str) -> Vec<PostPrice> {
    let mut candidates: Vec<PostPrice> = posts
        .iter()
        .filter_map(|post| {
            post.quote(commodity).and_then(|q| q.sell).map(|price| PostPrice {
                island: post.name.clone(),
                price,
            })
        })
        .collect();
    candidates.sort_by(|a, b| b.price.total_cmp(&a.price));
    candidates
}

/// Cheapest buy and priciest sell for a commodity. Either side is absent when
/// no island quotes it; ties break to the first island in input order.
pub fn best_prices(posts: &[TradingPost], commodity: &str) -> BestPrices {
    BestPrices {
        best_buy: buy_candidates(posts, commodity).into_iter().next(),
        best_sell: sell_candidates(posts, commodity).into_iter().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::PriceQuote;

    fn post(name: &str, quotes: &[(&str, Option<f64>, Option<f64>)]) -> TradingPost {
        TradingPost {
            name: name.to_string(),
            items: quotes
                .iter()
                .map(|(key, buy, sell)| {
                    (key.to_string(), PriceQuote { buy: *buy, sell: *sell })
                })
                .collect(),
        }
    }

    #[test]
    fn traded_commodities_follow_catalog_order() {
        // Discovery order is kimcuong before ca; catalog order must win.
        let posts = vec![
            post("Mui Ne", &[("kimcuong", Some(90.0), None)]),
            post("Phu Quoc", &[("ca", Some(5.0), Some(4.0))]),
        ];
        let keys: Vec<&str> = traded_commodities(&posts).iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["ca", "kimcuong"]);
    }

    #[test]
    fn traded_commodities_exclude_untouched_goods() {
        let posts = vec![post("Phu Quoc", &[("go", Some(3.0), None)])];
        let keys: Vec<&str> = traded_commodities(&posts).iter().map(|m| m.key).collect();
        assert_eq!(keys, vec!["go"]);
    }

    #[test]
    fn price_table_keeps_input_order_and_absence() {
        let posts = vec![
            post("Con Dao", &[("vang", Some(20.0), None)]),
            post("Ly Son", &[("ca", None, Some(8.0))]),
            post("Cat Ba", &[("vang", None, Some(25.0))]),
        ];
        let rows = price_table(&posts, "vang");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].island, "Con Dao");
        assert_eq!(rows[0].buy, Some(20.0));
        assert_eq!(rows[0].sell, None);
        // Ly Son has no vang entry at all: both sides absent, row still there.
        assert_eq!(rows[1].island, "Ly Son");
        assert_eq!(rows[1].buy, None);
        assert_eq!(rows[1].sell, None);
        assert_eq!(rows[2].sell, Some(25.0));
    }

    #[test]
    fn price_table_distinguishes_zero_from_absent() {
        let posts = vec![post("Free Port", &[("ca", Some(0.0), None)])];
        let rows = price_table(&posts, "ca");
        assert_eq!(rows[0].buy, Some(0.0));
        assert_eq!(rows[0].sell, None);
    }

    #[test]
    fn best_prices_pick_extremes() {
        let posts = vec![
            post("A", &[("ca", Some(9.0), Some(6.0))]),
            post("B", &[("ca", Some(4.0), Some(11.0))]),
            post("C", &[("ca", Some(7.0), Some(10.0))]),
        ];
        let best = best_prices(&posts, "ca");
        let buy = best.best_buy.unwrap();
        let sell = best.best_sell.unwrap();
        assert_eq!(buy.island, "B");
        assert_eq!(buy.price, 4.0);
        assert_eq!(sell.island, "B");
        assert_eq!(sell.price, 11.0);
        // Minimality / maximality against every other quote.
        for candidate in buy_candidates(&posts, "ca") {
            assert!(buy.price <= candidate.price);
        }
        for candidate in sell_candidates(&posts, "ca") {
            assert!(sell.price >= candidate.price);
        }
    }

    #[test]
    fn best_prices_tie_breaks_to_first_island() {
        let posts = vec![
            post("First", &[("da", Some(6.0), Some(9.0))]),
            post("Second", &[("da", Some(6.0), Some(9.0))]),
        ];
        let best = best_prices(&posts, "da");
        assert_eq!(best.best_buy.unwrap().island, "First");
        assert_eq!(best.best_sell.unwrap().island, "First");
    }

    #[test]
    fn best_prices_sides_are_independent() {
        // One island only buys, another only sells.
        let posts = vec![
            post("Buyer", &[("bac", Some(3.0), None)]),
            post("Seller", &[("bac", None, Some(5.0))]),
        ];
        let best = best_prices(&posts, "bac");
        assert_eq!(best.best_buy.unwrap().island, "Buyer");
        assert_eq!(best.best_sell.unwrap().island, "Seller");
    }

    #[test]
    fn best_prices_absent_when_nobody_trades_a_side() {
        let posts = vec![post("A", &[("go", Some(2.0), None)])];
        let best = best_prices(&posts, "go");
        assert!(best.best_buy.is_some());
        assert!(best.best_sell.is_none());

        let nothing = best_prices(&posts, "kimcuong");
        assert!(nothing.best_buy.is_none());
        assert!(nothing.best_sell.is_none());
    }

    #[test]
    fn missing_entry_excluded_from_candidates() {
        let posts = vec![
            post("Quoted", &[("vang", Some(20.0), Some(22.0))]),
            post("Silent", &[("ca", Some(1.0), None)]),
        ];
        assert_eq!(buy_candidates(&posts, "vang").len(), 1);
        assert_eq!(sell_candidates(&posts, "vang").len(), 1);
    }

    #[test]
    fn operations_are_idempotent() {
        let posts = vec![
            post("A", &[("ca", Some(5.0), Some(3.0))]),
            post("B", &[("ca", Some(2.0), Some(9.0))]),
        ];
        assert_eq!(price_table(&posts, "ca"), price_table(&posts, "ca"));
        assert_eq!(best_prices(&posts, "ca"), best_prices(&posts, "ca"));
        assert_eq!(
            traded_commodities(&posts)
                .iter()
                .map(|m| m.key)
                .collect::<Vec<_>>(),
            traded_commodities(&posts)
                .iter()
                .map(|m| m.key)
                .collect::<Vec<_>>()
        );
    }
}
