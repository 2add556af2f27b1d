pub mod commodity_select;
pub mod kpi_card;
pub mod legend;
pub mod price_table;
pub mod route_card;
pub mod toast;

pub use commodity_select::CommoditySelect;
pub use kpi_card::KpiCard;
pub use legend::Legend;
pub use price_table::PriceTable;
pub use route_card::RouteCard;

/// Render a price without a trailing ".00" when it is a whole number.
pub fn format_price(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_price;

    #[test]
    fn whole_prices_drop_the_fraction() {
        assert_eq!(format_price(12.0), "12");
        assert_eq!(format_price(0.0), "0");
    }

    #[test]
    fn fractional_prices_keep_two_places() {
        assert_eq!(format_price(7.5), "7.50");
        assert_eq!(format_price(3.126), "3.13");
    }

    #[test]
    fn exact_half_cents_round_to_even() {
        // 3.125 and 3.375 are exactly representable; {:.2} rounds the tie
        // to the even hundredth.
        assert_eq!(format_price(3.125), "3.12");
        assert_eq!(format_price(3.375), "3.38");
    }
}
