pub mod market;
pub mod routes;

pub use market::MarketPage;
pub use routes::RoutesPage;
