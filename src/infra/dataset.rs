//! Loading and validating the island dataset.
//!
//! The dataset is a single static JSON resource: an array of islands, each
//! with a name and a commodity→quote map. It is loaded once at startup (and
//! again on manual refresh); any failure is fatal for the session rather
//! than retried.

use std::{fs, io, path::PathBuf};

use reqwest::{Client, Url};
use thiserror::Error;

use crate::domain::TradingPost;
use crate::util::assets;

const USER_AGENT: &str = "island-trade-scanner/1.0.0";

/// Env var naming a URL to fetch the dataset from.
pub const DATA_URL_ENV: &str = "ISLANDS_DATA_URL";
/// Env var naming a local file to read the dataset from.
pub const DATA_FILE_ENV: &str = "ISLANDS_DATA_FILE";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid dataset URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("island {island:?} quotes an invalid {side} price {value} for {commodity:?}")]
    InvalidPrice {
        island: String,
        commodity: String,
        side: &'static str,
        value: f64,
    },
}

/// Where the dataset comes from. Resolution order: URL override, file
/// override, embedded default.
#[derive(Clone, Debug, PartialEq)]
pub enum DatasetSource {
    Embedded,
    File(PathBuf),
    Url(Url),
}

impl DatasetSource {
    pub fn from_env() -> Result<Self, DatasetError> {
        if let Ok(raw) = std::env::var(DATA_URL_ENV) {
            return Ok(Self::Url(Url::parse(&raw)?));
        }
        if let Ok(path) = std::env::var(DATA_FILE_ENV) {
            return Ok(Self::File(PathBuf::from(path)));
        }
        Ok(Self::Embedded)
    }

    /// Human-readable origin for the footer and logs.
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded => "bundled dataset".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Url(url) => url.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct DatasetClient {
    http: Client,
}

impl DatasetClient {
    pub fn new() -> Result<Self, DatasetError> {
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// Fetch, parse and validate the dataset from the given source.
    pub async fn load(&self, source: &DatasetSource) -> Result<Vec<TradingPost>, DatasetError> {
        println!("Loading island dataset from {}", source.describe());
        let raw = match source {
            DatasetSource::Embedded => assets::default_dataset().to_string(),
            DatasetSource::File(path) => fs::read_to_string(path).map_err(|source| {
                DatasetError::Io {
                    path: path.clone(),
                    source,
                }
            })?,
            DatasetSource::Url(url) => {
                self.http
                    .get(url.clone())
                    .send()
                    .await?
                    .error_for_status()?
                    .text()
                    .await?
            }
        };

        let islands = parse_dataset(&raw)?;
        println!(
            "Loaded {} islands ({} price entries)",
            islands.len(),
            islands.iter().map(|island| island.items.len()).sum::<usize>()
        );
        Ok(islands)
    }
}

/// Parse the raw JSON and reject quotes the engine could not trust.
pub fn parse_dataset(raw: &str) -> Result<Vec<TradingPost>, DatasetError> {
    let islands: Vec<TradingPost> = serde_json::from_str(raw)?;
    validate(&islands)?;
    Ok(islands)
}

/// Every quoted price must be finite and non-negative. Absent sides are fine;
/// absence is how an island opts out of one side of a trade.
fn validate(islands: &[TradingPost]) -> Result<(), DatasetError> {
    for island in islands {
        for (commodity, quote) in &island.items {
            check_price(island, commodity, "buy", quote.buy)?;
            check_price(island, commodity, "sell", quote.sell)?;
        }
    }
    Ok(())
}

fn check_price(
    island: &TradingPost,
    commodity: &str,
    side: &'static str,
    price: Option<f64>,
) -> Result<(), DatasetError> {
    match price {
        Some(value) if !value.is_finite() || value < 0.0 => Err(DatasetError::InvalidPrice {
            island: island.name.clone(),
            commodity: commodity.to_string(),
            side,
            value,
        }),
        _ => Ok(()),
    }
}
