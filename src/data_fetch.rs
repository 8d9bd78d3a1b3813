use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;

use crate::dataset::{Dataset, parse_dataset_json};

const REQUEST_TIMEOUT_SECS: u64 = 10;
const DEFAULT_DATA_FILE: &str = "data.json";

static CLIENT: OnceCell<Client> = OnceCell::new();

fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// Where the canonical dataset lives. There is exactly one fetch per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// URL env wins over file env; otherwise `data.json` in the working dir.
pub fn resolve_source() -> DataSource {
    if let Ok(url) = env::var("PREDICTIONS_DATA_URL") {
        if !url.trim().is_empty() {
            return DataSource::Url(url.trim().to_string());
        }
    }
    if let Ok(path) = env::var("PREDICTIONS_DATA_FILE") {
        if !path.trim().is_empty() {
            return DataSource::File(PathBuf::from(path.trim()));
        }
    }
    DataSource::File(PathBuf::from(DEFAULT_DATA_FILE))
}

/// Loads and parses the dataset. Any failure here means "no data
/// available"; the caller decides whether to fall back to the built-in
/// board. There is no partial-failure mode.
pub fn load_dataset(source: &DataSource) -> Result<Dataset> {
    let raw = match source {
        DataSource::File(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset file {}", path.display()))?,
        DataSource::Url(url) => http_client()?
            .get(url)
            .send()
            .with_context(|| format!("dataset request to {url} failed"))?
            .error_for_status()
            .context("dataset request returned an error status")?
            .text()
            .context("failed to read dataset response body")?,
    };
    parse_dataset_json(&raw)
}
