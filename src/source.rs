use crate::errors::AppError;
use crate::models::MarketingData;
use reqwest::{Client, Url};
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::{debug, info};

pub const DEFAULT_DATA_PATH: &str = "data/marketing-data.json";

/// Where the precomputed marketing dataset comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Http(Url),
}

impl DataSource {
    /// `MARKETING_DATA_URL` wins over `MARKETING_DATA_PATH`; falls back to the bundled file.
    pub fn from_env() -> Result<Self, AppError> {
        Self::resolve(
            env::var("MARKETING_DATA_URL").ok(),
            env::var("MARKETING_DATA_PATH").ok(),
        )
    }

    pub fn resolve(url: Option<String>, path: Option<String>) -> Result<Self, AppError> {
        if let Some(url) = url.filter(|value| !value.trim().is_empty()) {
            let url = Url::parse(url.trim()).map_err(AppError::internal)?;
            return Ok(Self::Http(url));
        }

        match path.filter(|value| !value.trim().is_empty()) {
            Some(path) => Ok(Self::File(PathBuf::from(path))),
            None => Ok(Self::File(PathBuf::from(DEFAULT_DATA_PATH))),
        }
    }

    pub async fn fetch(&self, client: &Client) -> Result<MarketingData, AppError> {
        match self {
            Self::File(path) => {
                debug!("reading marketing data from {}", path.display());
                let bytes = fs::read(path).await?;
                Ok(serde_json::from_slice(&bytes)?)
            }
            Self::Http(url) => {
                debug!("fetching marketing data from {url}");
                let response = client.get(url.clone()).send().await?.error_for_status()?;
                Ok(response.json().await?)
            }
        }
    }

    pub fn describe(&self) {
        match self {
            Self::File(path) => info!("serving marketing data from file {}", path.display()),
            Self::Http(url) => info!("serving marketing data from {url}"),
        }
    }
}
