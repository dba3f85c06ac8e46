use super::response::{self, Object};
use super::{ApiError, BulkData, List};

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::ClientBuilder;
use tokio::fs::{self, File};
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio_stream::StreamExt;
use url::Url;

use std::path::Path;

/* API reference:
 * https://scryfall.com/docs/api/bulk-data
 */

/* The seam between the sync logic and the network. Everything is awaited in sequence, so the futures don't need to be
 * Send.
 */
#[allow(async_fn_in_trait)]
pub trait Fetch {
    async fn list_bulk_data(&self, url: &Url) -> Result<List<BulkData>, ApiError>;

    async fn fetch_file(&self, dest: &Path, url: &Url) -> Result<u64, ApiError>;
}

#[derive(Clone)]
pub struct Client {
    client: reqwest::Client,
}

impl Client {
    pub fn new() -> Result<Self, ApiError> {
        Self::from_builder(reqwest::Client::builder())
    }

    // The loopback test server must not be routed through whatever proxy the environment configures.
    #[cfg(test)]
    pub fn without_proxy() -> Result<Self, ApiError> {
        Self::from_builder(reqwest::Client::builder().no_proxy())
    }

    fn from_builder(builder: ClientBuilder) -> Result<Self, ApiError> {
        // Scryfall asks every client to identify itself and to accept JSON.
        let version = String::from(env!("CARGO_CRATE_NAME")) + "/" + env!("CARGO_PKG_VERSION");
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json;q=0.9,*/*;q=0.8"));

        let client = builder.user_agent(version).default_headers(headers).build()?;
        Ok(Self { client })
    }
}

impl Fetch for Client {
    async fn list_bulk_data(&self, url: &Url) -> Result<List<BulkData>, ApiError> {
        let resp = self.client.get(url.clone()).send().await?;
        let status_error = resp.error_for_status_ref().err();
        let bytes = resp.bytes().await?;
        debug!("Bulk data listing from {} is {} bytes.", url, bytes.len());

        if let Some(e) = status_error {
            return match serde_json::from_slice::<Object>(&bytes) {
                Ok(Object::Error(error)) => Err(ApiError::Response { error }),
                Ok(other) => {
                    debug!("Error status came with a {} object instead of an error.", other.kind());
                    Err(ApiError::from(e))
                }
                Err(_) => Err(ApiError::from(e)),
            };
        }
        response::bulk_data_from_slice(&bytes)
    }

    async fn fetch_file(&self, dest: &Path, url: &Url) -> Result<u64, ApiError> {
        let resp = self.client.get(url.clone()).send().await?.error_for_status()?;

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).await?;
        }
        let file = File::create(dest).await?;
        let mut bufwriter = BufWriter::new(file);
        let mut stream = resp.bytes_stream();
        let mut written: u64 = 0;

        while let Some(item) = stream.next().await {
            let bytes = item?;
            bufwriter.write_all(&bytes).await?;
            written += bytes.len() as u64;
        }
        bufwriter.flush().await?;

        debug!("Wrote {} bytes from {} to {:?}.", written, url, dest);
        Ok(written)
    }
}
