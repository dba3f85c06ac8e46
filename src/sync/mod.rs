mod sync_error;

pub use sync_error::SyncError;

use crate::api::Fetch;
use crate::config::Config;
use crate::freshness::{Freshness, FreshnessLog};
use crate::prompt::Prompt;
use crate::util::format;

use chrono::Utc;
use log::{debug, info, warn};

use std::path::PathBuf;

const CONFIRM_MESSAGE: &str = "The bulk data files are likely over a gigabyte of data that will be downloaded. \
    Do you want to update these files?";

#[derive(Debug, Default)]
pub struct SyncReport {
    pub files: Vec<PathBuf>,
    pub bytes: u64,
}

/* One sweep over every bulk data file the API lists. The sweep is all or nothing: the first failed download ends it,
 * and only a complete sweep updates the freshness log. Files fetched before a failure stay on disk.
 */
pub struct BulkSync<'a, F: Fetch> {
    config: &'a Config,
    fetcher: &'a F,
    prompt: Box<dyn Prompt + 'a>,
    log: FreshnessLog,
}

impl<'a, F: Fetch> BulkSync<'a, F> {
    pub fn new(config: &'a Config, fetcher: &'a F, prompt: Box<dyn Prompt + 'a>) -> Self {
        Self {
            config,
            fetcher,
            prompt,
            log: FreshnessLog::new(config.log_path()),
        }
    }

    pub async fn run(&mut self) -> Result<SyncReport, SyncError> {
        match self.log.check().await? {
            Freshness::Fresh(last_update) => return Err(SyncError::UpdatedRecently { last_update }),
            Freshness::Stale => debug!("{:?} is out of date.", self.log.path()),
            Freshness::Missing => debug!("{:?} does not exist yet.", self.log.path()),
        }

        if !self.prompt.confirm(CONFIRM_MESSAGE)? {
            return Err(SyncError::Aborted);
        }

        let list = self.fetcher.list_bulk_data(&self.config.api_url).await?;
        for warning in list.warnings.iter().flatten() {
            warn!("API warning: {}", warning);
        }
        if list.has_more {
            warn!("The bulk data listing has more pages. Only the first one is downloaded.");
        }
        info!("Found {} bulk data files.", list.data.len());

        // Every file name is checked before anything is downloaded.
        let mut downloads = Vec::with_capacity(list.data.len());
        for bulk_data in &list.data {
            match self.config.download_path(bulk_data) {
                Some(path) => downloads.push((bulk_data, path)),
                None => {
                    return Err(SyncError::InvalidFileName {
                        name: bulk_data.name.clone(),
                    })
                }
            }
        }

        let mut report = SyncReport::default();
        for (bulk_data, path) in downloads {
            match bulk_data.size() {
                Some(size) => println!("Downloading {} ({})...", bulk_data.name, format::human_readable(size)),
                None => println!("Downloading {}...", bulk_data.name),
            }
            let bytes = self.fetcher.fetch_file(&path, &bulk_data.download_uri).await?;
            debug!("Saved {} to {:?}.", bulk_data.kind, path);
            report.files.push(path);
            report.bytes += bytes;
        }

        self.log.record(Utc::now()).await?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::{BulkSync, SyncError};
    use crate::api::{ApiError, BulkData, Client, Fetch, List};
    use crate::config::{Config, ConfigBuilder};
    use crate::freshness::{Freshness, FreshnessLog};
    use crate::prompt::{AssumeYes, Prompt};
    use crate::test::TestServer;

    use chrono::{Duration, Utc};
    use serde_json::json;
    use std::cell::RefCell;
    use std::io;
    use std::path::Path;
    use tokio::fs;
    use url::Url;

    fn bulk_data(name: &str, download_uri: &str) -> BulkData {
        serde_json::from_value(json!({
            "id": "922288cb-4bef-45e1-bb30-0c2bd3d3534f",
            "type": name.to_lowercase().replace(' ', "_"),
            "updated_at": "2024-03-01T09:05:33.000+00:00",
            "uri": "https://api.scryfall.com/bulk-data/922288cb-4bef-45e1-bb30-0c2bd3d3534f",
            "name": name,
            "description": "",
            "size": 1024,
            "download_uri": download_uri,
            "content_type": "application/json",
            "content_encoding": "gzip"
        }))
        .unwrap()
    }

    fn listing(data: Vec<BulkData>) -> List<BulkData> {
        List {
            data,
            has_more: false,
            next_page: None,
            total_cards: None,
            warnings: None,
        }
    }

    fn config(save_dir: &Path) -> Config {
        ConfigBuilder::default()
            .save_dir(save_dir.to_string_lossy())
            .api_url("https://api.invalid/bulk-data")
            .build()
            .unwrap()
    }

    #[derive(Default)]
    struct FakeFetcher {
        listing: Option<List<BulkData>>,
        fail_at: Option<usize>,
        listed: RefCell<usize>,
        fetched: RefCell<Vec<Url>>,
    }

    impl Fetch for FakeFetcher {
        async fn list_bulk_data(&self, _url: &Url) -> Result<List<BulkData>, ApiError> {
            *self.listed.borrow_mut() += 1;
            Ok(self.listing.clone().unwrap_or_else(|| listing(vec![])))
        }

        async fn fetch_file(&self, dest: &Path, url: &Url) -> Result<u64, ApiError> {
            let attempt = self.fetched.borrow().len();
            self.fetched.borrow_mut().push(url.clone());
            if self.fail_at == Some(attempt) {
                return Err(ApiError::from(io::Error::new(io::ErrorKind::ConnectionReset, "simulated failure")));
            }
            fs::create_dir_all(dest.parent().unwrap()).await?;
            fs::write(dest, url.as_str()).await?;
            Ok(url.as_str().len() as u64)
        }
    }

    struct Answer(bool);

    impl Prompt for Answer {
        fn confirm(&mut self, _message: &str) -> io::Result<bool> {
            Ok(self.0)
        }
    }

    struct NeverAsked;

    impl Prompt for NeverAsked {
        fn confirm(&mut self, message: &str) -> io::Result<bool> {
            panic!("Did not expect to be asked: {}", message);
        }
    }

    #[tokio::test]
    async fn full_sweep_writes_files_and_log() -> Result<(), SyncError> {
        let tmp = tempfile::tempdir()?;
        let config = config(tmp.path());
        let fetcher = FakeFetcher {
            listing: Some(listing(vec![
                bulk_data("Oracle Cards", "https://data.invalid/oracle.json"),
                bulk_data("Rulings", "https://data.invalid/rulings.json"),
            ])),
            ..Default::default()
        };

        let report = BulkSync::new(&config, &fetcher, Box::new(Answer(true))).run().await?;

        assert_eq!(report.files, vec![tmp.path().join("Oracle Cards.json"), tmp.path().join("Rulings.json")]);
        assert_eq!(report.bytes, 65);
        assert_eq!(std::fs::read_to_string(tmp.path().join("Rulings.json"))?, "https://data.invalid/rulings.json");
        assert!(matches!(FreshnessLog::new(config.log_path()).check().await?, Freshness::Fresh(_)));
        Ok(())
    }

    #[tokio::test]
    async fn fresh_log_blocks_sync_before_any_request() -> Result<(), SyncError> {
        let tmp = tempfile::tempdir()?;
        let config = config(tmp.path());
        FreshnessLog::new(config.log_path()).record(Utc::now() - Duration::hours(1)).await?;
        let fetcher = FakeFetcher::default();

        let res = BulkSync::new(&config, &fetcher, Box::new(NeverAsked)).run().await;

        assert!(matches!(res, Err(SyncError::UpdatedRecently { .. })));
        assert_eq!(*fetcher.listed.borrow(), 0);
        assert!(fetcher.fetched.borrow().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn stale_log_allows_sync() -> Result<(), SyncError> {
        let tmp = tempfile::tempdir()?;
        let config = config(tmp.path());
        let log = FreshnessLog::new(config.log_path());
        let old = Utc::now() - Duration::hours(25);
        log.record(old).await?;
        let fetcher = FakeFetcher::default();

        BulkSync::new(&config, &fetcher, Box::new(Answer(true))).run().await?;

        assert_eq!(*fetcher.listed.borrow(), 1);
        match log.check().await? {
            Freshness::Fresh(last) => assert!(last > old),
            other => panic!("expected a fresh log, got {:?}", other),
        }
        Ok(())
    }

    #[tokio::test]
    async fn declined_prompt_aborts() -> Result<(), SyncError> {
        let tmp = tempfile::tempdir()?;
        let config = config(tmp.path());
        let fetcher = FakeFetcher::default();

        let res = BulkSync::new(&config, &fetcher, Box::new(Answer(false))).run().await;

        assert!(matches!(res, Err(SyncError::Aborted)));
        assert_eq!(*fetcher.listed.borrow(), 0);
        assert!(!config.log_path().exists());
        Ok(())
    }

    #[tokio::test]
    async fn empty_listing_fetches_nothing() -> Result<(), SyncError> {
        let tmp = tempfile::tempdir()?;
        let config = config(tmp.path());
        let fetcher = FakeFetcher::default();

        let report = BulkSync::new(&config, &fetcher, Box::new(Answer(true))).run().await?;

        assert!(report.files.is_empty());
        assert!(fetcher.fetched.borrow().is_empty());
        assert!(config.log_path().exists());
        Ok(())
    }

    #[tokio::test]
    async fn failed_fetch_ends_the_sweep() -> Result<(), SyncError> {
        let tmp = tempfile::tempdir()?;
        let config = config(tmp.path());
        let fetcher = FakeFetcher {
            listing: Some(listing(vec![
                bulk_data("Oracle Cards", "https://data.invalid/oracle.json"),
                bulk_data("Default Cards", "https://data.invalid/default.json"),
                bulk_data("Rulings", "https://data.invalid/rulings.json"),
            ])),
            fail_at: Some(1),
            ..Default::default()
        };

        let res = BulkSync::new(&config, &fetcher, Box::new(Answer(true))).run().await;

        assert!(matches!(res, Err(SyncError::ApiError { .. })));
        assert_eq!(fetcher.fetched.borrow().len(), 2);
        assert!(tmp.path().join("Oracle Cards.json").exists());
        assert!(!tmp.path().join("Default Cards.json").exists());
        assert!(!tmp.path().join("Rulings.json").exists());
        assert!(!config.log_path().exists());
        Ok(())
    }

    #[tokio::test]
    async fn unsafe_file_name_stops_the_sweep_before_any_download() -> Result<(), SyncError> {
        let tmp = tempfile::tempdir()?;
        let save_dir = tmp.path().join("scryfall");
        let config = config(&save_dir);
        let fetcher = FakeFetcher {
            listing: Some(listing(vec![
                bulk_data("Oracle Cards", "https://data.invalid/oracle.json"),
                bulk_data("../escaped", "https://data.invalid/escaped.json"),
            ])),
            ..Default::default()
        };

        let res = BulkSync::new(&config, &fetcher, Box::new(Answer(true))).run().await;

        match res {
            Err(SyncError::InvalidFileName { name }) => assert_eq!(name, "../escaped"),
            other => panic!("expected an invalid file name error, got {:?}", other.map(|r| r.files)),
        }
        assert!(fetcher.fetched.borrow().is_empty());
        assert!(!tmp.path().join("escaped.json").exists());
        assert!(!config.log_path().exists());
        Ok(())
    }

    #[tokio::test]
    async fn sweep_over_http() -> Result<(), SyncError> {
        let server = TestServer::start().await;
        let listing = json!({
            "object": "list",
            "has_more": false,
            "data": [
                {
                    "object": "bulk_data",
                    "id": "06f54c0b-ab9d-4e8a-be46-a5a8d5d35ae6",
                    "type": "rulings",
                    "updated_at": "2024-03-01T10:02:26.497+00:00",
                    "uri": server.url("bulk-data/rulings"),
                    "name": "Rulings",
                    "description": "A JSON file containing all Rulings on Scryfall.",
                    "size": 2,
                    "download_uri": server.url("files/rulings.json"),
                    "content_type": "application/json",
                    "content_encoding": "gzip"
                }
            ]
        });
        server.route("/bulk-data", 200, listing.to_string().as_bytes());
        server.route("/files/rulings.json", 200, b"[]");

        let tmp = tempfile::tempdir()?;
        let save_dir = tmp.path().join("scryfall");
        let config = ConfigBuilder::default()
            .save_dir(save_dir.to_string_lossy())
            .api_url(server.url("bulk-data").as_str())
            .build()
            .unwrap();
        let client = Client::without_proxy()?;

        let report = BulkSync::new(&config, &client, Box::new(AssumeYes)).run().await?;

        assert_eq!(report.files, vec![save_dir.join("Rulings.json")]);
        assert_eq!(std::fs::read_to_string(save_dir.join("Rulings.json"))?, "[]");
        assert_eq!(server.hits("/bulk-data"), 1);

        // A second run right away is refused without touching the API.
        let res = BulkSync::new(&config, &client, Box::new(NeverAsked)).run().await;
        assert!(matches!(res, Err(SyncError::UpdatedRecently { .. })));
        assert_eq!(server.hits("/bulk-data"), 1);
        Ok(())
    }
}
