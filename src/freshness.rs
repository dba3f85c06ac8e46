use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use log::warn;
use tokio::fs;
use tokio::io::{self, ErrorKind};

use std::path::{Path, PathBuf};

pub const MAX_AGE_HOURS: i64 = 24;

// Unix date(1) layout, always written in UTC.
const WRITE_FORMAT: &str = "%a %b %e %H:%M:%S UTC %Y";
// When parsing, %Z skips the zone abbreviation and the time is read as UTC.
const UNIX_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

#[derive(Debug, PartialEq, Eq)]
pub enum Freshness {
    Fresh(DateTime<Utc>),
    Stale,
    Missing,
}

/// The timestamp file that throttles bulk data downloads to one sweep per day.
pub struct FreshnessLog {
    path: PathBuf,
}

impl FreshnessLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn check(&self) -> Result<Freshness, io::Error> {
        self.check_at(Utc::now()).await
    }

    /* A missing log means no sweep has ever finished. A log we can't make sense of is treated the same as an old
     * one, since the worst outcome is a redundant download.
     */
    pub async fn check_at(&self, now: DateTime<Utc>) -> Result<Freshness, io::Error> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Freshness::Missing),
            Err(e) => return Err(e),
        };

        match parse_timestamp(&contents) {
            Some(last) if now.signed_duration_since(last) < Duration::hours(MAX_AGE_HOURS) => Ok(Freshness::Fresh(last)),
            Some(_) => Ok(Freshness::Stale),
            None => {
                warn!("Unable to parse the timestamp in {:?}, treating it as out of date.", self.path);
                Ok(Freshness::Stale)
            }
        }
    }

    pub async fn record(&self, now: DateTime<Utc>) -> Result<(), io::Error> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, format_timestamp(now)).await
    }
}

pub fn format_timestamp(time: DateTime<Utc>) -> String {
    time.format(WRITE_FORMAT).to_string()
}

pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(time) = DateTime::parse_from_rfc3339(s) {
        return Some(time.with_timezone(&Utc));
    }
    // date(1) pads single digit days with a space
    let s = s.split_whitespace().collect::<Vec<_>>().join(" ");
    NaiveDateTime::parse_from_str(&s, UNIX_DATE_FORMAT).ok().map(|time| time.and_utc())
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, parse_timestamp, Freshness, FreshnessLog};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use tokio::io;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 30, 0).unwrap()
    }

    fn log_in(dir: &tempfile::TempDir) -> FreshnessLog {
        FreshnessLog::new(dir.path().join("bulk_data.info"))
    }

    #[test]
    fn timestamp_format() {
        let time = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(format_timestamp(time), "Mon Jan  2 15:04:05 UTC 2006");
        assert_eq!(parse_timestamp("Mon Jan  2 15:04:05 UTC 2006"), Some(time));
        assert_eq!(parse_timestamp("Mon Jan  2 15:04:05 UTC 2006\n"), Some(time));
    }

    #[test]
    fn parse_other_known_formats() {
        let time = Utc.with_ymd_and_hms(2006, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(parse_timestamp("Mon Jan  2 15:04:05 MST 2006"), Some(time));
        assert_eq!(parse_timestamp("2006-01-02T15:04:05Z"), Some(time));
        assert_eq!(parse_timestamp("2006-01-02T17:04:05+02:00"), Some(time));
        assert_eq!(parse_timestamp("yesterday-ish"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[tokio::test]
    async fn missing_log() -> Result<(), io::Error> {
        let tmp = tempfile::tempdir()?;
        assert_eq!(log_in(&tmp).check_at(now()).await?, Freshness::Missing);
        Ok(())
    }

    #[tokio::test]
    async fn recent_log_is_fresh() -> Result<(), io::Error> {
        let tmp = tempfile::tempdir()?;
        let log = log_in(&tmp);
        let last = now() - Duration::hours(23);
        log.record(last).await?;
        assert_eq!(log.check_at(now()).await?, Freshness::Fresh(last));
        Ok(())
    }

    #[tokio::test]
    async fn exactly_one_day_old_is_stale() -> Result<(), io::Error> {
        let tmp = tempfile::tempdir()?;
        let log = log_in(&tmp);

        log.record(now() - Duration::hours(24)).await?;
        assert_eq!(log.check_at(now()).await?, Freshness::Stale);

        let just_inside = now() - Duration::hours(24) + Duration::seconds(1);
        log.record(just_inside).await?;
        assert_eq!(log.check_at(now()).await?, Freshness::Fresh(just_inside));
        Ok(())
    }

    #[tokio::test]
    async fn unparsable_log_is_stale() -> Result<(), io::Error> {
        let tmp = tempfile::tempdir()?;
        let log = log_in(&tmp);
        std::fs::write(log.path(), "not a date")?;
        assert_eq!(log.check_at(now()).await?, Freshness::Stale);
        Ok(())
    }

    #[tokio::test]
    async fn unreadable_log_is_an_error() -> Result<(), io::Error> {
        let tmp = tempfile::tempdir()?;
        // A directory where the log file should be can't be read as a file.
        let log = FreshnessLog::new(tmp.path().to_path_buf());
        assert!(log.check_at(now()).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn record_overwrites_previous_content() -> Result<(), io::Error> {
        let tmp = tempfile::tempdir()?;
        let log = log_in(&tmp);
        std::fs::write(log.path(), "Some much longer previous content that must not survive the rewrite")?;

        log.record(now()).await?;
        assert_eq!(std::fs::read_to_string(log.path())?, "Sun Oct 18 12:30:00 UTC 2026");
        Ok(())
    }

    #[tokio::test]
    async fn record_creates_parent_directories() -> Result<(), io::Error> {
        let tmp = tempfile::tempdir()?;
        let log = FreshnessLog::new(tmp.path().join("nested").join("bulk_data.info"));

        log.record(now()).await?;
        assert_eq!(log.check_at(now()).await?, Freshness::Fresh(now()));
        Ok(())
    }
}
