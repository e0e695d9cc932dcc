use crate::api::models::ReleaseEntry;
use crate::api::query::AssetQuery;
use crate::error::{MokkaError, Result};
use crate::models::request::{Implementation, InstallRequest, ReleaseChannel};
use crate::user_agent;
use log::{debug, trace};
use retry::{OperationResult, delay::Exponential, retry_with_index};
use std::thread;
use std::time::Duration;

const ADOPTIUM_API_BASE: &str = "https://api.adoptium.net/v3";
// The bounded version range segment, pre-encoded the way the API expects it.
const VERSION_RANGE_SEGMENT: &str = "%5B1.0,100.0%5D";
const PAGE_SIZE: u32 = 20;
const DEFAULT_TIMEOUT: u64 = 30;
const MAX_RETRIES: usize = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

/// Client for the Adoptium release manifest.
///
/// One instance is reusable across resolution sessions; every session walks
/// the paginated catalog with strictly sequential page requests.
#[derive(Debug)]
pub struct ManifestClient {
    pub(crate) session: attohttpc::Session,
    pub(crate) base_url: String,
    pub(crate) os: String,
}

impl ManifestClient {
    pub fn new() -> Self {
        let mut session = attohttpc::Session::new();
        session.header("User-Agent", user_agent::api_client());
        session.timeout(Duration::from_secs(DEFAULT_TIMEOUT));
        session.proxy_settings(attohttpc::ProxySettings::from_env());

        Self {
            session,
            base_url: ADOPTIUM_API_BASE.to_string(),
            os: crate::platform::get_current_os(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Overrides the host platform token used in catalog queries.
    pub fn with_os(mut self, os: String) -> Self {
        self.os = os;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.session.timeout(timeout);
        self
    }

    /// Fetches the full catalog for the request, walking fixed-size pages
    /// until the service returns an empty one. Catalog order is exactly the
    /// concatenation order of pages; the requested DESC sort makes that
    /// newest-first, which selection depends on.
    pub fn fetch_catalog(
        &self,
        request: &InstallRequest,
        implementation: Implementation,
        channel: ReleaseChannel,
    ) -> Result<Vec<ReleaseEntry>> {
        let mut query = AssetQuery {
            os: self.os.clone(),
            architecture: request.architecture.clone(),
            image_type: request.package_type,
            release_type: channel,
            jvm_impl: implementation,
            page_size: PAGE_SIZE,
            page: 0,
        };

        let mut catalog = Vec::new();
        loop {
            let entries = self.fetch_page(&query)?;
            if entries.is_empty() {
                debug!("Page {} is empty, pagination complete", query.page);
                break;
            }
            debug!("Fetched page {} with {} releases", query.page, entries.len());
            catalog.extend(entries);
            query = query.next_page();
        }

        Ok(catalog)
    }

    /// Fetches a single catalog page. Non-200 responses and malformed bodies
    /// fail the session; only transport errors and 429 are retried.
    pub fn fetch_page(&self, query: &AssetQuery) -> Result<Vec<ReleaseEntry>> {
        let url = format!("{}/assets/version/{VERSION_RANGE_SEGMENT}", self.base_url);
        let page = query.page;
        trace!("GET {url}?{}", query.to_query_string());

        let result = retry_with_index(
            Exponential::from_millis(INITIAL_BACKOFF_MS).take(MAX_RETRIES),
            |current_try| {
                let mut request = self.session.get(&url);
                for (name, value) in query.params() {
                    request = request.param(name, value);
                }

                let response = match request.send() {
                    Ok(resp) => resp,
                    Err(e) => {
                        let user_error = MokkaError::ManifestFetch {
                            page,
                            reason: format!(
                                "Network error connecting to the Adoptium API: {e}. Please check your internet connection and try again."
                            ),
                        };

                        if current_try < (MAX_RETRIES - 1) as u64 {
                            return OperationResult::Retry(user_error);
                        }
                        return OperationResult::Err(user_error);
                    }
                };

                if response.status() == attohttpc::StatusCode::TOO_MANY_REQUESTS
                    && current_try < (MAX_RETRIES - 1) as u64
                {
                    if let Some(retry_after) = response.headers().get("Retry-After")
                        && let Ok(retry_str) = retry_after.to_str()
                        && let Ok(seconds) = retry_str.parse::<u64>()
                    {
                        thread::sleep(Duration::from_secs(seconds));
                    }
                    return OperationResult::Retry(MokkaError::ManifestFetch {
                        page,
                        reason: "Too many requests. Waiting before retrying...".to_string(),
                    });
                }

                if !response.is_success() {
                    let status = response.status();
                    return OperationResult::Err(MokkaError::ManifestFetch {
                        page,
                        reason: format!(
                            "HTTP {} from the Adoptium API: {}",
                            status.as_u16(),
                            status.canonical_reason().unwrap_or("Unknown error")
                        ),
                    });
                }

                match response.text() {
                    Ok(body) => match serde_json::from_str::<Vec<ReleaseEntry>>(&body) {
                        Ok(entries) => OperationResult::Ok(entries),
                        Err(e) => {
                            debug!("Failed to parse page {page} body: {e}");
                            OperationResult::Err(MokkaError::ManifestFetch {
                                page,
                                reason: format!("Invalid JSON response: {e}"),
                            })
                        }
                    },
                    Err(e) => OperationResult::Err(MokkaError::ManifestFetch {
                        page,
                        reason: format!("Failed to read response body: {e}"),
                    }),
                }
            },
        );

        result.map_err(|e| e.error)
    }
}

impl Default for ManifestClient {
    fn default() -> Self {
        Self::new()
    }
}
