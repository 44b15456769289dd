//! Thin HTTP client over the hosting platform's REST API

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Response, StatusCode, Url};

use crate::collector::config::CollectorConfig;
use crate::error::{AssessError, AssessResult};

/// Authenticated-or-not REST client for one collection pass.
///
/// Owns the bearer header, the base URL, and the request timeout. Status
/// handling lives here so every call site gets the same error taxonomy.
pub(crate) struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    authenticated: bool,
}

impl ApiClient {
    pub(crate) fn new(config: &CollectorConfig, token: Option<&str>) -> AssessResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("repograde"));
        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| AssessError::ClientSetup(format!("invalid token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| AssessError::ClientSetup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            authenticated: token.is_some(),
        })
    }

    /// GET a path relative to the API root.
    pub(crate) async fn get(&self, path: &str, query: &[(&str, String)]) -> AssessResult<Response> {
        let url = Url::parse(&format!("{}/{path}", self.base_url))
            .map_err(|e| AssessError::ClientSetup(format!("bad request URL for {path}: {e}")))?;
        debug!("GET {url}");
        let response = self.http.get(url).query(query).send().await?;
        self.check_status(response, path)
    }

    /// GET an absolute URL, as handed back in a pagination link.
    pub(crate) async fn get_url(&self, url: Url) -> AssessResult<Response> {
        debug!("GET {url}");
        let path = url.path().to_string();
        let response = self.http.get(url).send().await?;
        self.check_status(response, &path)
    }

    fn check_status(&self, response: Response, path: &str) -> AssessResult<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::FORBIDDEN if self.authenticated => Err(AssessError::RateLimited),
            StatusCode::FORBIDDEN => Err(AssessError::AuthRequired),
            StatusCode::NOT_FOUND => Err(AssessError::NotFound(path.to_string())),
            status => Err(AssessError::Api(format!("{path} returned {status}"))),
        }
    }
}
