//! NodePing API client.
//!
//! One blocking GET per operation. Responses are classified in a single
//! place: transport failures and non-2xx statuses surface as
//! [`Error::Http`], bodies carrying the service's error envelope surface as
//! [`Error::Api`], and anything that fails to decode surfaces as
//! [`Error::Serialization`].

use std::collections::BTreeMap;
use std::env;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Check, ContactGroup, ServiceError, UptimeRecord};

/// Default NodePing API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.nodeping.com/api/1";

/// User agent sent with every request.
const USER_AGENT: &str = concat!("nodeping-rs/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the API token.
const TOKEN_ENV: &str = "NODEPING_TOKEN";
/// Environment variable overriding the API endpoint.
const BASE_URL_ENV: &str = "NODEPING_API_URL";
/// Environment variable holding the customer (subaccount) scope.
const CUSTOMER_ID_ENV: &str = "NODEPING_CUSTOMER_ID";

/// Configuration for a [`Client`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// API token, used as the basic-auth username on every request.
    pub token: String,
    /// API endpoint override; [`DEFAULT_BASE_URL`] when unset.
    pub base_url: Option<String>,
    /// Customer (subaccount) id scoping list operations.
    pub customer_id: Option<String>,
}

/// NodePing API client.
///
/// Each instance owns its transport handle and credentials; clients with
/// different tokens or endpoints coexist without interfering.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::blocking::Client,
    base_url: String,
    token: String,
    customer_id: Option<String>,
}

impl Client {
    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the token is empty, or [`Error::Http`]
    /// when the transport handle cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(Error::Config("API token is required".to_string()));
        }

        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: config.token,
            customer_id: config.customer_id,
        })
    }

    /// Create a client from `NODEPING_TOKEN`, with optional endpoint and
    /// customer overrides from `NODEPING_API_URL` and `NODEPING_CUSTOMER_ID`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `NODEPING_TOKEN` is unset or empty.
    pub fn from_env() -> Result<Self> {
        let token = env::var(TOKEN_ENV)
            .map_err(|_| Error::Config(format!("{TOKEN_ENV} environment variable not set")))?;

        Self::new(ClientConfig {
            token,
            base_url: env::var(BASE_URL_ENV).ok(),
            customer_id: env::var(CUSTOMER_ID_ENV).ok(),
        })
    }

    /// API endpoint this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Customer (subaccount) scope, if any.
    #[must_use]
    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    /// List all checks visible to the token, or to the configured customer
    /// scope. The result is ordered by ascending check id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`], [`Error::Api`], or [`Error::Serialization`]
    /// per the response classification above.
    pub fn list_checks(&self) -> Result<Vec<Check>> {
        let path = match &self.customer_id {
            Some(customer_id) => format!("/checks/{customer_id}"),
            None => "/checks".to_string(),
        };
        let checks: BTreeMap<String, Check> = self.get(&path)?;
        Ok(checks.into_values().collect())
    }

    /// Fetch a single check by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the id is unknown, otherwise
    /// [`Error::Http`] or [`Error::Serialization`] as classified above.
    pub fn get_check(&self, id: &str) -> Result<Check> {
        self.get(&format!("/checks/{id}"))
    }

    /// Fetch uptime statistics for a check, keyed by period label
    /// (`"YYYY-MM"` or `"total"`).
    ///
    /// `start` and `end` bound the range in epoch milliseconds; a
    /// non-positive value leaves that bound unset and the service applies
    /// its default range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`], [`Error::Api`], or [`Error::Serialization`]
    /// per the response classification above.
    pub fn get_uptime(
        &self,
        id: &str,
        start: i64,
        end: i64,
    ) -> Result<BTreeMap<String, UptimeRecord>> {
        self.get(&Self::uptime_path(id, start, end))
    }

    /// List contact groups, keyed by group id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`], [`Error::Api`], or [`Error::Serialization`]
    /// per the response classification above.
    pub fn list_contact_groups(&self) -> Result<BTreeMap<String, ContactGroup>> {
        let path = match &self.customer_id {
            Some(customer_id) => format!("/contactgroups/{customer_id}"),
            None => "/contactgroups".to_string(),
        };
        self.get(&path)
    }

    fn uptime_path(id: &str, start: i64, end: i64) -> String {
        let mut params = Vec::new();
        if start > 0 {
            params.push(format!("start={start}"));
        }
        if end > 0 {
            params.push(format!("end={end}"));
        }

        let mut path = format!("/results/uptime/{id}");
        if !params.is_empty() {
            path.push('?');
            path.push_str(&params.join("&"));
        }
        path
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.token, Some(""))
            .send()?;

        Self::handle_response(response)
    }

    fn handle_response<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T> {
        let body = response.error_for_status()?.text()?;

        // Failure bodies embed an error envelope even under a 2xx status;
        // a non-empty message takes precedence over whatever else decodes.
        let failure: ServiceError = serde_json::from_str(&body).unwrap_or_default();
        if !failure.error.is_empty() {
            return Err(Error::Api(failure.error));
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "failed to decode response body");
            Error::Serialization(e)
        })
    }
}
