// Roster API HTTP client
//
// Wraps `reqwest::Client` with cohort-scoped URL construction and
// envelope unwrapping. Endpoint methods (players, teams) are
// implemented as inherent methods via separate files to keep this
// module focused on transport mechanics.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::Envelope;
use crate::transport::TransportConfig;

/// Raw HTTP client for the Puppy Bowl roster service.
///
/// Handles the `{ success, data | error }` envelope and cohort-scoped
/// URL construction. All methods return unwrapped `data` payloads --
/// the envelope is stripped before the caller sees it.
pub struct RosterClient {
    http: reqwest::Client,
    base_url: Url,
    cohort: String,
}

impl RosterClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the service root (e.g. `https://fsa-puppy-bowl.herokuapp.com`);
    /// the cohort identifier scopes every request under `/api/{cohort}/`.
    pub fn new(base_url: Url, cohort: String, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            base_url,
            cohort,
        })
    }

    /// Create a client with a pre-built `reqwest::Client` (used by tests).
    pub fn with_client(http: reqwest::Client, base_url: Url, cohort: String) -> Self {
        Self {
            http,
            base_url,
            cohort,
        }
    }

    /// The cohort identifier this client is scoped to.
    pub fn cohort(&self) -> &str {
        &self.cohort
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Build a cohort-scoped URL: `{base}/api/{cohort}/{path}`
    pub(crate) fn api_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/api/{}/{path}", self.cohort);
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the envelope.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);
        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;
        self.parse_envelope(resp).await
    }

    /// Send a POST request with JSON body and unwrap the envelope.
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        url: Url,
        body: &(impl Serialize + Sync),
    ) -> Result<T, Error> {
        debug!("POST {}", url);
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_envelope(resp).await
    }

    /// Send a DELETE request and unwrap the envelope.
    ///
    /// The removal endpoint answers with a success envelope whose `data`
    /// may be absent, so `T` is typically `serde_json::Value`.
    pub(crate) async fn delete<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("DELETE {}", url);
        let resp = self
            .http
            .delete(url)
            .send()
            .await
            .map_err(Error::Transport)?;
        self.parse_envelope_optional(resp).await
    }

    /// Parse the `{ success, data | error }` envelope, returning `data`
    /// on success or an [`Error::Api`] carrying the server message.
    async fn parse_envelope<T: DeserializeOwned>(&self, resp: reqwest::Response) -> Result<T, Error> {
        let envelope = self.read_envelope(resp).await?;
        envelope.data.ok_or_else(|| Error::Api {
            message: "success envelope missing data".into(),
        })
    }

    /// Like [`parse_envelope`](Self::parse_envelope) but tolerates a
    /// success envelope without a `data` field.
    async fn parse_envelope_optional<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let envelope = self.read_envelope(resp).await?;
        Ok(envelope.data)
    }

    async fn read_envelope<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<Envelope<T>, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;

        // The service reports application failures inside the envelope,
        // usually with a matching non-2xx status. Prefer the envelope's
        // message when one parses; fall back to the bare status.
        let envelope: Envelope<T> = match serde_json::from_str(&body) {
            Ok(env) => env,
            Err(e) if status.is_success() => {
                let message = format!("{e} (body preview: {:?})", preview(&body));
                return Err(Error::Deserialization { message, body });
            }
            Err(_) => {
                return Err(Error::Http {
                    status: status.as_u16(),
                    message: preview(&body).to_owned(),
                });
            }
        };

        if envelope.success {
            Ok(envelope)
        } else {
            let message = envelope
                .error
                .map_or_else(|| format!("request failed (HTTP {status})"), |f| f.into_message());
            Err(Error::Api { message })
        }
    }
}

/// First ~200 bytes of a response body for error messages, cut on a
/// char boundary so a multi-byte character at the edge cannot panic.
fn preview(body: &str) -> &str {
    const LIMIT: usize = 200;
    if body.len() <= LIMIT {
        return body;
    }
    let mut end = LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
