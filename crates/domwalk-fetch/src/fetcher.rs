use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::options::FetchOptions;
use crate::request::{Request, RequestState};

/// Runs a `get_async` callback exactly once.
///
/// If the spawned task is dropped before the request settles (for example
/// when the runtime shuts down), the callback receives [`FetchError::Aborted`].
struct Settle<F>
where
    F: FnOnce(FetchResult),
{
    url: Url,
    callback: Option<F>,
}

impl<F> Settle<F>
where
    F: FnOnce(FetchResult),
{
    fn new(url: Url, callback: F) -> Self {
        Settle {
            url,
            callback: Some(callback),
        }
    }

    fn deliver(mut self, result: FetchResult) {
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }
}

impl<F> Drop for Settle<F>
where
    F: FnOnce(FetchResult),
{
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            tracing::warn!("Request to {} was dropped before it settled", self.url);
            callback(Err(FetchError::Aborted {
                url: self.url.clone(),
            }));
        }
    }
}

/// Issues single GET requests. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self {
            client: build_client(&FetchOptions::default())
                .expect("Failed to build default reqwest client"),
        }
    }
}

fn build_client(options: &FetchOptions) -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    for (name, value) in &options.default_headers {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| FetchError::InvalidHeader {
                name: name.clone(),
                message: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| FetchError::InvalidHeader {
            name: name.clone(),
            message: e.to_string(),
        })?;
        headers.append(header_name, header_value);
    }

    Client::builder()
        .user_agent(options.user_agent.as_str())
        .default_headers(headers)
        .build()
        .map_err(FetchError::Client)
}

impl Fetcher {
    pub fn new(options: &FetchOptions) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(options)?,
        })
    }

    /// Sends one GET request to `url` and returns the body of a 200 response.
    ///
    /// Any other status is an [`FetchError::UnexpectedStatus`]. Nothing is
    /// retried or cached.
    pub async fn fetch(&self, url: Url) -> FetchResult {
        let mut request = Request::new(url);
        let result = self.send(&mut request).await;
        request.advance(RequestState::Settled);
        result
    }

    async fn send(&self, request: &mut Request) -> FetchResult {
        tracing::debug!("GET {}", request.url());
        request.advance(RequestState::Sent);

        let response = self
            .client
            .get(request.url().clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: request.url().clone(),
                source,
            })?;
        request.advance(RequestState::InProgress);

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!("Request to {} failed with status: {}", request.url(), status);
            return Err(FetchError::UnexpectedStatus {
                url: request.url().clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: request.url().clone(),
            source,
        })?;
        tracing::debug!("Received {} bytes from {}", body.len(), request.url());
        Ok(body)
    }

    /// Starts a GET request on the current Tokio runtime and returns at once.
    ///
    /// `callback` runs exactly once, on the runtime, with the settled result.
    /// If the runtime shuts down first, it runs during shutdown with
    /// [`FetchError::Aborted`]. Outside a runtime it runs immediately with
    /// [`FetchError::NoRuntime`].
    pub fn get_async<F>(&self, url: Url, callback: F)
    where
        F: FnOnce(FetchResult) + Send + 'static,
    {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let fetcher = self.clone();
                let settle = Settle::new(url.clone(), callback);
                handle.spawn(async move {
                    let result = fetcher.fetch(url).await;
                    settle.deliver(result);
                });
            }
            Err(_) => {
                tracing::error!("Cannot fetch {} without a Tokio runtime", url);
                callback(Err(FetchError::NoRuntime));
            }
        }
    }
}

/// Fetches `url` with a default [`Fetcher`] and hands the outcome to `callback`.
///
/// Parse and client-construction failures are delivered through `callback`
/// as well.
pub fn get_async<F>(url: &str, callback: F)
where
    F: FnOnce(FetchResult) + Send + 'static,
{
    let url = match Url::parse(url) {
        Ok(url) => url,
        Err(source) => {
            callback(Err(FetchError::InvalidUrl {
                input: url.to_string(),
                source,
            }));
            return;
        }
    };

    match Fetcher::new(&FetchOptions::default()) {
        Ok(fetcher) => fetcher.get_async(url, callback),
        Err(e) => callback(Err(e)),
    }
}
