//! The request dispatcher every resource method funnels through.
//!
//! One chokepoint attaches the auth, accept, and user-agent headers, sends
//! the request, and maps non-2xx statuses to the error taxonomy. On success
//! the raw response is handed back untouched; decoding is the envelope's job
//! (see [`crate::response`]).
//!
//! GET requests carry query pairs while the mutating verbs carry a JSON body.
//! The remote API expects that distinction, so the asymmetry is preserved
//! rather than unified behind one options type.

use reqwest::Method;
use serde::Serialize;

use crate::client::Client;
use crate::error::{Error, Result};
use crate::util::truncate_for_log;

/// An untouched transport response: status, headers, body text.
///
/// Produced by the dispatcher, consumed by [`Envelope`](crate::Envelope)
/// decoding. The dispatcher never interprets the body itself.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers in server order.
    pub headers: Vec<(String, String)>,
    /// Response body text, possibly empty.
    pub body: String,
}

impl Client {
    /// Perform a GET request with optional query parameters.
    pub(crate) async fn get(&self, path: &str, query: &[(String, String)]) -> Result<RawResponse> {
        let mut url = self.url(path);
        if !query.is_empty() {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }
        self.dispatch(Method::GET, &url, None::<&()>).await
    }

    /// Perform a POST request with an optional JSON body.
    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse> {
        self.dispatch(Method::POST, &self.url(path), body).await
    }

    /// Perform a PUT request with an optional JSON body.
    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse> {
        self.dispatch(Method::PUT, &self.url(path), body).await
    }

    /// Perform a PATCH request with a JSON body.
    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<RawResponse> {
        self.dispatch(Method::PATCH, &self.url(path), Some(body))
            .await
    }

    /// Perform a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<RawResponse> {
        self.dispatch(Method::DELETE, &self.url(path), None::<&()>)
            .await
    }

    /// Send one request and map the outcome.
    ///
    /// - Transport failure (no response at all): [`Error::Transport`].
    /// - 400: [`Error::BadRequest`] built from the response body.
    /// - 404: [`Error::NotFound`] built from the response body.
    /// - Any other non-2xx: [`Error::Http`] carrying the status code.
    /// - Otherwise: the raw response, body undecoded.
    async fn dispatch<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<RawResponse> {
        log::debug!("{method} {url}");

        let mut request = self
            .http
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Accept", "application/json")
            .header("User-Agent", self.user_agent());

        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(Error::transport)?;

        let status = response.status().as_u16();
        log::debug!("Response Status: {status}");

        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        let body = response.text().await.map_err(Error::transport)?;
        log::debug!("Response Body: {}", truncate_for_log(&body));

        if !(200..300).contains(&status) {
            return Err(Error::from_status(status, &body));
        }

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
