use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use std::time::Duration;

/// Reusable base configuration for every call against the service: base URL,
/// `Accept: application/json`, request timeout.
///
/// `Content-Type: application/json` is part of the base contract too, but it
/// is attached per request by [`RequestBuilder::json`] rather than as a
/// default header: every body this client sends is JSON, so the result on the
/// wire is the same, and bodyless requests stay free of a stray content type.
#[derive(Clone, Debug)]
pub struct RequestSpec {
    http_client: Client,
    base_url: String,
    token: Option<String>,
}

impl RequestSpec {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http_client = Client::builder()
            .default_headers(default_headers)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http_client,
            base_url,
            token: None,
        })
    }

    /// A derived spec whose requests carry an `Authorization` header.
    ///
    /// The token is sent verbatim: the service issues access tokens that
    /// already include the `Bearer ` prefix.
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            token: Some(token.to_owned()),
            ..self.clone()
        }
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http_client.request(method, url);
        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, token);
        }
        builder
    }
}
