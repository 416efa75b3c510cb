//! Network existence probes
//!
//! A probe answers one question: does this URL resolve to a reachable,
//! non-error resource? A transient network failure is indistinguishable
//! from "does not exist" and is reported as such — no retries.

use reqwest::blocking::Client;

/// Existence check for a URL-like resource locator
pub trait Probe {
    /// One blocking round-trip; true iff the response status is below 400
    fn exists(&self, url: &str) -> bool;
}

/// Probe backed by a blocking HTTP client
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!("gitpip/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }
}

impl Default for HttpProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl Probe for HttpProbe {
    fn exists(&self, url: &str) -> bool {
        match self.client.get(url).send() {
            Ok(response) => status_is_success(response.status().as_u16()),
            Err(_) => false,
        }
    }
}

fn status_is_success(status: u16) -> bool {
    status < 400
}
