//! Browser fetch behind the core `Transport` trait

use gloo_net::http::Request;
use stockbook_core::{HttpReply, Transport, TransportError};

/// gloo-net transport; one instance per call is fine, it holds nothing
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        let response = Request::get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            log::debug!("GET {url} answered {status}");
        }

        let body = response.text().await.map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(HttpReply { status, body })
    }

    async fn post(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
        // text/plain keeps this a "simple" CORS request; script endpoints do not answer preflights
        let response = Request::post(url)
            .header("Content-Type", "text/plain;charset=utf-8")
            .body(body)
            .map_err(|e| TransportError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        Ok(HttpReply {
            status: response.status(),
            body: String::new(),
        })
    }
}
