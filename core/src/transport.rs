//! Default blocking transport built on `ureq`.
//!
//! The agent is configured once from `ClientConfig`: proxy and timeouts are
//! agent-wide, so they apply to every request regardless of verb. Status
//! codes are never turned into errors here; `AriClient` classifies them.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// `Transport` backed by a `ureq::Agent`.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    proxy_url: Option<String>,
    timeout: Option<Duration>,
}

impl UreqTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let proxy_url = config
            .proxy
            .as_ref()
            .map(|proxy| proxy.url())
            .transpose()
            .map_err(|e| TransportError::InvalidProxy(e.to_string()))?;
        let proxy = proxy_url
            .as_deref()
            .map(ureq::Proxy::new)
            .transpose()
            .map_err(|e| TransportError::InvalidProxy(e.to_string()))?;

        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .proxy(proxy)
            .timeout_connect(config.timeout)
            .timeout_recv_response(config.timeout)
            .timeout_recv_body(config.timeout)
            .build()
            .new_agent();

        Ok(Self {
            agent,
            proxy_url,
            timeout: config.timeout,
        })
    }

    /// Proxy URL the agent routes through, if any.
    pub fn proxy_url(&self) -> Option<&str> {
        self.proxy_url.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();
        let headers = request.headers.as_slice();
        let body = request.body.as_deref().unwrap_or_default().as_bytes();

        let result = match request.method {
            HttpMethod::Get => with_headers(self.agent.get(url), headers).call(),
            HttpMethod::Post => with_headers(self.agent.post(url), headers).send(body),
            HttpMethod::Put => with_headers(self.agent.put(url), headers).send(body),
            HttpMethod::Delete if body.is_empty() => with_headers(self.agent.delete(url), headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(url), headers)
                .force_send_body()
                .send(body),
        };
        let mut response = result.map_err(classify)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.body_mut().read_to_string().map_err(classify)?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

fn classify(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout(err.to_string()),
        ureq::Error::HostNotFound => TransportError::HostNotFound(err.to_string()),
        ureq::Error::ConnectionFailed | ureq::Error::Io(_) => TransportError::Connect(err.to_string()),
        ureq::Error::InvalidProxyUrl | ureq::Error::ConnectProxyFailed(_) => {
            TransportError::InvalidProxy(err.to_string())
        }
        other => TransportError::Other(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProxyConfig;

    #[test]
    fn proxy_and_timeout_come_from_config() {
        let config = ClientConfig::default()
            .with_proxy(ProxyConfig::new("proxy.local", 3128).with_credentials("u", "p"))
            .with_timeout(Duration::from_secs(3));
        let transport = UreqTransport::new(&config).unwrap();
        assert_eq!(transport.proxy_url(), Some("http://u:p@proxy.local:3128"));
        assert_eq!(transport.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn no_proxy_by_default() {
        let transport = UreqTransport::new(&ClientConfig::default()).unwrap();
        assert!(transport.proxy_url().is_none());
        assert!(transport.timeout().is_none());
    }

    #[test]
    fn refused_connection_is_a_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = ClientConfig::new("127.0.0.1", port).with_timeout(Duration::from_secs(2));
        let transport = UreqTransport::new(&config).unwrap();
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/ari/asterisk/info", config.base_url()),
            headers: Vec::new(),
            body: None,
        };
        let err = transport.execute(&request).unwrap_err();
        assert!(
            matches!(err, TransportError::Connect(_) | TransportError::Other(_)),
            "unexpected error: {err:?}"
        );
    }
}
