//! The request pipeline shared by every ARI endpoint.
//!
//! # Design
//! `AriClient` holds an immutable `ClientConfig` and an injected
//! `Transport`. A call is split in two halves that are public on their own:
//! `build_request` turns (verb, path, params) into an `HttpRequest`, and
//! `parse_response` classifies and decodes an `HttpResponse`. `call` runs
//! both around one transport round-trip. The per-endpoint methods in
//! `resources` are thin wrappers over `get`/`post`/`put`/`delete`.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{AriError, AriResult, ErrorDetail};
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::params::Params;
use crate::transport::UreqTransport;

/// Root every relative endpoint path is mounted under.
pub const API_ROOT: &str = "/ari/";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Synchronous client for one ARI server.
///
/// Safe to share between threads whenever the transport is.
///
/// Endpoint methods insert identifiers (bridge ids, recording names, device
/// names, ...) into the path verbatim. They must already be path-safe:
/// percent-encode spaces, `?`, `#` and `/` before passing them in.
#[derive(Debug, Clone)]
pub struct AriClient<T = UreqTransport> {
    config: ClientConfig,
    transport: T,
}

impl AriClient<UreqTransport> {
    /// Client with the default `ureq` transport, proxy and timeout taken
    /// from `config`.
    pub fn new(config: ClientConfig) -> AriResult<Self> {
        let transport = UreqTransport::new(&config)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Client configured from `ARI_*` environment variables.
    pub fn from_env() -> AriResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T> AriClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn host(&self) -> &str {
        &self.config.host
    }

    pub fn port(&self) -> u16 {
        self.config.port
    }

    pub fn prefix(&self) -> Option<&str> {
        self.config.prefix.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.config.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.config.password.as_deref()
    }

    /// Map an endpoint template to the path sent on the wire.
    ///
    /// `"bridges"` becomes `/ari/bridges`; a path that already starts with
    /// `/` is taken as-is. A configured prefix goes in front of either.
    pub fn resolve_path(&self, path: &str) -> String {
        let rooted = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("{API_ROOT}{path}")
        };
        match self.prefix().map(|p| p.trim_matches('/')).filter(|p| !p.is_empty()) {
            Some(prefix) => format!("/{prefix}{rooted}"),
            None => rooted,
        }
    }

    /// Build the request for one operation without sending it.
    pub fn build_request(&self, method: HttpMethod, path: &str, params: &Params) -> AriResult<HttpRequest> {
        let mut url = format!("{}{}", self.config.base_url(), self.resolve_path(path));
        let mut headers = Vec::new();
        let body = match method {
            HttpMethod::Get => {
                if !params.is_empty() {
                    url.push('?');
                    url.push_str(&params.to_form_string()?);
                }
                None
            }
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete => {
                headers.push(("content-type".to_string(), FORM_CONTENT_TYPE.to_string()));
                Some(params.to_form_string()?)
            }
        };
        if let Some((user, pass)) = self.config.credentials() {
            let token = BASE64.encode(format!("{user}:{pass}"));
            headers.push(("authorization".to_string(), format!("Basic {token}")));
        }
        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Classify a response by status and decode its body.
    pub fn parse_response(&self, response: HttpResponse) -> AriResult<Value> {
        let response = check_status(response)?;
        decode_body(response)
    }
}

impl<T: Transport> AriClient<T> {
    /// Send one request and return the raw response once its status has
    /// been classified as a success.
    pub fn request(&self, method: HttpMethod, path: &str, params: &Params) -> AriResult<HttpResponse> {
        let request = self.build_request(method, path, params)?;
        debug!(method = %request.method, url = %request.url, "sending ARI request");
        let response = self.transport.execute(&request)?;
        debug!(method = %request.method, url = %request.url, status = response.status, "received ARI response");
        check_status(response)
    }

    /// Send one request and decode the response.
    pub fn call(&self, method: HttpMethod, path: &str, params: &Params) -> AriResult<Value> {
        decode_body(self.request(method, path, params)?)
    }

    pub fn get(&self, path: &str, params: &Params) -> AriResult<Value> {
        self.call(HttpMethod::Get, path, params)
    }

    pub fn post(&self, path: &str, params: &Params) -> AriResult<Value> {
        self.call(HttpMethod::Post, path, params)
    }

    pub fn put(&self, path: &str, params: &Params) -> AriResult<Value> {
        self.call(HttpMethod::Put, path, params)
    }

    pub fn delete(&self, path: &str, params: &Params) -> AriResult<Value> {
        self.call(HttpMethod::Delete, path, params)
    }
}

/// 5xx is a server error, 4xx an API error, anything else passes through.
fn check_status(response: HttpResponse) -> AriResult<HttpResponse> {
    match response.status {
        status if status >= 500 => {
            warn!(status, body = %response.body, "ARI server error");
            Err(AriError::Server(ErrorDetail::new(status, &response.body)))
        }
        status if status >= 400 => {
            warn!(status, body = %response.body, "ARI request rejected");
            Err(AriError::Api(ErrorDetail::new(status, &response.body)))
        }
        _ => Ok(response),
    }
}

fn decode_body(response: HttpResponse) -> AriResult<Value> {
    if response.is_json() && !response.body.trim().is_empty() {
        serde_json::from_str(&response.body).map_err(AriError::Decode)
    } else {
        Ok(Value::String(response.body))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Mutex;

    use serde_json::json;

    use super::*;
    use crate::http::TransportError;

    /// Records every request and answers with a canned response.
    pub(crate) struct FakeTransport {
        pub requests: Mutex<Vec<HttpRequest>>,
        response: Result<HttpResponse, fn() -> TransportError>,
    }

    impl FakeTransport {
        pub fn responding(status: u16, content_type: Option<&str>, body: &str) -> Self {
            let headers = content_type
                .map(|ct| vec![("Content-Type".to_string(), ct.to_string())])
                .unwrap_or_default();
            Self {
                requests: Mutex::new(Vec::new()),
                response: Ok(HttpResponse {
                    status,
                    headers,
                    body: body.to_string(),
                }),
            }
        }

        pub fn failing(error: fn() -> TransportError) -> Self {
            Self {
                requests: Mutex::new(Vec::new()),
                response: Err(error),
            }
        }

        pub fn last(&self) -> HttpRequest {
            self.requests.lock().unwrap().last().cloned().expect("no request sent")
        }
    }

    impl Transport for FakeTransport {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.response {
                Ok(response) => Ok(response.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    pub(crate) fn client_with(config: ClientConfig, transport: FakeTransport) -> AriClient<FakeTransport> {
        AriClient::with_transport(config, transport)
    }

    fn empty_ok() -> FakeTransport {
        FakeTransport::responding(204, None, "")
    }

    #[test]
    fn relative_paths_are_rooted_under_ari() {
        let client = client_with(ClientConfig::default(), empty_ok());
        assert_eq!(client.resolve_path("bridges"), "/ari/bridges");
        assert_eq!(client.resolve_path("/custom/thing"), "/custom/thing");
    }

    #[test]
    fn prefix_goes_in_front_of_the_root() {
        let client = client_with(ClientConfig::default().with_prefix("asterisk"), empty_ok());
        assert_eq!(client.resolve_path("bridges"), "/asterisk/ari/bridges");
        assert_eq!(client.resolve_path("/custom/thing"), "/asterisk/custom/thing");

        let slashed = client_with(ClientConfig::default().with_prefix("/asterisk/"), empty_ok());
        assert_eq!(slashed.resolve_path("bridges"), "/asterisk/ari/bridges");
    }

    #[test]
    fn get_puts_params_in_query_and_sends_no_body() {
        let client = client_with(ClientConfig::new("pbx", 8088), empty_ok());
        let params = Params::new().with("variable", "FOO");
        let req = client.build_request(HttpMethod::Get, "asterisk/variable", &params).unwrap();
        assert_eq!(req.url, "http://pbx:8088/ari/asterisk/variable?variable=FOO");
        assert!(req.body.is_none());
        assert!(req.header("content-type").is_none());
    }

    #[test]
    fn get_without_params_has_no_query() {
        let client = client_with(ClientConfig::default(), empty_ok());
        let req = client.build_request(HttpMethod::Get, "bridges", &Params::new()).unwrap();
        assert_eq!(req.url, "http://localhost:8088/ari/bridges");
    }

    #[test]
    fn get_json_encodes_structured_values() {
        let client = client_with(ClientConfig::default(), empty_ok());
        let vars = json!({"CALLERID(name)": "Alice"}).as_object().cloned().unwrap();
        let params = Params::new().with("variables", vars);
        let req = client.build_request(HttpMethod::Get, "channels", &params).unwrap();
        assert_eq!(
            req.url,
            "http://localhost:8088/ari/channels?variables=%7B%22CALLERID%28name%29%22%3A%22Alice%22%7D"
        );
    }

    #[test]
    fn mutating_verbs_send_form_bodies() {
        let client = client_with(ClientConfig::default(), empty_ok());
        let params = Params::new().with("variable", "FOO").with("value", "BAR");
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete] {
            let req = client.build_request(method, "asterisk/variable", &params).unwrap();
            assert_eq!(req.url, "http://localhost:8088/ari/asterisk/variable", "{method}");
            assert_eq!(req.body.as_deref(), Some("variable=FOO&value=BAR"), "{method}");
            assert_eq!(req.header("content-type"), Some(FORM_CONTENT_TYPE), "{method}");
        }
    }

    #[test]
    fn mutating_verb_without_params_has_empty_body() {
        let client = client_with(ClientConfig::default(), empty_ok());
        let req = client.build_request(HttpMethod::Post, "channels/1.0/answer", &Params::new()).unwrap();
        assert_eq!(req.body.as_deref(), Some(""));
    }

    #[test]
    fn basic_auth_is_applied_to_every_verb() {
        let config = ClientConfig::default().with_credentials("asterisk", "asterisk");
        let client = client_with(config, empty_ok());
        for method in [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete] {
            let req = client.build_request(method, "bridges", &Params::new()).unwrap();
            assert_eq!(req.header("Authorization"), Some("Basic YXN0ZXJpc2s6YXN0ZXJpc2s="), "{method}");
        }
    }

    #[test]
    fn no_auth_header_without_credentials() {
        let client = client_with(ClientConfig::default(), empty_ok());
        let req = client.build_request(HttpMethod::Get, "bridges", &Params::new()).unwrap();
        assert!(req.header("authorization").is_none());
    }

    #[test]
    fn port_443_uses_https() {
        let client = client_with(ClientConfig::new("pbx.example.com", 443), empty_ok());
        let req = client.build_request(HttpMethod::Get, "asterisk/info", &Params::new()).unwrap();
        assert_eq!(req.url, "https://pbx.example.com:443/ari/asterisk/info");
    }

    #[test]
    fn server_error_carries_status_and_raw_body() {
        let client = client_with(ClientConfig::default(), FakeTransport::responding(500, None, "  boom\n"));
        let err = client.get("asterisk/info", &Params::new()).unwrap_err();
        match err {
            AriError::Server(detail) => {
                assert_eq!(detail.status, 500);
                assert_eq!(detail.body, "  boom\n");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn client_error_carries_decoded_detail() {
        let transport = FakeTransport::responding(404, Some("application/json"), r#"{"message":"not found"}"#);
        let client = client_with(ClientConfig::default(), transport);
        let err = client.get("bridges/nope", &Params::new()).unwrap_err();
        assert!(err.is_api_error());
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.data(), Some(&json!({"message": "not found"})));
        assert_eq!(err.message(), Some("not found"));
    }

    #[test]
    fn client_error_with_undecodable_body_has_no_detail() {
        let transport = FakeTransport::responding(400, Some("text/html"), "<h1>Bad</h1>");
        let client = client_with(ClientConfig::default(), transport);
        let err = client.post("bridges", &Params::new()).unwrap_err();
        assert!(err.is_api_error());
        assert!(err.data().is_none());
        assert_eq!(err.body(), Some("<h1>Bad</h1>"));
    }

    #[test]
    fn json_bodies_are_decoded() {
        let transport = FakeTransport::responding(200, Some("application/json"), "[]");
        let client = client_with(ClientConfig::default(), transport);
        assert_eq!(client.get("bridges", &Params::new()).unwrap(), json!([]));
    }

    #[test]
    fn non_json_bodies_are_returned_as_text() {
        let client = client_with(ClientConfig::default(), FakeTransport::responding(200, None, ""));
        assert_eq!(client.get("bridges", &Params::new()).unwrap(), json!(""));

        let client = client_with(ClientConfig::default(), FakeTransport::responding(200, Some("text/plain"), "pong"));
        assert_eq!(client.get("asterisk/ping", &Params::new()).unwrap(), json!("pong"));
    }

    #[test]
    fn empty_json_body_decodes_to_empty_string() {
        let transport = FakeTransport::responding(204, Some("application/json"), "");
        let client = client_with(ClientConfig::default(), transport);
        assert_eq!(client.delete("bridges/b1", &Params::new()).unwrap(), json!(""));
    }

    #[test]
    fn malformed_json_on_success_is_a_decode_error() {
        let transport = FakeTransport::responding(200, Some("application/json"), "{oops");
        let client = client_with(ClientConfig::default(), transport);
        let err = client.get("bridges", &Params::new()).unwrap_err();
        assert!(matches!(err, AriError::Decode(_)));
    }

    #[test]
    fn transport_failures_are_not_status_errors() {
        let transport = FakeTransport::failing(|| TransportError::Timeout("read".into()));
        let client = client_with(ClientConfig::default(), transport);
        let err = client.get("bridges", &Params::new()).unwrap_err();
        assert!(matches!(err, AriError::Transport(TransportError::Timeout(_))));
        assert!(err.status().is_none());
    }

    #[test]
    fn request_returns_raw_response_on_success() {
        let transport = FakeTransport::responding(200, Some("application/json"), r#"{"id":"b1"}"#);
        let client = client_with(ClientConfig::default(), transport);
        let response = client.request(HttpMethod::Get, "bridges/b1", &Params::new()).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.body, r#"{"id":"b1"}"#);
    }

    #[test]
    fn call_sends_what_build_request_produces() {
        let config = ClientConfig::new("pbx", 8088).with_prefix("asterisk").with_credentials("u", "p");
        let client = client_with(config, empty_ok());
        let params = Params::new().with("type", "mixing");
        client.post("bridges", &params).unwrap();
        let sent = client.transport().last();
        assert_eq!(sent, client.build_request(HttpMethod::Post, "bridges", &params).unwrap());
        assert_eq!(sent.url, "http://pbx:8088/asterisk/ari/bridges");
    }

    #[test]
    fn parse_response_matches_call_classification() {
        let client = client_with(ClientConfig::default(), empty_ok());
        let response = HttpResponse {
            status: 503,
            headers: Vec::new(),
            body: "unavailable".to_string(),
        };
        assert!(client.parse_response(response).unwrap_err().is_server_error());
    }

    #[test]
    fn accessors_expose_config() {
        let config = ClientConfig::new("pbx", 8089).with_prefix("p").with_credentials("u", "s");
        let client = client_with(config, empty_ok());
        assert_eq!(client.host(), "pbx");
        assert_eq!(client.port(), 8089);
        assert_eq!(client.prefix(), Some("p"));
        assert_eq!(client.username(), Some("u"));
        assert_eq!(client.password(), Some("s"));
    }

    #[test]
    fn default_client_uses_ureq_transport_with_config_proxy() {
        let config = ClientConfig::default().with_proxy(crate::config::ProxyConfig::new("proxy.local", 3128));
        let client = AriClient::new(config).unwrap();
        assert_eq!(client.transport().proxy_url(), Some("http://proxy.local:3128"));
    }
}
