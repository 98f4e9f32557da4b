use crate::error::ConfigError;
use crate::record::LogRecord;
use crate::sink::LogSink;
use reqwest::blocking::Client;
use reqwest::{Method, Url};
use serde::Serialize;
use std::error::Error;

/// Configuration for [`HttpSink`].
#[derive(Clone, Debug)]
pub struct HttpConfig {
    /// Collector host, e.g. "collector.example.com" or "127.0.0.1:8080".
    pub host: String,
    /// URL path on the collector.
    pub url: String,
    /// Request method. GET encodes the payload into the query string,
    /// any other method form-encodes it into the request body.
    pub method: Method,
    /// Use https instead of http.
    pub secure: bool,
    /// Optional Basic auth user/password pair.
    pub credentials: Option<(String, String)>,
}

impl HttpConfig {
    /// Defaults for `host`: path "/log", method GET, plain http, no
    /// credentials.
    pub fn new(host: impl Into<String>) -> Self {
        HttpConfig {
            host: host.into(),
            url: "/log".to_string(),
            method: Method::GET,
            secure: false,
            credentials: None,
        }
    }
}

/// Delivers records to a remote log collector, one request per record.
///
/// Delivery is fire-and-forget: the response body is never inspected
/// and nothing is retried. The request runs inline on the emitting
/// thread, so attaching this sink makes every log call a synchronous
/// network operation.
pub struct HttpSink {
    client: Client,
    endpoint: Url,
    method: Method,
    credentials: Option<(String, String)>,
    identifier: String,
}

impl HttpSink {
    /// Build a sink from `config`, labelling every payload with
    /// `identifier`.
    ///
    /// **Returns**
    /// - `Err(..)` when the host does not form a valid endpoint URL or
    ///   the HTTP client cannot be constructed; both surface to the
    ///   caller at configuration time.
    pub fn new(identifier: impl Into<String>, config: HttpConfig) -> Result<Self, ConfigError> {
        let scheme = if config.secure { "https" } else { "http" };
        let raw = format!("{}://{}{}", scheme, config.host, config.url);
        let endpoint = Url::parse(&raw).map_err(|source| ConfigError::Endpoint {
            endpoint: raw,
            reason: source.to_string(),
        })?;

        let client = Client::builder().build()?;

        Ok(HttpSink {
            client,
            endpoint,
            method: config.method,
            credentials: config.credentials,
            identifier: identifier.into(),
        })
    }

    fn map_record<'a>(&'a self, record: &'a LogRecord) -> HttpPayload<'a> {
        HttpPayload {
            identifier: &self.identifier,
            levelname: record.level.as_str(),
            name: &record.name,
            asctime: record.asctime(),
            filename: &record.filename,
            lineno: record.line,
            message: &record.message,
        }
    }
}

/// Wire shape of one record. Exactly these seven fields form the
/// collector's schema; nothing else is ever sent.
#[derive(Serialize)]
struct HttpPayload<'a> {
    identifier: &'a str,
    levelname: &'a str,
    name: &'a str,
    asctime: String,
    filename: &'a str,
    lineno: u32,
    message: &'a str,
}

impl LogSink for HttpSink {
    fn send(&self, record: &LogRecord) -> Result<(), Box<dyn Error + Send + Sync>> {
        let payload = self.map_record(record);

        let mut request = self
            .client
            .request(self.method.clone(), self.endpoint.clone());
        request = if self.method == Method::GET {
            request.query(&payload)
        } else {
            request.form(&payload)
        };
        if let Some((user, password)) = &self.credentials {
            request = request.basic_auth(user, Some(password));
        }

        let response = request.send()?;
        if !response.status().is_success() {
            return Err(format!("log collector returned status {}", response.status()).into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    #[test]
    fn payload_carries_exactly_the_collector_schema() {
        let sink = HttpSink::new("node-2", HttpConfig::new("collector.example.com")).unwrap();
        let record =
            LogRecord::new(Level::Error, "flower", "src/client.rs", 77, "failed: timeout");

        let value = serde_json::to_value(sink.map_record(&record)).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["asctime", "filename", "identifier", "levelname", "lineno", "message", "name"]
        );
        assert_eq!(object["identifier"], "node-2");
        assert_eq!(object["levelname"], "ERROR");
        assert_eq!(object["name"], "flower");
        assert_eq!(object["filename"], "client.rs");
        assert_eq!(object["lineno"], 77);
        assert_eq!(object["message"], "failed: timeout");
    }

    #[test]
    fn malformed_host_is_rejected_at_construction() {
        let result = HttpSink::new("node-2", HttpConfig::new("exa mple.com"));
        assert!(matches!(result, Err(ConfigError::Endpoint { .. })));
    }

    #[test]
    fn secure_flag_selects_https() {
        let mut config = HttpConfig::new("collector.example.com");
        config.secure = true;
        let sink = HttpSink::new("node-2", config).unwrap();
        assert_eq!(sink.endpoint.scheme(), "https");
        assert_eq!(sink.endpoint.path(), "/log");
    }
}
