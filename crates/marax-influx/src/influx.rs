//! Blocking InfluxDB v1 sink.

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::batch::MetricBatch;
use crate::sink::{MetricSink, SinkError};

/// Connection parameters for the InfluxDB v1 `/write` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct InfluxConfig {
    /// Server host name or address.
    pub host: String,
    /// HTTP port (a stock install listens on 8086).
    pub port: u16,
    /// Basic-auth user.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Target database.
    pub database: String,
}

/// Blocking InfluxDB v1 client.
///
/// Constructed once at startup and handed to the reporters; the TCP
/// connection itself is established lazily by the underlying HTTP client
/// and reused across writes for the process lifetime.
#[derive(Debug)]
pub struct InfluxSink {
    client: Client,
    write_url: String,
    config: InfluxConfig,
}

impl InfluxSink {
    /// Build a sink from connection parameters.
    pub fn new(config: InfluxConfig) -> Result<Self, SinkError> {
        let client = Client::builder().build()?;
        let write_url = format!("http://{}:{}/write", config.host, config.port);
        Ok(Self {
            client,
            write_url,
            config,
        })
    }
}

impl MetricSink for InfluxSink {
    fn write(&self, batch: &MetricBatch) -> Result<(), SinkError> {
        let line = batch.to_line_protocol();
        debug!(measurement = batch.measurement(), %line, "writing batch");
        let response = self
            .client
            .post(&self.write_url)
            .query(&[("db", self.config.database.as_str())])
            .basic_auth(&self.config.username, Some(&self.config.password))
            .body(line)
            .send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SinkError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}
