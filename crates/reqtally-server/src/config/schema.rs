use std::net::SocketAddr;

use reqtally_core::error::{ReqTallyError, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub telemetry: TelemetrySection,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            telemetry: TelemetrySection::default(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ReqTallyError::UnsupportedVersion);
        }

        let server = self.server.listen_addr()?;
        let telemetry = self.telemetry.listen_addr()?;

        // Port 0 binds are always distinct once resolved.
        if server == telemetry && server.port() != 0 {
            return Err(ReqTallyError::Config(
                "server.listen and telemetry.listen must differ".into(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_server_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_server_listen(),
        }
    }
}

impl ServerSection {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| ReqTallyError::Config(format!("server.listen: {e}")))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetrySection {
    #[serde(default = "default_telemetry_listen")]
    pub listen: String,
}

impl Default for TelemetrySection {
    fn default() -> Self {
        Self {
            listen: default_telemetry_listen(),
        }
    }
}

impl TelemetrySection {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen
            .parse()
            .map_err(|e| ReqTallyError::Config(format!("telemetry.listen: {e}")))
    }
}

fn default_server_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_telemetry_listen() -> String {
    "0.0.0.0:2222".into()
}
