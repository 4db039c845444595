use std::net::IpAddr;

/// Server specific information attached to a response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerInfo {
    /// product tokens, written to the `Server` header
    pub agent: Option<String>,
    pub address: Option<IpAddr>,
    pub port: Option<u16>,
}

impl ServerInfo {
    pub fn new(agent: impl Into<String>) -> Self {
        Self { agent: Some(agent.into()), ..Default::default() }
    }
}
