//! Configuration for Cellar
//!
//! Connection settings for the wrapped column-family store, with
//! sensible single-node defaults.

/// Connection configuration for a Cellar facade
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Coordination Service
    // -------------------------------------------------------------------------
    /// Coordination-service addresses of the wrapped store
    /// (e.g. the ZooKeeper quorum of an HBase cluster)
    pub quorum_hosts: Vec<String>,

    /// Coordination-service client port
    pub client_port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quorum_hosts: vec!["127.0.0.1".to_string()],
            client_port: 2181,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Quorum addresses joined into a single connect string
    /// (`"host1,host2"`), the form most store clients expect
    pub fn quorum(&self) -> String {
        self.quorum_hosts.join(",")
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the coordination-service quorum hosts, replacing the default
    pub fn quorum_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.quorum_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Set the coordination-service client port
    pub fn client_port(mut self, port: u16) -> Self {
        self.config.client_port = port;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
