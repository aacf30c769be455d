use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub contacts: ContactsConfig,
    #[serde(default)]
    pub mirror: MirrorConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// Which backend serves the `allPersons` listing. Mutations always target the
/// local store, so `Mirror` deliberately reproduces the read/write divergence
/// of the original deployment and must be opted into.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactSource {
    #[default]
    Local,
    Mirror,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ContactsConfig {
    #[serde(default)]
    pub source: ContactSource,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MirrorConfig {
    #[serde(default = "default_mirror_base_url")]
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            base_url: default_mirror_base_url(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("PHONEBOOK").separator("__"));
        let cfg = builder.build()?;
        cfg.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_mirror_base_url() -> String {
    "http://localhost:3000".to_string()
}

#[cfg(test)]
mod tests {
    use super::{Config, ContactSource};
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        env::remove_var("PHONEBOOK__APP__PORT");
        env::remove_var("PHONEBOOK__CONTACTS__SOURCE");
        env::remove_var("PHONEBOOK__MIRROR__BASE_URL");
    }

    #[test]
    #[serial]
    fn defaults_match_tutorial_deployment() {
        clear_env_vars();

        let config = Config::from_env().expect("expected configuration to load");

        assert_eq!(config.bind_address(), "0.0.0.0:4000");
        assert_eq!(config.contacts.source, ContactSource::Local);
        assert_eq!(config.mirror.base_url, "http://localhost:3000");

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn environment_overrides_port_and_source() {
        clear_env_vars();
        env::set_var("PHONEBOOK__APP__PORT", "8080");
        env::set_var("PHONEBOOK__CONTACTS__SOURCE", "mirror");
        env::set_var("PHONEBOOK__MIRROR__BASE_URL", "http://localhost:3001");

        let config = Config::from_env().expect("expected configuration to load");

        assert_eq!(config.app.port, 8080);
        assert_eq!(config.contacts.source, ContactSource::Mirror);
        assert_eq!(config.mirror.base_url, "http://localhost:3001");

        clear_env_vars();
    }
}
