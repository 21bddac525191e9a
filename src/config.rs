use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub agent_config: AgentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Settings for the agent webhook. The URL may be left empty; calls made
/// without one fail locally before any network attempt.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default)]
    pub webhook_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    12870
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON/JSON-LD or YAML file, chosen by
    /// extension. `${VAR_NAME}` references are substituted from the
    /// environment before parsing, so webhook URLs can stay out of the file.
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let content = substitute_env_vars(&content);

        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

/// Replace `${VAR_NAME}` with the environment value, leaving unknown
/// references untouched.
fn substitute_env_vars(content: &str) -> String {
    let pattern = Regex::new(r"\$\{(\w+)\}").unwrap();
    pattern
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = caps.get(1).unwrap().as_str();
            std::env::var(var_name).unwrap_or_else(|_| caps.get(0).unwrap().as_str().to_string())
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_config_parses_with_defaults() {
        let config: Config =
            serde_yaml::from_str("agent_config:\n  webhook_url: http://hook.test/agente\n")
                .unwrap();

        assert_eq!(config.agent_config.webhook_url, "http://hook.test/agente");
        assert_eq!(config.system_config.port, default_port());
    }

    #[test]
    fn unknown_env_references_are_left_untouched() {
        let content = "url: ${AGENTE_SURELY_UNSET_VAR}";
        assert_eq!(substitute_env_vars(content), content);
    }
}
