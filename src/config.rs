use crate::constant;

/// The three values the bot cannot run without, read once at startup and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub discord_token: String,
    pub openai_api_key: String,
    pub system_prompt: String,
}
impl Configuration {
    /// Loads the configuration from the process environment. Fails if any
    /// required variable is absent or blank, naming every missing one.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut missing = vec![];
        let mut require = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => Some(value),
            _ => {
                missing.push(key);
                None
            }
        };

        let discord_token = require(constant::env::DISCORD_BOT_TOKEN);
        let openai_api_key = require(constant::env::OPENAI_API_KEY);
        let system_prompt = require(constant::env::FULL_PROMPT);

        match (discord_token, openai_api_key, system_prompt) {
            (Some(discord_token), Some(openai_api_key), Some(system_prompt)) => Ok(Self {
                discord_token,
                openai_api_key,
                system_prompt,
            }),
            _ => anyhow::bail!(
                "Missing one or more environment variables: {}",
                missing.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> HashMap<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load_from(vars: &[(&str, &str)]) -> anyhow::Result<Configuration> {
        let vars = env(vars);
        Configuration::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn loads_when_all_values_are_present() {
        let config = load_from(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("OPENAI_API_KEY", "sk-123"),
            ("FULL_PROMPT", "You are a trading assistant."),
        ])
        .unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.openai_api_key, "sk-123");
        assert_eq!(config.system_prompt, "You are a trading assistant.");
    }

    #[test]
    fn fails_and_names_an_absent_value() {
        let err = load_from(&[("DISCORD_BOT_TOKEN", "token"), ("FULL_PROMPT", "prompt")])
            .unwrap_err()
            .to_string();

        assert!(err.contains("OPENAI_API_KEY"));
        assert!(!err.contains("DISCORD_BOT_TOKEN"));
    }

    #[test]
    fn treats_a_blank_value_as_missing() {
        let err = load_from(&[
            ("DISCORD_BOT_TOKEN", "   "),
            ("OPENAI_API_KEY", "sk-123"),
            ("FULL_PROMPT", "prompt"),
        ])
        .unwrap_err()
        .to_string();

        assert!(err.contains("DISCORD_BOT_TOKEN"));
    }

    #[test]
    fn names_every_missing_value_at_once() {
        let err = load_from(&[]).unwrap_err().to_string();

        assert!(err.contains("DISCORD_BOT_TOKEN"));
        assert!(err.contains("OPENAI_API_KEY"));
        assert!(err.contains("FULL_PROMPT"));
    }
}
