use nuggets_parser::DEFAULT_MAX_DEPTH;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Nuggets nested deeper than this are copied through untranslated.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Parse a TOML document such as `max-depth = 16`. Missing keys keep their
    /// defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}

#[derive(Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn reads_kebab_case_keys() {
        let cfg = Config::from_toml("max-depth = 3").unwrap();
        assert_eq!(cfg.max_depth, 3);
    }

    #[test]
    fn builder_overrides_defaults() {
        let cfg = ConfigBuilder::default().max_depth(8).build();
        assert_eq!(cfg.max_depth, 8);
    }

    #[test]
    fn rejects_wrong_value_type() {
        assert!(Config::from_toml("max-depth = \"deep\"").is_err());
    }
}
