use anyhow::{bail, Context};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::level_filters::LevelFilter;

/// How `try_combine` treats combinator tokens outside `' '`, `'>'`, `'+'`, `'~'`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CombinatorPolicy {
    #[default]
    Permissive,
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub combinators: CombinatorPolicy,
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text).context("invalid cssbuild configuration")?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn update(&mut self, update: &Value) -> anyhow::Result<()> {
        if let Value::Object(update) = update {
            self.update_by_map(update)
        } else {
            bail!("got invalid configuration object {update}")
        }
    }

    /// Applies the recognised keys of `update`; unknown keys are ignored.
    pub fn update_by_map(&mut self, update: &Map<String, Value>) -> anyhow::Result<()> {
        if let Some(combinators) = update.get("combinators") {
            self.combinators = CombinatorPolicy::deserialize(combinators)
                .with_context(|| format!("invalid combinator policy {combinators}"))?;
        }
        if let Some(log_level) = update.get("logLevel") {
            let log_level = Option::<String>::deserialize(log_level)
                .with_context(|| format!("invalid log level {log_level}"))?;
            if let Some(level) = &log_level {
                parse_level(level)?;
            }
            self.log_level = log_level;
        }
        Ok(())
    }

    pub fn level_filter(&self) -> anyhow::Result<Option<LevelFilter>> {
        self.log_level.as_deref().map(parse_level).transpose()
    }
}

fn parse_level(level: &str) -> anyhow::Result<LevelFilter> {
    match level.parse::<LevelFilter>() {
        Ok(filter) => Ok(filter),
        Err(_) => bail!("unknown log level `{level}`"),
    }
}
