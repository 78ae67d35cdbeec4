pub mod run;
pub mod style;

use serde::Deserialize;

use self::{run::RunConfig, style::StyleConfig};

/// The contents of a config file.
#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    #[serde(default)]
    pub(crate) test: RunConfig,
    #[serde(default)]
    pub(crate) styles: StyleConfig,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}
