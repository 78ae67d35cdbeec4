use serde::Deserialize;

use super::StringOrNum;

/// Options under `[test]`, controlling how a test runs.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub(crate) struct RunConfig {
    pub(crate) ping_delay: Option<StringOrNum>,
    pub(crate) download_delay: Option<StringOrNum>,
    pub(crate) upload_delay: Option<StringOrNum>,
    pub(crate) seed: Option<u64>,
    pub(crate) autostart: Option<bool>,
    pub(crate) disable_click: Option<bool>,
}
