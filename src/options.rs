//! How to handle config files and arguments.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
pub use config::{style::Styles, Config};
pub use error::OptionError;
pub(crate) use error::OptionResult;

use self::{args::SpeedArgs, config::StringOrNum};
use crate::{
    app::AppConfigFields,
    constants::*,
    measurement::{runner::PhaseDelays, shared_source, RandomSource, SharedSource},
};

/// Returns the config path to use. If `override_config_path` is specified, then
/// we will use that. If not, then return the default config path, which is
/// `<config dir>/speedcheck/speedcheck.toml`.
pub fn get_config_path(override_config_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        return Some(conf_loc.to_path_buf());
    }

    dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION))
}

/// Get the config at `config_path`. If there is no config file at the specified
/// path, it will try to create a new file with the default settings, and return
/// the default config.
///
/// We're going to use the following behaviour on when we'll return an error rather
/// than just "silently" continuing on:
/// - If the user passed in a path explicitly, then we will be loud and error out.
/// - If the user does NOT pass in a path explicitly, then just show a warning,
///   but continue. This is in case they do not want to write a default config file at
///   the default location, for example.
pub fn get_or_create_config(config_path: Option<&Path>) -> anyhow::Result<Config> {
    let adjusted_config_path = get_config_path(config_path);

    match &adjusted_config_path {
        Some(path) => {
            if let Ok(config_string) = fs::read_to_string(path) {
                Ok(toml_edit::de::from_str(&config_string).map_err(OptionError::from)?)
            } else {
                match create_config_at_path(path) {
                    Ok(config) => Ok(config),
                    Err(err) => {
                        if config_path.is_some() {
                            Err(err.context(format!(
                                "speedcheck could not create a new config file at '{}'.",
                                path.display()
                            )))
                        } else {
                            crate::c_warn!(
                                "Could not create a config file at '{}': {err}",
                                path.display()
                            );
                            Ok(Config::default())
                        }
                    }
                }
            }
        }
        None => {
            // If we somehow don't have any config path, then just assume the default config
            // but don't write to any file.
            Ok(Config::default())
        }
    }
}

fn create_config_at_path(path: &Path) -> anyhow::Result<Config> {
    if let Some(parent_path) = path.parent() {
        fs::create_dir_all(parent_path)?;
    }

    let mut file = fs::File::create(path)?;
    file.write_all(CONFIG_TEXT.as_bytes())?;
    Ok(Config::default())
}

/// Resolves the settings the app runs with from the arguments and the config
/// file. Arguments win over the config, which wins over the defaults.
pub fn init_app(args: &SpeedArgs, config: &Config) -> anyhow::Result<(AppConfigFields, Styles)> {
    let delays = PhaseDelays {
        ping: get_delay(
            args.test.ping_delay.as_deref(),
            config.test.ping_delay.as_ref(),
            "ping_delay",
            DEFAULT_PING_DELAY,
        )?,
        download: get_delay(
            args.test.download_delay.as_deref(),
            config.test.download_delay.as_ref(),
            "download_delay",
            DEFAULT_DOWNLOAD_DELAY,
        )?,
        upload: get_delay(
            args.test.upload_delay.as_deref(),
            config.test.upload_delay.as_ref(),
            "upload_delay",
            DEFAULT_UPLOAD_DELAY,
        )?,
    };

    let app_config_fields = AppConfigFields {
        delays,
        seed: get_seed(args, config)?,
        autostart: is_flag_enabled(args.test.autostart, config.test.autostart),
        disable_click: is_flag_enabled(args.general.disable_click, config.test.disable_click),
    };

    let styles = Styles::new(&config.styles).context("Found an issue while setting styles.")?;

    Ok((app_config_fields, styles))
}

/// The source measurements are drawn from. Seeded sources repeat the same
/// sequence every launch.
pub fn get_source(app_config_fields: &AppConfigFields) -> SharedSource {
    match app_config_fields.seed {
        Some(seed) => shared_source(RandomSource::seeded(seed)),
        None => shared_source(RandomSource::new()),
    }
}

/// A flag is on if it was passed as an argument or enabled in the config.
fn is_flag_enabled(arg: bool, config: Option<bool>) -> bool {
    arg || config.unwrap_or(false)
}

/// Parses a time in milliseconds or a human duration like `1s` or `1500ms`.
fn try_parse_ms(s: &str) -> Result<Duration, ()> {
    if let Ok(ms) = s.parse::<u64>() {
        Ok(Duration::from_millis(ms))
    } else if let Ok(duration) = humantime::parse_duration(s) {
        Ok(duration)
    } else {
        Err(())
    }
}

fn get_delay(
    arg: Option<&str>, config: Option<&StringOrNum>, key: &str, default: Duration,
) -> OptionResult<Duration> {
    if let Some(delay) = arg {
        try_parse_ms(delay.trim()).map_err(|_| OptionError::invalid_arg_value(key))
    } else if let Some(delay) = config {
        match delay {
            StringOrNum::String(s) => try_parse_ms(s.trim())
                .map_err(|_| OptionError::invalid_config_value(&format!("test.{key}"))),
            StringOrNum::Num(ms) => Ok(Duration::from_millis(*ms)),
        }
    } else {
        Ok(default)
    }
}

fn get_seed(args: &SpeedArgs, config: &Config) -> OptionResult<Option<u64>> {
    if let Some(seed) = &args.test.seed {
        seed.trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| OptionError::invalid_arg_value("seed"))
    } else {
        Ok(config.test.seed)
    }
}
