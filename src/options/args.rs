// Argument parsing via clap.
//
// Note that you probably want to keep this as a single file so the build script doesn't
// trip all over itself.

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "speedcheck [OPTIONS]";

/// The arguments for speedcheck.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    author = crate_authors!(),
    about = crate_description!(),
    disable_help_flag = true,
    disable_version_flag = true,
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct SpeedArgs {
    #[command(flatten)]
    pub general: GeneralArgs,

    #[command(flatten)]
    pub test: TestArgs,

    #[command(flatten)]
    pub other: OtherArgs,
}

/// General arguments.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options", rename_all = "snake_case")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "Disables mouse clicks.",
        long_help = "Disables mouse clicks. The test can still be started with the keyboard."
    )]
    pub disable_click: bool,
}

/// Arguments that change how a test runs.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Test Options", rename_all = "snake_case")]
pub struct TestArgs {
    #[arg(
        long,
        action = ArgAction::SetTrue,
        help = "Starts a test as soon as the program launches."
    )]
    pub autostart: bool,

    #[arg(
        long,
        value_name = "TIME",
        help = "How long the download phase takes.",
        long_help = "How long the download phase takes. Takes a number in milliseconds or a human \
                    duration (e.g. 2s). Defaults to 2s."
    )]
    pub download_delay: Option<String>,

    #[arg(
        long,
        value_name = "TIME",
        help = "How long the ping phase takes.",
        long_help = "How long the ping phase takes. Takes a number in milliseconds or a human \
                    duration (e.g. 1s). Defaults to 1s."
    )]
    pub ping_delay: Option<String>,

    #[arg(
        long,
        value_name = "N",
        help = "Seeds the measurement source.",
        long_help = "Seeds the measurement source, so every launch with the same seed produces the \
                    same sequence of results."
    )]
    pub seed: Option<String>,

    #[arg(
        long,
        value_name = "TIME",
        help = "How long the upload phase takes.",
        long_help = "How long the upload phase takes. Takes a number in milliseconds or a human \
                    duration (e.g. 2s). Defaults to 2s."
    )]
    pub upload_delay: Option<String>,
}

/// Other arguments. This just handles options that are for help/version
/// displaying.
#[derive(Args, Clone, Debug, Default)]
#[command(next_help_heading = "Other Options", rename_all = "snake_case")]
pub struct OtherArgs {
    #[arg(short = 'h', long, action = ArgAction::Help, help = "Prints help info (for more details use '--help').")]
    help: (),

    #[arg(short = 'V', long, action = ArgAction::Version, help = "Prints version information.")]
    version: (),
}

/// Returns a [`SpeedArgs`].
pub fn get_args() -> SpeedArgs {
    SpeedArgs::parse()
}

/// Returns an [`Command`] based off of [`SpeedArgs`].
pub fn build_cmd() -> Command {
    SpeedArgs::command()
}
