use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap_complete::{generate_to, shells::Shell};

include!("src/options/args.rs");

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    if let Err(err) = &res {
        eprintln!(
            "Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...",
        );
    }

    res
}

fn generate_completions_and_manpage() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/speedcheck/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/speedcheck/manpage/";

    let completion_out_dir = PathBuf::from(COMPLETION_DIR);
    let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

    create_dir(&completion_out_dir)?;
    create_dir(&manpage_out_dir)?;

    // Generate completions
    let mut cmd = build_cmd();
    for shell in [
        Shell::Bash,
        Shell::Zsh,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Elvish,
    ] {
        generate_to(shell, &mut cmd, "speedcheck", &completion_out_dir)?;
    }

    // Generate manpage
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(manpage_out_dir.join("speedcheck.1"), buffer)?;

    Ok(())
}

fn main() -> Result<()> {
    if env::var_os("SPEEDCHECK_GENERATE").is_some_and(|var| !var.is_empty()) {
        generate_completions_and_manpage()?;
    }

    println!("cargo:rerun-if-env-changed=SPEEDCHECK_GENERATE");

    Ok(())
}
