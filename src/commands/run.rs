use crate::environment::Environment;
use crate::{Config, SdkRoot};
use anyhow::{Context, Result};
use std::process::Command;

const HOST_BINARY: &str = if cfg!(windows) { "mpf-host.exe" } else { "mpf-host" };

pub fn execute(root: &SdkRoot, debug: bool, args: Vec<String>) -> Result<()> {
    let config = Config::load(&root.config_path())?;
    let qt = config.qt_path(None);

    let toolchain = root.resolve(&qt)?;
    toolchain.validate()?;

    let host = toolchain.sdk_path.join("bin").join(HOST_BINARY);
    if !host.exists() {
        anyhow::bail!("mpf-host not found at {}", host.display());
    }

    let environment = Environment::from_toolchain(&toolchain);

    if debug {
        eprintln!("Running with environment:");
        for (name, value) in environment.vars() {
            eprintln!("  {}={}", name, value);
        }
    }

    let mut command = Command::new(&host);
    command.args(&args);
    environment.apply_to(&mut command);

    let status = command
        .status()
        .with_context(|| format!("Failed to launch {}", host.display()))?;

    std::process::exit(status.code().unwrap_or(1));
}
