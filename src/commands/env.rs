use crate::environment::{Environment, Shell};
use crate::{Config, SdkRoot};
use anyhow::Result;

pub fn execute(
    root: &SdkRoot,
    qt_path: Option<String>,
    shell: Option<String>,
    strict: bool,
) -> Result<()> {
    let config = Config::load(&root.config_path())?;
    let qt = config.qt_path(qt_path.as_deref());

    let toolchain = root.resolve(&qt)?;
    if strict {
        toolchain.validate()?;
    }

    let shell = match shell.as_deref() {
        Some(name) => Shell::from_name(name).unwrap_or_else(|| {
            let fallback = Shell::platform_default();
            eprintln!("Unknown shell '{}'; defaulting to {}.", name, fallback.as_str());
            fallback
        }),
        None => Shell::platform_default(),
    };

    println!("{}", Environment::from_toolchain(&toolchain).format_for_shell(shell));

    Ok(())
}
