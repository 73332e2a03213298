use crate::{ui, Config, SdkRoot};
use anyhow::Result;

pub fn execute(root: &SdkRoot, qt_path: Option<String>) -> Result<()> {
    let path = root.config_path();
    let mut config = Config::load(&path)?;

    match qt_path {
        Some(raw) => {
            let qt = config.qt_path(Some(raw.as_str()));
            config.qt_path = Some(qt.clone());
            config.save(&path)?;
            ui::success("Saved", format!("default Qt path {}", qt.display()));
        }
        None => match &config.qt_path {
            Some(qt) => println!("{}", qt.display()),
            None => println!(
                "No Qt path configured; platform default is {}",
                config.qt_path(None).display()
            ),
        },
    }

    Ok(())
}
