use crate::environment::path_list;
use crate::{ui, Config, SdkRoot};
use anyhow::Result;

pub fn execute(root: &SdkRoot) -> Result<()> {
    let config = Config::load(&root.config_path())?;
    let qt = config.qt_path(None);

    println!("SDK root: {}", root.dir().display());
    println!("Qt path:  {}", qt.display());

    let versions = root.installed_versions();
    if versions.is_empty() {
        println!("Installed versions: none");
    } else {
        println!("Installed versions: {}", versions.join(", "));
    }

    match root.resolve(&qt) {
        Ok(toolchain) => {
            let current = root.current_version().unwrap_or_default();
            println!("Current version: {}", current);
            if toolchain.validate().is_err() {
                ui::warn(format!(
                    "Active version directory is missing: {}",
                    toolchain.sdk_path.display()
                ));
            }
            println!();
            println!("CMAKE_PREFIX_PATH: {}", path_list(&toolchain.cmake_prefix_path));
            println!("QML_IMPORT_PATH:   {}", path_list(&toolchain.qml_import_path));
        }
        Err(err) => {
            println!("Current version: not set");
            ui::warn(err);
        }
    }

    Ok(())
}
