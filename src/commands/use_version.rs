use crate::{ui, SdkRoot};
use anyhow::Result;

pub fn execute(root: &SdkRoot, version: &str) -> Result<()> {
    let Some(installed) = root.find_installed(version) else {
        anyhow::bail!(
            "Version '{}' is not installed; run `mpf-dev versions` to list installed SDKs",
            version
        );
    };

    root.set_current_version(&installed)?;
    ui::success("Activated", format!("SDK {}", installed));

    Ok(())
}
