use crate::SdkRoot;
use anyhow::Result;

pub fn execute(root: &SdkRoot) -> Result<()> {
    let versions = root.installed_versions();

    if versions.is_empty() {
        println!("No SDK versions installed.");
        println!("Run the SDK setup to install one.");
        return Ok(());
    }

    let current = root.current_version().ok();

    println!("Installed SDK versions:");
    for version in &versions {
        if Some(version) == current.as_ref() {
            println!("  * {} (current)", version);
        } else {
            println!("    {}", version);
        }
    }

    Ok(())
}
