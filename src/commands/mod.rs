use crate::cli::{Cli, Commands};
use crate::SdkRoot;
use anyhow::Result;

mod env;
mod qt;
mod run;
mod status;
mod use_version;
mod versions;

pub fn execute(cli: Cli) -> Result<()> {
    // Locate the SDK root - this is the root entry point
    let root = SdkRoot::discover()?;

    match cli.command {
        Commands::Env {
            qt_path,
            shell,
            strict,
        } => env::execute(&root, qt_path, shell, strict),

        Commands::Status => status::execute(&root),

        Commands::Versions => versions::execute(&root),

        Commands::Use { version } => use_version::execute(&root, &version),

        Commands::Qt { qt_path } => qt::execute(&root, qt_path),

        Commands::Run { debug, args } => run::execute(&root, debug, args),
    }
}
