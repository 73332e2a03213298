use clap::{Parser, Subcommand};

/// MPF development environment CLI
///
/// mpf-dev resolves which installed MPF SDK version is active (the
/// `current.txt` pointer inside the SDK root, `~/.mpf-sdk` by default)
/// and composes the toolchain search paths a Qt/CMake build needs.
/// Set `MPF_SDK_ROOT` to relocate the SDK root.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print environment variable assignments for the active SDK
    ///
    /// Emits CMAKE_PREFIX_PATH, QML_IMPORT_PATH and their MPF_-prefixed
    /// mirrors, ready to eval in a shell. The Qt path defaults to the
    /// persisted preference (see `qt`) or a stock platform location.
    Env {
        /// Qt installation path
        #[arg(value_name = "QT_PATH")]
        qt_path: Option<String>,

        /// Shell syntax to emit (sh, fish, powershell, cmd)
        #[arg(short, long, value_name = "SHELL")]
        shell: Option<String>,

        /// Fail if the active SDK directory is missing on disk
        #[arg(long)]
        strict: bool,
    },

    /// Show SDK root, active version, and resolved paths
    Status,

    /// List installed SDK versions
    Versions,

    /// Switch to an installed SDK version
    Use {
        /// Version to activate (with or without a leading `v`)
        #[arg(value_name = "VERSION")]
        version: String,
    },

    /// Show or persist the default Qt installation path
    Qt {
        /// Qt installation path to persist (prints the current one if omitted)
        #[arg(value_name = "QT_PATH")]
        qt_path: Option<String>,
    },

    /// Run mpf-host with the resolved environment applied
    Run {
        /// Print the applied environment before launching
        #[arg(short, long)]
        debug: bool,

        /// Additional arguments passed through to mpf-host
        #[arg(last = true, value_name = "ARGS")]
        args: Vec<String>,
    },
}
