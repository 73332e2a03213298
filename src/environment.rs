use std::path::PathBuf;
use std::process::Command;

use crate::sdk::ToolchainConfig;

/// Platform path-list separator
const SEPARATOR: &str = if cfg!(windows) { ";" } else { ":" };

/// Join paths into a single platform path-list value, preserving order
pub fn path_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Shell type for environment generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// POSIX `export` syntax (sh, bash, zsh)
    Sh,
    Fish,
    PowerShell,
    Cmd,
}

impl Shell {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "sh" | "bash" | "zsh" => Some(Shell::Sh),
            "fish" => Some(Shell::Fish),
            "powershell" | "pwsh" => Some(Shell::PowerShell),
            "cmd" | "bat" => Some(Shell::Cmd),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Shell::Sh => "sh",
            Shell::Fish => "fish",
            Shell::PowerShell => "powershell",
            Shell::Cmd => "cmd",
        }
    }

    /// Default shell for the target platform
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Shell::Cmd
        } else {
            Shell::Sh
        }
    }
}

/// Derived environment variables for a resolved toolchain
///
/// The `MPF_`-prefixed mirrors carry the same values as the plain
/// variables so downstream build scripts can tell apart values this tool
/// set from whatever was already in the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    vars: Vec<(&'static str, String)>,
}

impl Environment {
    pub fn from_toolchain(config: &ToolchainConfig) -> Self {
        let cmake = path_list(&config.cmake_prefix_path);
        let qml = path_list(&config.qml_import_path);

        Self {
            vars: vec![
                ("CMAKE_PREFIX_PATH", cmake.clone()),
                ("QML_IMPORT_PATH", qml.clone()),
                ("MPF_CMAKE_PREFIX_PATH", cmake),
                ("MPF_QML_IMPORT_PATH", qml),
            ],
        }
    }

    /// Variable name/value pairs in application order
    pub fn vars(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.vars.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Format the environment as an assignment script for the given shell
    pub fn format_for_shell(&self, shell: Shell) -> String {
        match shell {
            Shell::Sh => self.format_sh(),
            Shell::Fish => self.format_fish(),
            Shell::PowerShell => self.format_powershell(),
            Shell::Cmd => self.format_cmd(),
        }
    }

    fn format_sh(&self) -> String {
        self.lines(|name, value| format!("export {name}=\"{value}\""))
    }

    fn format_fish(&self) -> String {
        self.lines(|name, value| format!("set -gx {name} \"{value}\""))
    }

    fn format_powershell(&self) -> String {
        self.lines(|name, value| format!("$env:{name} = \"{value}\""))
    }

    fn format_cmd(&self) -> String {
        self.lines(|name, value| format!("set {name}={value}"))
    }

    fn lines(&self, render: impl Fn(&str, &str) -> String) -> String {
        self.vars()
            .map(|(name, value)| render(name, value))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Apply the variables to a child process
    ///
    /// The calling process's own environment block is never touched.
    pub fn apply_to(&self, command: &mut Command) {
        for (name, value) in self.vars() {
            command.env(name, value);
        }
    }
}
