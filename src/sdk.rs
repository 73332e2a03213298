use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Pointer file recording the active SDK version name
const POINTER_FILE: &str = "current.txt";

/// Failure to resolve the active SDK toolchain
///
/// Every variant is a configuration-state problem that needs user action;
/// nothing here is transient or worth retrying.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// Pointer file missing, unreadable, or empty after trimming
    #[error(
        "no MPF SDK installed (expected a version name in {}); run the SDK setup first",
        pointer.display()
    )]
    NoSdkInstalled { pointer: PathBuf },

    /// Strict mode only: the pointer names a version with no directory on disk
    #[error(
        "SDK version '{version}' is not installed (missing {})",
        path.display()
    )]
    SdkVersionMissing { version: String, path: PathBuf },
}

/// Resolved toolchain search paths for the active SDK
///
/// Plain data produced fresh on every [`SdkRoot::resolve`] call and owned
/// by the caller. The two lists deliberately disagree on precedence:
/// CMake looks in Qt before the SDK, while QML lookup prefers the SDK's
/// own module tree and falls back to Qt's stock modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Active SDK version directory
    pub sdk_path: PathBuf,
    /// Qt installation the paths were composed against
    pub qt_path: PathBuf,
    /// CMake package search path: `[qt, sdk]`
    pub cmake_prefix_path: Vec<PathBuf>,
    /// QML module search path: `[sdk/qml, qt/qml]`
    pub qml_import_path: Vec<PathBuf>,
}

impl ToolchainConfig {
    /// Strict check that the resolved SDK directory actually exists
    ///
    /// `resolve` itself is lenient and composes paths without touching the
    /// filesystem beyond the pointer read; callers that need the directory
    /// opt in here.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.sdk_path.is_dir() {
            return Ok(());
        }

        let version = self
            .sdk_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Err(ResolveError::SdkVersionMissing {
            version,
            path: self.sdk_path.clone(),
        })
    }
}

/// SDK root - the directory holding all installed SDK versions
///
/// One subdirectory per installed version plus the `current.txt` pointer
/// naming the active one. Defaults to `~/.mpf-sdk`; `MPF_SDK_ROOT`
/// overrides the location (with `~` expansion).
#[derive(Debug, Clone)]
pub struct SdkRoot {
    dir: PathBuf,
}

impl SdkRoot {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Locate the SDK root for this invocation
    pub fn discover() -> Result<Self> {
        if let Ok(root) = env::var("MPF_SDK_ROOT") {
            return Ok(Self::new(
                shellexpand::tilde(&root).into_owned(),
            ));
        }

        let base = directories::BaseDirs::new().context("Failed to get home directory")?;
        Ok(Self::new(base.home_dir().join(".mpf-sdk")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the `current.txt` pointer file
    pub fn pointer_path(&self) -> PathBuf {
        self.dir.join(POINTER_FILE)
    }

    /// Path to the tool's config file inside the root
    pub fn config_path(&self) -> PathBuf {
        self.dir.join("config.toml")
    }

    /// Directory a given version is (or would be) installed at
    pub fn version_dir(&self, version: &str) -> PathBuf {
        self.dir.join(version)
    }

    /// Read the active version name from the pointer file
    ///
    /// The pointer holds a single line; surrounding whitespace and the
    /// trailing newline are not significant.
    pub fn current_version(&self) -> Result<String, ResolveError> {
        let pointer = self.pointer_path();
        let contents = fs::read_to_string(&pointer).map_err(|_| ResolveError::NoSdkInstalled {
            pointer: pointer.clone(),
        })?;

        let version = contents.trim();
        if version.is_empty() {
            return Err(ResolveError::NoSdkInstalled { pointer });
        }

        Ok(version.to_string())
    }

    /// Resolve the active SDK into toolchain search paths
    ///
    /// Pure beyond the single pointer-file read: deterministic for a given
    /// pointer state, never mutates anything, and does not require the
    /// version directory to exist (see [`ToolchainConfig::validate`]).
    pub fn resolve(&self, qt_path: &Path) -> Result<ToolchainConfig, ResolveError> {
        let version = self.current_version()?;
        let sdk_path = self.version_dir(&version);

        debug!(version = %version, sdk = %sdk_path.display(), qt = %qt_path.display(), "resolved active SDK");

        Ok(ToolchainConfig {
            cmake_prefix_path: vec![qt_path.to_path_buf(), sdk_path.clone()],
            qml_import_path: vec![sdk_path.join("qml"), qt_path.join("qml")],
            sdk_path,
            qt_path: qt_path.to_path_buf(),
        })
    }

    /// List installed versions, sorted
    ///
    /// Version directories are the subdirectories whose name starts with a
    /// digit or `v`; anything else in the root (the pointer file, tool
    /// config) is skipped.
    pub fn installed_versions(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };

        let mut versions: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .filter(|name| {
                name.starts_with('v')
                    || name.chars().next().map(|c| c.is_ascii_digit()).unwrap_or(false)
            })
            .collect();

        versions.sort();
        versions
    }

    /// Match a requested version against the installed set
    ///
    /// Accepts either spelling of the `v` prefix: `1.2.0` finds an
    /// installed `v1.2.0` and vice versa. Returns the directory name as it
    /// exists on disk.
    pub fn find_installed(&self, requested: &str) -> Option<String> {
        let bare = requested.strip_prefix('v').unwrap_or(requested);
        let candidates = [requested.to_string(), format!("v{bare}"), bare.to_string()];

        candidates
            .into_iter()
            .find(|name| self.version_dir(name).is_dir())
    }

    /// Point `current.txt` at an installed version
    pub fn set_current_version(&self, version: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create SDK root {:?}", self.dir))?;

        let pointer = self.pointer_path();
        fs::write(&pointer, version)
            .with_context(|| format!("Failed to write {:?}", pointer))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serial_test::serial;
    use std::path::Path;
    use tempfile::TempDir;

    fn root_with_pointer(contents: &str) -> (TempDir, SdkRoot) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("current.txt"), contents).unwrap();
        let root = SdkRoot::new(temp.path());
        (temp, root)
    }

    #[test]
    fn test_resolve_composes_paths() {
        let (temp, root) = root_with_pointer("2.1.0\n");
        let qt = Path::new("/opt/qt/6.8.3");

        let config = root.resolve(qt).unwrap();

        assert_eq!(config.sdk_path, temp.path().join("2.1.0"));
        assert_eq!(config.qt_path, qt);
        assert_eq!(
            config.cmake_prefix_path,
            vec![qt.to_path_buf(), temp.path().join("2.1.0")]
        );
        assert_eq!(
            config.qml_import_path,
            vec![temp.path().join("2.1.0/qml"), qt.join("qml")]
        );
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let (_temp, root) = root_with_pointer("v1.4.2");
        let qt = Path::new("/opt/qt/6.8.3");

        let first = root.resolve(qt).unwrap();
        let second = root.resolve(qt).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_resolve_trims_whitespace() {
        let (temp, root) = root_with_pointer("  v1.4.2 \n\n");
        let config = root.resolve(Path::new("/qt")).unwrap();

        assert_eq!(config.sdk_path, temp.path().join("v1.4.2"));
    }

    #[test]
    fn test_missing_pointer_is_no_sdk_installed() {
        let temp = TempDir::new().unwrap();
        let root = SdkRoot::new(temp.path());

        let err = root.resolve(Path::new("/qt")).unwrap_err();
        assert!(matches!(err, ResolveError::NoSdkInstalled { .. }));
    }

    #[test]
    fn test_empty_pointer_is_no_sdk_installed() {
        let (_temp, root) = root_with_pointer("");

        let err = root.resolve(Path::new("/qt")).unwrap_err();
        assert!(matches!(err, ResolveError::NoSdkInstalled { .. }));
    }

    #[test]
    fn test_whitespace_pointer_is_no_sdk_installed() {
        let (_temp, root) = root_with_pointer("  \n  \n");

        let err = root.resolve(Path::new("/qt")).unwrap_err();
        assert!(matches!(err, ResolveError::NoSdkInstalled { .. }));
    }

    #[test]
    fn test_validate_missing_version_dir() {
        let (_temp, root) = root_with_pointer("2.1.0");
        let config = root.resolve(Path::new("/qt")).unwrap();

        let err = config.validate().unwrap_err();
        match err {
            ResolveError::SdkVersionMissing { version, path } => {
                assert_eq!(version, "2.1.0");
                assert!(path.ends_with("2.1.0"));
            }
            other => panic!("expected SdkVersionMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_existing_version_dir() {
        let (temp, root) = root_with_pointer("2.1.0");
        fs::create_dir(temp.path().join("2.1.0")).unwrap();

        let config = root.resolve(Path::new("/qt")).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_installed_versions_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("v1.2.0")).unwrap();
        fs::create_dir(temp.path().join("2.0.0")).unwrap();
        fs::create_dir(temp.path().join("1.4.0")).unwrap();
        fs::create_dir(temp.path().join("downloads")).unwrap();
        fs::write(temp.path().join("current.txt"), "2.0.0").unwrap();

        let root = SdkRoot::new(temp.path());
        assert_eq!(root.installed_versions(), vec!["1.4.0", "2.0.0", "v1.2.0"]);
    }

    #[test]
    fn test_installed_versions_missing_root() {
        let temp = TempDir::new().unwrap();
        let root = SdkRoot::new(temp.path().join("nope"));
        assert!(root.installed_versions().is_empty());
    }

    #[test]
    fn test_find_installed_normalizes_v_prefix() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("v1.2.0")).unwrap();
        fs::create_dir(temp.path().join("2.0.0")).unwrap();

        let root = SdkRoot::new(temp.path());
        assert_eq!(root.find_installed("1.2.0").as_deref(), Some("v1.2.0"));
        assert_eq!(root.find_installed("v1.2.0").as_deref(), Some("v1.2.0"));
        assert_eq!(root.find_installed("v2.0.0").as_deref(), Some("2.0.0"));
        assert_eq!(root.find_installed("3.0.0"), None);
    }

    #[test]
    #[serial]
    fn test_discover_honors_env_override() {
        env::set_var("MPF_SDK_ROOT", "/srv/mpf-sdk");
        let root = SdkRoot::discover().unwrap();
        env::remove_var("MPF_SDK_ROOT");

        assert_eq!(root.dir(), Path::new("/srv/mpf-sdk"));
    }

    #[test]
    #[serial]
    fn test_discover_defaults_to_home() {
        env::remove_var("MPF_SDK_ROOT");
        let root = SdkRoot::discover().unwrap();

        assert!(root.dir().ends_with(".mpf-sdk"));
    }

    #[test]
    fn test_set_current_version_round_trip() {
        let temp = TempDir::new().unwrap();
        let root = SdkRoot::new(temp.path().join("sdk"));

        root.set_current_version("v1.2.0").unwrap();
        assert_eq!(root.current_version().unwrap(), "v1.2.0");
    }
}
