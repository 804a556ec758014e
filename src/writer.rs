use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::Settings;
use crate::errors::FilesystemError;

pub const CONFIG_DIR_NAME: &str = ".claude";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

const RESTART_HINT: &str = "Restart Claude Code to apply the new settings.";

/// Installs [`Settings::canonical`] into `<home>/.claude/settings.json`.
#[derive(Debug, Clone)]
pub struct SettingsWriter {
    config_dir: PathBuf,
    settings_path: PathBuf,
}

impl SettingsWriter {
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let config_dir = home.into().join(CONFIG_DIR_NAME);
        let settings_path = config_dir.join(SETTINGS_FILE_NAME);
        Self {
            config_dir,
            settings_path,
        }
    }

    /// Writer rooted at the home directory reported by the OS.
    pub fn for_current_user() -> Result<Self, FilesystemError> {
        let base_dirs = BaseDirs::new().ok_or(FilesystemError::HomeUnavailable)?;
        debug!(home = %base_dirs.home_dir().display(), "resolved home directory");
        Ok(Self::new(base_dirs.home_dir()))
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Creates the config directory and any missing ancestors. Existing
    /// directories are left as they are.
    pub fn ensure_config_dir(&self) -> Result<(), FilesystemError> {
        debug!(dir = %self.config_dir.display(), "ensuring config directory");
        fs::create_dir_all(&self.config_dir).map_err(|source| FilesystemError::CreateDir {
            path: self.config_dir.clone(),
            source,
        })
    }

    /// Replaces the settings file with `settings`.
    ///
    /// The JSON goes to a temp file next to the file being replaced, is synced
    /// and then renamed over it, so readers see either the old file or the
    /// complete new one. The temp file is removed if any step fails.
    ///
    /// If `settings.json` is a symlink the rename lands on the link target,
    /// so the link itself survives. The rename gives the file a new inode.
    /// An existing file keeps its permission bits. A freshly created one gets
    /// the temp file's mode, which is 0600 on Unix.
    pub fn write_settings(&self, settings: &Settings) -> Result<(), FilesystemError> {
        let write_err = |source: io::Error| FilesystemError::Write {
            path: self.settings_path.clone(),
            source,
        };

        let content = settings
            .to_json()
            .map_err(|e| write_err(io::Error::from(e)))?;

        let target = self.resolve_target().map_err(write_err)?;
        let target_dir = target.parent().unwrap_or(self.config_dir.as_path());

        let mut tmp = NamedTempFile::new_in(target_dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        if let Ok(existing) = fs::metadata(&target) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(write_err)?;
        }
        tmp.as_file().sync_all().map_err(write_err)?;
        debug!(tmp = %tmp.path().display(), target = %target.display(), bytes = content.len(), "staged settings");

        tmp.persist(&target).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Path the new content should be renamed onto: the settings path
    /// itself, or the file a symlink there points at (which may not exist
    /// yet).
    fn resolve_target(&self) -> io::Result<PathBuf> {
        match fs::canonicalize(&self.settings_path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                match fs::symlink_metadata(&self.settings_path) {
                    // dangling link, create the file it names
                    Ok(meta) if meta.file_type().is_symlink() => {
                        let link = fs::read_link(&self.settings_path)?;
                        Ok(self.config_dir.join(link))
                    }
                    _ => Ok(self.settings_path.clone()),
                }
            }
            Err(e) => Err(e),
        }
    }

    pub fn read_back(&self) -> Result<String, FilesystemError> {
        fs::read_to_string(&self.settings_path).map_err(|source| FilesystemError::ReadBack {
            path: self.settings_path.clone(),
            source,
        })
    }

    /// Ensure directory, write the canonical settings, then echo the file to
    /// `out`. Returns the settings that were written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Settings, FilesystemError> {
        self.ensure_config_dir()?;

        let settings = Settings::canonical();
        self.write_settings(&settings)?;
        info!(path = %self.settings_path.display(), "settings written");

        let confirm = |source| FilesystemError::Confirm { source };
        writeln!(
            out,
            "Settings file created at: {}",
            self.settings_path.display()
        )
        .map_err(confirm)?;

        let contents = self.read_back()?;
        write!(out, "\nContents:\n{contents}\n\n{RESTART_HINT}\n").map_err(confirm)?;
        out.flush().map_err(confirm)?;

        Ok(settings)
    }
}
