//! Persisted user settings.
//!
//! Settings live in a small JSON file in the user's home directory. Loading
//! and saving never fail from the caller's point of view: a missing or
//! corrupt file means defaults, and a failed save is only traced.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;
use crate::extract::Options;

/// Settings file name inside the home directory.
pub const SETTINGS_FILE: &str = ".html_extractor_settings.json";

/// Environment variable that overrides the settings file location.
pub const SETTINGS_ENV: &str = "HTML_EXTRACTOR_SETTINGS";

/// Options remembered between runs, plus the last output directory.
///
/// Batch mode is chosen per run and is not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub convert_sass: bool,
    pub minify_output: bool,
    pub preserve_comments: bool,
    pub create_backup: bool,
    pub extract_inline_styles: bool,
    pub create_project_folder: bool,
    pub combine_files: bool,
    pub last_output_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_options(&Options::default(), "")
    }
}

impl Settings {
    fn from_options(options: &Options, last_output_dir: &str) -> Self {
        Self {
            convert_sass: options.convert_sass_to_css,
            minify_output: options.minify,
            preserve_comments: options.preserve_comments,
            create_backup: options.make_backup,
            extract_inline_styles: options.extract_inline_styles,
            create_project_folder: options.project_folder_per_file,
            combine_files: options.combine_files,
            last_output_dir: last_output_dir.to_string(),
        }
    }

    /// Location of the settings file.
    ///
    /// `$HTML_EXTRACTOR_SETTINGS` if set, otherwise `~/.html_extractor_settings.json`.
    pub fn settings_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(SETTINGS_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(SETTINGS_FILE))
    }

    /// Load settings, falling back to defaults on any problem.
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring unreadable settings");
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ExtractError> {
        let content =
            fs::read_to_string(path).map_err(|e| ExtractError::SettingsIo(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| ExtractError::SettingsIo(e.to_string()))
    }

    /// Save settings; failures are traced and otherwise ignored.
    pub fn save(&self) {
        let Some(path) = Self::settings_path() else {
            return;
        };
        if let Err(e) = self.save_to(&path) {
            tracing::debug!(error = %e, "Could not save settings");
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ExtractError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| ExtractError::SettingsIo(e.to_string()))?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| ExtractError::SettingsIo(e.to_string()))?;
            }
        }
        fs::write(path, json).map_err(|e| ExtractError::SettingsIo(e.to_string()))
    }

    /// Extraction options for a run.
    pub fn options(&self, batch_mode: bool) -> Options {
        Options {
            convert_sass_to_css: self.convert_sass,
            minify: self.minify_output,
            preserve_comments: self.preserve_comments,
            make_backup: self.create_backup,
            extract_inline_styles: self.extract_inline_styles,
            batch_mode,
            project_folder_per_file: self.create_project_folder,
            combine_files: self.combine_files,
        }
    }

    /// Remember the options and output directory of a run.
    ///
    /// A relative directory is stored resolved against the current directory
    /// so later runs from elsewhere find the same place.
    pub fn remember(&mut self, options: &Options, output_dir: &Path) {
        let dir = absolute_dir(output_dir);
        *self = Self::from_options(options, &dir.display().to_string());
    }

    /// The last output directory, if it still exists.
    pub fn last_output_dir(&self) -> Option<PathBuf> {
        if self.last_output_dir.is_empty() {
            return None;
        }
        let dir = PathBuf::from(&self.last_output_dir);
        dir.is_dir().then_some(dir)
    }
}

fn absolute_dir(dir: &Path) -> PathBuf {
    if dir.is_absolute() {
        return dir.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(dir),
        Err(e) => {
            tracing::debug!(error = %e, "Cannot resolve relative output directory");
            dir.to_path_buf()
        }
    }
}
