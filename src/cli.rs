//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use once_cell::sync::Lazy;

use crate::config::Settings;
use crate::extract::Options;

static LONG_VERSION: Lazy<String> = Lazy::new(|| {
    let mut version = format!(
        "{} (built {})",
        env!("CARGO_PKG_VERSION"),
        env!("HTML_EXTRACTOR_BUILD_DATE")
    );
    if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
        version.push_str(&format!(" git {sha}"));
    }
    version
});

/// Version string with build date and, for dev builds, the git commit.
pub fn long_version() -> &'static str {
    LONG_VERSION.as_str()
}

#[derive(Debug, Parser)]
#[command(
    name = "html-extractor",
    version,
    long_version = long_version(),
    about = "Split inline scripts and styles out of HTML files",
    long_about = "Split inline <script>, <style> and style=\"...\" content out of HTML files \
                  into a standard project layout: index.html, style.css, script.js and, \
                  for Sass, style.scss."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract inline scripts and styles from an HTML file or a folder of them
    Extract(ExtractArgs),

    /// Show, locate or reset saved settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Check an extracted project folder
    #[command(long_about = "Check an extracted project folder.\n\n\
        Lists which standard files exist and verifies that index.html references \
        style.css and script.js when they are present.")]
    Analyze {
        /// Project folder to inspect
        dir: PathBuf,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the saved settings as JSON
    Show,
    /// Print the settings file location
    Path,
    /// Restore default settings
    Reset,
}

/// Options for `extract`. Each `--x`/`--no-x` pair overrides the saved
/// setting; when neither is given the saved value is used.
#[derive(Debug, Default, Args)]
pub struct ExtractArgs {
    /// HTML file to extract (a folder when --batch is given)
    pub input: PathBuf,

    /// Output directory [default: last used output directory]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Process every .html/.htm file directly inside INPUT
    #[arg(short, long)]
    pub batch: bool,

    /// Collapse whitespace in extracted code
    #[arg(long, overrides_with = "no_minify")]
    pub minify: bool,
    #[arg(long, overrides_with = "minify", hide = true)]
    pub no_minify: bool,

    /// Remove comments from extracted code
    #[arg(long, overrides_with = "preserve_comments")]
    pub strip_comments: bool,
    /// Keep comments in extracted code
    #[arg(long, overrides_with = "strip_comments")]
    pub preserve_comments: bool,

    /// Save the original as <name>_original.html
    #[arg(long, overrides_with = "no_backup")]
    pub backup: bool,
    #[arg(long, overrides_with = "backup")]
    pub no_backup: bool,

    /// Move style="..." attributes into style.css
    #[arg(long, overrides_with = "no_inline_styles")]
    pub inline_styles: bool,
    #[arg(long, overrides_with = "inline_styles")]
    pub no_inline_styles: bool,

    /// Write each document into <name>_extracted/
    #[arg(long, overrides_with = "no_project_folder")]
    pub project_folder: bool,
    #[arg(long, overrides_with = "project_folder")]
    pub no_project_folder: bool,

    /// Compile extracted Sass to style.css
    #[arg(long, overrides_with = "no_sass")]
    pub sass: bool,
    #[arg(long, overrides_with = "sass")]
    pub no_sass: bool,

    /// Combine all blocks of a kind into one file (always on)
    #[arg(long, overrides_with = "no_combine")]
    pub combine: bool,
    #[arg(long, overrides_with = "combine", hide = true)]
    pub no_combine: bool,

    /// Do not save these options as the new defaults
    #[arg(long)]
    pub no_save: bool,
}

impl ExtractArgs {
    /// Resolve the run options against saved settings.
    pub fn options(&self, saved: &Settings) -> Options {
        Options {
            convert_sass_to_css: pick(self.sass, self.no_sass, saved.convert_sass),
            minify: pick(self.minify, self.no_minify, saved.minify_output),
            preserve_comments: pick(
                self.preserve_comments,
                self.strip_comments,
                saved.preserve_comments,
            ),
            make_backup: pick(self.backup, self.no_backup, saved.create_backup),
            extract_inline_styles: pick(
                self.inline_styles,
                self.no_inline_styles,
                saved.extract_inline_styles,
            ),
            batch_mode: self.batch,
            project_folder_per_file: pick(
                self.project_folder,
                self.no_project_folder,
                saved.create_project_folder,
            ),
            combine_files: pick(self.combine, self.no_combine, saved.combine_files),
        }
    }
}

fn pick(on: bool, off: bool, saved: bool) -> bool {
    if on {
        true
    } else if off {
        false
    } else {
        saved
    }
}
