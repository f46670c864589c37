//! Options for a single extraction run.

/// Options selected before a run. Read-only while the run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Compile extracted Sass to `style.css` when a compiler is available
    pub convert_sass_to_css: bool,
    /// Whitespace-only minification of every fragment
    pub minify: bool,
    /// Keep comments in extracted code
    pub preserve_comments: bool,
    /// Write `<name>_original.html` before anything else
    pub make_backup: bool,
    /// Move `style="..."` attributes into `style.css`
    pub extract_inline_styles: bool,
    /// Treat the input as a directory of documents
    pub batch_mode: bool,
    /// Write each document into `<name>_extracted/`
    pub project_folder_per_file: bool,
    /// Accepted for settings compatibility; output is always combined
    pub combine_files: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            convert_sass_to_css: true,
            minify: false,
            preserve_comments: true,
            make_backup: true,
            extract_inline_styles: true,
            batch_mode: false,
            project_folder_per_file: true,
            combine_files: true,
        }
    }
}
