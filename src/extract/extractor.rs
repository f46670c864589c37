//! Per-document extraction pipeline.
//!
//! `read → [inline styles] → scripts → styles → combine → write → [compile
//! Sass] → patch references → index.html → summary`, strictly in that order.
//! Each step reports through the caller's [`EventSink`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::banner::{with_banner, BannerKind};
use super::decode::{self, Encoding};
use super::matchers;
use super::options::Options;
use super::processor::ContentProcessor;
use super::references::{self, Placement};
use super::sass::{self, SassCompiler};
use super::types::{
    Document, ExtractionResult, Fragment, FragmentKind, OutputBundle, OutputKind, CSS_FILE,
    INDEX_FILE, SCRIPT_FILE, SCSS_FILE,
};
use crate::error::{ExtractError, SassError};
use crate::events::EventSink;

/// Markup with embedded code removed, and the processed code.
#[derive(Debug, Clone, Default)]
pub struct Rewrite {
    pub html: String,
    pub fragments: Vec<Fragment>,
}

impl Rewrite {
    fn count(&self, pred: impl Fn(&Fragment) -> bool) -> usize {
        self.fragments.iter().filter(|f| pred(*f)).count()
    }

    pub fn inline_styles(&self) -> usize {
        self.count(|f| f.kind == FragmentKind::InlineStyle)
    }

    pub fn scripts(&self) -> usize {
        self.count(|f| f.kind == FragmentKind::Script)
    }

    pub fn css_blocks(&self) -> usize {
        self.count(|f| f.kind == FragmentKind::Style && !f.is_sass())
    }

    pub fn sass_blocks(&self) -> usize {
        self.count(Fragment::is_sass)
    }
}

/// Extracts one document at a time.
pub struct Extractor {
    options: Options,
    processor: ContentProcessor,
    compiler: Option<Box<dyn SassCompiler>>,
}

impl Extractor {
    /// Create with the compiler available in this build.
    pub fn new(options: Options) -> Self {
        Self::with_compiler(options, sass::default_compiler())
    }

    /// Create with a specific compiler (or none).
    pub fn with_compiler(options: Options, compiler: Option<Box<dyn SassCompiler>>) -> Self {
        Self {
            options,
            processor: ContentProcessor::from_options(&options),
            compiler,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether Sass will actually be compiled in this configuration.
    pub fn can_compile_sass(&self) -> bool {
        self.options.convert_sass_to_css
            && self.compiler.as_ref().is_some_and(|c| c.is_available())
    }

    /// Read and decode a document.
    pub fn read_document(
        &self,
        path: &Path,
        sink: &dyn EventSink,
    ) -> Result<Document, ExtractError> {
        let bytes = fs::read(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ExtractError::InputNotFound {
                path: path.to_path_buf(),
            },
            _ => ExtractError::ReadFailure {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let (text, encoding) = decode::decode(&bytes).ok_or_else(|| ExtractError::DecodeFailure {
            path: path.to_path_buf(),
        })?;

        if encoding != Encoding::Utf8 {
            sink.warning(&format!("File read with {} encoding", encoding.label()));
        }
        tracing::debug!(path = %path.display(), encoding = encoding.label(), "Decoded document");

        Ok(Document::new(path, text, encoding))
    }

    /// Read `path` and extract it under `out_root`.
    pub fn extract_file(
        &self,
        path: &Path,
        out_root: &Path,
        sink: &dyn EventSink,
    ) -> Result<ExtractionResult, ExtractError> {
        sink.header(&format!("Starting extraction from: {}", display_name(path)));
        let document = self.read_document(path, sink)?;
        self.extract_document(&document, out_root, sink)
    }

    /// Strip embedded code from `html` and process it. Touches no files.
    pub fn rewrite(&self, html: &str) -> Rewrite {
        let mut html = html.to_string();
        let mut fragments = Vec::new();

        if self.options.extract_inline_styles {
            let inline = matchers::extract_inline_styles(&html);
            html = inline.text;
            fragments.extend(inline.fragments);
        }

        let scripts = matchers::extract_scripts(&html);
        html = scripts.text;
        fragments.extend(scripts.fragments);

        let styles = matchers::extract_styles(&html);
        html = styles.text;
        fragments.extend(styles.fragments);

        let fragments = fragments.iter().map(|f| self.processor.process(f)).collect();
        Rewrite { html, fragments }
    }

    /// Extract an already decoded document under `out_root`.
    pub fn extract_document(
        &self,
        document: &Document,
        out_root: &Path,
        sink: &dyn EventSink,
    ) -> Result<ExtractionResult, ExtractError> {
        let mut result = ExtractionResult::new(&document.path);

        let out_dir = self.prepare_output_dir(document, out_root, sink)?;
        result.output_dir = Some(out_dir.clone());
        sink.info(&format!("Output directory: {}", out_dir.display()));

        if self.options.make_backup {
            let path = out_dir.join(document.backup_name());
            write_file(&path, &document.text)?;
            result.record(OutputKind::Backup, path);
            sink.info(&format!("Created backup: {}", document.backup_name()));
        }

        let rewrite = self.rewrite(&document.text);
        log_counts(&rewrite, sink);

        let bundle = OutputBundle::combine(&rewrite.fragments);
        self.write_bundle(&bundle, &out_dir, &mut result, sink)?;

        if result.has(OutputKind::Scss) {
            self.compile_sass(&out_dir, &mut result, sink)?;
        }

        let mut html = rewrite.html;
        patch_references(&mut html, &result, sink);

        let index = out_dir.join(INDEX_FILE);
        write_file(&index, &html)?;
        result.record(OutputKind::Index, index);
        sink.success(&format!("Created: {INDEX_FILE}"));

        self.log_summary(document, &out_dir, &result, sink);
        Ok(result)
    }

    fn prepare_output_dir(
        &self,
        document: &Document,
        out_root: &Path,
        sink: &dyn EventSink,
    ) -> Result<PathBuf, ExtractError> {
        let dir = if self.options.project_folder_per_file {
            out_root.join(document.project_folder_name())
        } else {
            out_root.to_path_buf()
        };

        fs::create_dir_all(&dir).map_err(|e| ExtractError::write(&dir, e))?;
        if self.options.project_folder_per_file {
            sink.info(&format!(
                "Created project folder: {}",
                document.project_folder_name()
            ));
        }
        Ok(dir)
    }

    fn write_bundle(
        &self,
        bundle: &OutputBundle,
        out_dir: &Path,
        result: &mut ExtractionResult,
        sink: &dyn EventSink,
    ) -> Result<(), ExtractError> {
        let outputs = [
            (&bundle.script, OutputKind::Script, BannerKind::Script, SCRIPT_FILE),
            (&bundle.css, OutputKind::Css, BannerKind::Css, CSS_FILE),
            (&bundle.scss, OutputKind::Scss, BannerKind::Scss, SCSS_FILE),
        ];

        for (body, kind, banner, name) in outputs {
            if let Some(body) = body {
                let path = out_dir.join(name);
                write_file(&path, &with_banner(banner, body))?;
                result.record(kind, path);
                sink.success(&format!("Created: {name}"));
            }
        }
        Ok(())
    }

    /// Compile `style.scss` into `style.css`. Only write failures are errors;
    /// a compile failure is logged and the document continues.
    fn compile_sass(
        &self,
        out_dir: &Path,
        result: &mut ExtractionResult,
        sink: &dyn EventSink,
    ) -> Result<(), ExtractError> {
        if !self.options.convert_sass_to_css {
            return Ok(());
        }
        let compiler = match self.compiler.as_ref().filter(|c| c.is_available()) {
            Some(c) => c,
            None => {
                let err = SassError::Unavailable;
                tracing::debug!(error = %err, "Skipping Sass compilation");
                sink.warning(&format!("{err}; {SCSS_FILE} was not compiled"));
                return Ok(());
            }
        };

        let scss = out_dir.join(SCSS_FILE);
        tracing::debug!(compiler = compiler.name(), path = %scss.display(), "Compiling Sass");

        match compiler.compile(&scss, self.options.minify) {
            Ok(css) => {
                let path = out_dir.join(CSS_FILE);
                write_file(&path, &with_banner(BannerKind::CompiledCss, &css))?;
                result.record(OutputKind::Css, path);
                sink.success(&format!("Compiled Sass -> {CSS_FILE}"));
            }
            Err(e) => {
                let err = ExtractError::CompileFailure(e);
                tracing::warn!(error = %err, "Sass compilation failed");
                sink.error(&err.to_string());
            }
        }
        Ok(())
    }

    fn log_summary(
        &self,
        document: &Document,
        out_dir: &Path,
        result: &ExtractionResult,
        sink: &dyn EventSink,
    ) {
        sink.header("EXTRACTION SUMMARY:");

        let created: Vec<&str> = [
            (OutputKind::Script, SCRIPT_FILE),
            (OutputKind::Css, CSS_FILE),
            (OutputKind::Scss, SCSS_FILE),
            (OutputKind::Index, INDEX_FILE),
        ]
        .into_iter()
        .filter(|(kind, _)| result.has(*kind))
        .map(|(_, name)| name)
        .collect();

        sink.info(&format!("   Project folder: {}", display_name(out_dir)));
        sink.info(&format!("   Files created: {}", created.join(", ")));
        if result.has(OutputKind::Backup) {
            sink.info(&format!("   Backup: {}", document.backup_name()));
        }
        sink.info(&format!("   Total files: {}", result.files.len()));
    }
}

fn log_counts(rewrite: &Rewrite, sink: &dyn EventSink) {
    let counts = [
        (rewrite.inline_styles(), "inline styles"),
        (rewrite.scripts(), "script blocks"),
        (rewrite.css_blocks(), "CSS blocks"),
        (rewrite.sass_blocks(), "Sass blocks"),
    ];
    for (n, what) in counts {
        if n > 0 {
            sink.success(&format!("Extracted {n} {what}"));
        }
    }
    for fragment in rewrite.fragments.iter().filter(|f| f.is_sass()) {
        if let Some(marker) = fragment.sass {
            tracing::debug!(reason = marker.describe(), "Classified stylesheet as Sass");
        }
    }
}

fn patch_references(html: &mut String, result: &ExtractionResult, sink: &dyn EventSink) {
    if result.has(OutputKind::Css) {
        match references::insert_stylesheet_link(html) {
            Placement::Skipped => sink.warning("No <head> tag found; style.css was not linked"),
            _ => sink.success("Added CSS link to <head>"),
        }
    }
    if result.has(OutputKind::Script) {
        match references::insert_script_tag(html) {
            Placement::EndOfDocument => sink.success("Added script tag at end of file"),
            _ => sink.success("Added script tag before </body>"),
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExtractError> {
    fs::write(path, contents).map_err(|e| ExtractError::write(path, e))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
