use anyhow::{Context, Result};
use log::{debug, info};
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::DirEntry;

pub mod go_source;

/// Positional argument value selecting [`LintMode::Format`].
pub const FORMAT_ARGUMENT: &str = "format";
/// Version-control directory skipped at the root of the walk.
pub const VCS_DIRECTORY: &str = ".git";
pub const VIOLATION_MESSAGE: &str = "does not start with header";
pub const SUCCESS_MESSAGE: &str = "All source files start with the header";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LintMode {
    #[default]
    Check,
    Format,
}

impl LintMode {
    /// Only the exact literal "format" selects format mode.
    pub fn from_argument(argument: Option<&str>) -> Self {
        match argument {
            Some(FORMAT_ARGUMENT) => LintMode::Format,
            _ => LintMode::Check,
        }
    }
}

impl fmt::Display for LintMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintMode::Check => write!(f, "check"),
            LintMode::Format => write!(f, "format"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintReport {
    pub mode: LintMode,
    pub scanned: usize,
    /// Files that lacked the header. In format mode they have since been rewritten.
    pub violations: Vec<PathBuf>,
}

impl LintReport {
    /// A run fails only when checking finds at least one offender.
    pub fn is_failure(&self) -> bool {
        self.mode == LintMode::Check && !self.violations.is_empty()
    }

    pub fn render_violation(path: &Path) -> String {
        format!("{} {}", path.display(), VIOLATION_MESSAGE)
    }

    pub fn violation_lines(&self) -> Vec<String> {
        self.violations
            .iter()
            .map(|path| Self::render_violation(path))
            .collect()
    }
}

pub fn is_compliant(content: &str, header: &str) -> bool {
    content.starts_with(header)
}

pub fn prepend_header(content: &str, header: &str) -> String {
    format!("{header}\n{content}")
}

fn is_vcs_root(entry: &DirEntry) -> bool {
    entry.depth() == 1 && entry.file_type().is_dir() && entry.file_name() == VCS_DIRECTORY
}

pub trait SourceLanguage {
    fn read_header(root: impl AsRef<Path>) -> Result<String> {
        let path = root.as_ref().join(Self::header_path());
        debug!("Reading header from '{}'", path.display());
        std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read header file {:?}", path))
    }

    fn get_matching_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        debug!("Checking matching files");
        let mut files: Vec<PathBuf> = vec![];
        let filename_regex = Self::filename_match_regex()?;
        let walkdir_iter = walkdir::WalkDir::new(root.as_ref())
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_vcs_root(entry));

        for item in walkdir_iter {
            let item = item?;
            let path = item.path();
            // follows symlinks, so linked sources are linted like regular ones
            if !path.is_file() {
                continue;
            }
            if filename_regex.is_match(path.to_string_lossy().as_ref()) {
                files.push(path.to_path_buf());
            }
        }

        debug!("Found files: {:?}", files);
        Ok(files)
    }

    /// Scans every matching file below `root`. Offenders are collected without
    /// stopping early and, in format mode, rewritten with the header prepended.
    fn lint(root: impl AsRef<Path>, mode: LintMode) -> Result<LintReport> {
        let root = root.as_ref();
        info!("Linting file headers in '{}' ({} mode)", root.display(), mode);
        let header = Self::read_header(root)?;
        let files = Self::get_matching_files(root)?;

        let mut violations = vec![];
        for file in &files {
            debug!("Checking file: '{}'", file.display());
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read source file {:?}", file))?;
            if is_compliant(&content, &header) {
                continue;
            }
            if mode == LintMode::Format {
                std::fs::write(file, prepend_header(&content, &header))
                    .with_context(|| format!("Failed to write source file {:?}", file))?;
                info!("Added header to '{}'", file.display());
            }
            violations.push(file.clone());
        }

        Ok(LintReport {
            mode,
            scanned: files.len(),
            violations,
        })
    }

    fn header_path() -> &'static str;
    fn filename_match_regex() -> Result<regex::Regex>;
}
