use clap::Parser;

use crate::headers::LintMode;

#[derive(Debug, Parser)]
#[command(author, version, about = "Increment the last segment of version.txt", bin_name = "increment-version")]
pub struct IncrementArguments {
    /// Directory containing version.txt
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Check that Go sources start with the license header", bin_name = "lint-file-headers")]
pub struct LintArguments {
    /// Pass "format" to prepend the header to offending files; anything else only checks
    #[arg(allow_hyphen_values = true)]
    pub mode: Option<String>,
    /// Root of the tree to scan; the header is read from hack/boilerplate.go.txt below it
    #[arg(long, short, default_value = "./")]
    pub path: String,
    #[arg(long, short)]
    pub verbose: bool,
}

impl LintArguments {
    pub fn lint_mode(&self) -> LintMode {
        LintMode::from_argument(self.mode.as_deref())
    }
}
