use crate::headers::SourceLanguage;
use regex::Regex;

/// Header file relative to the scanned root.
pub const HEADER_FILE: &str = "hack/boilerplate.go.txt";

pub struct GoSource;

impl SourceLanguage for GoSource {
    fn header_path() -> &'static str {
        HEADER_FILE
    }

    fn filename_match_regex() -> anyhow::Result<Regex> {
        Ok(Regex::new(r#"\.go$"#)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_regex_matches_go_files() {
        let regex = GoSource::filename_match_regex().unwrap();
        assert!(regex.is_match("./main.go"));
        assert!(regex.is_match("./pkg/api/v1/types.go"));
        assert!(regex.is_match(".\\controllers\\utils.go"));
        assert!(regex.is_match("./zz_generated.deepcopy.go"));
    }

    #[test]
    fn test_filename_regex_no_false_positives() {
        let regex = GoSource::filename_match_regex().unwrap();
        assert!(!regex.is_match("./script.py"));
        assert!(!regex.is_match("./go.mod"));
        assert!(!regex.is_match("./main.go.bak"));
        assert!(!regex.is_match("./hack/boilerplate.go.txt"));
        assert!(!regex.is_match("./MAIN.GO"));
    }

    #[test]
    fn test_header_path() {
        assert_eq!(GoSource::header_path(), "hack/boilerplate.go.txt");
    }
}
