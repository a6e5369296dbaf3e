//! Load drafting templates from a directory of YAML, with embedded defaults.
//!
//! **Canonical source**: default template text lives in
//! `quill/prompts/draft.yaml`, embedded at compile time and used when no
//! directory or file is present. A present `draft.yaml` overrides per key;
//! missing keys keep the embedded defaults.

use std::path::Path;

use serde::Deserialize;

use super::DraftTemplates;

/// Embedded default YAML (canonical source: `quill/prompts/draft.yaml`).
const EMBED_DRAFT: &str = include_str!("../../prompts/draft.yaml");

/// Name of the YAML file under the prompts directory.
const DRAFT_FILE: &str = "draft.yaml";

/// Default directory name when `PROMPTS_DIR` is not set.
const DEFAULT_PROMPTS_DIR: &str = "prompts";

/// Error when loading templates from a directory (missing dir, invalid YAML).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("prompts directory not found or not readable: {0}")]
    DirNotFound(String),
    #[error("failed to read prompts file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse YAML in {path}: {message}")]
    ParseYaml { path: String, message: String },
}

/// On-disk shape of `draft.yaml`; every key optional.
#[derive(Debug, Default, Deserialize)]
struct DraftPromptsFile {
    #[serde(default)]
    plan: Option<String>,
    #[serde(default)]
    write: Option<String>,
    #[serde(default)]
    edit: Option<String>,
}

/// Returns the directory to load from: `dir` if `Some`, else `PROMPTS_DIR` env,
/// else `./prompts`.
fn prompts_dir(dir: Option<&Path>) -> std::path::PathBuf {
    dir.map(std::path::PathBuf::from).unwrap_or_else(|| {
        std::env::var("PROMPTS_DIR")
            .ok()
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(DEFAULT_PROMPTS_DIR))
    })
}

/// Parses the embedded defaults. The embedded YAML is complete; a missing key
/// there would be a packaging defect, so empty strings are the hard fallback.
pub(super) fn default_from_embedded() -> DraftTemplates {
    let file: DraftPromptsFile = serde_yaml::from_str(EMBED_DRAFT).unwrap_or_default();
    DraftTemplates {
        plan: file.plan.unwrap_or_default(),
        write: file.write.unwrap_or_default(),
        edit: file.edit.unwrap_or_default(),
    }
}

/// Loads templates from a directory: reads `draft.yaml` and overlays it on the
/// embedded defaults (missing file or missing keys keep defaults).
///
/// If `dir` is `None`, uses `PROMPTS_DIR` env or `./prompts`. Only returns an
/// error when the directory itself is missing or a present file fails to read
/// or parse.
pub fn load(dir: Option<&Path>) -> Result<DraftTemplates, LoadError> {
    let base = prompts_dir(dir);
    if !base.exists() || !base.is_dir() {
        return Err(LoadError::DirNotFound(base.display().to_string()));
    }

    let path = base.join(DRAFT_FILE);
    let file = match std::fs::read_to_string(&path) {
        Ok(content) => {
            serde_yaml::from_str::<DraftPromptsFile>(&content).map_err(|e| LoadError::ParseYaml {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => DraftPromptsFile::default(),
        Err(e) => {
            return Err(LoadError::ReadFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };

    let defaults = default_from_embedded();
    Ok(DraftTemplates {
        plan: file.plan.unwrap_or(defaults.plan),
        write: file.write.unwrap_or(defaults.write),
        edit: file.edit.unwrap_or(defaults.edit),
    })
}

/// Loads templates from `dir` if the directory exists; otherwise returns the
/// embedded defaults.
pub fn load_or_default(dir: Option<&Path>) -> DraftTemplates {
    load(dir).unwrap_or_else(|_| default_from_embedded())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Load with a non-existent directory returns DirNotFound when the dir is explicit.
    #[test]
    fn load_nonexistent_dir_returns_error() {
        let result = load(Some(Path::new("/nonexistent_prompts_dir_12345")));
        assert!(matches!(result, Err(LoadError::DirNotFound(_))));
    }

    #[test]
    fn load_or_default_nonexistent_returns_embedded() {
        let t = load_or_default(Some(Path::new("/nonexistent_prompts_dir_12345")));
        assert_eq!(t, default_from_embedded());
        assert!(!t.plan.is_empty());
    }

    /// A present draft.yaml overrides only the keys it sets.
    #[test]
    fn load_overlays_present_keys_on_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("draft.yaml"),
            "plan: \"custom plan $INST$\"\n",
        )
        .unwrap();
        let t = load(Some(temp.path())).unwrap();
        assert_eq!(t.plan, "custom plan $INST$");
        assert_eq!(t.write, default_from_embedded().write);
        assert_eq!(t.edit, default_from_embedded().edit);
    }

    #[test]
    fn load_missing_file_keeps_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let t = load(Some(temp.path())).unwrap();
        assert_eq!(t, default_from_embedded());
    }

    #[test]
    fn load_invalid_yaml_returns_parse_error() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(temp.path().join("draft.yaml"), "plan: [not closed").unwrap();
        let err = load(Some(temp.path())).unwrap_err();
        assert!(matches!(err, LoadError::ParseYaml { .. }));
    }
}
