//! Output sink: the generated document and the optional bibliography file.
//!
//! Filenames derive from the prompt: truncated to 50 characters, spaces
//! replaced with underscores, current date appended.

use std::io;
use std::path::{Path, PathBuf};

use crate::state::DraftState;

/// How much of the prompt goes into the filename.
const FILENAME_PROMPT_CHARS: usize = 50;

/// Derives the output file stem for a prompt and a `YYYYMMDD` date string.
pub fn file_stem(prompt: &str, date: &str) -> String {
    let truncated: String = prompt.chars().take(FILENAME_PROMPT_CHARS).collect();
    format!("{}_{}", truncated.replace(' ', "_"), date)
}

fn today() -> String {
    chrono::Local::now().format("%Y%m%d").to_string()
}

/// Writes the document to `dir`: the prompt as a heading, then the final text
/// (edited when available). Returns the path written.
pub fn save_document(state: &DraftState, dir: &Path) -> io::Result<PathBuf> {
    save_document_dated(state, dir, &today())
}

/// [`save_document`] with an explicit date string.
pub fn save_document_dated(state: &DraftState, dir: &Path, date: &str) -> io::Result<PathBuf> {
    let path = dir.join(format!("{}.md", file_stem(&state.prompt, date)));
    let content = format!("# {}\n\n{}\n", state.prompt, state.final_text());
    std::fs::write(&path, content)?;
    Ok(path)
}

/// Writes the BibTeX file to `dir`, only when references were collected.
/// Returns `None` (and writes nothing) otherwise.
pub fn save_bibliography(state: &DraftState, dir: &Path) -> io::Result<Option<PathBuf>> {
    save_bibliography_dated(state, dir, &today())
}

/// [`save_bibliography`] with an explicit date string.
pub fn save_bibliography_dated(
    state: &DraftState,
    dir: &Path,
    date: &str,
) -> io::Result<Option<PathBuf>> {
    let references = match &state.references {
        Some(references) => references,
        None => return Ok(None),
    };
    let path = dir.join(format!("{}.bib", file_stem(&state.prompt, date)));
    std::fs::write(&path, references)?;
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Scenario**: Spaces become underscores and the date is appended.
    #[test]
    fn file_stem_replaces_spaces_and_appends_date() {
        assert_eq!(
            file_stem("a review of zeolites", "20260806"),
            "a_review_of_zeolites_20260806"
        );
    }

    /// **Scenario**: Prompts longer than 50 characters are truncated first.
    #[test]
    fn file_stem_truncates_long_prompts() {
        let prompt = "x".repeat(80);
        let stem = file_stem(&prompt, "20260806");
        assert_eq!(stem, format!("{}_20260806", "x".repeat(50)));
    }

    /// Truncation counts characters, not bytes, so multibyte prompts are safe.
    #[test]
    fn file_stem_truncates_on_char_boundaries() {
        let prompt = "é".repeat(60);
        let stem = file_stem(&prompt, "20260806");
        assert_eq!(stem, format!("{}_20260806", "é".repeat(50)));
    }

    #[test]
    fn save_document_writes_heading_and_final_text() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut state = DraftState::new("short prompt");
        state.text = "raw".to_string();
        state.edited_text = Some("polished".to_string());

        let path = save_document_dated(&state, temp.path(), "20260806").unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("short_prompt_20260806.md")
        );
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# short prompt\n\npolished\n");
    }

    /// **Scenario**: No references → no bibliography file.
    #[test]
    fn save_bibliography_skips_when_no_references() {
        let temp = tempfile::TempDir::new().unwrap();
        let state = DraftState::new("p");
        let result = save_bibliography_dated(&state, temp.path(), "20260806").unwrap();
        assert!(result.is_none());
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn save_bibliography_writes_references() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut state = DraftState::new("p");
        state.references = Some("@article{x, title={T}}".to_string());

        let path = save_bibliography_dated(&state, temp.path(), "20260806")
            .unwrap()
            .unwrap();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("p_20260806.bib")
        );
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("@article"));
    }
}
