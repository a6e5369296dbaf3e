//! DOI extraction and citation fetch for the bibliography file.
//!
//! DOIs are extracted from the final text by pattern; each is resolved
//! through doi.org content negotiation into a BibTeX entry. Fetch failures
//! are logged and skipped; they never fail the pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

static DOI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b10\.\d{4,}/[-._;()/:\w]+\b").expect("valid DOI pattern"));

/// Timeout for one doi.org request.
const FETCH_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Extracts DOIs from `text`, deduplicated, in order of first appearance.
pub fn extract_dois(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    DOI_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|doi| seen.insert(doi.clone()))
        .collect()
}

/// HTTP client for doi.org content negotiation.
pub fn citation_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent("quill academic drafting assistant")
        .timeout(FETCH_TIMEOUT)
        .build()
}

/// Fetches the BibTeX entry for one DOI. `None` on any failure.
pub async fn fetch_citation(client: &reqwest::Client, doi: &str) -> Option<String> {
    let url = format!("https://doi.org/{doi}");
    match client
        .get(&url)
        .header(reqwest::header::ACCEPT, "application/x-bibtex")
        .send()
        .await
    {
        Ok(response) if response.status().is_success() => response.text().await.ok(),
        Ok(response) => {
            tracing::warn!(doi, status = %response.status(), "citation fetch failed");
            None
        }
        Err(e) => {
            tracing::warn!(doi, error = %e, "citation fetch failed");
            None
        }
    }
}

/// Resolves every DOI in `text` and joins the BibTeX entries with blank
/// lines. `None` when no DOI resolved.
pub async fn collect_references(client: &reqwest::Client, text: &str) -> Option<String> {
    let dois = extract_dois(text);
    if dois.is_empty() {
        return None;
    }
    tracing::info!(count = dois.len(), "resolving citations");

    let mut entries = Vec::new();
    for doi in &dois {
        if let Some(entry) = fetch_citation(client, doi).await {
            entries.push(entry.trim().to_string());
        }
    }
    if entries.is_empty() {
        None
    } else {
        Some(entries.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_dois_from_prose() {
        let text = "as shown (10.1021/acs.est.9b01234), and later (10.1007/s11356-020-08003-z).";
        assert_eq!(
            extract_dois(text),
            vec!["10.1021/acs.est.9b01234", "10.1007/s11356-020-08003-z"]
        );
    }

    /// **Scenario**: A DOI cited twice appears once, at its first position.
    #[test]
    fn deduplicates_preserving_order() {
        let text = "see 10.1000/alpha then 10.1000/beta then 10.1000/alpha again";
        assert_eq!(extract_dois(text), vec!["10.1000/alpha", "10.1000/beta"]);
    }

    #[test]
    fn no_dois_in_plain_text() {
        assert!(extract_dois("no identifiers here, just prose").is_empty());
    }

    #[test]
    fn registrant_prefix_requires_four_digits() {
        // "10.99/x" is not a DOI; registrant codes have at least four digits.
        assert!(extract_dois("not a doi: 10.99/x").is_empty());
    }

    /// **Scenario**: Text without DOIs yields no references and no requests.
    #[tokio::test]
    async fn collect_references_is_none_without_dois() {
        let client = citation_client().unwrap();
        assert!(collect_references(&client, "plain text").await.is_none());
    }
}
