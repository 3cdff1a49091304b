//! Index-page extraction
//!
//! Parses the index page's data table into a bounded list of target
//! descriptors. Each well-formed row contributes one descriptor (name and
//! link from the row's first link element, unit label from its first data
//! cell); malformed rows are skipped with a diagnostic.

use crate::config::LimitConfig;
use crate::extract::row::{fold_rows, RowOutcome, RowParseError, RowSkip};
use crate::navigator::{ElementHandle, Navigator, SelectorSpec};
use crate::records::TargetDescriptor;
use crate::HarvestError;
use std::time::Duration;
use url::Url;

/// Result of one index pass: descriptors plus row-skip diagnostics
#[derive(Debug, Clone)]
pub struct IndexExtraction {
    pub targets: Vec<TargetDescriptor>,
    pub skipped: Vec<RowSkip>,
}

/// Extracts target descriptors from the index page's table
#[derive(Debug, Clone)]
pub struct IndexExtractor {
    table: SelectorSpec,
    limits: LimitConfig,
}

impl IndexExtractor {
    /// Creates an extractor for the given table selector and limits
    pub fn new(table: SelectorSpec, limits: LimitConfig) -> Self {
        IndexExtractor { table, limits }
    }

    /// Navigates to the index page and parses its table into descriptors
    ///
    /// At most `max_index_rows` rows are considered. An empty descriptor list
    /// is a valid result when every row was malformed; absence of the table
    /// itself is a `PageStructureError`.
    pub async fn extract_targets<N: Navigator>(
        &self,
        navigator: &mut N,
        index_url: &Url,
    ) -> Result<IndexExtraction, HarvestError> {
        navigator.navigate(index_url).await?;
        navigator
            .wait_until_present(
                &self.table,
                Duration::from_millis(self.limits.readiness_timeout_ms),
                Duration::from_millis(self.limits.readiness_poll_ms),
            )
            .await?;

        let table = navigator.find_single(&self.table)?;

        // Relative hrefs resolve against the final page URL, not the
        // requested one, so redirects keep links working
        let base = navigator
            .current_url()
            .cloned()
            .unwrap_or_else(|| index_url.clone());

        let rows = table.find_all(&SelectorSpec::tag("tr"));
        let outcomes = rows
            .into_iter()
            .take(self.limits.max_index_rows)
            .enumerate()
            .map(|(index, row)| match parse_index_row(row, &base) {
                Ok(target) => RowOutcome::Parsed(target),
                Err(error) => RowOutcome::Skipped { index, error },
            });

        let (targets, skipped) = fold_rows(outcomes);
        for skip in &skipped {
            tracing::warn!(
                "Skipping index row {} on {}: {}",
                skip.index,
                base,
                skip.error
            );
        }

        tracing::info!(
            "Index pass found {} targets ({} rows skipped)",
            targets.len(),
            skipped.len()
        );

        Ok(IndexExtraction { targets, skipped })
    }
}

/// Parses one index table row into a descriptor
fn parse_index_row(row: &ElementHandle, base: &Url) -> Result<TargetDescriptor, RowParseError> {
    let link = row
        .find(&SelectorSpec::tag("a"))
        .ok_or(RowParseError::MissingLink)?;

    let href = link
        .attr("href")
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .ok_or(RowParseError::EmptyLink)?;

    let link_url = base
        .join(href)
        .map_err(|e| RowParseError::BadLink(format!("{}: {}", href, e)))?;

    let unit = row
        .find(&SelectorSpec::tag("td"))
        .ok_or(RowParseError::MissingCell("td"))?;

    Ok(TargetDescriptor {
        name: link.text_trimmed(),
        link: link_url,
        unit_label: unit.text_trimmed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::testutil::StaticNavigator;

    const INDEX_URL: &str = "https://example.com/hist/default1999.htm";

    fn limits() -> LimitConfig {
        LimitConfig {
            max_index_rows: 10,
            max_detail_rows: 10,
            page_pause_ms: 0,
            readiness_timeout_ms: 50,
            readiness_poll_ms: 10,
        }
    }

    fn extractor() -> IndexExtractor {
        IndexExtractor::new(SelectorSpec::class("statistics"), limits())
    }

    fn index_page(rows: &[&str]) -> String {
        format!(
            r#"<html><body><table class="statistics">{}</table></body></html>"#,
            rows.join("\n")
        )
    }

    fn well_formed_row(name: &str) -> String {
        format!(
            r#"<tr><th><a href="/hist/{}.htm">{}</a></th><td>{} Unit</td></tr>"#,
            name.to_lowercase(),
            name,
            name
        )
    }

    async fn run(body: String) -> IndexExtraction {
        let mut nav = StaticNavigator::new().with_page(INDEX_URL, &body);
        extractor()
            .extract_targets(&mut nav, &Url::parse(INDEX_URL).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_extracts_well_formed_rows() {
        let rows: Vec<String> = ["Canada", "Japan"].iter().map(|n| well_formed_row(n)).collect();
        let body = index_page(&rows.iter().map(String::as_str).collect::<Vec<_>>());
        let extraction = run(body).await;

        assert_eq!(extraction.targets.len(), 2);
        assert!(extraction.skipped.is_empty());

        let canada = &extraction.targets[0];
        assert_eq!(canada.name, "Canada");
        assert_eq!(canada.unit_label, "Canada Unit");
        assert_eq!(canada.link.as_str(), "https://example.com/hist/canada.htm");
    }

    #[tokio::test]
    async fn test_caps_at_max_index_rows() {
        let rows: Vec<String> = (1..=12).map(|i| well_formed_row(&format!("C{}", i))).collect();
        let body = index_page(&rows.iter().map(String::as_str).collect::<Vec<_>>());
        let extraction = run(body).await;

        assert_eq!(extraction.targets.len(), 10);
        assert_eq!(extraction.targets[9].name, "C10");
    }

    #[tokio::test]
    async fn test_malformed_row_skipped_neighbors_kept() {
        // Row 3 (index 2) has no link element
        let rows = vec![
            well_formed_row("C1"),
            well_formed_row("C2"),
            "<tr><th>No link here</th><td>Unit</td></tr>".to_string(),
            well_formed_row("C4"),
            well_formed_row("C5"),
        ];
        let body = index_page(&rows.iter().map(String::as_str).collect::<Vec<_>>());
        let extraction = run(body).await;

        let names: Vec<&str> = extraction.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["C1", "C2", "C4", "C5"]);
        assert_eq!(extraction.skipped.len(), 1);
        assert_eq!(extraction.skipped[0].index, 2);
        assert_eq!(extraction.skipped[0].error, RowParseError::MissingLink);
    }

    #[tokio::test]
    async fn test_row_without_unit_cell_skipped() {
        let rows = vec![
            r#"<tr><th><a href="/c.htm">Cellless</a></th></tr>"#.to_string(),
            well_formed_row("Japan"),
        ];
        let body = index_page(&rows.iter().map(String::as_str).collect::<Vec<_>>());
        let extraction = run(body).await;

        assert_eq!(extraction.targets.len(), 1);
        assert_eq!(extraction.targets[0].name, "Japan");
        assert_eq!(extraction.skipped[0].error, RowParseError::MissingCell("td"));
    }

    #[tokio::test]
    async fn test_empty_href_skipped() {
        let rows = vec![
            r#"<tr><th><a href="   ">Blank</a></th><td>Unit</td></tr>"#.to_string(),
        ];
        let body = index_page(&rows.iter().map(String::as_str).collect::<Vec<_>>());
        let extraction = run(body).await;

        assert!(extraction.targets.is_empty());
        assert_eq!(extraction.skipped[0].error, RowParseError::EmptyLink);
    }

    #[tokio::test]
    async fn test_all_rows_malformed_is_valid_empty_result() {
        let rows = vec![
            "<tr><td>just a cell</td></tr>".to_string(),
            "<tr><td>another</td></tr>".to_string(),
        ];
        let body = index_page(&rows.iter().map(String::as_str).collect::<Vec<_>>());
        let extraction = run(body).await;

        assert!(extraction.targets.is_empty());
        assert_eq!(extraction.skipped.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_table_is_structure_error() {
        let mut nav = StaticNavigator::new()
            .with_page(INDEX_URL, "<html><body><p>nothing</p></body></html>");
        let result = extractor()
            .extract_targets(&mut nav, &Url::parse(INDEX_URL).unwrap())
            .await;
        assert!(matches!(
            result,
            Err(HarvestError::Structure(
                crate::PageStructureError::NeverAppeared { .. }
            ))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_index_is_navigation_error() {
        let mut nav = StaticNavigator::new();
        let result = extractor()
            .extract_targets(&mut nav, &Url::parse(INDEX_URL).unwrap())
            .await;
        assert!(matches!(result, Err(HarvestError::Navigation(_))));
    }
}
