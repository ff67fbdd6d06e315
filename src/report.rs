use crate::resolver::ValueResolver;
use crate::schema::{Mapping, ReportRow};
use log::debug;

/// Assemble the mapping report for a block of extracted text.
///
/// Each mapping is resolved independently against the full text; row order
/// mirrors input mapping order. Mappings with neither an original nor a
/// standardized name are skipped entirely.
pub fn assemble_report(
    resolver: &ValueResolver,
    extracted_text: &str,
    mappings: &[Mapping],
) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(mappings.len());

    for mapping in mappings {
        if mapping.is_empty() {
            continue;
        }

        let resolution = resolver.resolve(extracted_text, mapping.search_label());

        rows.push(ReportRow {
            original: mapping.original_text().to_string(),
            standard: mapping.standard_text().to_string(),
            resolution,
        });
    }

    debug!(
        "Assembled {} report rows from {} mappings ({} resolved)",
        rows.len(),
        mappings.len(),
        rows.iter().filter(|r| r.resolution.is_resolved()).count()
    );

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::Resolution;

    #[test]
    fn test_rows_preserve_mapping_order() {
        let resolver = ValueResolver::new();
        let text = "A: 1\nB: 2\nC: 3";
        let mappings = vec![
            Mapping::new("A", ""),
            Mapping::new("B", ""),
            Mapping::new("C", ""),
        ];

        let rows = assemble_report(&resolver, text, &mappings);

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].original, "A");
        assert_eq!(rows[1].original, "B");
        assert_eq!(rows[2].original, "C");
    }

    #[test]
    fn test_empty_mappings_are_skipped() {
        let resolver = ValueResolver::new();
        let mappings = vec![
            Mapping::new("Revenue", "Revenue"),
            Mapping::default(),
            Mapping::new("", ""),
        ];

        let rows = assemble_report(&resolver, "Revenue: 100", &mappings);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].original, "Revenue");
    }

    #[test]
    fn test_standard_name_used_when_original_absent() {
        let resolver = ValueResolver::new();
        let mappings = vec![Mapping {
            original: None,
            standard: Some("Revenue".to_string()),
        }];

        let rows = assemble_report(&resolver, "Revenue: $250", &mappings);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].original, "");
        assert_eq!(rows[0].standard, "Revenue");
        assert_eq!(rows[0].resolution, Resolution::Resolved("250".to_string()));
    }

    #[test]
    fn test_statuses_flow_through() {
        let resolver = ValueResolver::new();
        let text = "Revenue: $100\nGross Margin: 40 or 45";
        let mappings = vec![
            Mapping::new("Revenue", "Revenue"),
            Mapping::new("Gross Margin", "Gross Profit"),
            Mapping::new("Goodwill", "Goodwill"),
        ];

        let rows = assemble_report(&resolver, text, &mappings);

        assert_eq!(rows[0].resolution, Resolution::Resolved("100".to_string()));
        assert_eq!(rows[1].resolution, Resolution::Ambiguous);
        assert_eq!(rows[2].resolution, Resolution::Missing);
    }
}
