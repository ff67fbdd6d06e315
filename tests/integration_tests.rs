use statement_mapper::*;

const INCOME_STATEMENT: &str = "\
ACME HOLDINGS LTD
CONSOLIDATED STATEMENT OF OPERATIONS
For the year ended December 31, 2023

Total net revenues: $4,521,870.25
Cost of revenues: $2,310,445
Gross profit: $2,211,425.25
Selling, general & administrative: $1,104,200
Research and development: 388,100
Net Income (Loss): -$81,220.50

Supplementary disclosure
Total net revenues include $4,521,870.25 of product sales
Deferred revenue balance was 310,500 at year end; deferred revenue was 280,000 in the prior year
";

fn mapping(original: &str, standard: &str) -> Mapping {
    Mapping::new(original, standard)
}

fn resolve(text: &str, label: &str) -> Resolution {
    ValueResolver::new().resolve(text, label)
}

#[test]
fn test_comprehensive_statement_report() {
    let mappings = vec![
        mapping("Total net revenues", "Revenue"),
        mapping("Cost of revenues", "Cost of Sales"),
        mapping("Gross profit", "Gross Profit"),
        mapping("Net Income (Loss)", "Net Income"),
        mapping("Deferred revenue", "Deferred Revenue"),
        mapping("Goodwill", "Goodwill"),
    ];

    let rows = build_report(INCOME_STATEMENT, &mappings);

    assert_eq!(rows.len(), 6);

    // Restated on the supplementary line with the identical value, so it
    // still resolves cleanly
    assert_eq!(
        rows[0].resolution,
        Resolution::Resolved("4521870.25".to_string())
    );
    assert_eq!(
        rows[1].resolution,
        Resolution::Resolved("2310445".to_string())
    );
    assert_eq!(
        rows[2].resolution,
        Resolution::Resolved("2211425.25".to_string())
    );
    assert_eq!(
        rows[3].resolution,
        Resolution::Resolved("-81220.50".to_string())
    );

    // Current and prior year balances on the same line
    assert_eq!(rows[4].resolution, Resolution::Ambiguous);

    // Never mentioned
    assert_eq!(rows[5].resolution, Resolution::Missing);
}

#[test]
fn test_report_row_order_and_skip_rule() {
    let mappings = vec![
        mapping("Gross profit", "Gross Profit"),
        Mapping::default(),
        mapping("Total net revenues", "Revenue"),
        mapping("Cost of revenues", "Cost of Sales"),
    ];

    let rows = build_report(INCOME_STATEMENT, &mappings);

    let originals: Vec<&str> = rows.iter().map(|r| r.original.as_str()).collect();
    assert_eq!(
        originals,
        vec!["Gross profit", "Total net revenues", "Cost of revenues"]
    );
}

#[test]
fn test_resolution_is_pure_and_order_independent() {
    let first = resolve(INCOME_STATEMENT, "Gross profit");
    let _unrelated = resolve(INCOME_STATEMENT, "Cost of revenues");
    let second = resolve(INCOME_STATEMENT, "Gross profit");

    assert_eq!(first, second);
}

#[test]
fn test_labels_with_symbols_match_literally() {
    assert_eq!(
        resolve(INCOME_STATEMENT, "Selling, general & administrative"),
        Resolution::Resolved("1104200".to_string())
    );
    assert_eq!(
        resolve(INCOME_STATEMENT, "Net Income (Loss)"),
        Resolution::Resolved("-81220.50".to_string())
    );
}

#[test]
fn test_workbook_export_end_to_end() -> anyhow::Result<()> {
    let mappings = vec![
        mapping("Total net revenues", "Revenue"),
        mapping("Deferred revenue", "Deferred Revenue"),
        mapping("Goodwill", "Goodwill"),
    ];

    let buffer = build_report_to_workbook(INCOME_STATEMENT, &mappings)?;
    assert_eq!(&buffer[0..2], b"PK");

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out").join("financial_output.xlsx");
    let rows = build_report(INCOME_STATEMENT, &mappings);
    write_report_file(&rows, &path)?;
    assert!(path.exists());

    Ok(())
}

#[test]
fn test_parse_then_map_workflow() {
    let parser = StatementParser::new();
    let lines = parser.parse(INCOME_STATEMENT);

    assert!(lines.iter().any(|l| l.line_item == "Total net revenues"));
    let revenue = lines
        .iter()
        .find(|l| l.line_item == "Total net revenues")
        .unwrap();
    assert_eq!(revenue.value, "4521870.25");

    // Parsed line items can be fed straight back as mappings
    let mappings: Vec<Mapping> = lines
        .iter()
        .map(|l| Mapping {
            original: Some(l.line_item.clone()),
            standard: None,
        })
        .collect();

    let rows = build_report(INCOME_STATEMENT, &mappings);
    assert_eq!(rows.len(), mappings.len());
}

#[test]
fn test_request_round_trip_matches_wire_contract() -> anyhow::Result<()> {
    let body = r#"{
        "extractedText": "Revenue: $100\r\nExpenses: $40",
        "mappings": [
            {"original": "Revenue", "standard": "Revenue"},
            {"standard": "Expenses"}
        ]
    }"#;

    let request: ExportRequest = serde_json::from_str(body)?;
    let rows = build_report(&request.extracted_text, &request.mappings);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].resolution, Resolution::Resolved("100".to_string()));
    assert_eq!(rows[1].resolution, Resolution::Resolved("40".to_string()));

    Ok(())
}
