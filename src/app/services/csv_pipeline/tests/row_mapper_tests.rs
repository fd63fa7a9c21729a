//! Tests for the generic named-row mapper, covering both strategies

use crate::app::services::csv_pipeline::row_mapper::{MappingStrategy, NamedRow, RowMapper};

const BOTH_STRATEGIES: [MappingStrategy; 2] =
    [MappingStrategy::CsvCrate, MappingStrategy::Builtin];

fn map_all(text: &str) -> Vec<(MappingStrategy, Vec<NamedRow>)> {
    BOTH_STRATEGIES
        .iter()
        .map(|&strategy| (strategy, RowMapper::with_strategy(strategy).map_text(text)))
        .collect()
}

#[test]
fn test_default_strategy_is_library_backed() {
    assert_eq!(RowMapper::new().strategy(), MappingStrategy::CsvCrate);
    assert_eq!(RowMapper::default().strategy(), MappingStrategy::CsvCrate);
}

#[test]
fn test_basic_mapping() {
    for (strategy, rows) in map_all("x,y\n1,2\n3,4") {
        assert_eq!(rows.len(), 2, "{:?}", strategy);
        assert_eq!(rows[0]["x"], "1");
        assert_eq!(rows[0]["y"], "2");
        assert_eq!(rows[1]["x"], "3");
        assert_eq!(rows[1]["y"], "4");
    }
}

#[test]
fn test_missing_trailing_fields_default_to_empty() {
    for (strategy, rows) in map_all("x,y\n1") {
        assert_eq!(rows.len(), 1, "{:?}", strategy);
        assert_eq!(rows[0]["x"], "1");
        assert_eq!(rows[0]["y"], "");
        assert_eq!(rows[0].len(), 2, "{:?}", strategy);
    }
}

#[test]
fn test_extra_fields_are_dropped() {
    for (strategy, rows) in map_all("x,y\n1,2,3,4") {
        assert_eq!(rows.len(), 1, "{:?}", strategy);
        assert_eq!(rows[0].len(), 2, "{:?}", strategy);
        assert_eq!(rows[0]["x"], "1");
        assert_eq!(rows[0]["y"], "2");
    }
}

#[test]
fn test_blank_lines_are_dropped() {
    for (strategy, rows) in map_all("x,y\n\n1,2\n   \n3,4\n") {
        assert_eq!(rows.len(), 2, "{:?}", strategy);
        assert_eq!(rows[1]["x"], "3");
    }
}

#[test]
fn test_empty_input_yields_empty_vec() {
    for (strategy, rows) in map_all("") {
        assert!(rows.is_empty(), "{:?}", strategy);
    }
    for (strategy, rows) in map_all("  \n \n") {
        assert!(rows.is_empty(), "{:?}", strategy);
    }
}

#[test]
fn test_header_only_input_yields_no_rows() {
    for (strategy, rows) in map_all("x,y") {
        assert!(rows.is_empty(), "{:?}", strategy);
    }
}

#[test]
fn test_quoted_comma_in_value() {
    for (strategy, rows) in map_all("name,summary\nApollo,\"lands, then returns\"") {
        assert_eq!(rows.len(), 1, "{:?}", strategy);
        assert_eq!(rows[0]["summary"], "lands, then returns", "{:?}", strategy);
    }
}

#[test]
fn test_headers_are_trimmed() {
    for (strategy, rows) in map_all(" x , y \n1,2") {
        assert_eq!(rows[0]["x"], "1", "{:?}", strategy);
        assert_eq!(rows[0]["y"], "2", "{:?}", strategy);
    }
}

#[test]
fn test_duplicate_headers_last_occurrence_wins() {
    for (strategy, rows) in map_all("a,a\n1,2") {
        assert_eq!(rows[0].len(), 1, "{:?}", strategy);
        assert_eq!(rows[0]["a"], "2", "{:?}", strategy);
    }
}

#[test]
fn test_row_order_is_preserved() {
    let text = "n\n1\n2\n3\n4\n5";
    for (strategy, rows) in map_all(text) {
        let values: Vec<&str> = rows.iter().map(|row| row["n"].as_str()).collect();
        assert_eq!(values, vec!["1", "2", "3", "4", "5"], "{:?}", strategy);
    }
}

#[test]
fn test_builtin_unescapes_doubled_quotes() {
    let rows = RowMapper::with_strategy(MappingStrategy::Builtin).map_text("h\n\"say \"\"hi\"\"\"");
    assert_eq!(rows[0]["h"], "say \"hi\"");
}
