//! End-to-end tests: load generated fixtures back through fixture-loader.

use fixture_csv::CsvFixtureGenerator;
use fixture_loader::jsonl;
use fixture_loader::{gzip, load_csv, load_json, CsvOptions, JsonContent};
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn test_generated_csv_loads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("employees.csv");

    CsvFixtureGenerator::with_seed(42).generate(&path, 100).unwrap();

    let rows = load_csv(&path, &CsvOptions::default()).unwrap();

    // header + 100 data rows, 10 fields each
    assert_eq!(rows.len(), 101);
    assert!(rows.iter().all(|row| row.len() == 10));
    assert_eq!(rows[0][0], "id");
    assert_eq!(rows[1][0], "1");
    assert_eq!(rows[100][0], "100");
}

#[test]
fn test_generated_csv_is_strict_quote_clean() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("employees.csv");

    CsvFixtureGenerator::with_seed(42).generate(&path, 50).unwrap();

    let options = CsvOptions {
        lazy_quotes: false,
        ..CsvOptions::default()
    };
    let rows = load_csv(&path, &options).unwrap();
    assert_eq!(rows.len(), 51);
}

#[test]
fn test_generated_json_loads_back_as_array() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("requests.json");

    fixture_json::generate(&path, 25).unwrap();

    let content = load_json(&path).unwrap();
    let records = match content {
        JsonContent::Array(values) => values,
        other => panic!("expected array, got {other:?}"),
    };

    assert_eq!(records.len(), 25);
    assert_eq!(records[0]["method"], "GET");
    assert_eq!(records[0]["requestURI"], "/bulk/0");
    assert_eq!(records[24]["headers"]["X"], "24");
}

#[test]
fn test_generated_json_roundtrips_through_jsonl() {
    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("requests.json");
    let array_path = temp_dir.path().join("rebuilt.json");

    fixture_json::generate(&json_path, 10).unwrap();
    let records = load_json(&json_path).unwrap().into_array().unwrap();

    let lines = jsonl::objects_to_json_lines(&records).unwrap();
    jsonl::write_json_lines_to_array_file(&lines, &array_path).unwrap();

    let rebuilt = load_json(&array_path).unwrap().into_array().unwrap();
    assert_eq!(rebuilt, records);
}

#[test]
fn test_generated_json_roundtrips_through_compressed_jsonl() {
    let temp_dir = TempDir::new().unwrap();
    let json_path = temp_dir.path().join("requests.json");
    let array_path = temp_dir.path().join("rebuilt.json");

    fixture_json::generate(&json_path, 10).unwrap();
    let records = load_json(&json_path).unwrap().into_array().unwrap();

    let payload = gzip::objects_to_compressed_json_lines(&records, Some(6)).unwrap();
    gzip::write_compressed_json_lines_to_array_file(&payload, &array_path).unwrap();

    let rebuilt = load_json(&array_path).unwrap().into_array().unwrap();
    assert_eq!(rebuilt, records);
}

#[test]
fn test_combine_generated_json_files() {
    let temp_dir = TempDir::new().unwrap();
    let a = temp_dir.path().join("a.json");
    let b = temp_dir.path().join("b.json");
    let combined = temp_dir.path().join("combined.json");

    fixture_json::generate(&a, 5).unwrap();
    fixture_json::generate(&b, 3).unwrap();

    jsonl::combine_json_array_files(&[&a, &b], &combined).unwrap();

    let values: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(&combined).unwrap()).unwrap();
    assert_eq!(values.len(), 8);
    assert_eq!(values[5]["requestURI"], json!("/bulk/0"));
}
