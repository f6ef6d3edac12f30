#![cfg(feature = "cli")]

use chrono::NaiveDate;
use small_scripts::{AgeReportPipeline, CliConfig, EtlEngine, LocalStorage, TomlConfig};
use std::path::Path;
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn write_input(dir: &TempDir, name: &str, data: &[u8]) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path.to_str().unwrap().to_string()
}

fn cli_for(path: &str) -> CliConfig {
    CliConfig {
        file: Some(path.to_string()),
        today: Some(today()),
        ..Default::default()
    }
}

fn run_with(config: CliConfig) -> (small_scripts::RunSummary, String) {
    let pipeline = AgeReportPipeline::new(LocalStorage::default(), config);
    let engine = EtlEngine::new(pipeline);

    let mut out = Vec::new();
    let summary = engine.run(&mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

#[test]
fn test_end_to_end_report() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "people.txt", b"Alice|1990-05-20\nBob|1985-11-02");

    let (summary, output) = run_with(cli_for(&path));

    assert_eq!(
        output,
        "Name\t\tDate of Birth\tAge\n\
         Bob\t02-11-1985\t38\n\
         Alice\t20-05-1990\t34\n\
         Average age: 36.00\n"
    );
    assert_eq!(summary.records, 2);
    assert_eq!(summary.average_age, 36.0);
    assert!(summary.input_error.is_none());
    assert!(summary.exported.is_empty());
}

#[test]
fn test_record_count_matches_line_count() {
    let dir = TempDir::new().unwrap();
    let path = write_input(
        &dir,
        "people.txt",
        b"A|2001-01-01\n\nB | 1999-12-31\nC|1950-06-01\n",
    );

    let (summary, _) = run_with(cli_for(&path));
    assert_eq!(summary.records, 3);
}

/// Any bad row discards the whole batch; rows are never skipped individually.
#[test]
fn test_malformed_line_discards_whole_batch() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "people.txt", b"Alice|1990-05-20\nBob\n");

    let (summary, output) = run_with(cli_for(&path));

    assert_eq!(summary.records, 0);
    assert!(output.starts_with("Error: invalid data format in file"));
    assert!(output.contains("line 2"));
    assert!(output.ends_with("Name\t\tDate of Birth\tAge\nAverage age: 0.00\n"));
}

#[test]
fn test_future_date_discards_whole_batch() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "people.txt", b"Alice|1990-05-20\nZed|2999-01-01\n");

    let (summary, output) = run_with(cli_for(&path));

    assert_eq!(summary.records, 0);
    assert_eq!(summary.average_age, 0.0);
    assert!(output.contains("2999-01-01"));
    assert!(output.contains("is in the future"));
    assert!(output.contains("Average age: 0.00"));
}

#[test]
fn test_each_failure_category_has_its_own_diagnostic() {
    let dir = TempDir::new().unwrap();
    let inputs: Vec<(&str, Vec<u8>)> = vec![
        ("malformed.txt", b"Bob\n".to_vec()),
        ("future.txt", b"Zed|2999-01-01\n".to_vec()),
        ("encoding.txt", b"\xff\xfe|1990-01-01\n".to_vec()),
    ];

    let mut diagnostics: Vec<String> = inputs
        .into_iter()
        .map(|(name, data)| {
            let path = write_input(&dir, name, &data);
            run_with(cli_for(&path)).0.input_error.unwrap()
        })
        .collect();

    let missing = dir.path().join("missing.txt");
    diagnostics.push(
        run_with(cli_for(missing.to_str().unwrap()))
            .0
            .input_error
            .unwrap(),
    );

    assert!(diagnostics[0].starts_with("Error: invalid data format"));
    assert!(diagnostics[1].starts_with("Error: date of birth"));
    assert!(diagnostics[2].ends_with("contains invalid characters."));
    assert!(diagnostics[3].ends_with("not found."));
}

/// An empty file and a rejected file print the same table; only the diagnostic differs.
#[test]
fn test_empty_file_and_failed_parse_look_alike() {
    let dir = TempDir::new().unwrap();
    let empty = write_input(&dir, "empty.txt", b"");
    let broken = write_input(&dir, "broken.txt", b"only-a-name\n");

    let (empty_summary, empty_output) = run_with(cli_for(&empty));
    let (broken_summary, broken_output) = run_with(cli_for(&broken));

    assert_eq!(empty_summary.records, broken_summary.records);
    assert_eq!(empty_output, "Name\t\tDate of Birth\tAge\nAverage age: 0.00\n");
    assert!(broken_output.ends_with(&empty_output));
    assert!(empty_summary.input_error.is_none());
    assert!(broken_summary.input_error.is_some());
}

#[test]
fn test_export_writes_requested_formats() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "people.txt", b"Alice|1990-05-20\nBob|1985-11-02\n");
    let export_dir = dir.path().join("reports");

    let mut config = cli_for(&path);
    config.export_path = Some(export_dir.to_str().unwrap().to_string());
    config.export_format = vec!["csv".to_string(), "tsv".to_string(), "json".to_string()];

    let (summary, _) = run_with(config);
    assert_eq!(summary.exported.len(), 3);

    let csv = std::fs::read_to_string(export_dir.join("age_report.csv")).unwrap();
    assert_eq!(
        csv,
        "name,date_of_birth,age\nBob,1985-11-02,38\nAlice,1990-05-20,34\n"
    );

    let tsv = std::fs::read_to_string(export_dir.join("age_report.tsv")).unwrap();
    assert!(tsv.starts_with("name\tdate_of_birth\tage\n"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(export_dir.join("age_report.json")).unwrap())
            .unwrap();
    assert_eq!(json["today"], "2024-06-01");
    assert_eq!(json["rows"].as_array().unwrap().len(), 2);
}

#[test]
fn test_rejected_input_is_not_exported() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "people.txt", b"Zed|2999-01-01\n");
    let export_dir = dir.path().join("reports");

    let mut config = cli_for(&path);
    config.export_path = Some(export_dir.to_str().unwrap().to_string());

    let (summary, _) = run_with(config);
    assert!(summary.exported.is_empty());
    assert!(!Path::new(&export_dir).exists());
}

#[test]
fn test_toml_configured_run() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, "people.csv", b"Alice;20/05/1990\nBob;02/11/1985\n");
    let config_path = dir.path().join("report.toml");
    std::fs::write(
        &config_path,
        format!(
            "[input]\npath = \"{}\"\ndelimiter = \";\"\ndate_format = \"%d/%m/%Y\"\n\n\
             [output]\ndate_format = \"%Y-%m-%d\"\nprecision = 1\n",
            path.replace('\\', "/")
        ),
    )
    .unwrap();

    let mut config = TomlConfig::from_file(&config_path).unwrap();
    config.today = Some(today());

    let pipeline = AgeReportPipeline::new(LocalStorage::default(), config);
    let mut out = Vec::new();
    EtlEngine::new(pipeline).run(&mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Name\t\tDate of Birth\tAge\n\
         Bob\t1985-11-02\t38\n\
         Alice\t1990-05-20\t34\n\
         Average age: 36.0\n"
    );
}
