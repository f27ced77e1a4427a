mod common;

use common::sheet;
use rollcall::config::Config;
use rollcall::errors::AppError;
use rollcall::export::{
    ExportFormat, ExportLogic, export_csv, export_json, render_session_csv, write_session_csv,
};
use rollcall::import::parse_tsv;
use rollcall::import::templates::BEHAVIOR;
use rollcall::models::{
    AttendanceRecord, BehaviorRecord, ClassInfo, DetentionRecord, Session,
};
use serde_json::{Map, Value};
use std::fs;

fn class_info() -> ClassInfo {
    ClassInfo {
        date: "2024-12-01".into(),
        class: "7B".into(),
        teacher: "Ms Smith".into(),
        subject: "Maths".into(),
    }
}

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        output_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}

#[test]
fn test_session_csv_with_attendance_only() {
    let mut session = Session::new(class_info());
    session.add_attendance(AttendanceRecord::new("John", "P", "09:00", ""));

    let csv = render_session_csv(&session).unwrap();
    assert_eq!(
        csv,
        "CLASS INFORMATION\n\
         Date,Class,Teacher,Subject\n\
         2024-12-01,7B,Ms Smith,Maths\n\
         \n\
         ATTENDANCE RECORDS\n\
         Student Name,Status,Time,Notes\n\
         John,P,09:00,\n\
         \n"
    );
}

#[test]
fn test_session_csv_attendance_section_present_even_when_empty() {
    let session = Session::new(class_info());

    let csv = render_session_csv(&session).unwrap();
    assert!(csv.contains("ATTENDANCE RECORDS\nStudent Name,Status,Time,Notes\n\n"));
    assert!(!csv.contains("BEHAVIORAL INCIDENTS"));
    assert!(!csv.contains("DETENTION ASSIGNMENTS"));
}

#[test]
fn test_session_csv_with_all_sections() {
    let mut session = Session::new(class_info());
    session.add_attendance(AttendanceRecord::new("John", "P", "09:00", "Late, bus"));
    session.add_behavior(BehaviorRecord::new("Jane", "Disruption", "2", "10"));
    session.add_detention(DetentionRecord::new(
        "Mike",
        "Tardiness",
        "30min",
        "2024-12-03 15:30",
    ));

    let csv = render_session_csv(&session).unwrap();
    assert!(csv.contains("John,P,09:00,\"Late, bus\"\n\n"));
    assert!(csv.ends_with(
        "BEHAVIORAL INCIDENTS\n\
         Student Name,Incident Type,Severity,Points\n\
         Jane,Disruption,2,10\n\
         \n\
         DETENTION ASSIGNMENTS\n\
         Student Name,Reason,Duration,Date & Time\n\
         Mike,Tardiness,30min,2024-12-03 15:30\n"
    ));
}

#[test]
fn test_session_export_default_name_in_output_dir() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    let session = Session::new(class_info());

    let path = ExportLogic::session(&session, None, &cfg).expect("exported");
    let name = path.file_name().unwrap().to_string_lossy().to_string();

    assert!(path.starts_with(dir.path()));
    assert!(name.starts_with("attendance_report_"));
    assert!(name.ends_with(".csv"));
    assert!(fs::read_to_string(&path).unwrap().starts_with("CLASS INFORMATION\n"));
}

#[test]
fn test_session_export_failure_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    let target = dir.path().join("missing-dir").join("report.csv");

    let session = Session::new(class_info());
    assert!(write_session_csv(&session, &target).is_err());
    assert!(ExportLogic::session(&session, Some(target.as_path()), &cfg).is_none());
}

#[test]
fn test_json_export_reads_back_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("behavior.json");
    let sheet = parse_tsv(BEHAVIOR.content.as_bytes()).unwrap();

    export_json(&sheet, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let back: Vec<Map<String, Value>> = serde_json::from_str(&text).unwrap();

    assert_eq!(Value::from(back.clone()), serde_json::to_value(&sheet).unwrap());
    assert_eq!(back.len(), 5);
    let keys: Vec<&String> = back[0].keys().collect();
    assert_eq!(keys, sheet.headers().iter().collect::<Vec<_>>());
    assert_eq!(back[1]["Student Name"], "Jane Doe");
    // two-space indentation
    assert!(text.starts_with("[\n  {\n    \"Student Name\": \"John Smith\""));
}

#[test]
fn test_json_export_with_repeated_header_reads_back_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("repeated.json");
    let sheet = parse_tsv("Name\tNotes\tNotes\nJohn\tfirst\tsecond\n".as_bytes()).unwrap();

    export_json(&sheet, &path).unwrap();

    let back: Vec<Map<String, Value>> =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(Value::from(back.clone()), serde_json::to_value(&sheet).unwrap());
    assert_eq!(back[0].keys().collect::<Vec<_>>(), ["Name", "Notes"]);
    assert_eq!(back[0]["Notes"], "second");
}

#[test]
fn test_json_export_of_empty_sheet_is_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");

    export_json(&sheet(&["a"], &[]), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
}

#[test]
fn test_csv_export_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let data = sheet(
        &["Student Name", "Notes"],
        &[&["John Smith", ""], &["Jane Doe", "Argued, loudly"]],
    );

    export_csv(&data, &path).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = rdr.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, ["Student Name", "Notes"]);
    let rows: Vec<Vec<String>> = rdr
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(rows, data.rows());
}

#[test]
fn test_csv_export_refuses_empty_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("none.csv");
    let empty = sheet(&["a", "b"], &[]);

    let err = export_csv(&empty, &path).unwrap_err();
    assert!(matches!(err, AppError::EmptyDataset));
    assert!(!path.exists());

    let cfg = config_in(dir.path());
    assert!(ExportLogic::sheet(&empty, ExportFormat::Csv, Some(path.as_path()), &cfg).is_none());
}

#[test]
fn test_sheet_export_default_names() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_in(dir.path());
    let data = sheet(&["a"], &[&["1"]]);

    let csv_path = ExportLogic::sheet(&data, ExportFormat::Csv, None, &cfg).unwrap();
    let json_path = ExportLogic::sheet(&data, ExportFormat::Json, None, &cfg).unwrap();

    for (path, ext) in [(csv_path, "csv"), (json_path, "json")] {
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("data_"), "{name}");
        assert!(name.ends_with(&format!(".{ext}")), "{name}");
        assert!(path.exists());
    }
}
