mod common;

use common::sheet;
use rollcall::errors::AppError;
use rollcall::import::templates::{ATTENDANCE, BEHAVIOR, DETENTION};
use rollcall::import::{load_or_report, parse_tsv, read_tsv};

#[test]
fn test_behavior_template_skips_comment_lines() {
    let sheet = parse_tsv(BEHAVIOR.content.as_bytes()).unwrap();

    assert_eq!(
        sheet.headers(),
        ["Student Name", "Incident Type", "Severity", "Points", "Notes"]
    );
    assert_eq!(sheet.len(), 5);
    assert!(
        sheet
            .rows()
            .iter()
            .flatten()
            .all(|v| !v.starts_with("# Severity"))
    );
    assert_eq!(sheet.get(4, "Incident Type"), Some("Property Damage"));
}

#[test]
fn test_attendance_template_keeps_empty_cells() {
    let sheet = parse_tsv(ATTENDANCE.content.as_bytes()).unwrap();

    assert_eq!(sheet.len(), 7);
    assert_eq!(sheet.get(0, "Student Name"), Some("John Smith"));
    assert_eq!(sheet.get(0, "Notes"), Some(""));
    assert_eq!(sheet.get(2, "Time (HH:MM)"), Some(""));
    assert_eq!(sheet.get(6, "Notes"), Some("Excused absence"));
}

#[test]
fn test_detention_template_has_six_columns() {
    let sheet = parse_tsv(DETENTION.content.as_bytes()).unwrap();

    assert_eq!(sheet.headers().len(), 6);
    assert_eq!(sheet.len(), 4);
    assert_eq!(sheet.get(3, "Room/Location"), Some("Room 101"));
}

#[test]
fn test_skips_exactly_blank_and_comment_rows_in_order() {
    let input = "name\tstatus\tnotes\n\
                 a\tP\t\n\
                 \t\t\n\
                 b\t#x\t\n\
                 c\tA\tnote # not a comment\n\
                 # full comment line\n\
                 d\tL\t#tag\n\
                 e\tE\t\n";
    let parsed = parse_tsv(input.as_bytes()).unwrap();

    let names: Vec<&str> = parsed.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, ["a", "c", "e"]);
    assert_eq!(parsed.get(1, "notes"), Some("note # not a comment"));
}

#[test]
fn test_short_rows_are_padded_and_long_rows_trimmed() {
    let input = "a\tb\tc\n1\n1\t2\t3\t4\t5\n";
    let parsed = parse_tsv(input.as_bytes()).unwrap();

    assert_eq!(
        parsed,
        sheet(&["a", "b", "c"], &[&["1", "", ""], &["1", "2", "3"]])
    );
}

#[test]
fn test_header_only_file_is_empty() {
    let parsed = parse_tsv("Student Name\tStatus\n".as_bytes()).unwrap();
    assert!(parsed.is_empty());
    assert_eq!(parsed.headers().len(), 2);
}

#[test]
fn test_missing_file_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.tsv");

    let err = read_tsv(&missing).unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert!(load_or_report(&missing).is_none());
}

#[test]
fn test_read_tsv_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = BEHAVIOR.write_to(dir.path()).unwrap();

    let sheet = read_tsv(&path).unwrap();
    assert_eq!(sheet.len(), 5);
    assert_eq!(load_or_report(&path), Some(sheet));
}

#[test]
fn test_repeated_header_keeps_one_column_last_cell_wins() {
    let parsed = parse_tsv("Name\tNotes\tNotes\tGrade\nJohn\tfirst\tsecond\t7\n".as_bytes()).unwrap();

    assert_eq!(parsed.headers(), ["Name", "Notes", "Grade"]);
    assert_eq!(parsed.rows(), [vec!["John", "second", "7"]]);
}

#[test]
fn test_repeated_header_with_short_row_keeps_earlier_cell() {
    let parsed = parse_tsv("Name\tNotes\tNotes\nJane\tonly\n".as_bytes()).unwrap();

    assert_eq!(parsed.get(0, "Notes"), Some("only"));
    assert_eq!(parsed.rows()[0].len(), 2);
}
