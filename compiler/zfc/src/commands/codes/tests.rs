use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_one_line_per_code() {
    let table = code_table();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), ErrorCode::ALL.len());
    for (line, code) in lines.iter().zip(ErrorCode::ALL) {
        assert!(line.starts_with(code.as_str()));
        assert!(line.ends_with(code.title()));
    }
}

#[test]
fn test_warnings_are_marked() {
    let table = code_table();
    let warning = table.lines().find(|l| l.starts_with("W1001")).unwrap_or("");
    assert!(warning.contains("warning"));
    assert!(warning.contains("IndexTooLarge"));
}
