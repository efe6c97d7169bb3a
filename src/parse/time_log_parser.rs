use std::sync::LazyLock;

use regex::Regex;

use crate::model::time_entry::{TimeEntry, UNKNOWN_PROJECT};

/// Minimum column count for a row to become an entry
const MIN_FIELDS: usize = 7;

/// Index of the first notes column; everything from here on is notes
const NOTES_FIELD: usize = 7;

/// Leading decimal number: `1`, `-2.5`, `.5`, `3e2`
static FLOAT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap());

/// Leading integer: `60`, `-5`
static INT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[+-]?\d+").unwrap());

/// Parse the time log CSV into entries in file order.
///
/// The first non-blank line is the header and is never parsed. Fields are
/// split on every comma without quote handling, so only the trailing notes
/// column may contain commas. Rows with fewer than seven fields are dropped.
pub fn parse_time_log(source: &str) -> Vec<TimeEntry> {
    let lines: Vec<&str> = source
        .split('\n')
        .filter(|l| !l.trim().is_empty())
        .collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    lines[1..].iter().filter_map(|line| parse_row(line)).collect()
}

fn parse_row(line: &str) -> Option<TimeEntry> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let project = if fields[1].is_empty() {
        UNKNOWN_PROJECT.to_string()
    } else {
        fields[1].to_string()
    };

    Some(TimeEntry {
        id: uuid::Uuid::new_v4().to_string(),
        date: fields[0].to_string(),
        project,
        start_local: fields[2].to_string(),
        end_local: fields[3].to_string(),
        duration_minutes: parse_int_lenient(fields[4]),
        duration_hours: parse_float_lenient(fields[5]),
        overlaps: fields[6].to_string(),
        notes: fields[NOTES_FIELD..]
            .join(",")
            .trim()
            .to_string(),
    })
}

/// Parse the leading integer of a field, `0` if there is none.
/// `"90.5"` is 90 and `"60min"` is 60. Digits beyond the range of `i64`
/// saturate at `i64::MAX` (or `i64::MIN` when negative).
fn parse_int_lenient(field: &str) -> i64 {
    let Some(m) = INT_PREFIX_RE.find(field.trim()) else {
        return 0;
    };
    let digits = m.as_str();
    digits.parse().unwrap_or(if digits.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Parse the leading decimal number of a field, `0.0` if there is none.
fn parse_float_lenient(field: &str) -> f64 {
    FLOAT_PREFIX_RE
        .find(field.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HEADER: &str =
        "date,project,start_local,end_local,duration_minutes,duration_hours,overlaps,notes";

    #[test]
    fn test_parse_basic_rows() {
        let source = format!(
            "{}\n\
2026-02-17,Quest,06:30,16:40,610,10.17,No,Initial Dev\n\
2026-02-18,Superhuman,,,180,3,No,Added +3h per Jason\n",
            HEADER
        );
        let entries = parse_time_log(&source);
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first.date, "2026-02-17");
        assert_eq!(first.project, "Quest");
        assert_eq!(first.start_local, "06:30");
        assert_eq!(first.end_local, "16:40");
        assert_eq!(first.duration_minutes, 610);
        assert_eq!(first.duration_hours, 10.17);
        assert_eq!(first.overlaps, "No");
        assert_eq!(first.notes, "Initial Dev");

        let second = &entries[1];
        assert_eq!(second.start_local, "");
        assert_eq!(second.end_local, "");
        assert!(!second.has_interval());
        assert_eq!(second.duration_hours, 3.0);
    }

    #[test]
    fn test_notes_keep_commas() {
        let entries =
            parse_time_log("h1,h2,h3,h4,h5,h6,h7\n2026-01-01,Proj,09:00,10:00,60,1.0,No,hello, world");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].notes, "hello, world");
        assert_eq!(entries[0].duration_hours, 1.0);
        assert_eq!(entries[0].duration_minutes, 60);
    }

    #[test]
    fn test_seven_fields_has_empty_notes() {
        let entries = parse_time_log("h\n2026-01-01,Proj,,,30,0.5,Yes");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].notes, "");
        assert_eq!(entries[0].overlaps, "Yes");
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse_time_log(HEADER).is_empty());
        assert!(parse_time_log(&format!("{}\n\n   \n", HEADER)).is_empty());
        assert!(parse_time_log("").is_empty());
    }

    #[test]
    fn test_short_row_dropped() {
        let source = format!(
            "{}\n2026-01-01,Proj,09:00,10:00,60\n2026-01-02,Proj,,,30,0.5,No,kept",
            HEADER
        );
        let entries = parse_time_log(&source);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "2026-01-02");
    }

    #[test]
    fn test_non_numeric_durations_default_to_zero() {
        let entries = parse_time_log("h\n2026-01-01,Proj,,,abc,n/a,No,");
        assert_eq!(entries[0].duration_minutes, 0);
        assert_eq!(entries[0].duration_hours, 0.0);
    }

    #[test]
    fn test_numeric_prefixes() {
        let entries = parse_time_log("h\n2026-01-01,Proj,,, 90.5 ,1.5h,No,\n2026-01-02,Proj,,,60min,.25,No,");
        assert_eq!(entries[0].duration_minutes, 90);
        assert_eq!(entries[0].duration_hours, 1.5);
        assert_eq!(entries[1].duration_minutes, 60);
        assert_eq!(entries[1].duration_hours, 0.25);
    }

    #[test]
    fn test_oversized_minutes_saturate() {
        let entries = parse_time_log(
            "h\n2026-01-01,Proj,,,99999999999999999999,1,No,\n2026-01-02,Proj,,,-99999999999999999999,1,No,",
        );
        assert_eq!(entries[0].duration_minutes, i64::MAX);
        assert_eq!(entries[1].duration_minutes, i64::MIN);
    }

    #[test]
    fn test_empty_project_is_unknown() {
        let entries = parse_time_log("h\n2026-01-01,,,,15,0.25,No,quick call");
        assert_eq!(entries[0].project, "Unknown");
    }

    #[test]
    fn test_blank_lines_skipped_before_header() {
        let entries = parse_time_log("\n\nh\n\n2026-01-01,Proj,,,15,0.25,No,\n");
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_comma_in_project_misaligns_columns() {
        let entries = parse_time_log("h\n2026-01-01,Acme, Inc,09:00,10:00,60,1.0,No");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].project, "Acme");
        assert_eq!(entries[0].start_local, " Inc");
        assert_eq!(entries[0].end_local, "09:00");
        assert_eq!(entries[0].duration_minutes, 10);
        assert_eq!(entries[0].duration_hours, 60.0);
        assert_eq!(entries[0].overlaps, "1.0");
        assert_eq!(entries[0].notes, "No");
    }

    #[test]
    fn test_crlf_rows() {
        let entries = parse_time_log("h\r\n2026-01-01,Proj,,,15,0.25,No\r\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].overlaps, "No");
    }

    #[test]
    fn test_reparse_equal_but_ids_fresh() {
        let source = "h\n2026-01-01,Proj,,,15,0.25,No,a\n2026-01-01,Proj,,,15,0.25,No,a";
        let first = parse_time_log(source);
        let second = parse_time_log(source);
        assert_eq!(first, second);
        assert_ne!(first[0].id, second[0].id);
        assert_ne!(first[0].id, first[1].id);
    }
}
