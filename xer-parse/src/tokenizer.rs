//! Line-level tokenizer for the XER interchange format.
//!
//! Three line kinds matter: `%T` starts a table, `%F` declares its
//! field names and `%R` carries one positional data row. Everything
//! else (the `ERMHDR` preamble, `%E` terminator, blank lines, junk)
//! is ignored. This stage never fails; garbage input produces an
//! empty or partial table map.

use std::collections::HashMap;

/// One data row, keyed by field name. Values are raw, untyped strings.
pub type RawRecord = HashMap<String, String>;

/// All tables found in a file, keyed by table name.
pub type RawTables = HashMap<String, Vec<RawRecord>>;

const TABLE_MARKER: &str = "%T";
const FIELDS_MARKER: &str = "%F";
const ROW_MARKER: &str = "%R";

/// Split raw XER text into per-table raw records.
///
/// Rows are zipped against the current table's field list: extra
/// values are dropped, missing trailing values become empty strings.
/// A row arriving before any `%T` line is dropped silently.
pub fn tokenize(text: &str) -> RawTables {
    let mut tables: RawTables = HashMap::new();
    let mut current_table: Option<String> = None;
    let mut current_fields: Vec<String> = Vec::new();
    let mut dropped_rows = 0usize;

    for line in text.lines() {
        // Leading whitespace must not hide a marker; payload values
        // after the marker tab keep their whitespace as-is.
        let line = line.trim_start().trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        if let Some(rest) = marker_payload(line, TABLE_MARKER) {
            let name = rest
                .split('\t')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
            if name.is_empty() {
                current_table = None;
                continue;
            }
            // A table-start line always begins a fresh record list,
            // even when the table name was seen before.
            tables.insert(name.clone(), Vec::new());
            current_table = Some(name);
            current_fields.clear();
        } else if let Some(rest) = marker_payload(line, FIELDS_MARKER) {
            if current_table.is_some() {
                current_fields = rest.split('\t').map(|f| f.trim().to_string()).collect();
            }
        } else if let Some(rest) = marker_payload(line, ROW_MARKER) {
            let Some(table) = &current_table else {
                dropped_rows += 1;
                continue;
            };
            let values: Vec<&str> = rest.split('\t').collect();
            let record: RawRecord = current_fields
                .iter()
                .enumerate()
                .map(|(i, field)| {
                    let value = values.get(i).copied().unwrap_or_default();
                    (field.clone(), value.to_string())
                })
                .collect();
            if let Some(records) = tables.get_mut(table) {
                records.push(record);
            }
        }
        // ERMHDR, %E and anything unrecognized fall through.
    }

    tracing::debug!(
        tables = tables.len(),
        rows = tables.values().map(Vec::len).sum::<usize>(),
        dropped_rows,
        "tokenized xer input"
    );

    tables
}

/// Payload after `<marker>\t`, or `None` if the line is another kind.
fn marker_payload<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.strip_prefix(marker)?.strip_prefix('\t')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_basic_table() {
        let input = "ERMHDR\t19.12\n%T\tTASK\n%F\ttask_id\ttask_name\n%R\tA100\tMobilize\n%R\tA200\tExcavate\n%E";
        let tables = tokenize(input);

        let rows = &tables["TASK"];
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["task_id"], "A100");
        assert_eq!(rows[1]["task_name"], "Excavate");
    }

    #[test]
    fn short_row_pads_missing_fields_with_empty_strings() {
        let input = "%T\tTASK\n%F\ttask_id\ttask_name\tstatus_code\n%R\tA100";
        let tables = tokenize(input);

        let row = &tables["TASK"][0];
        assert_eq!(row["task_id"], "A100");
        assert_eq!(row["task_name"], "");
        assert_eq!(row["status_code"], "");
    }

    #[test]
    fn long_row_drops_extra_values() {
        let input = "%T\tTASK\n%F\ttask_id\n%R\tA100\tsurplus\tmore";
        let tables = tokenize(input);

        let row = &tables["TASK"][0];
        assert_eq!(row.len(), 1);
        assert_eq!(row["task_id"], "A100");
    }

    #[test]
    fn row_without_active_table_is_dropped() {
        let input = "%R\tA100\tMobilize\n%T\tTASK\n%F\ttask_id\n%R\tA200";
        let tables = tokenize(input);

        assert_eq!(tables["TASK"].len(), 1);
        assert_eq!(tables["TASK"][0]["task_id"], "A200");
    }

    #[test]
    fn unknown_lines_and_blanks_are_ignored() {
        let input = "\n\nnonsense without marker\n%X\tweird\n%T\tRSRC\n%F\trsrc_id\n\n%R\t5\n%E\n";
        let tables = tokenize(input);

        assert_eq!(tables.len(), 1);
        assert_eq!(tables["RSRC"].len(), 1);
    }

    #[test]
    fn reopening_a_table_starts_a_fresh_record_list() {
        let input = "%T\tRSRC\n%F\trsrc_id\n%R\t1\n%T\tTASK\n%F\ttask_id\n%R\tA\n%T\tRSRC\n%F\trsrc_id\trsrc_name\n%R\t2\tCrane";
        let tables = tokenize(input);

        assert_eq!(tables["RSRC"].len(), 1);
        assert_eq!(tables["RSRC"][0]["rsrc_name"], "Crane");
    }

    #[test]
    fn never_panics_on_garbage() {
        let tables = tokenize("%T\n%F\t\n%R\t\t\t\n\u{0}binary\tnoise%T%F%R");
        assert!(tables.is_empty());
    }

    #[test]
    fn leading_whitespace_does_not_hide_markers() {
        let input = "  %T\tTASK\n\t%F\ttask_id\ttask_name\n %R\tA100\t  padded  ";
        let tables = tokenize(input);

        let row = &tables["TASK"][0];
        assert_eq!(row["task_id"], "A100");
        // Values after the marker keep their whitespace.
        assert_eq!(row["task_name"], "  padded  ");
    }

    #[test]
    fn windows_line_endings() {
        let input = "%T\tTASK\r\n%F\ttask_id\r\n%R\tA100\r\n";
        let tables = tokenize(input);
        assert_eq!(tables["TASK"][0]["task_id"], "A100");
    }
}
