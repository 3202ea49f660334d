//! CSV parsing for sheet exports
//!
//! Header row first, comma separator, double-quoted fields with `""` escapes
//! and embedded newlines. Blank records are skipped and a UTF-8 BOM is
//! ignored. Header names and cells are trimmed.

use super::{RawRow, TableName};
use crate::core::{CatalogError, CatalogResult};
use crate::normalize::required_columns;

/// Parse CSV content into rows keyed by header
///
/// Fails with [`CatalogError::Parse`] when the header is missing or lacks a
/// required column of `table`, a quoted field is never closed, or a record
/// has a different field count than the header.
pub fn parse_csv(table: TableName, content: &str) -> CatalogResult<Vec<RawRow>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut records = split_records(table, content)?.into_iter();

    let (header_line, header) = records
        .next()
        .ok_or_else(|| CatalogError::parse(table, 1, "missing header row"))?;
    let headers: Vec<String> = header.iter().map(|h| h.trim().to_string()).collect();
    if let Some(pos) = headers.iter().position(String::is_empty) {
        return Err(CatalogError::parse(
            table,
            1,
            format!("empty header name in column {}", pos + 1),
        ));
    }
    if let Some(missing) = required_columns(table)
        .iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(CatalogError::parse(
            table,
            header_line,
            format!("missing column '{}'", missing),
        ));
    }

    records
        .map(|(line, fields)| {
            if fields.len() != headers.len() {
                return Err(CatalogError::parse(
                    table,
                    line,
                    format!("expected {} fields, found {}", headers.len(), fields.len()),
                ));
            }
            Ok(RawRow::from_pairs(
                line,
                headers
                    .iter()
                    .cloned()
                    .zip(fields.into_iter().map(|f| f.trim().to_string())),
            ))
        })
        .collect()
}

/// Split content into records, each tagged with its starting line
fn split_records(table: TableName, content: &str) -> CatalogResult<Vec<(usize, Vec<String>)>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' => {
                    line += 1;
                    field.push('\n');
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            // Quotes only open a field at its start; elsewhere they are literal
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' => record.push(std::mem::take(&mut field)),
            '\r' => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                push_record(&mut records, record_line, std::mem::take(&mut record));
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(CatalogError::parse(
            table,
            record_line,
            "unterminated quoted field",
        ));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        push_record(&mut records, record_line, record);
    }

    Ok(records)
}

fn push_record(records: &mut Vec<(usize, Vec<String>)>, line: usize, record: Vec<String>) {
    if record.iter().all(|f| f.trim().is_empty()) {
        return;
    }
    records.push((line, record));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "ID,Nome\n1,Projetor\n2,Microfone\n";
        let rows = parse_csv(TableName::Equipment, content).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("ID"), Some("1"));
        assert_eq!(rows[1].get("Nome"), Some("Microfone"));
        assert_eq!(rows[1].line(), 3);
    }

    #[test]
    fn test_quoted_fields() {
        let content = "ID,Nome\r\n1,\"Mesa, grande\"\r\n2,\"Ecrã \"\"HD\"\"\"\r\n";
        let rows = parse_csv(TableName::Equipment, content).unwrap();

        assert_eq!(rows[0].get("Nome"), Some("Mesa, grande"));
        assert_eq!(rows[1].get("Nome"), Some("Ecrã \"HD\""));
    }

    #[test]
    fn test_multiline_quoted_field_tracks_lines() {
        let content = "ID,Nome\n1,\"linha um\nlinha dois\"\n2,Cadeira\n";
        let rows = parse_csv(TableName::Equipment, content).unwrap();

        assert_eq!(rows[0].get("Nome"), Some("linha um\nlinha dois"));
        assert_eq!(rows[1].line(), 4);
    }

    #[test]
    fn test_bom_and_blank_lines_and_trimming() {
        let content = "\u{feff} ID , Nome \n\n 1 ,  Projetor \n\n";
        let rows = parse_csv(TableName::Equipment, content).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("ID"), Some("1"));
        assert_eq!(rows[0].get("Nome"), Some("Projetor"));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let rows = parse_csv(TableName::Equipment, "ID,Nome").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_header_without_required_columns() {
        let err = parse_csv(TableName::Spaces, "Foo,Bar\n").unwrap_err();

        match err {
            CatalogError::Parse { table, line, reason } => {
                assert_eq!(table, TableName::Spaces);
                assert_eq!(line, 1);
                assert_eq!(reason, "missing column 'ID'");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_header() {
        let err = parse_csv(TableName::Spaces, "\n\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_field_count_mismatch() {
        let content = "Espaco_ID,Periodo,Preco(AOA)\n1,Meio dia,50\n1,Todo dia\n";
        let err = parse_csv(TableName::Prices, content).unwrap_err();

        match err {
            CatalogError::Parse { table, line, reason } => {
                assert_eq!(table, TableName::Prices);
                assert_eq!(line, 3);
                assert_eq!(reason, "expected 3 fields, found 2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_quote() {
        let err = parse_csv(TableName::Equipment, "ID,Nome\n1,\"Projetor\n").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_literal_quote_inside_field() {
        let rows = parse_csv(TableName::Equipment, "ID,Nome\n1,Monitor 27\"\n").unwrap();
        assert_eq!(rows[0].get("Nome"), Some("Monitor 27\""));
    }
}
