//! Parser for the review corpus CSV.
//!
//! Expected layout: a `product_id,review_text` header followed by one record
//! per review. Fields may be double-quoted; quoted fields can contain commas,
//! doubled quotes (`""`) and line breaks. A file without a header is accepted
//! too, in which case the first two columns are taken as id and text.

use crate::error::{DataLoadError, Result};
use crate::types::Review;
use std::fs;
use std::path::Path;

/// Parse the review corpus file into records.
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// * `Ok(Vec<Review>)` - All parsed reviews, in file order
/// * `Err` - On I/O failure or a malformed record
pub fn parse_reviews(path: &Path) -> Result<Vec<Review>> {
    let content = fs::read_to_string(path)?;
    parse_reviews_str(&content, &path.display().to_string())
}

/// Parse corpus content that has already been read into memory.
pub(crate) fn parse_reviews_str(content: &str, file: &str) -> Result<Vec<Review>> {
    let mut reviews = Vec::new();
    // Column positions of (product_id, review_text); decided by the first
    // data-bearing record.
    let mut columns: Option<(usize, usize)> = None;

    for (line_no, record) in split_records(content) {
        if record.trim().is_empty() {
            continue; // Skip empty lines
        }

        let fields = split_fields(&record, file, line_no)?;

        let (id_col, text_col) = match columns {
            Some(cols) => cols,
            None => {
                // A header row names the columns; otherwise assume the first
                // two columns are id and text.
                if is_header(&fields) {
                    columns = Some(locate_columns(&fields, file, line_no)?);
                    continue;
                }
                columns = Some((0, 1));
                (0, 1)
            }
        };

        let needed = id_col.max(text_col) + 1;
        if fields.len() < needed {
            return Err(DataLoadError::FieldCountMismatch {
                expected: needed,
                found: fields.len(),
                line: line_no,
            });
        }

        let product_id = fields[id_col].trim().to_string();
        if product_id.is_empty() {
            return Err(DataLoadError::InvalidValue {
                field: "product_id".to_string(),
                value: fields[id_col].clone(),
            });
        }

        reviews.push(Review {
            product_id,
            review_text: fields[text_col].clone(),
        });
    }

    Ok(reviews)
}

/// Split file content into records, honoring quotes.
///
/// A newline inside a quoted field belongs to the field; a newline outside
/// quotes terminates the record. Each record is paired with the line number
/// it starts on (for error messages).
fn split_records(content: &str) -> Vec<(usize, String)> {
    let mut records = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut line_no = 1;
    let mut start_line = 1;

    for c in content.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            '\n' if !in_quotes => {
                records.push((start_line, std::mem::take(&mut current)));
                line_no += 1;
                start_line = line_no;
            }
            '\n' => {
                line_no += 1;
                current.push(c);
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        records.push((start_line, current));
    }

    records
}

/// Split one record into fields, unescaping quotes.
fn split_fields(record: &str, file: &str, line_no: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = record.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // A doubled quote inside a quoted field is a literal quote
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            '\r' if !in_quotes && chars.peek().is_none() => {} // trailing CR (CRLF files)
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Unterminated quoted field".to_string(),
        });
    }

    fields.push(field);
    Ok(fields)
}

/// Does this record look like the header row?
fn is_header(fields: &[String]) -> bool {
    fields
        .iter()
        .any(|f| matches!(f.trim().to_ascii_lowercase().as_str(), "product_id" | "review_text"))
}

/// Find the positions of the two required columns in the header.
fn locate_columns(fields: &[String], file: &str, line_no: usize) -> Result<(usize, usize)> {
    let lower: Vec<String> = fields
        .iter()
        .map(|f| f.trim().to_ascii_lowercase())
        .collect();

    let id_col = lower.iter().position(|f| f == "product_id");
    let text_col = lower.iter().position(|f| f == "review_text");

    match (id_col, text_col) {
        (Some(id), Some(text)) => Ok((id, text)),
        (None, _) => Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Header is missing the product_id column".to_string(),
        }),
        (_, None) => Err(DataLoadError::ParseError {
            file: file.to_string(),
            line: line_no,
            reason: "Header is missing the review_text column".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Vec<Review>> {
        parse_reviews_str(content, "reviews.csv")
    }

    #[test]
    fn test_parse_with_header() {
        let reviews = parse("product_id,review_text\np1,Great camera\np2,Bad battery\n").unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].product_id, "p1");
        assert_eq!(reviews[0].review_text, "Great camera");
        assert_eq!(reviews[1].product_id, "p2");
    }

    #[test]
    fn test_parse_without_header() {
        let reviews = parse("p1,Great camera\np2,Bad battery").unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].product_id, "p1");
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let reviews = parse("product_id,review_text\np1,\"Great camera, superb display\"\n").unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].review_text, "Great camera, superb display");
    }

    #[test]
    fn test_doubled_quote_unescapes() {
        let reviews = parse("p1,\"The \"\"best\"\" camera\"\n").unwrap();
        assert_eq!(reviews[0].review_text, "The \"best\" camera");
    }

    #[test]
    fn test_newline_inside_quoted_field() {
        let reviews = parse("product_id,review_text\np1,\"Line one\nline two\"\np2,ok\n").unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].review_text, "Line one\nline two");
        assert_eq!(reviews[1].product_id, "p2");
    }

    #[test]
    fn test_header_with_extra_reordered_columns() {
        let content = "rating,review_text,product_id\n5,Nice phone,p1\n";
        let reviews = parse(content).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].product_id, "p1");
        assert_eq!(reviews[0].review_text, "Nice phone");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let reviews = parse("product_id,review_text\n\np1,ok\n\n").unwrap();
        assert_eq!(reviews.len(), 1);
    }

    #[test]
    fn test_missing_field_is_error() {
        let result = parse("product_id,review_text\nonly-one-field\n");
        assert!(matches!(
            result,
            Err(DataLoadError::FieldCountMismatch { expected: 2, found: 1, line: 2 })
        ));
    }

    #[test]
    fn test_empty_product_id_is_error() {
        let result = parse("product_id,review_text\n,no id here\n");
        assert!(matches!(result, Err(DataLoadError::InvalidValue { .. })));
    }

    #[test]
    fn test_unterminated_quote_is_error() {
        let result = parse("p1,\"never closed\n");
        assert!(matches!(result, Err(DataLoadError::ParseError { .. })));
    }

    #[test]
    fn test_crlf_line_endings() {
        let reviews = parse("product_id,review_text\r\np1,Great camera\r\n").unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].review_text, "Great camera");
    }
}
