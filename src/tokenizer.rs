//! Line-oriented CSV tokenizer.
//!
//! Input is split into lines first, so a quoted field cannot span several
//! lines. Inside a line, `"` toggles quoted mode, `""` inside quotes is a
//! literal quote, and commas only separate fields outside quotes. Every field
//! is trimmed.

use std::mem;
use tracing::{debug, instrument, warn};

/// Header row plus raw data rows, in input order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    /// Trimmed, lower-cased header cells.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Split one line into trimmed fields. The second element is `true` when the
/// line ends inside an unterminated quoted span; the span then runs to the
/// end of the line.
fn split_fields(line: &str) -> (Vec<String>, bool) {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    let fields = fields
        .into_iter()
        .map(|field| field.trim().to_owned())
        .collect();
    (fields, in_quotes)
}

fn fields_of(line_number: usize, line: &str) -> Vec<String> {
    let (fields, unterminated) = split_fields(line);
    if unterminated {
        warn!(line = line_number, "unterminated quote runs to end of line");
    }
    fields
}

fn is_blank(fields: &[String]) -> bool {
    matches!(fields, [only] if only.is_empty())
}

/// Tokenize a whole document. The first non-empty line is the header.
#[instrument(skip_all)]
pub fn tokenize(text: &str) -> Table {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(n, line)| (n + 1, line))
        .filter(|(_, line)| !line.is_empty());
    let Some((header_line, header)) = lines.next() else {
        debug!("empty document");
        return Table::default();
    };
    let headers = fields_of(header_line, header)
        .into_iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    let rows = lines
        .map(|(n, line)| fields_of(n, line))
        .filter(|fields| !is_blank(fields))
        .collect::<Vec<_>>();
    debug!(columns = headers.len(), rows = rows.len(), "tokenized document");
    Table { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split_line(line: &str) -> Vec<String> {
        split_fields(line).0
    }

    #[test]
    fn commas_inside_quotes_are_content() {
        assert_eq!(split_line(r#""Proj, X",5,"7""#), vec!["Proj, X", "5", "7"]);
    }

    #[test]
    fn doubled_quote_inside_quotes_is_literal() {
        assert_eq!(split_line(r#""He said ""hi""""#), vec![r#"He said "hi""#]);
        assert_eq!(split_line(r#"a,"x""y",b"#), vec!["a", r#"x"y"#, "b"]);
    }

    #[test]
    fn quotes_toggle_mid_field() {
        assert_eq!(split_line(r#"ab"c,d"e,f"#), vec!["abc,de", "f"]);
        assert_eq!(split_line(r#""",x"#), vec!["", "x"]);
    }

    #[test]
    fn fields_are_trimmed() {
        assert_eq!(split_line("  a ,\tb\t, \" c \" "), vec!["a", "b", "c"]);
        assert_eq!(split_line(""), vec![""]);
        assert_eq!(split_line("a,"), vec!["a", ""]);
    }

    #[test]
    fn unterminated_quote_runs_to_end_of_line() {
        let (fields, unterminated) = split_fields(r#"a,"b,c"#);
        assert_eq!(fields, vec!["a", "b,c"]);
        assert!(unterminated);
        let table = tokenize("name,skills\nx,\"Go, Rust\ny,SQL\n");
        assert_eq!(table.rows, vec![vec!["x", "Go, Rust"], vec!["y", "SQL"]]);
    }

    #[test]
    fn header_is_lower_cased() {
        let table = tokenize(" Project_Name , SKILLS \nAlpha,Go\n");
        assert_eq!(table.headers, vec!["project_name", "skills"]);
        assert_eq!(table.rows, vec![vec!["Alpha", "Go"]]);
    }

    #[test]
    fn crlf_and_empty_lines() {
        let table = tokenize("a,b\r\n\r\n1,2\r\n\n3,4");
        assert_eq!(table.headers, vec!["a", "b"]);
        assert_eq!(table.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn whitespace_only_rows_are_skipped() {
        let with_blanks = tokenize("a,b\n1,2\n   \n\t\n");
        let without = tokenize("a,b\n1,2");
        assert_eq!(with_blanks, without);
        // A row of empty fields is not blank.
        assert_eq!(tokenize("a,b\n,\n").rows, vec![vec!["", ""]]);
    }

    #[test]
    fn empty_document() {
        assert_eq!(tokenize(""), Table::default());
        assert_eq!(tokenize("\n\n"), Table::default());
        let header_only = tokenize("a,b\n");
        assert_eq!(header_only.headers, vec!["a", "b"]);
        assert!(header_only.rows.is_empty());
    }
}
