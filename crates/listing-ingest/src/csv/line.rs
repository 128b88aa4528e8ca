//! Single-line CSV field splitting.
//!
//! Quoting is honored only within one physical line; a quoted field never
//! spans a line break.

/// Splits one physical line into fields.
///
/// A quote opens a quoted section only at the start of a field. Inside it the
/// delimiter is literal and `""` is an escaped quote; text after the closing
/// quote is appended to the same field. An unterminated quote runs to the end
/// of the line. Values are not trimmed, and an empty line has no fields.
pub fn parse_csv_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    if line.is_empty() {
        return fields;
    }

    let mut current = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                // Check for escaped quote ("")
                if chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(c);
            }
            continue;
        }

        if c == delimiter {
            fields.push(std::mem::take(&mut current));
            at_field_start = true;
            continue;
        }
        if c == '"' && at_field_start {
            in_quotes = true;
        } else {
            current.push(c);
        }
        at_field_start = false;
    }

    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_line_simple() {
        assert_eq!(parse_csv_line("a,b,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_semicolon() {
        assert_eq!(parse_csv_line("a;b,c;d", ';'), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_parse_csv_line_quoted() {
        let result = parse_csv_line("\"hello, world\",b,c", ',');
        assert_eq!(result, vec!["hello, world", "b", "c"]);
    }

    #[test]
    fn test_parse_csv_line_escaped_quotes() {
        let result = parse_csv_line("\"a,b\"\"c\",d", ',');
        assert_eq!(result, vec!["a,b\"c", "d"]);
    }

    #[test]
    fn test_parse_csv_line_not_trimmed() {
        assert_eq!(parse_csv_line("  a  , b ", ','), vec!["  a  ", " b "]);
    }

    #[test]
    fn test_parse_csv_line_empty() {
        assert!(parse_csv_line("", ',').is_empty());
    }

    #[test]
    fn test_parse_csv_line_trailing_delimiter() {
        assert_eq!(parse_csv_line("x,y,", ','), vec!["x", "y", ""]);
    }

    #[test]
    fn test_parse_csv_line_quote_inside_unquoted_field() {
        assert_eq!(parse_csv_line("ab\"c,d", ','), vec!["ab\"c", "d"]);
        assert_eq!(parse_csv_line(" \"a\",b", ','), vec![" \"a\"", "b"]);
    }

    #[test]
    fn test_parse_csv_line_text_after_closing_quote() {
        assert_eq!(parse_csv_line("\"ab\"c,d", ','), vec!["abc", "d"]);
    }

    #[test]
    fn test_parse_csv_line_unterminated_quote() {
        assert_eq!(parse_csv_line("\"abc", ','), vec!["abc"]);
        assert_eq!(parse_csv_line("x,\"a,b", ','), vec!["x", "a,b"]);
    }
}
