use folio_core::TextSpan;

/// Split `**bold**` markers into spans. An unmatched `**` is kept as
/// literal text.
pub fn parse_emphasis(src: &str) -> Vec<TextSpan> {
    let mut spans = Vec::new();
    let mut rest = src;

    while let Some(open) = rest.find("**") {
        let after = &rest[open + 2..];
        let Some(close) = after.find("**") else {
            break;
        };
        if open > 0 {
            spans.push(TextSpan::plain(&rest[..open]));
        }
        if close > 0 {
            spans.push(TextSpan::bold(&after[..close]));
        }
        rest = &after[close + 2..];
    }

    if !rest.is_empty() {
        spans.push(TextSpan::plain(rest));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_bold_runs() {
        let spans = parse_emphasis("Achieved a **5.37x speedup** by **refactoring**.");
        assert_eq!(
            spans,
            vec![
                TextSpan::plain("Achieved a "),
                TextSpan::bold("5.37x speedup"),
                TextSpan::plain(" by "),
                TextSpan::bold("refactoring"),
                TextSpan::plain("."),
            ]
        );
    }

    #[test]
    fn unmatched_marker_is_literal() {
        assert_eq!(
            parse_emphasis("a ** b"),
            vec![TextSpan::plain("a ** b")]
        );
        assert!(parse_emphasis("").is_empty());
        assert_eq!(parse_emphasis("****"), Vec::<TextSpan>::new());
    }
}
