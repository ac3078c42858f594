/// Recovers the tag from a rendered variant value. Parametric variants embed
/// their argument inline (`VARCHAR(500)`), so everything from the first `(`
/// on belongs to the argument, not the tag.
///
/// A literal value containing `(` is indistinguishable from a parametric one;
/// literal specs keep their values delimiter-free by convention.
pub fn extract_tag(value: &str) -> &str {
    match value.find('(') {
        Some(open) => &value[..open],
        None => value,
    }
}

/// The text between the first `(` and the last `)`, or `None` when the value
/// carries no argument.
pub fn extract_argument(value: &str) -> Option<&str> {
    let open = value.find('(')?;
    let inner = &value[open + 1..];
    let close = inner.rfind(')')?;
    Some(&inner[..close])
}

#[cfg(test)]
mod tests {
    use super::{extract_argument, extract_tag};

    #[test]
    fn tag_of_plain_value_is_the_value() {
        assert_eq!(extract_tag("SERIAL"), "SERIAL");
        assert_eq!(extract_tag("TEXT"), "TEXT");
    }

    #[test]
    fn tag_stops_at_first_delimiter() {
        assert_eq!(extract_tag("VARCHAR(10)"), "VARCHAR");
        assert_eq!(extract_tag("DECIMAL(10,2)"), "DECIMAL");
        assert_eq!(extract_tag("F((x))"), "F");
    }

    #[test]
    fn argument_of_plain_value_is_none() {
        assert_eq!(extract_argument("SERIAL"), None);
        assert_eq!(extract_argument("VARCHAR(10"), None);
    }

    #[test]
    fn argument_spans_the_delimiters() {
        assert_eq!(extract_argument("VARCHAR(10)"), Some("10"));
        assert_eq!(extract_argument("DECIMAL(10,2)"), Some("10,2"));
        assert_eq!(extract_argument("F((x))"), Some("(x)"));
        assert_eq!(extract_argument("EMPTY()"), Some(""));
    }
}
