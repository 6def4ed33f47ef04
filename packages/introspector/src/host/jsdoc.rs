// JSDoc
//
// Turns a raw `/** ... */` block into its description text.

/// Returns `true` if `comment` is a JSDoc block (`/** ... */`, but not `/**/`).
pub fn is_jsdoc(comment: &str) -> bool {
    comment.starts_with("/**") && comment.ends_with("*/") && comment != "/**/"
}

/// Extract the description of a JSDoc block.
///
/// The description is everything before the first `@tag` line. Leading `*` gutters are
/// removed, line breaks are kept and surrounding blank lines are dropped.
pub fn description(comment: &str) -> String {
    let body = comment
        .strip_prefix("/**")
        .unwrap_or(comment)
        .strip_suffix("*/")
        .unwrap_or(comment);

    let mut lines = Vec::new();
    for line in body.lines() {
        let trimmed = line.trim().trim_start_matches('*').trim();
        if trimmed.starts_with('@') {
            break;
        }
        lines.push(trimmed);
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());

    lines[first..].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_single_line_block() {
        assert_eq!(description("/** a color */"), "a color");
    }

    #[test]
    fn should_keep_line_breaks() {
        let comment = "/**\n * First line.\n *\n * Second paragraph.\n */";
        assert_eq!(description(comment), "First line.\n\nSecond paragraph.");
    }

    #[test]
    fn should_stop_at_first_tag() {
        let comment = "/**\n * The value.\n * @deprecated use OTHER\n * trailing\n */";
        assert_eq!(description(comment), "The value.");
    }

    #[test]
    fn should_be_empty_for_tag_only_blocks() {
        assert_eq!(description("/** @internal */"), "");
    }

    #[test]
    fn should_recognize_jsdoc_blocks() {
        assert!(is_jsdoc("/** doc */"));
        assert!(!is_jsdoc("/* plain */"));
        assert!(!is_jsdoc("/**/"));
        assert!(!is_jsdoc("// line"));
    }
}
