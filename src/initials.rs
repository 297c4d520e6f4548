/// Whitespace as a JavaScript `\s` class sees it: includes U+FEFF,
/// excludes U+0085.
fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_separator(c: char) -> bool {
    is_js_space(c) || matches!(c, '.' | '_' | '-')
}

fn upper_prefix(s: &str, n: usize) -> String {
    s.chars().take(n).flat_map(char::to_uppercase).collect()
}

/// Avatar label for a participant: up to two uppercase characters taken
/// from the part before `@`.
pub fn get_initials(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let local = text.split('@').next().unwrap_or_default();
    let mut parts = local.split(is_separator).filter(|p| !p.is_empty());

    match (parts.next(), parts.next()) {
        (None, _) => upper_prefix(local, 2),
        (Some(only), None) => upper_prefix(only, 2),
        (Some(first), Some(second)) => {
            let mut out = upper_prefix(first, 1);
            out.push_str(&upper_prefix(second, 1));
            out
        }
    }
}
