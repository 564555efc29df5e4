//! Inline-style tokenization and stylesheet entry formatting.
//!
//! The tokenizer works on the raw text of a `style={{...}}` literal. It is
//! bracket-depth aware: array values such as `transform: [{scaleX: 2}]` are
//! treated as opaque single values, so commas and colons inside `[...]` are
//! not separators. Brace depth is deliberately not tracked; an object value
//! written without surrounding `[...]` is not protected from comma-splitting.

const PREFIX: &str = "style={{";
const SUFFIX: &str = "}}";

/// Tokenize an inline-style literal into `"key: value"` strings.
///
/// All whitespace is stripped before scanning, then canonical `": "` / `", "`
/// spacing is restored inside bracketed values.
pub fn get_style_contents(literal: &str) -> Vec<String> {
    let compact: String = literal.chars().filter(|c| !c.is_whitespace()).collect();
    let inner = compact.strip_prefix(PREFIX).unwrap_or(&compact);
    let inner = inner.strip_suffix(SUFFIX).unwrap_or(inner);

    let mut pairs = Vec::new();
    let mut key = String::new();
    let mut value = String::new();
    let mut in_value = false;
    let mut nested_level = 0usize;

    for c in inner.chars() {
        match c {
            '[' => {
                nested_level += 1;
                current(&mut key, &mut value, in_value).push(c);
            }
            ']' => {
                nested_level = nested_level.saturating_sub(1);
                current(&mut key, &mut value, in_value).push(c);
            }
            ':' if nested_level == 0 && !in_value => {
                in_value = true;
            }
            ':' if nested_level > 0 => {
                current(&mut key, &mut value, in_value).push_str(": ");
            }
            ',' if nested_level == 0 => {
                if !key.is_empty() {
                    pairs.push(format!("{}: {}", key, value));
                }
                key.clear();
                value.clear();
                in_value = false;
            }
            ',' => {
                current(&mut key, &mut value, in_value).push_str(", ");
            }
            _ => {
                current(&mut key, &mut value, in_value).push(c);
            }
        }
    }
    if !key.is_empty() {
        pairs.push(format!("{}: {}", key, value));
    }
    pairs
}

fn current<'a>(key: &'a mut String, value: &'a mut String, in_value: bool) -> &'a mut String {
    if in_value { value } else { key }
}

/// Render an inline-style literal as a stylesheet entry body.
///
/// The whitespace shape matches the indentation convention of
/// `StyleSheet.create({...})` blocks: two-space indent for the entry line,
/// four for each pair, a trailing comma after every pair, and a trailing
/// newline, so repeated extractions stay visually consistent.
pub fn format_for_pasting(literal: &str, entry_name: &str) -> String {
    let mut out = format!("  {}: {{\n", entry_name);
    for pair in get_style_contents(literal) {
        out.push_str("    ");
        out.push_str(&pair);
        out.push_str(",\n");
    }
    out.push_str("  },\n");
    out
}

/// Whether a selection is an inline-style literal that can be extracted.
///
/// Requires the `style={{...}}` wrapper and at least one key/value pair where
/// both sides are non-empty. A pair missing either side invalidates the whole
/// selection.
pub fn check_selection_is_valid_style(selection: &str) -> bool {
    let compact: String = selection.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.starts_with(PREFIX) || !compact.ends_with(SUFFIX) {
        return false;
    }
    let pairs = get_style_contents(selection);
    !pairs.is_empty()
        && pairs.iter().all(|pair| {
            pair.split_once(": ")
                .is_some_and(|(key, value)| !key.is_empty() && !value.is_empty())
        })
}

/// Whether a name can be used as a new style entry key.
pub fn is_valid_object_key(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    if first == '_' || first.is_ascii_digit() {
        return false;
    }
    !name.contains(' ')
}
