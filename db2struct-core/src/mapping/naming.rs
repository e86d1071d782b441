//! Identifier casing for table and column names.

/// Converts a `lower_snake` name to an exported Go identifier.
///
/// The name is lowercased, underscores become word breaks, every word is
/// capitalized and the breaks are removed. Word boundaries follow Go's
/// `strings.Title`: an ASCII character that is not a letter, digit or
/// underscore starts a new word and is kept in place.
///
/// ```rust
/// use db2struct_core::mapping::to_camel_case;
///
/// assert_eq!(to_camel_case("user_id"), "UserId");
/// assert_eq!(to_camel_case("ID"), "Id");
/// ```
pub fn to_camel_case(name: &str) -> String {
    let lowered = name.to_lowercase().replace('_', " ");
    let mut out = String::with_capacity(lowered.len());
    let mut at_word_start = true;

    for c in lowered.chars() {
        if c == ' ' {
            at_word_start = true;
            continue;
        }
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }

    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        !(c.is_ascii_alphanumeric() || c == '_')
    } else {
        c.is_whitespace()
    }
}
