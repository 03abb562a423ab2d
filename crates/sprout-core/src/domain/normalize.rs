//! Input normalization: name casing and directory paths.
//!
//! Both transforms are pure and idempotent - applying them twice equals
//! applying them once. The answer collector runs them before a
//! [`ComponentSpec`](crate::domain::ComponentSpec) is ever constructed, so
//! downstream code can rely on normalized values.

/// Convert arbitrary input to PascalCase.
///
/// ## Rules
///
/// 1. Split on word boundaries
/// 2. Capitalize first letter of each word
/// 3. Join without separator
///
/// ## Examples
///
/// | Input | Output |
/// |-------|--------|
/// | "my button" | "MyButton" |
/// | "user-card" | "UserCard" |
/// | "HTTPHeader" | "HttpHeader" |
/// | "MyButton" | "MyButton" |
pub fn to_pascal_case(s: &str) -> String {
    split_words(s)
        .into_iter()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::new();
                    // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
                    out.extend(first.to_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Split a string into words based on casing and separators.
///
/// ## Word Boundary Detection
///
/// 1. **Explicit separators:** `_`, `-`, whitespace → always split
/// 2. **Case transition (camelCase):** `aB` → split between `a` and `B`
/// 3. **Acronym boundary:** `HTTPHeader` → split between `P` and `H`
///    (detected by `Upper Upper Lower` pattern)
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(current.to_lowercase());
                current = String::new();
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || next_lower {
                words.push(current.to_lowercase());
                current = String::new();
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current.to_lowercase());
    }

    words
}

/// Normalize a directory answer so the write step can concatenate blindly.
///
/// | Input | Output |
/// |-------|--------|
/// | "" | "./" |
/// | "src" | "src/" |
/// | "src/components/" | "src/components/" |
pub fn normalize_directory(s: &str) -> String {
    if s.is_empty() {
        return "./".to_string();
    }
    if s.ends_with('/') || s.ends_with('\\') {
        return s.to_string();
    }
    format!("{s}/")
}

/// Path-syntax validity predicate for the directory question.
///
/// A candidate is rejected when it contains a NUL byte or any character that
/// no common filesystem accepts in a path component.
pub fn is_valid_path(s: &str) -> bool {
    !s.chars()
        .any(|c| matches!(c, '\0' | '<' | '>' | ':' | '"' | '|' | '?' | '*'))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── to_pascal_case ────────────────────────────────────────────────────

    #[test]
    fn pascal_case_joins_spaced_words() {
        assert_eq!(to_pascal_case("my button"), "MyButton");
        assert_eq!(to_pascal_case("user card"), "UserCard");
    }

    #[test]
    fn pascal_case_handles_separators() {
        assert_eq!(to_pascal_case("my-button"), "MyButton");
        assert_eq!(to_pascal_case("my_button"), "MyButton");
        assert_eq!(to_pascal_case("my  button"), "MyButton");
    }

    #[test]
    fn pascal_case_handles_camel_input() {
        assert_eq!(to_pascal_case("myButton"), "MyButton");
        assert_eq!(to_pascal_case("HTTPHeader"), "HttpHeader");
    }

    #[test]
    fn pascal_case_is_idempotent() {
        for input in &["my button", "user-card", "alreadyPascal", "Widget"] {
            let once = to_pascal_case(input);
            assert_eq!(to_pascal_case(&once), once, "failed for: {input}");
        }
    }

    #[test]
    fn pascal_case_empty_is_empty() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("   "), "");
    }

    #[test]
    fn pascal_case_output_has_no_separators() {
        for input in &["a b c", "foo-bar_baz", "x  y"] {
            let out = to_pascal_case(input);
            assert!(
                !out.contains([' ', '-', '_']),
                "separator left in: {out}"
            );
        }
    }

    // ── normalize_directory ───────────────────────────────────────────────

    #[test]
    fn empty_directory_becomes_cwd_token() {
        assert_eq!(normalize_directory(""), "./");
    }

    #[test]
    fn missing_separator_is_appended() {
        assert_eq!(normalize_directory("src"), "src/");
        assert_eq!(normalize_directory("src/components"), "src/components/");
    }

    #[test]
    fn existing_separator_is_preserved() {
        assert_eq!(normalize_directory("src/"), "src/");
        assert_eq!(normalize_directory("./"), "./");
    }

    #[test]
    fn normalize_directory_is_idempotent() {
        for input in &["", "src", "src/", "a/b/c", "./"] {
            let once = normalize_directory(input);
            assert_eq!(normalize_directory(&once), once, "failed for: {input}");
        }
    }

    // ── is_valid_path ─────────────────────────────────────────────────────

    #[test]
    fn ordinary_paths_are_valid() {
        assert!(is_valid_path("src/components"));
        assert!(is_valid_path("./deep/nested/dir"));
        assert!(is_valid_path(""));
    }

    #[test]
    fn nul_byte_is_invalid() {
        assert!(!is_valid_path("\0bad"));
    }

    #[test]
    fn reserved_characters_are_invalid() {
        for bad in &["a<b", "a>b", "a:b", "a\"b", "a|b", "a?b", "a*b"] {
            assert!(!is_valid_path(bad), "accepted: {bad}");
        }
    }
}
