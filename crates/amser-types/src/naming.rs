//! Type-path naming helpers.
//!
//! Type paths use `::` as the segment separator, which is what
//! [`std::any::type_name`] produces. Generic arguments are ignored:
//! `shop::Page<shop::Product>` lives in `shop` and is named `Page`.
//!
//! # Examples
//!
//! ```
//! use amser_types::naming::{enclosing_namespace, root_name};
//!
//! assert_eq!(enclosing_namespace("Shop::Product"), Some("Shop"));
//! assert_eq!(enclosing_namespace("Product"), None);
//! assert_eq!(root_name("shop::LineItemSerializer"), "line_item");
//! ```

/// Separator between type-path segments.
pub const PATH_SEPARATOR: &str = "::";

const SERIALIZER_SUFFIX: &str = "_serializer";

fn strip_generics(type_path: &str) -> &str {
    match type_path.find('<') {
        Some(idx) => &type_path[..idx],
        None => type_path,
    }
}

/// The enclosing namespace of a type path, or `None` for a bare name.
pub fn enclosing_namespace(type_path: &str) -> Option<&str> {
    let path = strip_generics(type_path);
    let idx = path.rfind(PATH_SEPARATOR)?;
    let namespace = &path[..idx];
    if namespace.is_empty() {
        None
    } else {
        Some(namespace)
    }
}

/// The last segment of a type path.
pub fn last_segment(type_path: &str) -> &str {
    let path = strip_generics(type_path);
    match path.rfind(PATH_SEPARATOR) {
        Some(idx) => &path[idx + PATH_SEPARATOR.len()..],
        None => path,
    }
}

/// Derive the default root key for a type path.
///
/// Takes the last segment, converts it to snake case and drops a trailing
/// `_serializer`.
pub fn root_name(type_path: &str) -> String {
    let snake = to_snake_case(last_segment(type_path));
    match snake.strip_suffix(SERIALIZER_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => snake,
    }
}

fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if ch == '-' {
            out.push('_');
            continue;
        }
        if ch.is_uppercase() {
            if i > 0 {
                let prev = chars[i - 1];
                let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
                // `HTMLParser` splits before the `P`, `LineItem` before the `I`.
                let boundary = prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower);
                if boundary && !out.ends_with('_') {
                    out.push('_');
                }
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
