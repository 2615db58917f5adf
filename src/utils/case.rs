//! Component name normalisation.
//!
//! Component declarations in asset files use kebab-case (`media-image`),
//! while inflators are registered under camelCase (`mediaImage`).

/// Converts a kebab-case name to camelCase.
///
/// Every `-` followed by an ASCII word character is removed and that character is
/// upper-cased. Names without dashes are returned unchanged.
#[must_use]
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(&next) = chars.peek()
            && (next.is_ascii_alphanumeric() || next == '_')
        {
            chars.next();
            out.extend(next.to_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}
