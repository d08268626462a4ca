//! Worksheet naming.

/// Longest worksheet name Excel accepts.
pub(super) const MAX_SHEET_NAME_LEN: usize = 31;

/// Upper camel case: split on anything that is not alphanumeric and
/// upper-case the first letter of each word, leaving the rest untouched.
///
/// `person info` -> `PersonInfo`, `named_thing` -> `NamedThing`,
/// `HTTPServer` stays `HTTPServer`.
#[must_use]
pub fn camelcase(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Strip characters Excel forbids in sheet names and cap the length.
#[must_use]
pub fn sanitize_sheet_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '\\' | '/' | '?' | '*' | '[' | ']' | ':'))
        .take(MAX_SHEET_NAME_LEN)
        .collect()
}

/// Worksheet name for a class.
#[must_use]
pub fn sheet_name_for_class(class_name: &str) -> String {
    sanitize_sheet_name(&camelcase(class_name))
}
