use std::borrow::Cow;

/// Text of a named capture group, or `""` if the group didn't participate.
pub(crate) fn named_or_empty<'a>(captures: &regex::Captures<'a>, group: &str) -> &'a str {
    captures.name(group).map_or("", |m| m.as_str())
}

/// True if `s` starts with an ASCII digit (so never for an empty string).
pub(crate) fn starts_with_digit(s: &str) -> bool {
    s.bytes().next().is_some_and(|b| b.is_ascii_digit())
}

/// Empty strings count as absent.
pub(crate) fn non_empty<'a>(value: Option<Cow<'a, str>>) -> Option<Cow<'a, str>> {
    value.filter(|v| !v.is_empty())
}
