use indexmap::IndexMap;
use std::borrow::Cow;

/// Pick the platform among the tokens found in the parenthesised segment.
///
/// Duplicates are dropped first. With more than one distinct token the first
/// `priority` entry present wins, falling back to appearance order.
pub(crate) fn select<'a>(tokens: &[&'a str], priority: &[String]) -> Option<&'a str> {
    let mut distinct: Vec<&'a str> = Vec::with_capacity(tokens.len());
    for &token in tokens {
        if !distinct.contains(&token) {
            distinct.push(token);
        }
    }

    if distinct.len() > 1 {
        if let Some(&preferred) = priority
            .iter()
            .find_map(|p| distinct.iter().find(|&&t| t == p.as_str()))
        {
            return Some(preferred);
        }
    }
    distinct.first().copied()
}

/// Apply the alias table (`linux-gnu` → `Linux`, ...) to a selected token.
pub(crate) fn normalize<'a>(platform: &'a str, aliases: &IndexMap<String, String>) -> Cow<'a, str> {
    match aliases.get(platform) {
        Some(alias) => Cow::Owned(alias.clone()),
        None => Cow::Borrowed(platform),
    }
}
