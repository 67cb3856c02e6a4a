use regex::Regex;

use crate::candidates::{Candidate, Candidates};
use crate::error::Result;
use crate::helpers::named_or_empty;
use crate::tokens::TokenTables;

/// First parenthesised segment, which carries the "system info" part of the UA.
const PARENTHETICAL: &str = r"(?s)\((.*?)\)";

/// A token may be followed by free text up to the next `;`, then must end at
/// a `;` or at the end of a line.
const PLATFORM_SUFFIX: &str = r"(?: [^;]*)?(?:;|$)";

/// `Token/1.2`, `Token 1.2`, `Token:1.2`, `Token); 1.2` or a bare `Token/`.
const BROWSER_SUFFIX: &str = r"(?:\)?;?)(?:[:/ ](?P<version>[0-9A-Z.]+)|/[A-Z]*)";

const GECKO_REVISION: &str = r"(?is)rv:(?P<version>[0-9A-Z.]+)";

/// Leading product token for clients that carry none of the known browser
/// tokens. Needs a negative look-ahead, hence fancy_regex.
const FALLBACK: &str = r"(?i)^(?!Mozilla)(?P<browser>[A-Z0-9\-]+)(?:/(?P<version>[0-9A-Z.]+))?";

/// Join token fragments into one named group, prefixed with `flags` and
/// followed by `suffix`.
pub(crate) fn token_pattern(flags: &str, group: &str, tokens: &[String], suffix: &str) -> String {
    format!("(?{})(?P<{}>{}){}", flags, group, tokens.join("|"), suffix)
}

/// Helper: compile a token alternation, or nothing when the table is empty
/// (an empty alternation would match everywhere).
fn compile_tokens(flags: &str, group: &str, tokens: &[String], suffix: &str) -> Result<Option<Regex>> {
    if tokens.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(&token_pattern(flags, group, tokens, suffix))?))
}

/// All regexes a parse needs, compiled once from a [`TokenTables`].
pub(crate) struct CompiledPatterns {
    parenthetical: Regex,
    platform: Option<Regex>,
    browser: Option<Regex>,
    gecko_revision: Regex,
    fallback: fancy_regex::Regex,
}

impl CompiledPatterns {
    pub fn build(tables: &TokenTables) -> Result<Self> {
        Ok(Self {
            parenthetical: Regex::new(PARENTHETICAL)?,
            platform: compile_tokens("im", "platform", &tables.platforms, PLATFORM_SUFFIX)?,
            browser: compile_tokens("i", "browser", &tables.browsers, BROWSER_SUFFIX)?,
            gecko_revision: Regex::new(GECKO_REVISION)?,
            fallback: fancy_regex::Regex::new(FALLBACK)?,
        })
    }

    /// Every platform token in the first parenthesised segment, in order,
    /// duplicates included.
    pub fn platform_tokens<'a>(&self, ua: &'a str) -> Vec<&'a str> {
        let (Some(re), Some(segment)) = (&self.platform, self.parenthetical.captures(ua)) else {
            return Vec::new();
        };
        let Some(segment) = segment.get(1) else {
            return Vec::new();
        };
        re.captures_iter(segment.as_str())
            .filter_map(|c| c.name("platform").map(|m| m.as_str()))
            .collect()
    }

    /// Every browser token with its version, scanning the whole UA.
    pub fn candidates<'a>(&self, ua: &'a str) -> Candidates<'a> {
        let Some(re) = &self.browser else {
            return Candidates::default();
        };
        let entries = re
            .captures_iter(ua)
            .filter_map(|c| {
                let token = c.name("browser")?.as_str();
                Some(Candidate {
                    token,
                    version: named_or_empty(&c, "version"),
                })
            })
            .collect();
        Candidates::new(entries)
    }

    /// Value of the first `rv:` marker.
    pub fn gecko_revision<'a>(&self, ua: &'a str) -> Option<&'a str> {
        self.gecko_revision
            .captures(ua)
            .and_then(|c| c.name("version"))
            .map(|m| m.as_str())
    }

    /// Leading `Product/version` of a UA that did not start with `Mozilla`.
    /// Returns the product and its (possibly empty) version.
    pub fn fallback<'a>(&self, ua: &'a str) -> Option<(&'a str, &'a str)> {
        // A backtrack-limit error counts as no match.
        let caps = self.fallback.captures(ua).ok().flatten()?;
        let browser = caps.name("browser")?.as_str();
        let version = caps.name("version").map_or("", |m| m.as_str());
        Some((browser, version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> CompiledPatterns {
        CompiledPatterns::build(&TokenTables::default()).unwrap()
    }

    fn pairs<'a>(c: &Candidates<'a>) -> Vec<(&'a str, &'a str)> {
        (0..c.len())
            .filter_map(|i| c.get(i))
            .map(|c| (c.token, c.version))
            .collect()
    }

    #[test]
    fn platform_tokens_only_in_first_parenthetical() {
        let p = patterns();
        let ua = "Foo (Windows NT 6.1; WOW64) Bar (Linux; Android 4.4)";
        assert_eq!(p.platform_tokens(ua), vec!["Windows"]);
    }

    #[test]
    fn platform_tokens_keep_duplicates_and_order() {
        let p = patterns();
        let ua = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_4 like Mac OS X)";
        assert_eq!(p.platform_tokens(ua), vec!["iPhone", "iPhone"]);
    }

    #[test]
    fn platform_tokens_multi_word() {
        let p = patterns();
        assert_eq!(
            p.platform_tokens("(Windows NT 10.0; Xbox; Xbox One)"),
            vec!["Windows", "Xbox", "Xbox One"]
        );
        assert_eq!(p.platform_tokens("(New Nintendo 3DS like iPhone)"), vec!["New Nintendo 3DS"]);
    }

    #[test]
    fn platform_token_needs_a_terminator() {
        let p = patterns();
        // `Silk/1.1.0-80` is followed by `/`, not by a space, `;` or the end.
        assert_eq!(
            p.platform_tokens("(Linux; U; Android 2.3.4; en-us; Silk/1.1.0-80)"),
            vec!["Linux", "Android"]
        );
        assert_eq!(p.platform_tokens("(X11; linux-gnu)"), vec!["linux-gnu"]);
    }

    #[test]
    fn bb_token_keeps_its_semicolon() {
        let p = patterns();
        assert_eq!(p.platform_tokens("(BB10; Touch)"), vec!["BB10;"]);
    }

    #[test]
    fn no_parenthetical_no_platform() {
        let p = patterns();
        assert!(p.platform_tokens("Opera/9.80 Presto/2.12").is_empty());
    }

    #[test]
    fn parenthetical_spans_newlines() {
        let p = patterns();
        assert_eq!(p.platform_tokens("X (foo;\nAndroid 4.4; bar)"), vec!["Android"]);
    }

    #[test]
    fn candidates_in_order() {
        let p = patterns();
        let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                  (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36";
        assert_eq!(
            pairs(&p.candidates(ua)),
            vec![
                ("AppleWebKit", "537.36"),
                ("Chrome", "90.0.4430.212"),
                ("Safari", "537.36"),
            ]
        );
    }

    #[test]
    fn candidate_separators() {
        let p = patterns();
        let ua = "Mozilla/5.0 (compatible; MSIE 9.0; Windows NT 6.1; Trident/5.0)";
        assert_eq!(pairs(&p.candidates(ua)), vec![("MSIE", "9.0"), ("Trident", "5.0")]);

        assert_eq!(
            pairs(&p.candidates("Mozilla/5.0 (PLAYSTATION 3; 3.55)")),
            vec![("PLAYSTATION 3", "3.55")]
        );
    }

    #[test]
    fn bare_slash_yields_empty_version() {
        let p = patterns();
        assert_eq!(pairs(&p.candidates("Safari/ Lynx/abc")), vec![("Safari", ""), ("Lynx", "abc")]);
    }

    #[test]
    fn gecko_revision() {
        let p = patterns();
        assert_eq!(
            p.gecko_revision("Mozilla/5.0 (Windows NT 6.3; Trident/7.0; RV:11.0) like Gecko"),
            Some("11.0")
        );
        assert_eq!(p.gecko_revision("Mozilla/5.0 (Windows NT 6.3)"), None);
    }

    #[test]
    fn fallback_skips_mozilla() {
        let p = patterns();
        assert_eq!(p.fallback("SomeCustomClient/2.1"), Some(("SomeCustomClient", "2.1")));
        assert_eq!(p.fallback("my-client"), Some(("my-client", "")));
        assert_eq!(p.fallback("Mozilla/5.0"), None);
        assert_eq!(p.fallback("mozilla/5.0"), None);
        assert_eq!(p.fallback("/1.0"), None);
    }

    #[test]
    fn empty_tables_match_nothing() {
        let tables = TokenTables {
            platforms: Vec::new(),
            browsers: Vec::new(),
            ..TokenTables::default()
        };
        let p = CompiledPatterns::build(&tables).unwrap();
        assert!(p.platform_tokens("(Linux; Android 4.4)").is_empty());
        assert!(p.candidates("Chrome/1.0").is_empty());
    }
}
