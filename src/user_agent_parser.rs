use super::error::{Error, Result};
use super::parser::CompiledPatterns;
use super::platform;
use super::rules::disambiguate;
use super::source::{Environment, UserAgentSource};
use super::tokens::TokenTables;
use super::types::*;
use rayon::prelude::*;
use std::borrow::Cow;
use std::path::Path;
use std::sync::OnceLock;

/// Compiled token tables plus the rule engine; build once, parse many times.
pub struct UserAgentParser {
    tables: TokenTables,
    patterns: CompiledPatterns,
}

impl UserAgentParser {
    /// Build a parser from the built-in token tables.
    pub fn new() -> Result<Self> {
        Self::with_tables(TokenTables::default())
    }

    /// Build a parser from custom token tables.
    pub fn with_tables(tables: TokenTables) -> Result<Self> {
        let patterns = CompiledPatterns::build(&tables)?;
        tracing::debug!(
            platforms = tables.platforms.len(),
            browsers = tables.browsers.len(),
            priority = tables.platform_priority.len(),
            aliases = tables.platform_aliases.len(),
            "user agent parser compiled"
        );
        Ok(Self { tables, patterns })
    }

    /// Load token tables from a YAML file and build the parser.
    ///
    /// Keys missing from the file keep their built-in values.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tables: TokenTables = load_yaml(path)?;
        tracing::debug!(path = %path.display(), "user agent token tables loaded");
        Self::with_tables(tables)
    }

    pub fn tables(&self) -> &TokenTables {
        &self.tables
    }

    /// Parse a User-Agent string.
    ///
    /// Never fails: anything unrecognised comes back as `None` fields. The
    /// result borrows from `ua` wherever it can.
    pub fn parse<'a>(&self, ua: &'a str) -> ParseResult<'a> {
        if ua.is_empty() {
            return ParseResult::default();
        }

        let platform = platform::select(
            &self.patterns.platform_tokens(ua),
            &self.tables.platform_priority,
        )
        .map(|p| platform::normalize(p, &self.tables.platform_aliases));

        let candidates = self.patterns.candidates(ua);
        if candidates.is_empty() {
            // Clients without any known token: take the leading product, and
            // skip disambiguation altogether.
            return match self.patterns.fallback(ua) {
                Some((browser, version)) => {
                    tracing::trace!(browser, version, "no known browser token, using leading product");
                    ParseResult::new(
                        platform,
                        Some(Cow::Borrowed(browser)),
                        Some(Cow::Borrowed(version)),
                    )
                }
                None => ParseResult::default(),
            };
        }

        tracing::trace!(candidates = candidates.len(), "browser candidates found");
        disambiguate(platform, &candidates, self.patterns.gecko_revision(ua))
    }

    /// Parse `input`, asking `source` for a user agent when `input` is `None`.
    ///
    /// Fails with [`Error::MissingUserAgent`] only if neither has one; an
    /// empty string is a valid (empty) user agent.
    pub fn parse_from(
        &self,
        input: Option<&str>,
        source: &impl UserAgentSource,
    ) -> Result<ParseResult<'static>> {
        match input {
            Some(ua) => Ok(self.parse(ua).into_owned()),
            None => {
                let ua = source.user_agent().ok_or(Error::MissingUserAgent)?;
                Ok(self.parse(&ua).into_owned())
            }
        }
    }

    /// Parse many user agents in parallel. Results keep the input order.
    pub fn parse_all<'a>(&self, uas: &[&'a str]) -> Vec<ParseResult<'a>> {
        uas.par_iter().map(|&ua| self.parse(ua)).collect()
    }
}

/// Parse with the shared default parser, falling back to the
/// `HTTP_USER_AGENT` environment variable when `input` is `None`.
pub fn parse_user_agent(input: Option<&str>) -> Result<ParseResult<'static>> {
    default_parser()?.parse_from(input, &Environment)
}

static DEFAULT_PARSER: OnceLock<UserAgentParser> = OnceLock::new();

fn default_parser() -> Result<&'static UserAgentParser> {
    if let Some(parser) = DEFAULT_PARSER.get() {
        return Ok(parser);
    }
    let parser = UserAgentParser::new()?;
    Ok(DEFAULT_PARSER.get_or_init(|| parser))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}
