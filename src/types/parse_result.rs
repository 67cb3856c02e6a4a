use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

use crate::helpers::non_empty;

/// Platform, browser and browser version extracted from a user agent.
///
/// Each field is either a non-empty string or `None`. Values are borrowed
/// from the parsed UA where possible; use [`ParseResult::into_owned`] to
/// detach the result from it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct ParseResult<'a> {
    pub platform: Option<Cow<'a, str>>,
    pub browser: Option<Cow<'a, str>>,
    pub version: Option<Cow<'a, str>>,
}

impl<'a> ParseResult<'a> {
    /// Build a result, turning empty fields into `None`.
    pub fn new(
        platform: Option<Cow<'a, str>>,
        browser: Option<Cow<'a, str>>,
        version: Option<Cow<'a, str>>,
    ) -> Self {
        Self {
            platform: non_empty(platform),
            browser: non_empty(browser),
            version: non_empty(version),
        }
    }

    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }
    pub fn browser(&self) -> Option<&str> {
        self.browser.as_deref()
    }
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// True when nothing at all was recognised.
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.browser.is_none() && self.version.is_none()
    }

    pub fn into_owned(self) -> ParseResult<'static> {
        ParseResult {
            platform: self.platform.map(|v| Cow::Owned(v.into_owned())),
            browser: self.browser.map(|v| Cow::Owned(v.into_owned())),
            version: self.version.map(|v| Cow::Owned(v.into_owned())),
        }
    }
}

/// `Chrome 90.0 (Windows)`; absent parts are left out, an empty result
/// prints as `unknown`.
impl fmt::Display for ParseResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<Cow<'_, str>> = Vec::with_capacity(3);
        if let Some(browser) = self.browser() {
            parts.push(browser.into());
        }
        if let Some(version) = self.version() {
            parts.push(version.into());
        }
        if let Some(platform) = self.platform() {
            parts.push(format!("({platform})").into());
        }
        if parts.is_empty() {
            return f.write_str("unknown");
        }
        f.write_str(&parts.join(" "))
    }
}
