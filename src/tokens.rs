use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Platform tokens
//
// Searched only inside the first parenthesised segment of the UA. Entries are
// regex fragments (case-insensitive) and are tried in the listed order.
// ---------------------------------------------------------------------------

pub const PLATFORM_TOKENS: &[&str] = &[
    r"BB\d+;",
    "Android",
    "CrOS",
    "Tizen",
    "iPhone",
    "iPad",
    "Linux",
    "Macintosh",
    "Windows(?: Phone)?",
    "Silk",
    "linux-gnu",
    "BlackBerry",
    "PlayBook",
    "(?:New )?Nintendo (?:WiiU?|3?DS)",
    "Xbox(?: One)?",
];

/// When several distinct platform tokens match, the first of these present
/// wins. Otherwise the first token in appearance order is used.
pub const PLATFORM_PRIORITY: &[&str] = &["Xbox One", "Xbox", "Windows Phone", "Tizen", "Android"];

/// Renames applied to the selected platform token.
pub const PLATFORM_ALIASES: &[(&str, &str)] = &[("linux-gnu", "Linux"), ("CrOS", "Chrome OS")];

// ---------------------------------------------------------------------------
// Browser tokens
//
// Searched across the whole UA. Engine tokens (`AppleWebKit`, `Trident`) and
// the generic `Version` marker are included: the disambiguation rules look
// them up by name.
// ---------------------------------------------------------------------------

pub const BROWSER_TOKENS: &[&str] = &[
    "Camino",
    "Kindle(?: Fire Build)?",
    "Firefox",
    "Iceweasel",
    "Safari",
    "MSIE",
    "Trident",
    "AppleWebKit",
    "TizenBrowser",
    "Chrome",
    "Vivaldi",
    "IEMobile",
    "Opera",
    "OPR",
    "Silk",
    "Midori",
    "Edge",
    "CriOS",
    "Baiduspider",
    "Googlebot",
    "YandexBot",
    "bingbot",
    "Lynx",
    "Version",
    "Wget",
    "curl",
    "NintendoBrowser",
    r"PLAYSTATION (?:\d|Vita)+",
];

/// Token tables a [`UserAgentParser`](crate::UserAgentParser) is compiled
/// from.
///
/// Deserializable from YAML; any key left out of the file keeps its built-in
/// value, so a config can override only the priority list, say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenTables {
    pub platforms: Vec<String>,
    pub browsers: Vec<String>,
    pub platform_priority: Vec<String>,
    /// Uses IndexMap to keep the file's ordering when serialized back.
    pub platform_aliases: IndexMap<String, String>,
}

impl Default for TokenTables {
    fn default() -> Self {
        Self {
            platforms: to_owned(PLATFORM_TOKENS),
            browsers: to_owned(BROWSER_TOKENS),
            platform_priority: to_owned(PLATFORM_PRIORITY),
            platform_aliases: PLATFORM_ALIASES
                .iter()
                .map(|&(from, to)| (from.to_owned(), to.to_owned()))
                .collect(),
        }
    }
}

fn to_owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_owned()).collect()
}
