//! Ordered disambiguation rules.
//!
//! A UA usually carries several browser tokens (`AppleWebKit`, `Chrome` and
//! `Safari` all show up in a plain Chrome UA). Each rule below recognises one
//! vendor quirk and, if it applies, decides the final browser and version and
//! sometimes overrides the platform. Rules are tried in table order and the
//! first one that applies wins, so the order is part of the behaviour.

use std::borrow::Cow;

use crate::candidates::{Candidate, Candidates};
use crate::helpers::starts_with_digit;
use crate::types::ParseResult;

/// What a rule sees.
pub(crate) struct Context<'a, 'c> {
    /// Platform picked by the platform extractor, after aliasing.
    pub platform: Option<&'c str>,
    pub candidates: &'c Candidates<'a>,
    /// Value of the `rv:` marker, if any.
    pub gecko_revision: Option<&'a str>,
    /// First candidate: the browser/version used when no rule says otherwise.
    pub default: Candidate<'a>,
}

impl<'a> Context<'a, '_> {
    fn key(&self, token: &str) -> Option<usize> {
        self.candidates.position(token)
    }

    fn version_at(&self, key: usize) -> &'a str {
        self.candidates.version_at(key)
    }

    fn version_of(&self, token: &str) -> Option<&'a str> {
        self.candidates.version_of(token)
    }
}

/// Outcome of a rule that applied.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Resolution<'a> {
    /// `None` keeps the extracted platform.
    pub platform: Option<Cow<'a, str>>,
    pub browser: Cow<'a, str>,
    pub version: &'a str,
}

impl<'a> Resolution<'a> {
    fn new(browser: impl Into<Cow<'a, str>>, version: &'a str) -> Self {
        Self {
            platform: None,
            browser: browser.into(),
            version,
        }
    }

    fn on(mut self, platform: impl Into<Cow<'a, str>>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}

type Apply = for<'a, 'c, 'r> fn(&'r Context<'a, 'c>) -> Option<Resolution<'a>>;

pub(crate) struct Rule {
    pub name: &'static str,
    pub apply: Apply,
}

pub(crate) const RULES: &[Rule] = &[
    Rule { name: "iceweasel", apply: iceweasel },
    Rule { name: "playstation-vita", apply: playstation_vita },
    Rule { name: "kindle-fire", apply: kindle_fire },
    Rule { name: "nintendo", apply: nintendo },
    Rule { name: "kindle", apply: kindle },
    Rule { name: "opera-next", apply: opera_next },
    Rule { name: "opera", apply: opera },
    Rule { name: "midori", apply: midori },
    Rule { name: "internet-explorer", apply: internet_explorer },
    Rule { name: "vivaldi", apply: vivaldi },
    Rule { name: "chrome", apply: chrome },
    Rule { name: "webkit", apply: webkit },
    Rule { name: "playstation", apply: playstation },
];

/// Run the rule table over a non-empty candidate list.
pub(crate) fn disambiguate<'a>(
    platform: Option<Cow<'a, str>>,
    candidates: &Candidates<'a>,
    gecko_revision: Option<&'a str>,
) -> ParseResult<'a> {
    let Some(default) = candidates.first() else {
        return ParseResult::new(platform, None, None);
    };

    let resolved = {
        let ctx = Context {
            platform: platform.as_deref(),
            candidates,
            gecko_revision,
            default,
        };
        RULES
            .iter()
            .find_map(|rule| (rule.apply)(&ctx).map(|r| (rule.name, r)))
    };

    match resolved {
        Some((rule, r)) => {
            tracing::trace!(
                rule,
                browser = %r.browser,
                version = r.version,
                platform.overridden = r.platform.is_some(),
                "user agent disambiguated"
            );
            ParseResult::new(
                r.platform.or(platform),
                Some(r.browser),
                Some(Cow::Borrowed(r.version)),
            )
        }
        None => ParseResult::new(
            platform,
            Some(Cow::Borrowed(default.token)),
            Some(Cow::Borrowed(default.version)),
        ),
    }
}

fn iceweasel<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    (ctx.default.token == "Iceweasel").then(|| Resolution::new("Firefox", ctx.default.version))
}

fn playstation_vita<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    ctx.key("playstation vita")?;
    Some(Resolution::new("Browser", ctx.default.version).on("PlayStation Vita"))
}

fn kindle_fire<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.key("kindle fire build").or_else(|| ctx.key("silk"))?;
    let token = ctx.candidates.get(key)?.token;
    let browser = if token == "Silk" { "Silk" } else { "Kindle" };

    // Silk often reports a build tag instead of a version. Take the one after
    // an exact-case `Version/` then, or the first candidate's.
    let mut version = ctx.version_at(key);
    if !starts_with_digit(version) {
        let fallback = ctx.candidates.position_exact("Version").unwrap_or(0);
        version = ctx.version_at(fallback);
    }
    Some(Resolution::new(browser, version).on("Kindle Fire"))
}

fn nintendo<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.key("nintendobrowser");
    if key.is_none() && ctx.platform != Some("Nintendo 3DS") {
        return None;
    }
    Some(Resolution::new("NintendoBrowser", ctx.version_at(key.unwrap_or(0))))
}

fn kindle<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.key("kindle")?;
    let token = ctx.candidates.get(key)?.token;
    Some(Resolution::new(token, ctx.version_at(key)).on("Kindle"))
}

fn opera_next<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.key("opr")?;
    Some(Resolution::new("Opera Next", ctx.version_at(key)))
}

fn opera<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.key("opera")?;
    let version = ctx.version_of("version").unwrap_or_else(|| ctx.version_at(key));
    Some(Resolution::new("Opera", version))
}

fn midori<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.key("midori")?;
    Some(Resolution::new("Midori", ctx.version_at(key)))
}

/// MSIE, IE11 (`Trident` + `rv:`), IEMobile and EdgeHTML all report as MSIE.
fn internet_explorer<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let msie = ctx.default.token == "MSIE";
    let trident = if msie {
        None
    } else {
        ctx.gecko_revision.and_then(|_| ctx.key("trident"))
    };
    // Only looked up when neither of the above applied.
    let edge = if msie || trident.is_some() {
        None
    } else {
        ctx.key("edge")
    };
    if !msie && trident.is_none() && edge.is_none() {
        return None;
    }

    if let Some(key) = ctx.key("iemobile") {
        return Some(Resolution::new("IEMobile", ctx.version_at(key)));
    }
    let version = match edge {
        Some(key) => ctx.version_at(key),
        None => ctx.gecko_revision.unwrap_or(ctx.default.version),
    };
    Some(Resolution::new("MSIE", version))
}

fn vivaldi<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.key("vivaldi")?;
    Some(Resolution::new("Vivaldi", ctx.version_at(key)))
}

fn chrome<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.key("crios").or_else(|| ctx.key("chrome"))?;
    Some(Resolution::new("Chrome", ctx.version_at(key)))
}

/// Bare WebKit: Safari, the BlackBerry browser, TizenBrowser or the stock
/// Android browser.
fn webkit<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    if ctx.default.token != "AppleWebKit" {
        return None;
    }
    let platform = ctx.platform.unwrap_or_default();

    let mut resolution = if platform == "Android" {
        Resolution::new(ctx.default.token, ctx.version_at(0))
    } else if platform.starts_with("BB") {
        Resolution::new("BlackBerry Browser", ctx.version_at(0)).on("BlackBerry")
    } else if platform == "BlackBerry" || platform == "PlayBook" {
        Resolution::new("BlackBerry Browser", ctx.version_at(0))
    } else if let Some(key) = ctx.key("safari") {
        Resolution::new("Safari", ctx.version_at(key))
    } else if let Some(key) = ctx.key("tizenbrowser") {
        Resolution::new("TizenBrowser", ctx.version_at(key))
    } else {
        Resolution::new(ctx.default.token, ctx.version_at(0))
    };

    if let Some(version) = ctx.version_of("version") {
        resolution.version = version;
    }
    Some(resolution)
}

/// PlayStation 3/4 and PSP browsers are NetFront based.
fn playstation<'a>(ctx: &Context<'a, '_>) -> Option<Resolution<'a>> {
    let key = ctx.candidates.position_where(is_playstation_console)?;
    let token = ctx.candidates.get(key)?.token;
    let model: String = token.chars().filter(char::is_ascii_digit).collect();
    Some(Resolution::new("NetFront", ctx.default.version).on(format!("PlayStation {model}")))
}

/// `playstation <digit>` anywhere in an already lower-cased token.
fn is_playstation_console(token: &str) -> bool {
    token.match_indices("playstation ").any(|(i, m)| {
        token[i + m.len()..]
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_digit())
    })
}
