//! Best-effort User-Agent classifier.
//!
//! Extracts the platform, browser and browser version from a User-Agent
//! string. Candidate tokens are found with regexes built from fixed token
//! tables, then an ordered table of vendor heuristics picks the real browser
//! among them (a Chrome UA also says `Safari`, an Edge UA also says `Chrome`,
//! and so on).
//!
//! ```
//! let r = user_agent_parser::parse_user_agent(Some(
//!     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
//!      (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36",
//! ))
//! .unwrap();
//! assert_eq!(r.platform(), Some("Windows"));
//! assert_eq!(r.browser(), Some("Chrome"));
//! assert_eq!(r.version(), Some("90.0.4430.212"));
//! ```

mod candidates;
mod error;
mod helpers;
mod parser;
mod platform;
mod rules;
mod source;
mod tokens;
mod types;
mod user_agent_parser;

pub use error::{Error, Result};
pub use source::{Environment, UserAgentSource, USER_AGENT_VAR};
pub use tokens::{TokenTables, BROWSER_TOKENS, PLATFORM_ALIASES, PLATFORM_PRIORITY, PLATFORM_TOKENS};
pub use types::*;
pub use user_agent_parser::{parse_user_agent, UserAgentParser};
