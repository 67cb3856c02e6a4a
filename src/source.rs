/// CGI-style variable the [`Environment`] source reads.
pub const USER_AGENT_VAR: &str = "HTTP_USER_AGENT";

/// Where to get a user agent from when the caller doesn't pass one.
pub trait UserAgentSource {
    /// The ambient user agent, or `None` if there is none to be had.
    fn user_agent(&self) -> Option<String>;
}

/// Reads [`USER_AGENT_VAR`] from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl UserAgentSource for Environment {
    fn user_agent(&self) -> Option<String> {
        // A value that isn't valid UTF-8 is still a user agent.
        std::env::var_os(USER_AGENT_VAR).map(|v| v.to_string_lossy().into_owned())
    }
}

impl<F> UserAgentSource for F
where
    F: Fn() -> Option<String>,
{
    fn user_agent(&self) -> Option<String> {
        self()
    }
}
