/// One browser-product token found in the UA, with the version that followed
/// it (empty when the token was followed by a bare `/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate<'a> {
    pub token: &'a str,
    pub version: &'a str,
}

/// Browser candidates in order of appearance, plus a lower-cased copy of each
/// token for case-insensitive lookups.
#[derive(Debug, Default)]
pub(crate) struct Candidates<'a> {
    entries: Vec<Candidate<'a>>,
    lowered: Vec<String>,
}

impl<'a> Candidates<'a> {
    pub fn new(entries: Vec<Candidate<'a>>) -> Self {
        let lowered = entries.iter().map(|c| c.token.to_lowercase()).collect();
        Self { entries, lowered }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn first(&self) -> Option<Candidate<'a>> {
        self.entries.first().copied()
    }

    pub fn get(&self, index: usize) -> Option<Candidate<'a>> {
        self.entries.get(index).copied()
    }

    /// Index of the first candidate whose token equals `token` ignoring case.
    /// `token` must already be lower-case.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.lowered.iter().position(|t| t == token)
    }

    /// Index of the first candidate whose token is exactly `token`.
    pub fn position_exact(&self, token: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.token == token)
    }

    /// Index of the first candidate whose lower-cased token satisfies `pred`.
    pub fn position_where(&self, pred: impl Fn(&str) -> bool) -> Option<usize> {
        self.lowered.iter().position(|t| pred(t))
    }

    pub fn version_at(&self, index: usize) -> &'a str {
        self.entries.get(index).map_or("", |c| c.version)
    }

    /// Version paired with the first `token` candidate, if there is one.
    pub fn version_of(&self, token: &str) -> Option<&'a str> {
        self.position(token).map(|i| self.version_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Candidates<'static> {
        Candidates::new(vec![
            Candidate { token: "AppleWebKit", version: "537.36" },
            Candidate { token: "Chrome", version: "90.0" },
            Candidate { token: "Safari", version: "537.36" },
            Candidate { token: "CHROME", version: "91.0" },
        ])
    }

    #[test]
    fn position_is_case_insensitive_first_match() {
        let c = sample();
        assert_eq!(c.position("chrome"), Some(1));
        assert_eq!(c.position("applewebkit"), Some(0));
        assert_eq!(c.position("edge"), None);
    }

    #[test]
    fn index_zero_is_a_real_match() {
        let c = sample();
        assert_eq!(c.version_of("applewebkit"), Some("537.36"));
    }

    #[test]
    fn version_at_out_of_range_is_empty() {
        let c = sample();
        assert_eq!(c.version_at(10), "");
        assert_eq!(c.version_of("version"), None);
    }

    #[test]
    fn position_exact_respects_case() {
        let c = sample();
        assert_eq!(c.position_exact("CHROME"), Some(3));
        assert_eq!(c.position_exact("chrome"), None);
    }

    #[test]
    fn position_where_sees_lowercased_tokens() {
        let c = sample();
        assert_eq!(c.position_where(|t| t.starts_with("saf")), Some(2));
    }
}
