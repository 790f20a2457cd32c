//! Agent option strings: whitespace-separated `key=value` pairs.

use std::collections::HashMap;

/// A flat option map parsed from an argument string.
///
/// Later occurrences of a key override earlier ones, so callers can layer
/// defaults in front of user-supplied arguments. A token without `=` is
/// kept as a key with an empty value.
#[derive(Debug, Clone, Default)]
pub struct Options {
    entries: HashMap<String, String>,
}

impl Options {
    /// Parse an argument string such as `"role=black ploy=mcts T=1000"`.
    pub fn parse(args: &str) -> Self {
        let mut entries = HashMap::new();
        for token in args.split_whitespace() {
            match token.split_once('=') {
                Some((key, value)) => entries.insert(key.to_string(), value.to_string()),
                None => entries.insert(token.to_string(), String::new()),
            };
        }
        Self { entries }
    }

    /// The value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The value for `key`, or `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let opts = Options::parse("role=black name=searcher T=1000");
        assert_eq!(opts.get("role"), Some("black"));
        assert_eq!(opts.get("name"), Some("searcher"));
        assert_eq!(opts.get("T"), Some("1000"));
        assert_eq!(opts.get("seed"), None);
    }

    #[test]
    fn test_later_duplicate_wins() {
        let opts = Options::parse("name=random role=unknown role=white");
        assert_eq!(opts.get("role"), Some("white"));
    }

    #[test]
    fn test_token_without_equals() {
        let opts = Options::parse("verbose role=black");
        assert!(opts.contains("verbose"));
        assert_eq!(opts.get("verbose"), Some(""));
    }

    #[test]
    fn test_empty_and_default() {
        let opts = Options::parse("");
        assert_eq!(opts.get("role"), None);
        assert_eq!(opts.get_or("name", "random"), "random");
    }
}
