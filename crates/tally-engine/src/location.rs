//! Query Parameters
//!
//! Form-urlencoded query handling for the `list` / `state` parameters and
//! the shareable link. Mirrors URLSearchParams: `set` replaces every
//! occurrence, unrelated parameters survive.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::EngineConfig;

/// application/x-www-form-urlencoded byte set
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Parse `?a=1&b=2` (leading `?` optional)
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let pairs = search
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((k, v)) => (form_decode(k), form_decode(v)),
                None => (form_decode(part), String::new()),
            })
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn set(&mut self, key: &str, value: &str) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.pairs[first].1 = value.to_string();
                let mut i = 0;
                self.pairs.retain(|(k, _)| {
                    let keep = i <= first || k != key;
                    i += 1;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value.to_string())),
        }
    }

    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// The `list` and `state` parameters of the page the user arrived on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub list: Option<String>,
    pub state: Option<String>,
}

impl PageQuery {
    pub fn from_search(search: &str, config: &EngineConfig) -> Self {
        let params = QueryParams::parse(search);
        let non_empty = |key: &str| params.get(key).filter(|v| !v.is_empty()).map(str::to_string);
        Self {
            list: non_empty(&config.query_list_key),
            state: non_empty(&config.query_state_key),
        }
    }
}

/// Rebuild `href` with `list` and `state` set, keeping other parameters
/// and the fragment
pub fn share_url(href: &str, list_id: &str, token: &str, config: &EngineConfig) -> String {
    let (rest, fragment) = match href.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (href, None),
    };
    let (base, search) = rest.split_once('?').unwrap_or((rest, ""));

    let mut params = QueryParams::parse(search);
    params.set(&config.query_state_key, token);
    params.set(&config.query_list_key, list_id);

    let mut url = format!("{}?{}", base, params.to_query_string());
    if let Some(fragment) = fragment {
        url.push('#');
        url.push_str(fragment);
    }
    url
}

fn form_encode(s: &str) -> String {
    utf8_percent_encode(s, FORM).to_string().replace("%20", "+")
}

fn form_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    percent_decode_str(&s).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_get() {
        let params = QueryParams::parse("?list=criticalDamage&state=YWJj%2B%3D&x");
        assert_eq!(params.get("list"), Some("criticalDamage"));
        assert_eq!(params.get("state"), Some("YWJj+="));
        assert_eq!(params.get("x"), Some(""));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_set_replaces_all_occurrences() {
        let mut params = QueryParams::parse("a=1&b=2&a=3");
        params.set("a", "9");
        assert_eq!(params.to_query_string(), "a=9&b=2");
        params.set("c", "x y");
        assert_eq!(params.to_query_string(), "a=9&b=2&c=x+y");
    }

    #[test]
    fn test_page_query() {
        let config = EngineConfig::default();
        let query = PageQuery::from_search("?list=&state=abc", &config);
        assert_eq!(query.list, None);
        assert_eq!(query.state.as_deref(), Some("abc"));
    }

    #[test]
    fn test_share_url_keeps_other_params() {
        let config = EngineConfig::default();
        let url = share_url(
            "https://example.org/calc/?lang=de&state=old#top",
            "criticalDamage",
            "ab+/=",
            &config,
        );
        assert_eq!(
            url,
            "https://example.org/calc/?lang=de&state=ab%2B%2F%3D&list=criticalDamage#top"
        );
        let search = url.split_once('?').unwrap().1.split('#').next().unwrap();
        assert_eq!(QueryParams::parse(search).get("state"), Some("ab+/="));
    }
}
