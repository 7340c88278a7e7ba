use url::{form_urlencoded, Url};

/// Name of the query parameter carrying the search text.
pub const SEARCH_PARAM: &str = "q";

const BASE: &str = "http://contacts.local/";

/// Path and query string of an in-app URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    query: Option<String>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            query: None,
        }
    }
}

impl Location {
    /// Parses an absolute or root-relative href. Scheme and host are discarded.
    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(BASE)?.join(href)?;
        Ok(Self {
            path: url.path().to_string(),
            query: url.query().filter(|q| !q.is_empty()).map(str::to_owned),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn href(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    /// First value of `name`, decoded. A bare `?q` yields `Some("")`.
    pub fn query_param(&self, name: &str) -> Option<String> {
        let query = self.query.as_deref()?;
        form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    pub fn has_query_param(&self, name: &str) -> bool {
        self.query_param(name).is_some()
    }

    /// Same path with the query string replaced by a single `name=value` pair,
    /// which is what a GET form with one field submits.
    pub fn with_query_param(&self, name: &str, value: &str) -> Self {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair(name, value)
            .finish();
        Self {
            path: self.path.clone(),
            query: Some(query),
        }
    }

    /// True when this location is `target` or nested below it.
    pub fn is_within(&self, target: &str) -> bool {
        let target = target.trim_end_matches('/');
        if target.is_empty() {
            return self.path == "/";
        }
        match self.path.strip_prefix(target) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}
