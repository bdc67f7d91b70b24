//! Query-string parameter presets for the two supported API calls.

/// Which preset a call starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    /// Single page by title: intro extract plus page image.
    Lookup,
    /// Opensearch-style title suggestions.
    Search,
}

const LOOKUP_PRESET: &[(&str, &str)] = &[
    ("action", "query"),
    ("prop", "extracts|pageimages"),
    ("exintro", "true"),
    ("explaintext", "true"),
    ("exsectionformat", "plain"),
    ("pithumbsize", "300"),
    ("redirects", "resolve"),
    ("format", "json"),
    ("formatversion", "2"),
];

const SEARCH_PRESET: &[(&str, &str)] = &[
    ("action", "opensearch"),
    ("redirects", "resolve"),
    ("format", "json"),
    ("formatversion", "2"),
];

impl CallKind {
    pub fn preset(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Lookup => LOOKUP_PRESET,
            Self::Search => SEARCH_PRESET,
        }
    }

    /// Name of the per-call parameter carrying the title or term.
    pub fn variable_key(self) -> &'static str {
        match self {
            Self::Lookup => "titles",
            Self::Search => "search",
        }
    }
}

/// Ordered name/value pairs sent as the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn set(&mut self, name: &str, value: &str) {
        match self.0.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.0.push((name.to_string(), value.to_string())),
        }
    }
}

/// Fresh copy of the preset for `kind` with its variable pair merged in.
///
/// The value is passed through as-is, empty strings included.
pub fn build(kind: CallKind, value: &str) -> Params {
    let mut params = Params(
        kind.preset()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    );
    params.set(kind.variable_key(), value);
    params
}
