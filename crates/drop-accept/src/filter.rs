use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single accepted pattern, as allowed by the HTML file-upload `accept`
/// attribute: a wildcard media category, a file extension, or an exact
/// MIME type string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
enum Pattern {
    /// `audio/*`
    AnyAudio,
    /// `video/*`
    AnyVideo,
    /// `image/*`
    AnyImage,
    /// A dotted suffix such as `.png`, matched against the file name
    Extension(String),
    /// An exact MIME type such as `application/pdf`
    Mime(String),
}

impl Pattern {
    fn matches(&self, mime_type: &str, name: Option<&str>) -> bool {
        match self {
            Pattern::AnyAudio => mime_type.starts_with("audio/"),
            Pattern::AnyVideo => mime_type.starts_with("video/"),
            Pattern::AnyImage => mime_type.starts_with("image/"),
            // Extension patterns need the file name, which is unknown
            // while a drag is still in progress
            Pattern::Extension(ext) => {
                name.map_or(false, |name| name.ends_with(ext))
            }
            Pattern::Mime(mime) => mime_type == mime,
        }
    }
}

/// A parsed accept filter: a comma-separated list of patterns gating
/// which files a drop area takes.
///
/// An absent or empty filter accepts anything. A candidate matches the
/// filter if it matches at least one pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptFilter {
    patterns: Vec<Pattern>,
}

impl AcceptFilter {
    /// Parse a filter from the optional comma-separated form, e.g.
    /// `"image/*, .pdf, text/plain"`.
    ///
    /// Whitespace around patterns is ignored, and empty fragments are
    /// dropped, so a malformed filter degrades towards "accept anything"
    /// rather than erroring.
    pub fn parse(accept: Option<&str>) -> Self {
        let patterns = accept
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|pattern| !pattern.is_empty())
            .map(|pattern| match pattern {
                "audio/*" => Pattern::AnyAudio,
                "video/*" => Pattern::AnyVideo,
                "image/*" => Pattern::AnyImage,
                _ if pattern.starts_with('.') => {
                    Pattern::Extension(pattern.to_string())
                }
                _ => Pattern::Mime(pattern.to_string()),
            })
            .collect();

        AcceptFilter { patterns }
    }

    /// Return true if the filter has no patterns and accepts any file
    pub fn accepts_anything(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Check a declared MIME type, and optionally a file name, against the
    /// filter.
    ///
    /// `name` is `None` while a drag is in progress, because file names
    /// only become known once the drop completes. In that phase extension
    /// patterns can never match, so callers must treat a pre-drop result
    /// as advisory and re-check once names are available.
    pub fn matches(&self, mime_type: &str, name: Option<&str>) -> bool {
        if self.patterns.is_empty() {
            return true;
        }

        self.patterns
            .iter()
            .any(|pattern| pattern.matches(mime_type, name))
    }
}

impl FromStr for AcceptFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AcceptFilter::parse(Some(s)))
    }
}
