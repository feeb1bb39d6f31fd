use std::fmt;

/// Alt text written by the editor's "insert image" action. Images carrying it
/// get no visible caption.
pub const DEFAULT_ALT: &str = "图片";

const OPEN: &str = "![";
const ALT_CLOSE: &str = "](";
const URL_CLOSE: char = ')';

/// An inline image reference `![alt](url)` borrowed from content text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMarker<'a> {
    pub alt: &'a str,
    pub url: &'a str,
}

impl<'a> ImageMarker<'a> {
    /// Byte length of the marker's source text.
    pub fn len(&self) -> usize {
        OPEN.len() + self.alt.len() + ALT_CLOSE.len() + self.url.len() + URL_CLOSE.len_utf8()
    }

    /// Caption shown under the image: the alt text, unless it is empty or the
    /// editor default.
    pub fn caption(&self) -> Option<&'a str> {
        (!self.alt.is_empty() && self.alt != DEFAULT_ALT).then_some(self.alt)
    }
}

impl fmt::Display for ImageMarker<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{OPEN}{}{ALT_CLOSE}{}{URL_CLOSE}", self.alt, self.url)
    }
}

/// Marker text the editor inserts for an uploaded image.
pub fn marker(url: &str) -> String {
    ImageMarker {
        alt: DEFAULT_ALT,
        url,
    }
    .to_string()
}

/// Finds the first well-formed marker in `text`.
///
/// Returns the byte offset where it starts together with the parsed marker.
/// A `![` candidate whose alt text spans a line break or whose url is empty
/// is skipped and the search resumes right after it. Once no `](` or `)` is
/// left, no later candidate can complete either.
pub(crate) fn find_marker(text: &str) -> Option<(usize, ImageMarker<'_>)> {
    let mut from = 0;
    while let Some(found) = text[from..].find(OPEN) {
        let start = from + found;
        let alt_start = start + OPEN.len();
        from = alt_start;

        let alt_len = text[alt_start..].find(ALT_CLOSE)?;
        let alt = &text[alt_start..alt_start + alt_len];
        if alt.contains('\n') {
            continue;
        }

        let url_start = alt_start + alt_len + ALT_CLOSE.len();
        let url_len = text[url_start..].find(URL_CLOSE)?;
        if url_len == 0 {
            continue;
        }
        let url = &text[url_start..url_start + url_len];
        return Some((start, ImageMarker { alt, url }));
    }
    None
}
