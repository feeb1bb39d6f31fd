use std::borrow::Cow;

use super::marker::{find_marker, ImageMarker};

/// A typed slice of content text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Image(ImageMarker<'a>),
}

impl<'a> Segment<'a> {
    /// The exact source text of this segment.
    pub fn raw(&self) -> Cow<'a, str> {
        match *self {
            Segment::Text(text) => Cow::Borrowed(text),
            Segment::Image(marker) => Cow::Owned(marker.to_string()),
        }
    }

    /// Byte length of the source text.
    pub fn len(&self) -> usize {
        match self {
            Segment::Text(text) => text.len(),
            Segment::Image(marker) => marker.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Text made of whitespace only. Renderers skip these between images.
    pub fn is_blank(&self) -> bool {
        matches!(self, Segment::Text(text) if text.trim().is_empty())
    }
}

/// Single-pass iterator over the segments of a content string.
///
/// Literal text between markers is yielded verbatim; empty text runs (two
/// adjacent markers, a marker at either end) are not yielded at all.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    rest: &'a str,
    pending: Option<ImageMarker<'a>>,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(content: &'a str) -> Self {
        Self {
            rest: content,
            pending: None,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(marker) = self.pending.take() {
            return Some(Segment::Image(marker));
        }
        if self.rest.is_empty() {
            return None;
        }

        match find_marker(self.rest) {
            Some((start, marker)) => {
                let text = &self.rest[..start];
                self.rest = &self.rest[start + marker.len()..];
                if text.is_empty() {
                    Some(Segment::Image(marker))
                } else {
                    self.pending = Some(marker);
                    Some(Segment::Text(text))
                }
            }
            None => {
                let text = self.rest;
                self.rest = "";
                Some(Segment::Text(text))
            }
        }
    }
}

impl std::iter::FusedIterator for Segments<'_> {}
