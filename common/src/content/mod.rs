//! News content with inline images.
//!
//! Article bodies are plain text with embedded image markers of the form
//! `![alt](url)`. This module splits such text into typed [`Segment`]s for
//! display and performs the editor's marker insertion.
//!
//! Parsing is a hand-written single pass: find `![`, then the first `](`,
//! then the first `)`. Anything that does not complete that shape stays
//! literal text, so malformed input never fails to parse. Concatenating the
//! `raw()` text of all segments always gives back the input.

mod edit;
mod marker;
mod segment;

pub use edit::{
    image_urls, insert_image, marker_at, relabel_image, remove_range, EditError, Insertion,
};
pub use marker::{marker, ImageMarker, DEFAULT_ALT};
pub use segment::{Segment, Segments};

/// Lazily splits `content` into text and image segments.
pub fn segments(content: &str) -> Segments<'_> {
    Segments::new(content)
}

/// Splits `content` into text and image segments.
pub fn parse(content: &str) -> Vec<Segment<'_>> {
    segments(content).collect()
}

#[cfg(test)]
mod tests;
