use std::ops::Range;

use thiserror::Error;

use super::marker::{find_marker, marker, ImageMarker};
use super::segment::Segment;
use super::segments;

/// Rejected edit requests. The content is never modified when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("selection {start}..{end} is reversed")]
    Reversed { start: usize, end: usize },
    #[error("selection end {end} is past the end of the content ({len} bytes)")]
    OutOfBounds { end: usize, len: usize },
    #[error("offset {0} is not on a character boundary")]
    NotCharBoundary(usize),
    #[error("{start}..{end} is not exactly one image marker")]
    NotAMarker { start: usize, end: usize },
    #[error("alt text may not contain a line break or `](`")]
    InvalidAlt,
}

/// Result of an insertion: the new content and where the caret belongs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub content: String,
    /// Byte offset right after the inserted marker.
    pub cursor: usize,
}

/// Replaces `selection` (UTF-8 byte offsets) with the default-alt marker for
/// `url`. A collapsed selection inserts at that offset.
///
/// The url is written as given. A `)` in it ends the marker early when the
/// content is parsed again.
pub fn insert_image(
    content: &str,
    selection: Range<usize>,
    url: &str,
) -> Result<Insertion, EditError> {
    check_range(content, &selection)?;

    let inserted = marker(url);
    let mut out =
        String::with_capacity(content.len() - selection.len() + inserted.len());
    out.push_str(&content[..selection.start]);
    out.push_str(&inserted);
    out.push_str(&content[selection.end..]);

    Ok(Insertion {
        content: out,
        cursor: selection.start + inserted.len(),
    })
}

/// Finds the marker whose source text surrounds byte offset `pos`, i.e. a caret
/// placed after its first byte and before its end.
pub fn marker_at(content: &str, pos: usize) -> Option<(Range<usize>, ImageMarker<'_>)> {
    let mut offset = 0;
    for segment in segments(content) {
        let span = offset..offset + segment.len();
        offset = span.end;
        if pos <= span.start {
            break;
        }
        if let Segment::Image(marker) = segment {
            if pos < span.end {
                return Some((span, marker));
            }
        }
    }
    None
}

/// Deletes the byte `range` from `content`.
pub fn remove_range(content: &str, range: Range<usize>) -> Result<String, EditError> {
    check_range(content, &range)?;
    let mut out = String::with_capacity(content.len() - range.len());
    out.push_str(&content[..range.start]);
    out.push_str(&content[range.end..]);
    Ok(out)
}

/// Rewrites the alt text of the marker spanning `range`, keeping its url.
///
/// The returned cursor is the end of the rewritten marker. An alt that would
/// stop the marker from parsing back (a line break or `](`) is rejected.
pub fn relabel_image(
    content: &str,
    range: Range<usize>,
    alt: &str,
) -> Result<Insertion, EditError> {
    check_range(content, &range)?;
    if alt.contains('\n') || alt.contains("](") {
        return Err(EditError::InvalidAlt);
    }
    let url = match find_marker(&content[range.clone()]) {
        Some((0, marker)) if marker.len() == range.len() => marker.url,
        _ => {
            return Err(EditError::NotAMarker {
                start: range.start,
                end: range.end,
            });
        }
    };

    let relabeled = ImageMarker { alt, url }.to_string();
    let mut out = String::with_capacity(content.len() - range.len() + relabeled.len());
    out.push_str(&content[..range.start]);
    out.push_str(&relabeled);
    out.push_str(&content[range.end..]);

    Ok(Insertion {
        content: out,
        cursor: range.start + relabeled.len(),
    })
}

/// Urls of every image marker, in document order.
pub fn image_urls(content: &str) -> Vec<&str> {
    segments(content)
        .filter_map(|segment| match segment {
            Segment::Image(marker) => Some(marker.url),
            Segment::Text(_) => None,
        })
        .collect()
}

fn check_range(content: &str, range: &Range<usize>) -> Result<(), EditError> {
    if range.start > range.end {
        return Err(EditError::Reversed {
            start: range.start,
            end: range.end,
        });
    }
    if range.end > content.len() {
        return Err(EditError::OutOfBounds {
            end: range.end,
            len: content.len(),
        });
    }
    for offset in [range.start, range.end] {
        if !content.is_char_boundary(offset) {
            return Err(EditError::NotCharBoundary(offset));
        }
    }
    Ok(())
}
