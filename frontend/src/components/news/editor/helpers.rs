//! Utility functions for the news editor.
//!
//! - **Index conversion** between Rust's UTF-8 byte offsets and the UTF-16
//!   code unit offsets reported by `selectionStart` / `selectionEnd`.
//! - **Selection access** on the content textarea, already converted to byte
//!   offsets.
//! - **Dirty tracking** through an MD5 fingerprint of the draft.

use std::ops::Range;

use common::requests::NewsDraft;
use web_sys::HtmlTextAreaElement;

/// Converts a UTF-16 code unit index to the UTF-8 byte index of the same
/// position. Indices past the end map to `s.len()`; an index that falls
/// inside a surrogate pair maps to the start of that character.
pub fn utf16_to_byte_idx(s: &str, utf16_idx: usize) -> usize {
    let mut units = 0;
    for (byte_idx, ch) in s.char_indices() {
        units += ch.len_utf16();
        if units > utf16_idx {
            return byte_idx;
        }
    }
    s.len()
}

/// Converts a UTF-8 byte index back to UTF-16 code units, for
/// `set_selection_range`.
pub fn byte_to_utf16_idx(s: &str, byte_idx: usize) -> u32 {
    s.get(..byte_idx).unwrap_or(s).encode_utf16().count() as u32
}

/// Current selection of `textarea` as a byte range into `text`.
///
/// Browsers report `selectionStart == selectionEnd` for a bare caret. A
/// missing selection (element not focusable) is treated as a caret at the end.
pub fn selection_range(textarea: &HtmlTextAreaElement, text: &str) -> Range<usize> {
    let read = |value: Result<Option<u32>, wasm_bindgen::JsValue>| {
        value
            .ok()
            .flatten()
            .map(|utf16| utf16_to_byte_idx(text, utf16 as usize))
            .unwrap_or(text.len())
    };
    let start = read(textarea.selection_start());
    let end = read(textarea.selection_end());
    start.min(end)..start.max(end)
}

/// Computes the MD5 hash of a string as a hex digest.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Fingerprint of every field of the draft, compared against the value taken
/// at the last load or save to show the unsaved-changes marker.
pub fn draft_fingerprint(draft: &NewsDraft) -> String {
    compute_md5(&serde_json::to_string(draft).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_indices_match() {
        assert_eq!(utf16_to_byte_idx("hello", 3), 3);
        assert_eq!(byte_to_utf16_idx("hello", 3), 3);
    }

    #[test]
    fn cjk_text_converts_both_ways() {
        let text = "新闻AB";
        assert_eq!(utf16_to_byte_idx(text, 2), 6);
        assert_eq!(utf16_to_byte_idx(text, 3), 7);
        assert_eq!(byte_to_utf16_idx(text, 6), 2);
    }

    #[test]
    fn surrogate_pairs_count_twice() {
        let text = "a😀b";
        assert_eq!(utf16_to_byte_idx(text, 1), 1);
        assert_eq!(utf16_to_byte_idx(text, 3), 5);
        assert_eq!(utf16_to_byte_idx(text, 2), 1);
        assert_eq!(byte_to_utf16_idx(text, 5), 3);
    }

    #[test]
    fn past_the_end_clamps() {
        assert_eq!(utf16_to_byte_idx("ab", 10), 2);
        assert_eq!(utf16_to_byte_idx("", 0), 0);
    }

    #[test]
    fn fingerprint_tracks_content() {
        let mut draft = NewsDraft::default();
        let clean = draft_fingerprint(&draft);
        draft.content.push_str("![图片](x.png)");
        assert_ne!(draft_fingerprint(&draft), clean);
    }
}
