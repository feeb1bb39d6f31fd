//! Runtime state of the news editor.

use std::ops::Range;

use common::requests::NewsDraft;
use yew::prelude::*;

use super::helpers::draft_fingerprint;

/// Image marker the caret was last placed in, shown in the image dialog.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage {
    /// Byte range of the whole marker in the content.
    pub range: Range<usize>,
    pub alt: String,
    pub url: String,
}

/// Main state container for the `NewsEditor`.
///
/// Fields are `pub` because they are accessed by `view` and `update`.
pub struct NewsEditor {
    /// Id of the article being edited, `None` until a new one is first saved.
    pub news_id: Option<i64>,

    /// Form values, submitted as-is on save.
    pub draft: NewsDraft,

    /// The content `<textarea>`.
    pub textarea_ref: NodeRef,

    /// Hidden file input for images inserted into the content.
    pub content_file_ref: NodeRef,

    /// Hidden file input for the cover image.
    pub cover_file_ref: NodeRef,

    /// Top sheet showing the image marker under the caret.
    pub image_dialog_ref: NodeRef,

    pub selected_image: Option<SelectedImage>,

    /// An upload is in flight; upload buttons are disabled.
    pub uploading: bool,

    pub saving: bool,

    /// Guard for the first-render load.
    pub loaded: bool,

    /// Fingerprint of the draft at the last load or save.
    pub saved_fingerprint: String,
}

impl NewsEditor {
    pub fn new() -> Self {
        let draft = NewsDraft::default();
        Self {
            news_id: None,
            saved_fingerprint: draft_fingerprint(&draft),
            draft,
            textarea_ref: Default::default(),
            content_file_ref: Default::default(),
            cover_file_ref: Default::default(),
            image_dialog_ref: Default::default(),
            selected_image: None,
            uploading: false,
            saving: false,
            loaded: false,
        }
    }

    /// Whether the draft differs from what was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        draft_fingerprint(&self.draft) != self.saved_fingerprint
    }

    pub fn mark_saved(&mut self) {
        self.saved_fingerprint = draft_fingerprint(&self.draft);
    }
}
