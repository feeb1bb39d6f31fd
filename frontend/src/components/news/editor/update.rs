//! Update function for the news editor.
//!
//! Elm-style: mutate `NewsEditor` according to `Msg` and return whether the
//! view must re-render.
//!
//! Key behaviors
//! - Form field edits, with dirty tracking against the last load/save.
//! - Content image insertion: file picker -> upload -> `![图片](url)` marker
//!   replacing the textarea selection, caret restored after the marker.
//! - Clicking inside a marker opens the image dialog, where its alt text can
//!   be rewritten or the marker deleted.
//! - Cover upload and save (`POST` for new articles, `PUT` afterwards).

use common::content::{insert_image, marker_at, relabel_image, remove_range, EditError};
use common::requests::NewsDraft;
use web_sys::HtmlTextAreaElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::helpers::{show_toast, Tone};
use crate::tops_sheet::top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{byte_to_utf16_idx, selection_range, utf16_to_byte_idx};
use super::messages::Msg;
use super::state::{NewsEditor, SelectedImage};

pub fn update(component: &mut NewsEditor, ctx: &Context<NewsEditor>, msg: Msg) -> bool {
    match msg {
        Msg::SetTitle(title) => {
            component.draft.title = title;
            true
        }
        Msg::SetSummary(summary) => {
            component.draft.summary = summary;
            true
        }
        Msg::SetCategory(category) => {
            component.draft.category = category;
            true
        }
        Msg::SetPublished(published) => {
            component.draft.is_published = published;
            true
        }
        Msg::UpdateContent(content) => {
            if component.draft.content == content {
                return false;
            }
            component.draft.content = content;
            true
        }
        Msg::Loaded(news) => {
            component.news_id = Some(news.id);
            component.draft = NewsDraft::from(&news);
            component.mark_saved();
            true
        }
        Msg::LoadFailed => {
            show_toast(Tone::Error, "加载新闻失败，已切换为新建。");
            component.news_id = None;
            true
        }
        Msg::OpenContentImagePicker => {
            click_file_input(&component.content_file_ref);
            false
        }
        Msg::OpenCoverPicker => {
            click_file_input(&component.cover_file_ref);
            false
        }
        Msg::ContentImageSelected(file) => {
            component.uploading = true;
            upload(ctx, file, Msg::ContentImageUploaded);
            true
        }
        Msg::CoverSelected(file) => {
            component.uploading = true;
            upload(ctx, file, Msg::CoverUploaded);
            true
        }
        Msg::ContentImageUploaded(url) => {
            component.uploading = false;
            insert_uploaded_image(component, &url);
            true
        }
        Msg::CoverUploaded(url) => {
            component.uploading = false;
            component.draft.cover_image = url;
            true
        }
        Msg::UploadFailed => {
            component.uploading = false;
            show_toast(Tone::Error, "图片上传失败。");
            true
        }
        Msg::ContentClicked(utf16_pos) => {
            let content = &component.draft.content;
            let pos = utf16_to_byte_idx(content, utf16_pos as usize);
            let Some((range, marker)) = marker_at(content, pos) else {
                return false;
            };
            component.selected_image = Some(SelectedImage {
                range,
                alt: marker.alt.to_string(),
                url: marker.url.to_string(),
            });
            open_top_sheet(component.image_dialog_ref.clone());
            true
        }
        Msg::SetSelectedAlt(alt) => {
            let Some(image) = component.selected_image.as_mut() else {
                return false;
            };
            let alt = alt.trim();
            if alt == image.alt {
                return false;
            }
            match relabel_image(&component.draft.content, image.range.clone(), alt) {
                Ok(relabeled) => {
                    component.draft.content = relabeled.content;
                    image.range.end = relabeled.cursor;
                    image.alt = alt.to_string();
                }
                Err(EditError::InvalidAlt) => {
                    show_toast(Tone::Error, "图片说明不能换行，也不能包含“](”。");
                }
                Err(err) => tracing::warn!("could not relabel image marker: {err}"),
            }
            true
        }
        Msg::DeleteSelectedImage => {
            if let Some(image) = component.selected_image.take() {
                match remove_range(&component.draft.content, image.range.clone()) {
                    Ok(content) => {
                        component.draft.content = content;
                        restore_caret(component, image.range.start);
                    }
                    Err(err) => tracing::warn!("could not remove image marker: {err}"),
                }
            }
            close_top_sheet(component.image_dialog_ref.clone());
            true
        }
        Msg::CloseImageDialog => {
            component.selected_image = None;
            close_top_sheet(component.image_dialog_ref.clone());
            true
        }
        Msg::Save => {
            if component.saving {
                return false;
            }
            if component.draft.title.trim().is_empty() {
                show_toast(Tone::Error, "请输入标题。");
                return false;
            }
            component.saving = true;
            let id = component.news_id;
            let mut draft = component.draft.clone();
            draft.sync_images();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::save_news(id, &draft).await {
                    Ok(news) => link.send_message(Msg::SaveSucceeded(news)),
                    Err(err) => {
                        tracing::error!("failed to save news: {err}");
                        link.send_message(Msg::SaveFailed);
                    }
                }
            });
            true
        }
        Msg::SaveSucceeded(news) => {
            component.saving = false;
            component.news_id = Some(news.id);
            component.mark_saved();
            show_toast(Tone::Success, "新闻已保存。");
            true
        }
        Msg::SaveFailed => {
            component.saving = false;
            show_toast(Tone::Error, "保存失败，请稍后重试。");
            true
        }
    }
}

fn click_file_input(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<web_sys::HtmlInputElement>() {
        // Reset so picking the same file twice still fires `change`.
        input.set_value("");
        input.click();
    }
}

fn upload(ctx: &Context<NewsEditor>, file: web_sys::File, done: fn(String) -> Msg) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::upload_image(file).await {
            Ok(url) => link.send_message(done(url)),
            Err(err) => {
                tracing::error!("image upload failed: {err}");
                link.send_message(Msg::UploadFailed);
            }
        }
    });
}

/// Replaces the textarea's current selection with a marker for `url`.
fn insert_uploaded_image(component: &mut NewsEditor, url: &str) {
    let content = &component.draft.content;
    let selection = match component.textarea_ref.cast::<HtmlTextAreaElement>() {
        Some(textarea) => selection_range(&textarea, content),
        None => content.len()..content.len(),
    };

    match insert_image(content, selection, url) {
        Ok(insertion) => {
            component.draft.content = insertion.content;
            restore_caret(component, insertion.cursor);
        }
        Err(err) => {
            tracing::error!("could not insert image marker: {err}");
            show_toast(Tone::Error, "插入图片失败。");
        }
    }
}

/// Pushes the content into the textarea and puts the caret at byte offset
/// `cursor` once the DOM has settled.
fn restore_caret(component: &NewsEditor, cursor: usize) {
    let Some(textarea) = component.textarea_ref.cast::<HtmlTextAreaElement>() else {
        return;
    };
    textarea.set_value(&component.draft.content);
    let caret = byte_to_utf16_idx(&component.draft.content, cursor);
    let textarea_ref = component.textarea_ref.clone();
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(10).await;
        if let Some(textarea) = textarea_ref.cast::<HtmlTextAreaElement>() {
            textarea.set_selection_range(caret, caret).ok();
            textarea.focus().ok();
        }
    });
}
