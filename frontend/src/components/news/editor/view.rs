//! View rendering for the news editor.
//!
//! The form mirrors the article fields. Content images are inserted at the
//! caret through the "插入图片" button; a live preview below the textarea
//! renders the content exactly as the public article page does.

use common::model::news::NEWS_CATEGORIES;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::image::image_dialog;
use super::messages::Msg;
use super::state::NewsEditor;
use crate::components::news::content::NewsContent;

const INPUT_STYLE: &str = "width:100%;padding:8px 16px;border:1px solid #d1d5db;border-radius:6px;";
const LABEL_STYLE: &str = "display:block;font-size:0.875rem;font-weight:500;color:#374151;margin-bottom:4px;";

pub fn view(component: &NewsEditor, ctx: &Context<NewsEditor>) -> Html {
    let link = ctx.link();
    html! {
        <div class="news-editor" style="display:flex;flex-direction:column;gap:16px;">
            { build_header(component, link) }
            { build_title(component, link) }
            { build_category(component, link) }
            { build_summary(component, link) }
            { build_content(component, link) }
            { build_cover(component, link) }
            <div>
                <div style={LABEL_STYLE}>{ "预览" }</div>
                <div class="news-preview" style="border:1px dashed #d1d5db;border-radius:6px;padding:16px;">
                    <NewsContent content={AttrValue::from(component.draft.content.clone())} />
                </div>
            </div>
            { image_dialog(component, link) }
        </div>
    }
}

/// Title bar with the save button and the unsaved-changes dot.
fn build_header(component: &NewsEditor, link: &Scope<NewsEditor>) -> Html {
    let heading = if component.news_id.is_some() { "编辑新闻" } else { "新建新闻" };
    html! {
        <div style="display:flex;align-items:center;justify-content:space-between;">
            <h2 style="font-size:1.25rem;font-weight:bold;position:relative;">
                { heading }
                {
                    if component.is_dirty() {
                        html! {
                            <span
                                title="有未保存的修改"
                                style="position:absolute;top:2px;right:-12px;width:8px;height:8px;background:#e53935;border-radius:50%;"
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </h2>
            <button
                class="save-btn"
                disabled={component.saving || component.uploading}
                onclick={link.callback(|_| Msg::Save)}
            >
                { if component.saving { "保存中..." } else { "保存" } }
            </button>
        </div>
    }
}

fn build_title(component: &NewsEditor, link: &Scope<NewsEditor>) -> Html {
    html! {
        <div>
            <label style={LABEL_STYLE}>{ "标题" }</label>
            <input
                type="text"
                style={INPUT_STYLE}
                placeholder="请输入新闻标题"
                value={component.draft.title.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetTitle(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
            />
        </div>
    }
}

/// Category buttons. A category the editor does not offer (legacy data) is
/// shown as an extra active button so saving does not silently drop it.
fn build_category(component: &NewsEditor, link: &Scope<NewsEditor>) -> Html {
    let legacy = (!component.draft.has_known_category()).then(|| {
        html! {
            <button type="button" class="category-btn active" disabled={true}>
                { component.draft.category.clone() }
            </button>
        }
    });
    let options = NEWS_CATEGORIES
        .into_iter()
        .map(|category| {
            let selected = component.draft.category == category;
            html! {
                <button
                    type="button"
                    class={classes!("category-btn", selected.then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetCategory(category.to_string()))}
                >
                    { category }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <div style="display:flex;align-items:center;gap:16px;">
            <span style={LABEL_STYLE}>{ "分类" }</span>
            <div style="display:flex;gap:8px;">{ legacy }{ options }</div>
            <label style="display:flex;align-items:center;gap:4px;margin-left:auto;">
                <input
                    type="checkbox"
                    checked={component.draft.is_published}
                    onchange={link.callback(|e: Event| {
                        Msg::SetPublished(e.target_unchecked_into::<HtmlInputElement>().checked())
                    })}
                />
                { "立即发布" }
            </label>
        </div>
    }
}

fn build_summary(component: &NewsEditor, link: &Scope<NewsEditor>) -> Html {
    html! {
        <div>
            <label style={LABEL_STYLE}>{ "摘要" }</label>
            <textarea
                rows={2}
                style={INPUT_STYLE}
                placeholder="请输入新闻摘要"
                value={component.draft.summary.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetSummary(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
        </div>
    }
}

/// Content textarea with the image insertion button. A click inside a marker
/// opens the image dialog; moving the caret with the keyboard does not, so
/// markers stay editable by hand.
fn build_content(component: &NewsEditor, link: &Scope<NewsEditor>) -> Html {
    html! {
        <div>
            <div style="display:flex;align-items:center;justify-content:space-between;margin-bottom:4px;">
                <label style={LABEL_STYLE}>{ "正文" }</label>
                <input
                    ref={component.content_file_ref.clone()}
                    type="file"
                    accept="image/*"
                    style="display:none;"
                    onchange={link.batch_callback(|e: Event| {
                        selected_file(&e).map(Msg::ContentImageSelected)
                    })}
                />
                <button
                    type="button"
                    disabled={component.uploading}
                    onclick={link.callback(|_| Msg::OpenContentImagePicker)}
                >
                    { if component.uploading { "上传中..." } else { "插入图片" } }
                </button>
            </div>
            <textarea
                id="news-content"
                ref={component.textarea_ref.clone()}
                rows={10}
                spellcheck="false"
                style={format!("{INPUT_STYLE}font-family:monospace;font-size:0.875rem;")}
                placeholder="请输入新闻内容，点击插入图片可在光标位置插入图片"
                value={component.draft.content.clone()}
                oninput={link.callback(|e: InputEvent| {
                    Msg::UpdateContent(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
                onclick={link.callback(|e: MouseEvent| {
                    let textarea = e.target_unchecked_into::<HtmlTextAreaElement>();
                    Msg::ContentClicked(textarea.selection_start().ok().flatten().unwrap_or(0))
                })}
            />
            <p style="font-size:0.75rem;color:#9ca3af;margin-top:4px;">
                { "提示：使用 ![描述](图片链接) 格式插入图片" }
            </p>
        </div>
    }
}

fn build_cover(component: &NewsEditor, link: &Scope<NewsEditor>) -> Html {
    let cover = &component.draft.cover_image;
    html! {
        <div>
            <label style={LABEL_STYLE}>{ "封面图片" }</label>
            <div style="display:flex;align-items:center;gap:16px;">
                <div style="width:128px;height:96px;border:1px solid #d1d5db;border-radius:6px;overflow:hidden;background:#f9fafb;display:flex;align-items:center;justify-content:center;">
                    {
                        if cover.is_empty() {
                            html! { <span style="color:#9ca3af;font-size:0.875rem;">{ "暂无封面" }</span> }
                        } else {
                            html! { <img src={cover.clone()} alt="封面" style="width:100%;height:100%;object-fit:cover;" /> }
                        }
                    }
                </div>
                <input
                    ref={component.cover_file_ref.clone()}
                    type="file"
                    accept="image/*"
                    style="display:none;"
                    onchange={link.batch_callback(|e: Event| {
                        selected_file(&e).map(Msg::CoverSelected)
                    })}
                />
                <button
                    type="button"
                    disabled={component.uploading}
                    onclick={link.callback(|_| Msg::OpenCoverPicker)}
                >
                    { "上传封面" }
                </button>
            </div>
        </div>
    }
}

fn selected_file(e: &Event) -> Option<web_sys::File> {
    e.target_unchecked_into::<HtmlInputElement>()
        .files()
        .and_then(|files| files.get(0))
}
