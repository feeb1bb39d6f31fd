use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::news::editor::{Msg, NewsEditor};
use crate::tops_sheet::top_sheet::TopSheet;

/// Preview of the clicked image marker. The description (alt text, shown as
/// the caption) can be rewritten here; deleting removes the whole marker.
pub fn image_dialog(component: &NewsEditor, link: &Scope<NewsEditor>) -> Html {
    html! {
        <TopSheet node_ref={component.image_dialog_ref.clone()}>
            <div style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;">
                <button
                    onclick={link.callback(|_| Msg::CloseImageDialog)}
                    style="position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;"
                >
                    { "✕" }
                </button>
                {
                    match &component.selected_image {
                        Some(image) => html! {
                            <>
                                <img src={image.url.clone()} alt={image.alt.clone()} style="max-width:400px;max-height:400px;margin-bottom:12px;" />
                                <div style="color:#fff;margin-bottom:12px;word-break:break-all;">{ image.url.clone() }</div>
                                <label style="color:#fff;margin-bottom:24px;display:flex;gap:8px;align-items:center;">
                                    { "图片说明" }
                                    <input
                                        type="text"
                                        placeholder="留空或“图片”则不显示说明"
                                        value={image.alt.clone()}
                                        style="padding:4px 8px;border-radius:4px;border:none;min-width:240px;"
                                        onchange={link.callback(|e: Event| {
                                            Msg::SetSelectedAlt(e.target_unchecked_into::<HtmlInputElement>().value())
                                        })}
                                    />
                                </label>
                                <button
                                    style="padding:0.5rem 1rem;font-size:1rem;background:#d32f2f;color:#fff;border:none;border-radius:4px;cursor:pointer;"
                                    onclick={link.callback(|_| Msg::DeleteSelectedImage)}
                                >
                                    { "删除图片" }
                                </button>
                            </>
                        },
                        None => html! { <span style="color:#fff;">{ "未选择图片" }</span> },
                    }
                }
            </div>
        </TopSheet>
    }
}
