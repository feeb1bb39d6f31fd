//! Admin page for the home page banners.
//!
//! Starts from the profile held by `CompanyProvider`, keeps a local edit
//! buffer of image urls, and on save sends only `banner_images`. After a
//! successful save the provider is told to reload so the carousel picks up
//! the new list.

use common::requests::CompanyUpdate;
use web_sys::{File, HtmlInputElement};
use yew::context::ContextHandle;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::company::CompanyContext;
use crate::components::helpers::{show_toast, Tone};

pub enum Msg {
    CompanyChanged(CompanyContext),
    OpenPicker,
    FilesSelected(Vec<File>),
    Uploaded(String),
    UploadsFinished,
    Remove(usize),
    Save,
    Saved,
    SaveFailed,
}

pub struct BannerSettings {
    company: Option<CompanyContext>,
    _listener: Option<ContextHandle<CompanyContext>>,
    /// Unsaved edits; `None` shows the provider's list.
    edited: Option<Vec<String>>,
    file_ref: NodeRef,
    uploading: bool,
    saving: bool,
}

impl BannerSettings {
    fn banners(&self) -> &[String] {
        match (&self.edited, &self.company) {
            (Some(edited), _) => edited.as_slice(),
            (None, Some(context)) => context.company.banner_images.as_slice(),
            (None, None) => &[],
        }
    }

    fn edit(&mut self) -> &mut Vec<String> {
        if self.edited.is_none() {
            self.edited = Some(self.banners().to_vec());
        }
        self.edited.get_or_insert_with(Vec::new)
    }

    fn loading(&self) -> bool {
        self.company.as_ref().map_or(true, |context| context.loading)
    }
}

impl Component for BannerSettings {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let subscription = ctx
            .link()
            .context::<CompanyContext>(ctx.link().callback(Msg::CompanyChanged));
        let (company, listener) = match subscription {
            Some((company, listener)) => (Some(company), Some(listener)),
            None => {
                tracing::warn!("BannerSettings rendered outside of CompanyProvider");
                (None, None)
            }
        };
        Self {
            company,
            _listener: listener,
            edited: None,
            file_ref: NodeRef::default(),
            uploading: false,
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CompanyChanged(company) => {
                self.company = Some(company);
                true
            }
            Msg::OpenPicker => {
                if let Some(input) = self.file_ref.cast::<HtmlInputElement>() {
                    input.set_value("");
                    input.click();
                }
                false
            }
            Msg::FilesSelected(files) => {
                if files.is_empty() {
                    return false;
                }
                self.uploading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    for file in files {
                        match api::upload_image(file).await {
                            Ok(url) => link.send_message(Msg::Uploaded(url)),
                            Err(err) => {
                                tracing::error!("banner upload failed: {err}");
                                show_toast(Tone::Error, "图片上传失败。");
                            }
                        }
                    }
                    link.send_message(Msg::UploadsFinished);
                });
                true
            }
            Msg::Uploaded(url) => {
                self.edit().push(url);
                true
            }
            Msg::UploadsFinished => {
                self.uploading = false;
                true
            }
            Msg::Remove(index) => {
                let banners = self.edit();
                if index >= banners.len() {
                    return false;
                }
                banners.remove(index);
                true
            }
            Msg::Save => {
                let Some(banners) = self.edited.clone() else {
                    show_toast(Tone::Success, "没有需要保存的修改。");
                    return false;
                };
                if self.saving {
                    return false;
                }
                self.saving = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let update = CompanyUpdate {
                        banner_images: Some(banners),
                    };
                    match api::update_company(&update).await {
                        Ok(_) => link.send_message(Msg::Saved),
                        Err(err) => {
                            tracing::error!("failed to save banners: {err}");
                            link.send_message(Msg::SaveFailed);
                        }
                    }
                });
                true
            }
            Msg::Saved => {
                self.saving = false;
                self.edited = None;
                if let Some(context) = &self.company {
                    context.reload.emit(());
                }
                show_toast(Tone::Success, "轮播图已保存。");
                true
            }
            Msg::SaveFailed => {
                self.saving = false;
                show_toast(Tone::Error, "保存失败，请稍后重试。");
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading() && self.edited.is_none() {
            return html! { <div class="banners-loading">{ "加载中..." }</div> };
        }

        let tiles = self
            .banners()
            .iter()
            .enumerate()
            .map(|(index, url)| {
                html! {
                    <div style="position:relative;aspect-ratio:16/9;border-radius:8px;overflow:hidden;">
                        <img src={url.clone()} alt={format!("轮播图 {}", index + 1)} style="width:100%;height:100%;object-fit:cover;" />
                        <button
                            type="button"
                            title="移除"
                            style="position:absolute;top:4px;right:4px;background:#d32f2f;color:#fff;border:none;border-radius:50%;width:24px;height:24px;cursor:pointer;"
                            onclick={link.callback(move |_| Msg::Remove(index))}
                        >
                            { "✕" }
                        </button>
                    </div>
                }
            })
            .collect::<Html>();

        html! {
            <section class="banner-settings" style="display:flex;flex-direction:column;gap:16px;padding:32px 0;">
                <div style="display:flex;align-items:center;justify-content:space-between;">
                    <h1 style="font-size:1.75rem;font-weight:bold;">
                        { "首页轮播图" }
                        if self.edited.is_some() {
                            <span title="有未保存的修改" style="margin-left:8px;color:#e53935;">{ "●" }</span>
                        }
                    </h1>
                    <button
                        class="save-btn"
                        disabled={self.saving || self.uploading}
                        onclick={link.callback(|_| Msg::Save)}
                    >
                        { if self.saving { "保存中..." } else { "保存" } }
                    </button>
                </div>
                <input
                    ref={self.file_ref.clone()}
                    type="file"
                    accept="image/*"
                    multiple={true}
                    style="display:none;"
                    onchange={link.callback(|e: Event| Msg::FilesSelected(selected_files(&e)))}
                />
                <button
                    type="button"
                    disabled={self.uploading}
                    onclick={link.callback(|_| Msg::OpenPicker)}
                >
                    { if self.uploading { "上传中..." } else { "添加图片" } }
                </button>
                if self.banners().is_empty() {
                    <p style="color:#9ca3af;">{ "暂无轮播图，首页将显示占位内容。" }</p>
                } else {
                    <div style="display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:16px;">
                        { tiles }
                    </div>
                }
            </section>
        }
    }
}

fn selected_files(e: &Event) -> Vec<File> {
    let Some(files) = e.target_unchecked_into::<HtmlInputElement>().files() else {
        return Vec::new();
    };
    (0..files.length()).filter_map(|index| files.get(index)).collect()
}
