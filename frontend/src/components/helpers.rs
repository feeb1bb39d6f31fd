//! Small DOM utilities shared by the components.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MS: u32 = 3000;

/// How a toast is colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    fn background(self) -> &'static str {
        match self {
            Tone::Success => "rgba(22, 128, 61, 0.92)",
            Tone::Error => "rgba(211, 47, 47, 0.92)",
        }
    }
}

/// Shows `message` at the bottom of the screen for three seconds.
pub fn show_toast(tone: Tone, message: &str) {
    if mount_toast(tone, message).is_none() {
        tracing::warn!(toast = message, "could not display toast");
    }
}

fn mount_toast(tone: Tone, message: &str) -> Option<()> {
    let document = web_sys::window()?.document()?;
    let body = document.body()?;
    let toast: HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;

    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    toast
        .set_attribute(
            "style",
            &format!(
                "position:fixed;bottom:20px;left:50%;transform:translateX(-50%);\
                 background:{};color:#fff;padding:10px 20px;border-radius:4px;z-index:10000;",
                tone.background()
            ),
        )
        .ok()?;
    body.append_child(&toast).ok()?;

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
        toast.remove();
    });
    Some(())
}

/// Asks the user to confirm a destructive action. Without a window the answer
/// is no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Path of the current page, e.g. `/news/12`.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
