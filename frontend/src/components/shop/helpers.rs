//! Utility functions for the shop component.
//!
//! Supports the main logic in `update.rs` and `view.rs`:
//!
//! - **User feedback**: a blocking alert for validation errors and a
//!   temporary toast for non-blocking notices.
//! - **Input**: the quantity prompt shown on "Add to Cart".
//! - **Export plumbing**: invoice reference generation, the issue date,
//!   and handing rendered PDF bytes to the browser as a download.

use js_sys::{Array, Date, Uint8Array};
use uuid::Uuid;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a blocking notification. Used for validation errors (empty
/// search term, bad quantity), which must interrupt the user.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Prompts the user for a quantity and returns the raw input, or `None`
/// if the prompt was cancelled. Parsing and validation stay with the
/// caller so invalid input can be reported as a validation error.
pub fn prompt_quantity() -> Option<String> {
    let window = web_sys::window()?;
    window
        .prompt_with_message_and_default("Enter quantity:", "1")
        .ok()
        .flatten()
}

/// Today's date formatted as `YYYY-MM-DD`, from the browser clock.
pub fn current_date_string() -> String {
    let date = Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        date.get_full_year(),
        date.get_month() + 1,
        date.get_date()
    )
}

/// Generates a short human-readable reference like `INV-9F3A21C4`.
pub fn reference(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, id[..8].to_uppercase())
}

/// Offers `bytes` to the user as a file download via a temporary object
/// URL on an invisible anchor element.
pub fn trigger_download(bytes: &[u8], file_name: &str, mime: &str) -> Result<(), String> {
    let array = Uint8Array::from(bytes);
    let parts = Array::new();
    parts.push(&array.buffer());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|err| format!("{err:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|err| format!("{err:?}"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|err| format!("{err:?}"))?;
    anchor
        .set_attribute("href", &url)
        .map_err(|err| format!("{err:?}"))?;
    anchor
        .set_attribute("download", file_name)
        .map_err(|err| format!("{err:?}"))?;
    anchor.unchecked_ref::<HtmlElement>().click();

    web_sys::Url::revoke_object_url(&url).ok();
    Ok(())
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Non-blocking counterpart to [`alert`]: used for confirmations ("Added
/// to cart") and for data-source failures, which keep the previous
/// results on screen. The toast removes itself after a few seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_inner_html(message);
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
