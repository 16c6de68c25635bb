//! File Download
//!
//! Offers generated text to the user as a file via a temporary object URL.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

const REVOKE_DELAY_MS: i32 = 1_000;

/// Prefix text with a UTF-8 byte-order mark so spreadsheet apps detect the encoding
pub fn with_bom(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 3);
    out.push('\u{FEFF}');
    out.push_str(text);
    out
}

pub fn download_text(filename: &str, content: &str, mime: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let parts = js_sys::Array::of1(&JsValue::from_str(content));
    let opts = BlobPropertyBag::new();
    opts.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts).map_err(|e| format!("{e:?}"))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let link: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|e| format!("{e:?}"))?;
    link.set_href(&url);
    link.set_download(filename);
    if let Err(e) = link.set_attribute("style", "visibility: hidden") {
        log::warn!("[Download] Could not hide link: {:?}", e);
    }

    body.append_child(&link).map_err(|e| format!("{e:?}"))?;
    link.click();
    if let Err(e) = body.remove_child(&link) {
        log::warn!("[Download] Could not remove link: {:?}", e);
    }
    revoke_later(&window, url);
    Ok(())
}

/// Release the object URL on a later tick; revoking during the click can
/// cancel the download in some browsers.
fn revoke_later(window: &web_sys::Window, url: String) {
    let revoke = Closure::once_into_js(move || {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("[Download] Could not revoke {}: {:?}", url, e);
        }
    });
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(revoke.unchecked_ref(), REVOKE_DELAY_MS)
    {
        log::warn!("[Download] Could not schedule URL revoke: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_bom() {
        let text = with_bom("\"ID\"\n");
        assert!(text.starts_with('\u{FEFF}'));
        assert_eq!(&text[3..], "\"ID\"\n");
    }
}
