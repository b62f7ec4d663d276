//! Async clipboard access

use wasm_bindgen_futures::JsFuture;

use pluck_core::{Error, Result};

pub async fn write_text(text: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| Error::Clipboard("no window".to_string()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| Error::Clipboard(format!("{:?}", e)))
}
