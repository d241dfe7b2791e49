// src/app/image_probe.rs
//! Probes an image URL for its intrinsic (natural) pixel size.

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::components::Size;
use crate::error::ProbeError;

/// 画像を読み込んで naturalWidth / naturalHeight を返す。
/// 読み込み失敗・サイズ 0 はエラー (呼び出し側で劣化モードにする)。
pub async fn probe_image(src: &str) -> Result<Size, ProbeError> {
    if web_sys::window().is_none() {
        return Err(ProbeError::NoWindow);
    }
    let load_error = || ProbeError::Load { src: src.to_string() };

    let img = HtmlImageElement::new().map_err(|_| load_error())?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("image_load_failed"));
        });
        img.set_onload(Some(onload.unchecked_ref()));
        img.set_onerror(Some(onerror.unchecked_ref()));
    });
    img.set_src(src);

    if let Err(e) = JsFuture::from(promise).await {
        warn!("Image probe failed for {}: {:?}", src, e);
        return Err(load_error());
    }
    // 片方のコールバックだけが呼ばれるので、もう片方は外しておく
    img.set_onload(None);
    img.set_onerror(None);

    let size = Size::new(img.natural_width() as f64, img.natural_height() as f64);
    if !size.is_usable() {
        return Err(ProbeError::EmptyImage { src: src.to_string() });
    }
    debug!("Probed {}: {}x{}", src, size.w, size.h);
    Ok(size)
}

/// 任意の画像 (背景など)。取れなければ `None`。
pub async fn probe_optional(src: Option<&str>) -> Option<Size> {
    let src = src?;
    match probe_image(src).await {
        Ok(size) => Some(size),
        Err(e) => {
            warn!("Optional image omitted: {}", e);
            None
        }
    }
}
