// src/app/renderer.rs
//! DOM 描画まわり。パネル要素を作って、位置を style に反映する。

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement};

use super::panel::PanelView;
use crate::components::{Panel, Position, Size};
use crate::config::layout::PANEL_Z_INDEX;

/// パネル要素の transform に位置を書き込む View。
pub struct DomPanelView {
    element: HtmlElement,
}

impl DomPanelView {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl PanelView for DomPanelView {
    fn apply_position(&self, position: Position) {
        if let Err(e) = self.element.style().set_property("transform", &translate(position)) {
            log::error!("Failed to apply panel position {:?}: {:?}", position, e);
        }
    }
}

pub(crate) fn translate(position: Position) -> String {
    format!("translate({}px, {}px)", position.x, position.y)
}

pub(crate) fn px(value: f64) -> String {
    format!("{}px", value)
}

/// パネルの外枠 (div) と画像 (img) を作ってステージに追加する。
/// ホットスポットは呼び出し側 (`hotspot::HotspotOverlay`) がこの中に入れる。
pub fn create_panel_element(document: &Document, stage: &HtmlElement, panel: &Panel) -> Result<HtmlElement, JsValue> {
    let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    element.set_class_name("panel");
    element.set_attribute("data-panel", panel.id.as_str())?;
    apply_panel_style(&element, panel.size)?;

    let image = document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    image.set_src(&panel.src);
    image.set_alt("");
    image.set_draggable(false);
    let image_style = image.style();
    image_style.set_property("display", "block")?;
    image_style.set_property("width", "100%")?;
    image_style.set_property("height", "100%")?;
    image_style.set_property("pointer-events", "none")?;

    element.append_child(&image)?;
    stage.append_child(&element)?;
    Ok(element)
}

/// `result` が失敗ならパネル要素をステージから外す (作りかけの要素を残さない)。
pub(crate) fn remove_on_error<T>(element: &HtmlElement, result: Result<T, JsValue>) -> Result<T, JsValue> {
    if result.is_err() {
        element.remove();
    }
    result
}

fn apply_panel_style(element: &HtmlElement, size: Size) -> Result<(), JsValue> {
    let style = element.style();
    style.set_property("position", "absolute")?;
    style.set_property("left", "0")?;
    style.set_property("top", "0")?;
    style.set_property("width", &px(size.w))?;
    style.set_property("height", &px(size.h))?;
    style.set_property("z-index", &PANEL_Z_INDEX.to_string())?;
    // ブラウザのスクロールやテキスト選択にポインタを取られないように
    style.set_property("touch-action", "none")?;
    style.set_property("user-select", "none")?;
    style.set_property("cursor", "grab")?;
    style.set_property("will-change", "transform")?;
    Ok(())
}

/// ステージ要素 (全画面) のスタイル。
pub fn apply_stage_style(stage: &HtmlElement) -> Result<(), JsValue> {
    let style = stage.style();
    style.set_property("position", "fixed")?;
    style.set_property("inset", "0")?;
    style.set_property("overflow", "hidden")?;
    Ok(())
}

pub fn apply_background(stage: &HtmlElement, src: &str) -> Result<(), JsValue> {
    let style = stage.style();
    style.set_property("background-image", &format!("url(\"{}\")", src))?;
    style.set_property("background-size", "cover")?;
    style.set_property("background-position", "center")?;
    Ok(())
}


// DOM を使うテストは renderer_tests.rs
#[cfg(all(test, target_arch = "wasm32"))]
#[path = "renderer_tests.rs"]
mod renderer_tests;
