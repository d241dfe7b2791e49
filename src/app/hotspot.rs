// src/app/hotspot.rs
//! Hotspot overlay: a link stacked above the panel that never starts a drag.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlAnchorElement, HtmlElement};

use super::renderer::px;
use crate::components::{PointerTarget, Rect};
use crate::config::layout::HOTSPOT_Z_INDEX;

/// ホットスポット要素に付ける属性。ドラッグ開始時のターゲット判定に使う。
pub const HOTSPOT_ATTRIBUTE: &str = "data-hotspot";

/// パネル内に置いたホットスポットのリンクと、その pointerdown リスナー。
pub struct HotspotOverlay {
    element: HtmlAnchorElement,
    on_pointerdown: Closure<dyn FnMut(Event)>,
}

impl HotspotOverlay {
    /// パネル要素の子としてホットスポットを作る。位置はパネルのローカル座標。
    pub fn mount(document: &Document, panel_element: &HtmlElement, rect: Rect, link: Option<&str>) -> Result<Self, JsValue> {
        let element = document.create_element("a")?.dyn_into::<HtmlAnchorElement>()?;
        element.set_attribute(HOTSPOT_ATTRIBUTE, "")?;
        element.set_class_name("hotspot");
        if let Some(url) = link {
            element.set_href(url);
            element.set_target("_blank");
            element.set_rel("noopener noreferrer");
        }

        let style = element.style();
        style.set_property("position", "absolute")?;
        style.set_property("left", &px(rect.x))?;
        style.set_property("top", &px(rect.y))?;
        style.set_property("width", &px(rect.w))?;
        style.set_property("height", &px(rect.h))?;
        style.set_property("z-index", &HOTSPOT_Z_INDEX.to_string())?;
        style.set_property("cursor", "pointer")?;

        // ホットスポット上の pointerdown はパネルのドラッグ処理まで届かせない
        let on_pointerdown = Closure::wrap(Box::new(move |event: Event| {
            event.stop_propagation();
        }) as Box<dyn FnMut(Event)>);
        element.add_event_listener_with_callback("pointerdown", on_pointerdown.as_ref().unchecked_ref())?;

        panel_element.append_child(&element)?;
        Ok(Self { element, on_pointerdown })
    }
}

impl Drop for HotspotOverlay {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("pointerdown", self.on_pointerdown.as_ref().unchecked_ref());
    }
}

/// イベントのターゲットがホットスポット (かその子孫) ならホットスポット扱い。
pub fn classify_target(event: &Event) -> PointerTarget {
    let on_hotspot = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(&format!("[{}]", HOTSPOT_ATTRIBUTE)).ok().flatten())
        .is_some();
    if on_hotspot {
        PointerTarget::Hotspot
    } else {
        PointerTarget::Surface
    }
}
