// src/app/browser_event_manager.rs
//! Handles attaching and detaching browser pointer listeners for a panel's drag session.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, PointerEvent, Window};

use super::drag_handler::DragStart;
use super::hotspot;
use super::panel::PanelHandle;
use super::renderer::DomPanelView;
use crate::components::PointerSample;

type PointerClosure = Closure<dyn FnMut(PointerEvent)>;

/// ドラッグセッション中だけ登録しておくリスナーの置き場所 (パネルごと)。
pub(crate) type SessionSlot = Rc<RefCell<Option<SessionListeners>>>;

/// `clientX` / `clientY` は小数のこともあるので f64 のまま読む (web-sys の getter は i32)。
fn client_coordinate(event: &PointerEvent, key: &str, truncated: i32) -> f64 {
    js_sys::Reflect::get(event, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(f64::from(truncated))
}

fn sample(event: &PointerEvent) -> PointerSample {
    PointerSample::new(
        event.pointer_id(),
        client_coordinate(event, "clientX", event.client_x()),
        client_coordinate(event, "clientY", event.client_y()),
    )
}

/// セッション中だけ window / パネル要素に付けておくリスナー。
///
/// - window: `pointermove`, `pointerup`, `pointercancel` (パネルの外で離しても終わるように)
/// - パネル要素: `lostpointercapture` (キャプチャを突然失った時も終わるように)
///
/// `detach()` で外す。Drop でも外すので、どの経路で終わってもリスナーは残らない。
pub(crate) struct SessionListeners {
    window: Window,
    element: HtmlElement,
    on_move: PointerClosure,
    on_end: PointerClosure,
    attached: bool,
}

impl SessionListeners {
    fn attach(panel: &PanelHandle<DomPanelView>, element: &HtmlElement, slot: &SessionSlot) -> Result<Self, JsValue> {
        let window = window().ok_or("Failed to get window")?;

        let move_panel = panel.clone();
        let on_move = Closure::wrap(Box::new(move |event: PointerEvent| {
            move_panel.pointer_move(sample(&event));
        }) as Box<dyn FnMut(PointerEvent)>);

        let end_panel = panel.clone();
        let end_slot: Weak<RefCell<Option<SessionListeners>>> = Rc::downgrade(slot);
        let on_end = Closure::wrap(Box::new(move |event: PointerEvent| {
            if end_panel.pointer_up(event.pointer_id()).is_none() {
                // 別のポインタの終了イベント
                return;
            }
            debug!("Panel {:?}: {} ended the drag session", end_panel.id(), event.type_());
            if let Some(slot) = end_slot.upgrade() {
                // 実行中のクロージャ自身は drop しない。外すだけにして、次のセッション開始時に捨てる
                if let Some(listeners) = slot.borrow_mut().as_mut() {
                    if let Err(e) = listeners.detach() {
                        error!("Error detaching drag listeners: {:?}", e);
                    }
                }
            }
        }) as Box<dyn FnMut(PointerEvent)>);

        let mut listeners = Self {
            window,
            element: element.clone(),
            on_move,
            on_end,
            attached: false,
        };
        listeners.register()?;
        Ok(listeners)
    }

    fn register(&mut self) -> Result<(), JsValue> {
        // 途中で失敗しても Drop で外せるように、先に attached を立てる
        self.attached = true;
        let on_move: &js_sys::Function = self.on_move.as_ref().unchecked_ref();
        let on_end: &js_sys::Function = self.on_end.as_ref().unchecked_ref();
        self.window.add_event_listener_with_callback("pointermove", on_move)?;
        self.window.add_event_listener_with_callback("pointerup", on_end)?;
        self.window.add_event_listener_with_callback("pointercancel", on_end)?;
        self.element.add_event_listener_with_callback("lostpointercapture", on_end)?;
        debug!("  Attached session listeners.");
        Ok(())
    }

    /// リスナーを外す。何回呼んでも OK。
    pub(crate) fn detach(&mut self) -> Result<(), JsValue> {
        if !self.attached {
            return Ok(());
        }
        self.attached = false;
        let on_move: &js_sys::Function = self.on_move.as_ref().unchecked_ref();
        let on_end: &js_sys::Function = self.on_end.as_ref().unchecked_ref();
        // 全部外してからエラーを返す
        let results = [
            self.window.remove_event_listener_with_callback("pointermove", on_move),
            self.window.remove_event_listener_with_callback("pointerup", on_end),
            self.window.remove_event_listener_with_callback("pointercancel", on_end),
            self.element.remove_event_listener_with_callback("lostpointercapture", on_end),
        ];
        debug!("  Detached session listeners.");
        results.into_iter().collect()
    }
}

impl Drop for SessionListeners {
    fn drop(&mut self) {
        if let Err(e) = self.detach() {
            error!("Error detaching drag listeners on drop: {:?}", e);
        }
    }
}

/// パネル要素の pointerdown を受けて、ドラッグセッションを始めるリスナー。
pub(crate) struct DragStartListener {
    element: HtmlElement,
    on_pointerdown: PointerClosure,
}

impl DragStartListener {
    pub(crate) fn attach(panel: PanelHandle<DomPanelView>, element: &HtmlElement, slot: SessionSlot) -> Result<Self, JsValue> {
        let target_element = element.clone();
        let on_pointerdown = Closure::wrap(Box::new(move |event: PointerEvent| {
            // 主ボタン以外 (右クリックなど) ではドラッグしない
            if event.button() != 0 {
                return;
            }
            let target = hotspot::classify_target(&event);
            if panel.pointer_down(sample(&event), target) != DragStart::Started {
                return;
            }
            event.prevent_default();

            // キャプチャはあれば使う程度。失敗しても window のリスナーで動く
            if let Err(e) = target_element.set_pointer_capture(event.pointer_id()) {
                warn!("Pointer capture unavailable for panel {:?}: {:?}", panel.id(), e);
            }

            match SessionListeners::attach(&panel, &target_element, &slot) {
                // 古いセッションのリスナーはここで drop される (もう外れている)
                Ok(listeners) => *slot.borrow_mut() = Some(listeners),
                Err(e) => {
                    error!("Failed to attach drag listeners for panel {:?}: {:?}", panel.id(), e);
                    panel.pointer_up(event.pointer_id());
                }
            }
        }) as Box<dyn FnMut(PointerEvent)>);

        element.add_event_listener_with_callback("pointerdown", on_pointerdown.as_ref().unchecked_ref())?;
        Ok(Self { element: element.clone(), on_pointerdown })
    }
}

impl Drop for DragStartListener {
    fn drop(&mut self) {
        let _ = self
            .element
            .remove_event_listener_with_callback("pointerdown", self.on_pointerdown.as_ref().unchecked_ref());
    }
}
