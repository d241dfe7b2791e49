// src/app/panel_app.rs

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::browser_event_manager::{DragStartListener, SessionSlot};
use super::drag_handler::DragController;
use super::frame_scheduler::{AnimationFrameScheduler, FrameScheduler};
use super::hotspot::HotspotOverlay;
use super::init_handler;
use super::layout_calculator::{self, LayoutResult};
use super::panel::PanelHandle;
use super::renderer::{self, DomPanelView};
use crate::components::{Pair, Panel, PanelId, Size};
use crate::config::AppConfig;
use crate::error::ProbeError;
use crate::log;

/// マウント済みのパネル 1 枚。drop するとリスナーを外して DOM から消える。
struct MountedPanel {
    handle: PanelHandle<DomPanelView>,
    element: HtmlElement,
    // フィールドの順番 = drop の順番。セッション → pointerdown → ホットスポット
    session: SessionSlot,
    _drag_start: DragStartListener,
    _hotspot: Option<HotspotOverlay>,
}

impl MountedPanel {
    fn mount(stage: &HtmlElement, panel: &Panel, scheduler: Rc<dyn FrameScheduler>) -> Result<Self, JsValue> {
        let document = init_handler::document()?;
        let element = renderer::create_panel_element(&document, stage, panel)?;
        // ここから先で失敗したら、ステージに追加済みの要素を外す
        let mounted = Self::wire(&document, element.clone(), panel, scheduler);
        renderer::remove_on_error(&element, mounted)
    }

    /// ホットスポットとドラッグ開始リスナーを付ける。
    fn wire(document: &Document, element: HtmlElement, panel: &Panel, scheduler: Rc<dyn FrameScheduler>) -> Result<Self, JsValue> {
        let hotspot = match panel.hotspot {
            Some(rect) => Some(HotspotOverlay::mount(document, &element, rect, panel.link.as_deref())?),
            None => None,
        };

        let handle = PanelHandle::new(
            DragController::from_panel(panel),
            DomPanelView::new(element.clone()),
            scheduler,
        );
        handle.paint_now();

        let session: SessionSlot = Rc::new(RefCell::new(None));
        let drag_start = DragStartListener::attach(handle.clone(), &element, Rc::clone(&session))?;
        info!("Mounted panel {:?} at {:?}", panel.id, panel.initial_position);

        Ok(Self { handle, element, session, _drag_start: drag_start, _hotspot: hotspot })
    }
}

impl Drop for MountedPanel {
    fn drop(&mut self) {
        // SessionListeners の Drop でリスナーが外れる
        self.session.borrow_mut().take();
        self.element.remove();
    }
}

/// 2 枚のドラッグ可能なパネルを持つアプリ本体 (JS から使う)。
#[wasm_bindgen]
pub struct PanelApp {
    config: AppConfig,
    stage: HtmlElement,
    probes: Pair<Result<Size, ProbeError>>,
    layout: LayoutResult,
    panels: Vec<MountedPanel>,
}

#[wasm_bindgen]
impl PanelApp {
    /// 画像サイズを調べてレイアウトを計算し、パネルをマウントする。
    ///
    /// `config_json` が壊れていてもデフォルト設定で続ける。
    /// 画像が読めなくても固定レイアウト (劣化モード) で表示する。
    pub async fn mount(config_json: Option<String>) -> Result<PanelApp, JsValue> {
        log("PanelApp: Initializing...");
        let config = match config_json.as_deref() {
            Some(json) => AppConfig::from_json(json).unwrap_or_else(|e| {
                warn!("{}. Using default config.", e);
                AppConfig::default()
            }),
            None => AppConfig::default(),
        };

        let document = init_handler::document()?;
        let stage = init_handler::initialize_stage(&document, &config.stage_id)?;

        let probed = init_handler::probe_images(&config).await;
        init_handler::apply_background(&stage, &config, probed.background);

        let mut app = PanelApp {
            layout: layout_calculator::fallback_layout(&config.layout),
            config,
            stage,
            probes: probed.foreground,
            panels: Vec::new(),
        };
        app.relayout()?;
        log("PanelApp: Initialization complete.");
        Ok(app)
    }

    /// レイアウトをやり直す (明示的に呼ばれた時だけ。リサイズには反応しない)。
    /// 画像サイズは起動時のものを使い、ビューポートは今の値を読む。パネルは作り直す。
    pub fn relayout(&mut self) -> Result<(), JsValue> {
        let viewport = init_handler::viewport_size();
        let hotspots = Pair::new(self.config.left.hotspot, self.config.right.hotspot);
        self.layout = layout_calculator::resolve_layout(&self.probes, hotspots, viewport, &self.config.layout);
        if self.layout.degraded {
            warn!("Running in degraded mode with fallback layout.");
        }

        self.panels.clear();
        let scheduler: Rc<dyn FrameScheduler> = Rc::new(AnimationFrameScheduler);
        let panels = init_handler::build_panels(&self.config, &self.layout);
        for panel in [&panels.left, &panels.right] {
            match MountedPanel::mount(&self.stage, panel, Rc::clone(&scheduler)) {
                Ok(mounted) => self.panels.push(mounted),
                Err(e) => {
                    error!("Failed to mount panel {:?}: {:?}", panel.id, e);
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// 劣化モード (フォールバックレイアウト) で動いているか。
    pub fn is_degraded(&self) -> bool {
        self.layout.degraded
    }

    /// パネルの現在位置を `{"x":..,"y":..}` の JSON で返す。id は "left" / "right"。
    pub fn panel_position_json(&self, id: &str) -> Option<String> {
        let id = PanelId::parse(id)?;
        let panel = self.panels.iter().find(|p| p.handle.id() == id)?;
        serde_json::to_string(&panel.handle.position()).ok()
    }

    /// パネルがドラッグ中か。
    pub fn is_dragging(&self, id: &str) -> bool {
        PanelId::parse(id)
            .and_then(|id| self.panels.iter().find(|p| p.handle.id() == id))
            .map(|p| p.handle.is_dragging())
            .unwrap_or(false)
    }

    /// 直近のレイアウト結果を JSON で返す (デバッグ用)。
    pub fn layout_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.layout)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize layout: {}", e)))
    }
}

impl Drop for PanelApp {
    fn drop(&mut self) {
        info!("PanelApp: unmounting {} panels", self.panels.len());
        self.panels.clear();
    }
}
