// src/app/init_handler.rs
//! Start-up logic: stage element, image probing and building the panels from the layout.

use futures::join;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::image_probe::{probe_image, probe_optional};
use super::layout_calculator::LayoutResult;
use super::renderer;
use crate::components::{Pair, Panel, PanelId, Size};
use crate::config::AppConfig;
use crate::error::ProbeError;

/// 起動時に集める画像の情報。
pub(crate) struct ProbedImages {
    pub foreground: Pair<Result<Size, ProbeError>>,
    pub background: Option<Size>,
}

pub(crate) fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .ok_or("Failed to get window")?
        .document()
        .ok_or_else(|| JsValue::from_str("Failed to get document"))
}

/// 現在のビューポートサイズ (レイアウト時に一度だけ読む)。
pub(crate) fn viewport_size() -> Size {
    let Some(window) = web_sys::window() else {
        return Size::default();
    };
    let read = |value: Result<JsValue, JsValue>| value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(read(window.inner_width()), read(window.inner_height()))
}

/// ステージ要素を取得する。無ければ作って body に追加する。
pub(crate) fn initialize_stage(document: &Document, stage_id: &str) -> Result<HtmlElement, JsValue> {
    let stage = match document.get_element_by_id(stage_id) {
        Some(element) => element.dyn_into::<HtmlElement>()?,
        None => {
            info!("Stage #{} not found, creating it.", stage_id);
            let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
            element.set_id(stage_id);
            document.body().ok_or("Failed to get body")?.append_child(&element)?;
            element
        }
    };
    renderer::apply_stage_style(&stage)?;
    Ok(stage)
}

/// 前景 2 枚と背景を並行して読み込む。
pub(crate) async fn probe_images(config: &AppConfig) -> ProbedImages {
    let (left, right, background) = join!(
        probe_image(&config.left.src),
        probe_image(&config.right.src),
        probe_optional(config.background.as_deref()),
    );
    ProbedImages { foreground: Pair::new(left, right), background }
}

pub(crate) fn apply_background(stage: &HtmlElement, config: &AppConfig, probed: Option<Size>) {
    let (Some(src), Some(_)) = (config.background.as_deref(), probed) else {
        return;
    };
    if let Err(e) = renderer::apply_background(stage, src) {
        warn!("Failed to apply background {}: {:?}", src, e);
    }
}

/// レイアウト結果から 2 枚のパネル情報を作る。
pub fn build_panels(config: &AppConfig, layout: &LayoutResult) -> Pair<Panel> {
    let sources = config.sources();
    let build = |id: PanelId| {
        let source = sources.get(id);
        Panel {
            id,
            src: source.src.clone(),
            initial_position: *layout.positions.get(id),
            size: *layout.sizes.get(id),
            hotspot: Some(*layout.hotspots.get(id)),
            link: source.link.clone(),
        }
    };
    Pair::new(build(PanelId::Left), build(PanelId::Right))
}
