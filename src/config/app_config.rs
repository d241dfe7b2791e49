// src/config/app_config.rs
//! 実行時に JS から渡せる設定 (JSON)。省略したフィールドは `layout.rs` の定数になる。

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::layout;
use crate::components::{IntrinsicHotspot, Pair, Position, Rect, Size};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// レイアウト計算で使う数値たち。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin: f64,
    pub min_width: f64,
    pub min_height: f64,
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub gap: f64,
    pub fallback_size: Size,
    pub fallback_positions: Pair<Position>,
    pub fallback_hotspot: Rect,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: layout::MARGIN,
            min_width: layout::MIN_INSET_WIDTH,
            min_height: layout::MIN_INSET_HEIGHT,
            width_ratio: layout::WIDTH_RATIO,
            height_ratio: layout::HEIGHT_RATIO,
            gap: layout::PANEL_GAP,
            fallback_size: layout::FALLBACK_SIZE,
            fallback_positions: Pair::new(
                layout::FALLBACK_LEFT_POSITION,
                layout::FALLBACK_RIGHT_POSITION,
            ),
            fallback_hotspot: layout::FALLBACK_HOTSPOT,
        }
    }
}

/// パネル 1 枚分の入力: 画像・元画像ピクセルでのホットスポット・リンク先。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSource {
    pub src: String,
    pub hotspot: IntrinsicHotspot,
    #[serde(default)]
    pub link: Option<String>,
}

impl PanelSource {
    pub fn left() -> Self {
        Self { src: layout::LEFT_IMAGE_SRC.to_string(), hotspot: layout::LEFT_HOTSPOT, link: None }
    }

    pub fn right() -> Self {
        Self { src: layout::RIGHT_IMAGE_SRC.to_string(), hotspot: layout::RIGHT_HOTSPOT, link: None }
    }
}

/// JSON 上のパネル設定。書かれたフィールドだけをその側のデフォルトに上書きする。
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PanelSourceOverride {
    src: Option<String>,
    hotspot: Option<IntrinsicHotspot>,
    link: Option<String>,
}

impl PanelSourceOverride {
    fn apply(self, base: PanelSource) -> PanelSource {
        PanelSource {
            src: self.src.unwrap_or(base.src),
            hotspot: self.hotspot.unwrap_or(base.hotspot),
            link: self.link.or(base.link),
        }
    }
}

fn deserialize_left<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PanelSource, D::Error> {
    Ok(PanelSourceOverride::deserialize(deserializer)?.apply(PanelSource::left()))
}

fn deserialize_right<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PanelSource, D::Error> {
    Ok(PanelSourceOverride::deserialize(deserializer)?.apply(PanelSource::right()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// パネルを置くステージ要素の id。無ければ作って body に追加する。
    pub stage_id: String,
    pub layout: LayoutConfig,
    #[serde(deserialize_with = "deserialize_left")]
    pub left: PanelSource,
    #[serde(deserialize_with = "deserialize_right")]
    pub right: PanelSource,
    /// 背景画像 (任意)。読み込めなければ単に省略。
    pub background: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stage_id: layout::STAGE_ELEMENT_ID.to_string(),
            layout: LayoutConfig::default(),
            left: PanelSource::left(),
            right: PanelSource::right(),
            background: Some(layout::BACKGROUND_IMAGE_SRC.to_string()),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn sources(&self) -> Pair<&PanelSource> {
        Pair::new(&self.left, &self.right)
    }
}
