// src/config/layout.rs
//! 画面レイアウトに関する定数を定義するよ！
//! 余白・最小サイズ・フィット比率・フォールバック値など。

use crate::components::{IntrinsicHotspot, Position, Rect, Size};

pub const MARGIN: f64 = 24.0; // 画面端からの余白
pub const MIN_INSET_WIDTH: f64 = 320.0; // 余白を引いた後のビューポート幅の下限
pub const MIN_INSET_HEIGHT: f64 = 240.0; // 余白を引いた後のビューポート高さの下限

pub const WIDTH_RATIO: f64 = 0.45; // 1 枚の画像が使える幅の割合
pub const HEIGHT_RATIO: f64 = 0.70; // 1 枚の画像が使える高さの割合
pub const PANEL_GAP: f64 = 32.0; // 2 枚の間の水平方向の間隔

// --- 画像の情報が取れなかった時 (劣化モード) ---
pub const FALLBACK_SIZE: Size = Size::new(360.0, 240.0);
pub const FALLBACK_LEFT_POSITION: Position = Position::new(40.0, 80.0);
pub const FALLBACK_RIGHT_POSITION: Position = Position::new(440.0, 80.0);
pub const FALLBACK_HOTSPOT: Rect = Rect::new(120.0, 80.0, 120.0, 80.0);

// --- 元画像ピクセルでのホットスポット ---
pub const LEFT_HOTSPOT: IntrinsicHotspot = IntrinsicHotspot::new(412.0, 188.0, 596.0, 312.0);
pub const RIGHT_HOTSPOT: IntrinsicHotspot = IntrinsicHotspot::new(140.0, 96.0, 380.0, 260.0);

// --- 画像パスとステージ要素 ---
pub const LEFT_IMAGE_SRC: &str = "assets/left.png";
pub const RIGHT_IMAGE_SRC: &str = "assets/right.png";
pub const BACKGROUND_IMAGE_SRC: &str = "assets/background.jpg";
pub const STAGE_ELEMENT_ID: &str = "panel-stage";

// --- 重なり順 ---
pub const PANEL_Z_INDEX: i32 = 1; // ドラッグ面
pub const HOTSPOT_Z_INDEX: i32 = 2; // ホットスポットはドラッグ面より上
