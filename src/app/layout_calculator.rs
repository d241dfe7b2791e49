// src/app/layout_calculator.rs
//! Calculates fitted panel sizes, scaled hotspots and the initial centered placement.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::components::{IntrinsicHotspot, Pair, Position, Rect, Size};
use crate::config::LayoutConfig;
use crate::error::ProbeError;

/// レイアウト計算の結果。起動時に一度だけ作られて、2 枚のパネルの初期値になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// フィット後の表示サイズ
    pub sizes: Pair<Size>,
    /// 中央寄せ配置での各パネルの左上座標
    pub positions: Pair<Position>,
    /// パネルのローカル座標でのホットスポット
    pub hotspots: Pair<Rect>,
    /// 画像情報が取れずにフォールバックを使ったか
    pub degraded: bool,
}

/// ビューポートから余白を引いた領域。下限値より小さくはならない。
pub fn inset_viewport(viewport: Size, config: &LayoutConfig) -> Size {
    let w = if viewport.w.is_finite() { viewport.w } else { 0.0 };
    let h = if viewport.h.is_finite() { viewport.h } else { 0.0 };
    Size {
        w: (w - 2.0 * config.margin).max(config.min_width),
        h: (h - 2.0 * config.margin).max(config.min_height),
    }
}

/// 画像 1 枚を inset 領域に収めるためのスケール係数 `s` (0 < s <= 1)。
/// 拡大はしない。サイズが壊れている画像は等倍扱い。
pub fn fit_scale(intrinsic: Size, inset: Size, config: &LayoutConfig) -> f64 {
    if !intrinsic.is_usable() {
        return 1.0;
    }
    let max_w = (config.width_ratio * inset.w).min(inset.w);
    let max_h = (config.height_ratio * inset.h).min(inset.h);
    let s = (max_w / intrinsic.w).min(max_h / intrinsic.h).min(1.0);
    if s.is_finite() && s > 0.0 { s } else { 1.0 }
}

pub fn fit_size(intrinsic: Size, s: f64) -> Size {
    Size {
        w: (intrinsic.w * s).round(),
        h: (intrinsic.h * s).round(),
    }
}

/// 2 枚を `gap` を挟んで横に並べ、ペアとして画面中央に置く。
/// 行の開始位置は余白より左上には来ない。各パネルは行の中心線に縦方向でそろえる。
pub fn place_pair(sizes: Pair<Size>, viewport: Size, config: &LayoutConfig) -> Pair<Position> {
    let row_w = sizes.left.w + config.gap + sizes.right.w;
    let row_h = sizes.left.h.max(sizes.right.h);

    let start_x = ((viewport.w - row_w) / 2.0).max(config.margin);
    let start_y = ((viewport.h - row_h) / 2.0).max(config.margin);
    // NaN のビューポートでも余白位置に落ちるようにする
    let start_x = if start_x.is_finite() { start_x } else { config.margin };
    let start_y = if start_y.is_finite() { start_y } else { config.margin };

    Pair {
        left: Position::new(start_x, start_y + (row_h - sizes.left.h) / 2.0),
        right: Position::new(
            start_x + sizes.left.w + config.gap,
            start_y + (row_h - sizes.right.h) / 2.0,
        ),
    }
}

/// 画像 2 枚の元サイズとビューポートから、レイアウト全体を計算する。
///
/// # 引数
/// * `intrinsic`: 左右の画像の元サイズ。
/// * `hotspots`: 左右の画像の、元画像ピクセルでのホットスポット。
/// * `viewport`: 現在のビューポートサイズ。
/// * `config`: 余白・比率などの設定。
///
/// # 戻り値
/// * フィット後のサイズ・スケール済みホットスポット・初期配置をまとめた `LayoutResult`。
pub fn compute_layout(
    intrinsic: Pair<Size>,
    hotspots: Pair<IntrinsicHotspot>,
    viewport: Size,
    config: &LayoutConfig,
) -> LayoutResult {
    let inset = inset_viewport(viewport, config);
    let scales = intrinsic.map(|size| fit_scale(size, inset, config));

    let sizes = Pair::new(
        fit_size(intrinsic.left, scales.left),
        fit_size(intrinsic.right, scales.right),
    );
    // ホットスポットは画像自身と同じ s で縮める
    let hotspots = Pair::new(
        hotspots.left.scaled(scales.left),
        hotspots.right.scaled(scales.right),
    );
    let positions = place_pair(sizes, viewport, config);

    LayoutResult { sizes, positions, hotspots, degraded: false }
}

/// 劣化モード: 固定サイズ・固定位置・固定ホットスポット。
pub fn fallback_layout(config: &LayoutConfig) -> LayoutResult {
    LayoutResult {
        sizes: Pair::new(config.fallback_size, config.fallback_size),
        positions: config.fallback_positions,
        hotspots: Pair::new(config.fallback_hotspot, config.fallback_hotspot),
        degraded: true,
    }
}

/// 画像のサイズ取得結果からレイアウトを決める。
/// どちらか一方でも失敗していたら、両方ともフォールバックにする。
pub fn resolve_layout(
    probes: &Pair<Result<Size, ProbeError>>,
    hotspots: Pair<IntrinsicHotspot>,
    viewport: Size,
    config: &LayoutConfig,
) -> LayoutResult {
    match (&probes.left, &probes.right) {
        (Ok(left), Ok(right)) => compute_layout(Pair::new(*left, *right), hotspots, viewport, config),
        (left, right) => {
            for err in [left.as_ref().err(), right.as_ref().err()].into_iter().flatten() {
                warn!("Image metadata unavailable ({}). Using fallback layout.", err);
            }
            fallback_layout(config)
        }
    }
}
