// src/components/position.rs

use serde::{Deserialize, Serialize};

/// パネル左上の画面座標だよ！ (x, y) はピクセル単位で、小数もあり。📍
///
/// ドラッグ中はポインタ座標からオフセットを引いた値がそのまま入るので、
/// `f64` にしておく (PointerEvent の座標も f64 だしね)。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `self - other` の差分 (ドラッグ開始時のオフセット計算に使う)
    pub fn offset_from(&self, other: Position) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Position {
        Position { x: self.x + dx, y: self.y + dy }
    }
}
