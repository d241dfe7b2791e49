// src/components/hotspot.rs
//! ホットスポット (パネル上のクリック可能な領域) の矩形たち。

use serde::{Deserialize, Serialize};

/// パネルのローカル座標系での矩形 (左上基準)。
///
/// 画面座標ではなく「フィット後の画像の中でのオフセット」なので、
/// パネルがどこにドラッグされても再計算は要らないよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> f64 {
        self.w * self.h
    }
}

/// 元画像のピクセルグリッド上で定義されたホットスポット (x1, y1) - (x2, y2)。
/// 画像ごとに一度だけ定義して、あとは変更しない。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicHotspot {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl IntrinsicHotspot {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// 画像と同じスケール係数 `s` で、両軸まとめて縮小した矩形を返す。
    ///
    /// 角の順番が逆 (x2 < x1 など) で書かれていても、正規化してから計算する。
    pub fn scaled(&self, s: f64) -> Rect {
        let (left, right) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (top, bottom) = (self.y1.min(self.y2), self.y1.max(self.y2));
        Rect {
            x: left * s,
            y: top * s,
            w: (right - left) * s,
            h: (bottom - top) * s,
        }
    }

    pub fn area(&self) -> f64 {
        (self.x2 - self.x1).abs() * (self.y2 - self.y1).abs()
    }
}
