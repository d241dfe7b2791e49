// src/components/size.rs

use serde::{Deserialize, Serialize};

/// 幅と高さ (ピクセル)。画像の元サイズにも、画面に収めた後のサイズにも使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub const fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// 幅・高さがどちらも有限の正の値か？
    /// 0 や NaN のサイズで割り算するとレイアウトが壊れるので、事前にここで弾く。
    pub fn is_usable(&self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
    }
}
