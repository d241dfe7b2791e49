// src/components/pointer.rs
//! ブラウザの PointerEvent から、ドラッグ処理に必要な分だけ抜き出した値。

use serde::{Deserialize, Serialize};

/// ポインタの位置 (clientX / clientY) と ID。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub x: f64,
    pub y: f64,
}

impl PointerSample {
    pub const fn new(pointer_id: i32, x: f64, y: f64) -> Self {
        Self { pointer_id, x, y }
    }
}

/// pointerdown がどこで起きたか。
/// ホットスポットかドラッグ面かはイベントのターゲットだけで決める (距離や時間のしきい値は使わない)。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// パネル本体 (画像など)。ドラッグ対象。
    Surface,
    /// ホットスポットの中。リンクが優先なのでドラッグしない。
    Hotspot,
}
