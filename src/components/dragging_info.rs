// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

/// ドラッグ中のパネルに関する一時的な情報だよ！🖱️
///
/// pointerdown から対応する pointerup までの間だけ存在する。
/// パネル 1 枚につき同時に 1 つまで。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// このセッションを開始したポインタの ID (PointerEvent.pointerId)
    pub pointer_id: i32,
    /// ドラッグ開始時のポインタとパネル左上のオフセット X
    pub offset_x: f64,
    /// ドラッグ開始時のポインタとパネル左上のオフセット Y
    pub offset_y: f64,
}
