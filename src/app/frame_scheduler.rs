// src/app/frame_scheduler.rs
//! Coalesces repaint requests to at most one per display refresh.

use log::error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::ScheduleError;

/// 「保留中の再描画は最大 1 つ」を守るためのフラグ。
///
/// - `request()`: 保留が無ければ保留にして `true` (呼び出し側がフレームを 1 回予約する)。
///   すでに保留中なら何もしないで `false`。
/// - `take()`: フレームの tick で呼ぶ。保留を消費してクリアする。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepaintGate {
    pending: bool,
}

impl RepaintGate {
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.pending, false)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// 次の描画タイミングでコールバックを 1 回呼んでくれるもの。
/// ブラウザでは requestAnimationFrame、テストでは手動で tick する実装を使う。
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), ScheduleError>;
}

/// `window.requestAnimationFrame` を使うスケジューラ。
#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), ScheduleError> {
        let window = web_sys::window().ok_or(ScheduleError::NoWindow)?;
        // once_into_js: 呼ばれた後に JS 側で自分を解放してくれる
        let frame = Closure::once_into_js(move |_timestamp: f64| callback());
        window
            .request_animation_frame(frame.unchecked_ref())
            .map(|_handle| ())
            .map_err(|e| {
                error!("requestAnimationFrame failed: {:?}", e);
                ScheduleError::AnimationFrame(format!("{:?}", e))
            })
    }
}
