// src/error.rs
//! 画像の読み込みや描画予約まわりのエラー。どれも致命的ではなく、その場で回復する。

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("image failed to load: {src}")]
    Load { src: String },
    #[error("image has no usable dimensions: {src}")]
    EmptyImage { src: String },
    #[error("no browser window available")]
    NoWindow,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("requestAnimationFrame failed: {0}")]
    AnimationFrame(String),
    #[error("no browser window available")]
    NoWindow,
}
