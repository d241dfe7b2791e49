// src/components/mod.rs

// パネル・座標・ホットスポットなど、データだけを持つ型たち。
pub mod dragging_info;
pub mod hotspot;
pub mod panel;
pub mod pointer;
pub mod position;
pub mod size;

pub use dragging_info::DragSession;
pub use hotspot::{IntrinsicHotspot, Rect};
pub use panel::{Pair, Panel, PanelId};
pub use pointer::{PointerSample, PointerTarget};
pub use position::Position;
pub use size::Size;
