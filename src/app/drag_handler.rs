// src/app/drag_handler.rs
//! Handles panel dragging logic (start, update, end) for a single panel.

use log::{debug, info};

use crate::components::{DragSession, Panel, PanelId, PointerSample, PointerTarget, Position};

/// `handle_drag_start` の結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStart {
    /// セッション開始
    Started,
    /// ホットスポット上の pointerdown なので無視 (リンクが優先)
    OnHotspot,
    /// すでにドラッグ中。ネストしたセッションは作らない
    AlreadyDragging,
}

/// パネル 1 枚分のドラッグ状態機械。
///
/// `Idle -> (開始, ホットスポット外) -> Dragging -> (終了) -> Idle` だけ。
/// 位置はこのコントローラだけが書き換える。
#[derive(Debug, Clone)]
pub struct DragController {
    id: PanelId,
    position: Position,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(id: PanelId, position: Position) -> Self {
        Self { id, position, session: None }
    }

    pub fn from_panel(panel: &Panel) -> Self {
        Self::new(panel.id, panel.initial_position)
    }

    pub fn id(&self) -> PanelId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// ドラッグ開始 (pointerdown)。ポインタとパネル左上のオフセットを記録する。
    pub fn handle_drag_start(&mut self, pointer: PointerSample, target: PointerTarget) -> DragStart {
        if target == PointerTarget::Hotspot {
            debug!("Panel {:?}: pointerdown on hotspot, not dragging", self.id);
            return DragStart::OnHotspot;
        }
        if let Some(session) = self.session {
            debug!(
                "Panel {:?}: already dragging with pointer {}, ignoring pointer {}",
                self.id, session.pointer_id, pointer.pointer_id
            );
            return DragStart::AlreadyDragging;
        }

        let (offset_x, offset_y) = Position::new(pointer.x, pointer.y).offset_from(self.position);
        self.session = Some(DragSession { pointer_id: pointer.pointer_id, offset_x, offset_y });
        info!(
            "Panel {:?}: drag started at ({}, {}), offset ({}, {})",
            self.id, pointer.x, pointer.y, offset_x, offset_y
        );
        DragStart::Started
    }

    /// ドラッグ中の位置更新 (pointermove)。新しい左上 = ポインタ - オフセット。
    ///
    /// 位置が変わったら `true`。呼び出し側はそのとき再描画を要求する (ここでは描画しない)。
    pub fn update_dragged_position(&mut self, pointer: PointerSample) -> bool {
        let Some(session) = self.session else {
            return false;
        };
        if session.pointer_id != pointer.pointer_id {
            return false;
        }
        let next = Position::new(pointer.x, pointer.y).translated(-session.offset_x, -session.offset_y);
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    /// ドラッグ終了 (pointerup / pointercancel / lostpointercapture)。
    /// 別のポインタの終了イベントでは終わらない。
    pub fn handle_drag_end(&mut self, pointer_id: i32) -> Option<DragSession> {
        match self.session {
            Some(session) if session.pointer_id == pointer_id => {
                self.session = None;
                info!(
                    "Panel {:?}: drag ended at ({}, {})",
                    self.id, self.position.x, self.position.y
                );
                Some(session)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_at(x: f64, y: f64) -> DragController {
        DragController::new(PanelId::Left, Position::new(x, y))
    }

    #[test]
    fn offset_scenario() {
        let mut drag = controller_at(100.0, 60.0);
        assert_eq!(
            drag.handle_drag_start(PointerSample::new(1, 120.0, 80.0), PointerTarget::Surface),
            DragStart::Started
        );
        let session = drag.session().unwrap();
        assert_eq!((session.offset_x, session.offset_y), (20.0, 20.0));

        assert!(drag.update_dragged_position(PointerSample::new(1, 200.0, 150.0)));
        assert_eq!(drag.position(), Position::new(180.0, 130.0));
    }

    #[test]
    fn final_position_is_start_plus_total_delta() {
        let start = Position::new(37.5, 410.25);
        let mut drag = controller_at(start.x, start.y);
        let down = PointerSample::new(7, 50.0, 420.0);
        drag.handle_drag_start(down, PointerTarget::Surface);

        let deltas = [(3.0, -1.0), (10.5, 4.0), (-2.0, 0.0), (40.0, 33.3)];
        let (mut px, mut py) = (down.x, down.y);
        for (dx, dy) in deltas {
            px += dx;
            py += dy;
            drag.update_dragged_position(PointerSample::new(7, px, py));
        }
        drag.handle_drag_end(7);

        let (total_x, total_y) = (px - down.x, py - down.y);
        let end = drag.position();
        assert!((end.x - (start.x + total_x)).abs() < 1e-9);
        assert!((end.y - (start.y + total_y)).abs() < 1e-9);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn hotspot_press_never_moves_the_panel() {
        let mut drag = controller_at(100.0, 60.0);
        assert_eq!(
            drag.handle_drag_start(PointerSample::new(1, 250.0, 150.0), PointerTarget::Hotspot),
            DragStart::OnHotspot
        );
        assert!(!drag.update_dragged_position(PointerSample::new(1, 400.0, 400.0)));
        assert_eq!(drag.handle_drag_end(1), None);
        assert_eq!(drag.position(), Position::new(100.0, 60.0));
    }

    #[test]
    fn second_start_while_dragging_is_ignored() {
        let mut drag = controller_at(0.0, 0.0);
        drag.handle_drag_start(PointerSample::new(1, 10.0, 10.0), PointerTarget::Surface);
        assert_eq!(
            drag.handle_drag_start(PointerSample::new(2, 50.0, 50.0), PointerTarget::Surface),
            DragStart::AlreadyDragging
        );
        // オフセットは最初のセッションのまま
        assert_eq!(drag.session().unwrap().pointer_id, 1);
        drag.update_dragged_position(PointerSample::new(1, 20.0, 30.0));
        assert_eq!(drag.position(), Position::new(10.0, 20.0));
    }

    #[test]
    fn moves_from_other_pointers_are_ignored() {
        let mut drag = controller_at(0.0, 0.0);
        drag.handle_drag_start(PointerSample::new(1, 5.0, 5.0), PointerTarget::Surface);
        assert!(!drag.update_dragged_position(PointerSample::new(2, 500.0, 500.0)));
        assert_eq!(drag.handle_drag_end(2), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn release_without_move_keeps_position() {
        let mut drag = controller_at(100.0, 60.0);
        drag.handle_drag_start(PointerSample::new(1, 130.0, 90.0), PointerTarget::Surface);
        assert!(drag.handle_drag_end(1).is_some());
        assert_eq!(drag.position(), Position::new(100.0, 60.0));
    }

    #[test]
    fn moves_after_end_do_nothing() {
        let mut drag = controller_at(0.0, 0.0);
        drag.handle_drag_start(PointerSample::new(1, 0.0, 0.0), PointerTarget::Surface);
        drag.update_dragged_position(PointerSample::new(1, 10.0, 10.0));
        drag.handle_drag_end(1);
        assert!(!drag.update_dragged_position(PointerSample::new(1, 99.0, 99.0)));
        assert_eq!(drag.position(), Position::new(10.0, 10.0));
    }
}
