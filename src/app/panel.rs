// src/app/panel.rs
//! One draggable panel: its drag controller, its repaint gate and the view it paints into.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::warn;

use super::drag_handler::{DragController, DragStart};
use super::frame_scheduler::{FrameScheduler, RepaintGate};
use crate::components::{DragSession, PanelId, PointerSample, PointerTarget, Position};

/// 位置を画面に反映する先。ブラウザでは DOM 要素、テストでは記録用の実装。
pub trait PanelView {
    fn apply_position(&self, position: Position);
}

struct PanelState<V> {
    drag: DragController,
    gate: RepaintGate,
    view: V,
    scheduler: Rc<dyn FrameScheduler>,
}

impl<V: PanelView> PanelState<V> {
    /// 保留中の再描画があれば、その時点の最新位置を描く。
    fn flush(&mut self) -> bool {
        if !self.gate.take() {
            return false;
        }
        self.view.apply_position(self.drag.position());
        true
    }
}

/// パネル 1 枚分のハンドル。クローンしても同じパネルを指す。
///
/// パネル同士で共有する可変状態は無い。状態は全部このハンドルの中。
pub struct PanelHandle<V> {
    inner: Rc<RefCell<PanelState<V>>>,
}

impl<V> Clone for PanelHandle<V> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<V: PanelView + 'static> PanelHandle<V> {
    pub fn new(drag: DragController, view: V, scheduler: Rc<dyn FrameScheduler>) -> Self {
        let state = PanelState { drag, gate: RepaintGate::default(), view, scheduler };
        Self { inner: Rc::new(RefCell::new(state)) }
    }

    pub fn id(&self) -> PanelId {
        self.inner.borrow().drag.id()
    }

    pub fn position(&self) -> Position {
        self.inner.borrow().drag.position()
    }

    pub fn is_dragging(&self) -> bool {
        self.inner.borrow().drag.is_dragging()
    }

    pub fn repaint_pending(&self) -> bool {
        self.inner.borrow().gate.is_pending()
    }

    /// 今の位置をすぐに描く (マウント直後の初回描画用)。
    pub fn paint_now(&self) {
        let state = self.inner.borrow();
        state.view.apply_position(state.drag.position());
    }

    pub fn pointer_down(&self, pointer: PointerSample, target: PointerTarget) -> DragStart {
        self.inner.borrow_mut().drag.handle_drag_start(pointer, target)
    }

    /// pointermove: 位置を更新して、再描画を 1 回ぶんだけ予約する。
    pub fn pointer_move(&self, pointer: PointerSample) {
        let moved = self.inner.borrow_mut().drag.update_dragged_position(pointer);
        if moved {
            self.request_repaint();
        }
    }

    /// pointerup / pointercancel。保留中の再描画はそのまま残す (最後の位置が描かれる)。
    pub fn pointer_up(&self, pointer_id: i32) -> Option<DragSession> {
        self.inner.borrow_mut().drag.handle_drag_end(pointer_id)
    }

    pub fn request_repaint(&self) {
        let scheduler = {
            let mut state = self.inner.borrow_mut();
            if !state.gate.request() {
                return;
            }
            Rc::clone(&state.scheduler)
        };

        let weak: Weak<RefCell<PanelState<V>>> = Rc::downgrade(&self.inner);
        let scheduled = scheduler.request_frame(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().flush();
            }
        }));

        if let Err(e) = scheduled {
            // フレームが取れなかったら同期で描いて、保留フラグを残さない
            warn!("Panel {:?}: {}. Painting synchronously.", self.id(), e);
            self.inner.borrow_mut().flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;
    use std::collections::VecDeque;

    /// tick() を呼んだ時だけフレームが進むスケジューラ。
    #[derive(Default)]
    struct ManualScheduler {
        queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
        requested: RefCell<usize>,
    }

    impl ManualScheduler {
        fn tick(&self) {
            let frame: Vec<_> = self.queue.borrow_mut().drain(..).collect();
            for callback in frame {
                callback();
            }
        }

        fn requested(&self) -> usize {
            *self.requested.borrow()
        }
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&self, callback: Box<dyn FnOnce()>) -> Result<(), ScheduleError> {
            *self.requested.borrow_mut() += 1;
            self.queue.borrow_mut().push_back(callback);
            Ok(())
        }
    }

    struct FailingScheduler;

    impl FrameScheduler for FailingScheduler {
        fn request_frame(&self, _callback: Box<dyn FnOnce()>) -> Result<(), ScheduleError> {
            Err(ScheduleError::NoWindow)
        }
    }

    #[derive(Clone, Default)]
    struct RecordingView {
        painted: Rc<RefCell<Vec<Position>>>,
    }

    impl PanelView for RecordingView {
        fn apply_position(&self, position: Position) {
            self.painted.borrow_mut().push(position);
        }
    }

    fn make_panel(id: PanelId, at: Position, scheduler: Rc<dyn FrameScheduler>) -> (PanelHandle<RecordingView>, RecordingView) {
        let view = RecordingView::default();
        let drag = DragController::new(id, at);
        (PanelHandle::new(drag, view.clone(), scheduler), view)
    }

    #[test]
    fn many_moves_between_ticks_paint_once_with_latest_position() {
        let scheduler = Rc::new(ManualScheduler::default());
        let (panel, view) = make_panel(PanelId::Left, Position::new(100.0, 60.0), scheduler.clone());

        panel.pointer_down(PointerSample::new(1, 120.0, 80.0), PointerTarget::Surface);
        for i in 1..=10 {
            panel.pointer_move(PointerSample::new(1, 120.0 + i as f64, 80.0 + 2.0 * i as f64));
        }
        assert_eq!(scheduler.requested(), 1);
        assert!(view.painted.borrow().is_empty());

        scheduler.tick();
        assert_eq!(*view.painted.borrow(), vec![Position::new(110.0, 80.0)]);
        assert!(!panel.repaint_pending());

        // 何も動いていないフレームでは描かない
        scheduler.tick();
        assert_eq!(view.painted.borrow().len(), 1);
    }

    #[test]
    fn drag_result_does_not_depend_on_coalescing() {
        let moves: Vec<(f64, f64)> = (1..=25).map(|i| (5.0 * i as f64, -3.0 * i as f64)).collect();
        let start = Position::new(300.0, 200.0);
        let down = PointerSample::new(3, 310.0, 220.0);

        let mut finals = Vec::new();
        for ticks_every in [1, 3, 7, 100] {
            let scheduler = Rc::new(ManualScheduler::default());
            let (panel, view) = make_panel(PanelId::Right, start, scheduler.clone());
            panel.pointer_down(down, PointerTarget::Surface);
            for (i, (dx, dy)) in moves.iter().enumerate() {
                panel.pointer_move(PointerSample::new(3, down.x + dx, down.y + dy));
                if (i + 1) % ticks_every == 0 {
                    scheduler.tick();
                }
            }
            panel.pointer_up(3);
            scheduler.tick();

            let last_painted = *view.painted.borrow().last().unwrap();
            assert_eq!(last_painted, panel.position());
            finals.push(panel.position());
        }

        let (dx, dy) = *moves.last().unwrap();
        for end in finals {
            assert_eq!(end, Position::new(start.x + dx, start.y + dy));
        }
    }

    #[test]
    fn pending_repaint_still_applies_after_release() {
        let scheduler = Rc::new(ManualScheduler::default());
        let (panel, view) = make_panel(PanelId::Left, Position::new(0.0, 0.0), scheduler.clone());
        panel.pointer_down(PointerSample::new(1, 0.0, 0.0), PointerTarget::Surface);
        panel.pointer_move(PointerSample::new(1, 40.0, 30.0));
        assert!(panel.pointer_up(1).is_some());
        assert!(panel.repaint_pending());

        scheduler.tick();
        assert_eq!(*view.painted.borrow(), vec![Position::new(40.0, 30.0)]);
    }

    #[test]
    fn hotspot_click_with_movement_never_moves_or_paints() {
        let scheduler = Rc::new(ManualScheduler::default());
        let (panel, view) = make_panel(PanelId::Left, Position::new(50.0, 50.0), scheduler.clone());
        assert_eq!(
            panel.pointer_down(PointerSample::new(1, 200.0, 160.0), PointerTarget::Hotspot),
            DragStart::OnHotspot
        );
        panel.pointer_move(PointerSample::new(1, 260.0, 190.0));
        panel.pointer_up(1);
        scheduler.tick();

        assert_eq!(panel.position(), Position::new(50.0, 50.0));
        assert!(view.painted.borrow().is_empty());
        assert_eq!(scheduler.requested(), 0);
    }

    #[test]
    fn two_panels_dragged_concurrently_do_not_interfere() {
        let scheduler = Rc::new(ManualScheduler::default());
        let (left, left_view) = make_panel(PanelId::Left, Position::new(100.0, 100.0), scheduler.clone());
        let (right, right_view) = make_panel(PanelId::Right, Position::new(600.0, 100.0), scheduler.clone());

        left.pointer_down(PointerSample::new(1, 110.0, 110.0), PointerTarget::Surface);
        right.pointer_down(PointerSample::new(2, 650.0, 150.0), PointerTarget::Surface);
        for i in 1..=5 {
            let step = i as f64 * 10.0;
            left.pointer_move(PointerSample::new(1, 110.0 + step, 110.0));
            right.pointer_move(PointerSample::new(2, 650.0, 150.0 - step));
            // 相手のポインタのイベントは無視される
            left.pointer_move(PointerSample::new(2, 9999.0, 9999.0));
            scheduler.tick();
        }
        left.pointer_up(1);
        scheduler.tick();
        right.pointer_move(PointerSample::new(2, 700.0, 50.0));
        right.pointer_up(2);
        scheduler.tick();

        assert_eq!(left.position(), Position::new(150.0, 100.0));
        assert_eq!(right.position(), Position::new(650.0, 0.0));
        assert_eq!(*left_view.painted.borrow().last().unwrap(), Position::new(150.0, 100.0));
        assert_eq!(*right_view.painted.borrow().last().unwrap(), Position::new(650.0, 0.0));
    }

    #[test]
    fn failing_scheduler_paints_synchronously_and_clears_flag() {
        let (panel, view) = make_panel(PanelId::Left, Position::new(0.0, 0.0), Rc::new(FailingScheduler));
        panel.pointer_down(PointerSample::new(1, 0.0, 0.0), PointerTarget::Surface);
        panel.pointer_move(PointerSample::new(1, 5.0, 5.0));
        assert!(!panel.repaint_pending());
        assert_eq!(*view.painted.borrow(), vec![Position::new(5.0, 5.0)]);

        panel.pointer_move(PointerSample::new(1, 6.0, 6.0));
        assert_eq!(view.painted.borrow().len(), 2);
    }

    #[test]
    fn dropped_panel_ignores_late_frames() {
        let scheduler = Rc::new(ManualScheduler::default());
        let (panel, view) = make_panel(PanelId::Left, Position::new(0.0, 0.0), scheduler.clone());
        panel.pointer_down(PointerSample::new(1, 0.0, 0.0), PointerTarget::Surface);
        panel.pointer_move(PointerSample::new(1, 5.0, 5.0));
        drop(panel);
        scheduler.tick();
        assert!(view.painted.borrow().is_empty());
    }
}
