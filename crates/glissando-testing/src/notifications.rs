//! Records slider notifications for later assertions.

use glissando::{Direction, SliderOptions};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub enum Notification {
    Change {
        index: usize,
        slide: Option<String>,
        direction: Direction,
    },
    TransitionEnd {
        index: usize,
        slide: Option<String>,
    },
    DragStart {
        index: usize,
    },
    DragEnd {
        index: usize,
    },
    Move,
}

/// Shared log that every hook installed by [`attach`](NotificationLog::attach) appends to.
#[derive(Clone, Debug, Default)]
pub struct NotificationLog {
    entries: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs all five hooks on `options`.
    pub fn attach(&self, options: SliderOptions<String>) -> SliderOptions<String> {
        let change = Rc::clone(&self.entries);
        let transition = Rc::clone(&self.entries);
        let start = Rc::clone(&self.entries);
        let end = Rc::clone(&self.entries);
        let moved = Rc::clone(&self.entries);

        options
            .on_change(move |index, slide, direction| {
                change.borrow_mut().push(Notification::Change {
                    index,
                    slide: slide.cloned(),
                    direction,
                })
            })
            .on_transition_end(move |index, slide| {
                transition.borrow_mut().push(Notification::TransitionEnd {
                    index,
                    slide: slide.cloned(),
                })
            })
            .on_drag_start(move |index, _| start.borrow_mut().push(Notification::DragStart { index }))
            .on_drag_end(move |index, _| end.borrow_mut().push(Notification::DragEnd { index }))
            .on_move(move || moved.borrow_mut().push(Notification::Move))
    }

    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }

    pub fn changes(&self) -> Vec<(usize, Direction)> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|entry| match entry {
                Notification::Change {
                    index, direction, ..
                } => Some((*index, *direction)),
                _ => None,
            })
            .collect()
    }

    pub fn drag_starts(&self) -> usize {
        self.count(|entry| matches!(entry, Notification::DragStart { .. }))
    }

    pub fn drag_ends(&self) -> usize {
        self.count(|entry| matches!(entry, Notification::DragEnd { .. }))
    }

    pub fn moves(&self) -> usize {
        self.count(|entry| matches!(entry, Notification::Move))
    }

    pub fn transition_ends(&self) -> usize {
        self.count(|entry| matches!(entry, Notification::TransitionEnd { .. }))
    }

    fn count(&self, predicate: impl Fn(&Notification) -> bool) -> usize {
        self.entries.borrow().iter().filter(|entry| predicate(entry)).count()
    }
}
