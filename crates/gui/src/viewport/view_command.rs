//! Command channel between UI buttons and the camera controller.
//!
//! Publishers and the subscriber hold clones of the same channel; the
//! viewport drains it once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use shared::ViewPreset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    SetPreset(ViewPreset),
}

#[derive(Clone, Default)]
pub struct ViewCommandChannel {
    queue: Rc<RefCell<VecDeque<ViewCommand>>>,
}

impl ViewCommandChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, command: ViewCommand) {
        tracing::debug!("View command published: {:?}", command);
        self.queue.borrow_mut().push_back(command);
    }

    /// Take every pending command in publish order
    pub fn drain(&self) -> Vec<ViewCommand> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}
