//! Bounded toast queue.

use std::collections::VecDeque;

use serde::Serialize;

use crate::observer::{Notifier, ToastKind};

/// Default number of toasts kept on screen.
pub const DEFAULT_TOAST_CAPACITY: usize = 3;

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
}

/// FIFO of visible toasts. Pushing past capacity evicts the oldest.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    capacity: usize,
}

impl ToastQueue {
    /// Create a queue; a capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            toasts: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        if self.toasts.len() == self.capacity {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            message: message.into(),
            kind,
        });
    }

    /// Most recent toast.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Remove and return all toasts, oldest first.
    pub fn drain(&mut self) -> Vec<Toast> {
        self.toasts.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_CAPACITY)
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, message: &str, kind: ToastKind) {
        self.push(message, kind);
    }
}
