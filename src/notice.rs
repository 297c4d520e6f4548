use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

/// Message-area content. `generation` ties a pending hide to the notice it
/// was scheduled for; a hide for any other generation is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub generation: u64,
    pub text: String,
    pub kind: NoticeKind,
    pub visible: bool,
}

impl Notice {
    pub fn new(generation: u64, text: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            generation,
            text: text.into(),
            kind,
            visible: true,
        }
    }

    /// Class list for `#message`; the text stays after hiding, like the page did.
    pub fn classes(&self) -> String {
        if self.visible {
            self.kind.class().to_string()
        } else {
            format!("{} hidden", self.kind.class())
        }
    }
}

/// Slot for the one scheduled hide of the message area. Arming drops the
/// previous handle, which for a gloo `Timeout` clears the browser timer.
pub struct PendingHide<T> {
    slot: RefCell<Option<T>>,
}

impl<T> Default for PendingHide<T> {
    fn default() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl<T> PendingHide<T> {
    pub fn arm(&self, handle: T) {
        let previous = self.slot.borrow_mut().replace(handle);
        drop(previous);
    }
}
