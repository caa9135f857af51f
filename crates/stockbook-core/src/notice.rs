//! Transient notices (toasts)
//!
//! Notices stack rather than replace each other, so a sync failure right
//! after a successful submit does not hide the success message. The view
//! layer dismisses each one after `NOTICE_DURATION_MS`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
        }
    }
}

pub type NoticeId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Notices {
    next_id: NoticeId,
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> NoticeId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: NoticeId) {
        self.items.retain(|notice| notice.id != id);
    }

    /// Oldest first
    pub fn visible(&self) -> &[Notice] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notices = Notices::default();
        let first = notices.push(NoticeKind::Success, "saved");
        let second = notices.push(NoticeKind::Error, "sync failed");
        assert_ne!(first, second);
        assert_eq!(notices.visible().len(), 2);

        notices.dismiss(first);
        assert_eq!(notices.visible().len(), 1);
        assert_eq!(notices.visible()[0].text, "sync failed");

        // Dismissing twice is harmless
        notices.dismiss(first);
        assert_eq!(notices.visible().len(), 1);
    }
}
