use crate::models::MediaId;

/// An entry waiting for the user to confirm its deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: MediaId,
    pub title: String,
}

/// Two-step delete: request, then confirm or cancel.
///
/// Only `confirm` ever yields an id to delete.
#[derive(Debug, Clone, Default)]
pub struct DeletePrompt {
    pending: Option<PendingDelete>,
}

impl DeletePrompt {
    pub fn pending(&self) -> Option<&PendingDelete> {
        self.pending.as_ref()
    }

    /// Ask for confirmation. A second request replaces the first.
    pub fn request(&mut self, id: MediaId, title: impl Into<String>) {
        self.pending = Some(PendingDelete {
            id,
            title: title.into(),
        });
    }

    pub fn confirm(&mut self) -> Option<MediaId> {
        self.pending.take().map(|p| p.id)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
