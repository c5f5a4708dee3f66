//! Application review screen state
//!
//! Each fetch is tagged with a sequence number. Only the response to the
//! most recently issued fetch is applied, whatever order responses arrive in.

use crate::models::{Document, ReviewBundle};

#[derive(Clone, Debug, Default)]
pub struct ReviewView {
    pub application_id: Option<String>,
    pub loading: bool,
    pub bundle: Option<ReviewBundle>,
    /// Failure detail for the log line shown under the not-found message
    pub error: Option<String>,
    pub selected_document: usize,
    pub scroll: u16,
    latest_seq: Option<u64>,
}

impl ReviewView {
    /// Start showing `application_id`. Returns the id to fetch, if any.
    pub fn mount(&mut self, application_id: Option<String>, seq: u64) -> Option<String> {
        self.application_id = application_id.clone();
        self.bundle = None;
        self.error = None;
        self.selected_document = 0;
        self.scroll = 0;
        self.latest_seq = Some(seq);

        match application_id {
            Some(id) => {
                self.loading = true;
                Some(id)
            }
            None => {
                self.loading = false;
                None
            }
        }
    }

    /// Drop state and invalidate any outstanding fetch
    pub fn unmount(&mut self) {
        *self = ReviewView::default();
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        self.latest_seq == Some(seq)
    }

    /// Returns false when the response was stale and discarded
    pub fn apply_loaded(&mut self, seq: u64, bundle: ReviewBundle) -> bool {
        if !self.is_latest(seq) {
            tracing::debug!(seq, latest = ?self.latest_seq, "Discarding stale review response");
            return false;
        }
        self.bundle = Some(bundle);
        self.error = None;
        self.loading = false;
        true
    }

    pub fn apply_failed(&mut self, seq: u64, message: String) -> bool {
        if !self.is_latest(seq) {
            tracing::debug!(seq, latest = ?self.latest_seq, "Discarding stale review failure");
            return false;
        }
        self.bundle = None;
        self.error = Some(message);
        self.loading = false;
        true
    }

    pub fn documents(&self) -> &[Document] {
        self.bundle
            .as_ref()
            .map(|b| b.documents.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.documents().get(self.selected_document)
    }

    pub fn next_document(&mut self) {
        let len = self.documents().len();
        if len > 0 {
            self.selected_document = (self.selected_document + 1) % len;
        }
    }

    pub fn prev_document(&mut self) {
        let len = self.documents().len();
        if len > 0 {
            self.selected_document = self
                .selected_document
                .checked_sub(1)
                .unwrap_or(len - 1);
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(3);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::review_bundle as bundle;

    fn app_id(view: &ReviewView) -> Option<i64> {
        view.bundle.as_ref().map(|b| b.application.id)
    }

    #[test]
    fn test_missing_id_skips_fetch() {
        let mut view = ReviewView::default();
        assert_eq!(view.mount(None, 1), None);
        assert!(!view.loading);
        assert!(view.bundle.is_none());
    }

    #[test]
    fn test_latest_request_wins() {
        let mut view = ReviewView::default();
        assert_eq!(view.mount(Some("1".into()), 1), Some("1".to_string()));
        view.mount(Some("2".into()), 2);

        assert!(view.apply_loaded(2, bundle(2)));
        // older request resolves last
        assert!(!view.apply_loaded(1, bundle(1)));
        assert_eq!(app_id(&view), Some(2));
        assert!(!view.loading);
    }

    #[test]
    fn test_stale_failure_does_not_clobber() {
        let mut view = ReviewView::default();
        view.mount(Some("1".into()), 1);
        view.mount(Some("2".into()), 2);
        assert!(!view.apply_failed(1, "timeout".into()));
        assert!(view.loading);
        assert!(view.apply_failed(2, "timeout".into()));
        assert!(view.bundle.is_none());
        assert!(!view.loading);
    }

    #[test]
    fn test_unmount_invalidates_outstanding_fetch() {
        let mut view = ReviewView::default();
        view.mount(Some("1".into()), 1);
        view.unmount();
        assert!(!view.apply_loaded(1, bundle(1)));
        assert!(view.bundle.is_none());
    }

    #[test]
    fn test_document_selection_wraps() {
        let mut view = ReviewView::default();
        view.mount(Some("1".into()), 1);
        view.apply_loaded(1, bundle(1));
        view.prev_document();
        assert_eq!(view.selected_document().map(|d| d.id), Some(2));
        view.next_document();
        assert_eq!(view.selected_document().map(|d| d.id), Some(1));
    }
}
