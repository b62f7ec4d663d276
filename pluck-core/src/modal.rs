//! Platform-agnostic parts of the export modal: its content, the copy
//! button's feedback cycle and focus-trap navigation.

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub title: String,
    pub subtitle: String,
    pub content: String,
}

impl ModalContent {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Idle,
    Copying,
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CopyStatus::Idle => "Copy",
            CopyStatus::Copying => "Copying…",
            CopyStatus::Copied => "Copied!",
            CopyStatus::Failed => "Copy failed",
        }
    }
}

/// Copy button state machine
///
/// Every `begin` hands out a new ticket. Completions and reverts carrying
/// an older ticket are ignored, so a second copy restarts the cycle
/// without cancelling the first.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    status: CopyStatus,
    generation: u64,
    success_delay_ms: u32,
    failure_delay_ms: u32,
}

impl CopyFeedback {
    pub fn new(success_delay_ms: u32, failure_delay_ms: u32) -> Self {
        Self {
            status: CopyStatus::Idle,
            generation: 0,
            success_delay_ms,
            failure_delay_ms,
        }
    }

    pub fn status(&self) -> CopyStatus {
        self.status
    }

    pub fn label(&self) -> &'static str {
        self.status.label()
    }

    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = CopyStatus::Copying;
        self.generation
    }

    /// Record the copy outcome. Returns the delay before reverting, or
    /// `None` if a newer copy superseded this one.
    pub fn finish(&mut self, ticket: u64, result: &Result<()>) -> Option<u32> {
        if ticket != self.generation {
            return None;
        }
        match result {
            Ok(()) => {
                self.status = CopyStatus::Copied;
                Some(self.success_delay_ms)
            }
            Err(e) => {
                tracing::warn!("copy failed: {}", e);
                self.status = CopyStatus::Failed;
                Some(self.failure_delay_ms)
            }
        }
    }

    /// Returns true if the label went back to idle
    pub fn revert(&mut self, ticket: u64) -> bool {
        if ticket != self.generation || self.status == CopyStatus::Copying {
            return false;
        }
        self.status = CopyStatus::Idle;
        true
    }
}

/// Next focus target when cycling with Tab (or Shift+Tab when
/// `backwards`) through `count` focusable elements. Focus outside the
/// dialog enters at the first (or last) element.
pub fn next_focus_index(current: Option<usize>, count: usize, backwards: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let next = match (current, backwards) {
        (None, false) => 0,
        (None, true) => count - 1,
        (Some(i), false) => (i + 1) % count,
        (Some(0), true) => count - 1,
        (Some(i), true) => (i - 1).min(count - 1),
    };
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_copy_cycle_success() {
        let mut feedback = CopyFeedback::new(900, 1200);
        assert_eq!(feedback.label(), "Copy");

        let ticket = feedback.begin();
        assert_eq!(feedback.label(), "Copying…");
        assert_eq!(feedback.finish(ticket, &Ok(())), Some(900));
        assert_eq!(feedback.status(), CopyStatus::Copied);
        assert!(feedback.revert(ticket));
        assert_eq!(feedback.status(), CopyStatus::Idle);
    }

    #[test]
    fn test_copy_cycle_failure() {
        let mut feedback = CopyFeedback::new(900, 1200);
        let ticket = feedback.begin();
        let result = Err(Error::Clipboard("denied".to_string()));

        assert_eq!(feedback.finish(ticket, &result), Some(1200));
        assert_eq!(feedback.label(), "Copy failed");
    }

    #[test]
    fn test_second_copy_restarts_cycle() {
        let mut feedback = CopyFeedback::new(900, 1200);
        let first = feedback.begin();
        let second = feedback.begin();

        assert_eq!(feedback.finish(first, &Ok(())), None);
        assert_eq!(feedback.status(), CopyStatus::Copying);
        assert!(!feedback.revert(first));

        assert_eq!(feedback.finish(second, &Ok(())), Some(900));
        assert!(feedback.revert(second));
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        assert_eq!(next_focus_index(None, 0, false), None);
        assert_eq!(next_focus_index(None, 3, false), Some(0));
        assert_eq!(next_focus_index(None, 3, true), Some(2));
        assert_eq!(next_focus_index(Some(2), 3, false), Some(0));
        assert_eq!(next_focus_index(Some(0), 3, true), Some(2));
        assert_eq!(next_focus_index(Some(1), 3, true), Some(0));
    }
}
