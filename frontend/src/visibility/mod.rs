//! Scroll visibility tracking.
//!
//! Page regions report how much of them is visible inside the scrolling card
//! through a [`VisibilityNotifier`]. The trackers in this module turn those
//! reports into the active navigation section, one-shot reveal flags and
//! video playback. None of them touch the DOM, so they run in native tests
//! against [`fake::FakeNotifier`].

use futures::channel::mpsc::UnboundedReceiver;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod playback;
pub mod reveal;
pub mod sections;
pub mod web;

#[cfg(test)]
pub mod fake;

pub use playback::PlaybackTracker;
pub use reveal::{RevealState, RevealWatcher};
pub use sections::ActiveSectionTracker;
pub use web::WebVisibilityNotifier;

/// Selector of the element that scrolls the page content.
pub const SCROLL_ROOT_SELECTOR: &str = ".scrollable-card";
pub const SECTION_THRESHOLD: f64 = 0.5;
pub const SERVICES_THRESHOLD: f64 = 0.2;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const VIDEO_THRESHOLD: f64 = 0.75;

// Browsers report ratios such as 0.4999 for an element sitting on the threshold.
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VisibilityError {
    #[error("IntersectionObserver is not available")]
    Unsupported,
    #[error("No element with id {0}")]
    MissingElement(String),
    #[error("Observer error: {0}")]
    Observer(String),
}

/// One observation of one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityEvent {
    pub element_id: String,
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
    /// Top edge relative to the viewport, in CSS pixels.
    pub top: f64,
}

impl VisibilityEvent {
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.intersection_ratio + RATIO_EPSILON >= threshold
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchOptions {
    /// `None` observes against the browser viewport.
    pub root_selector: Option<String>,
    pub threshold: f64,
}

impl WatchOptions {
    pub fn in_scroll_root(threshold: f64) -> Self {
        Self {
            root_selector: Some(SCROLL_ROOT_SELECTOR.to_string()),
            threshold,
        }
    }
}

/// Batches of events, in the order the host delivered them.
pub type VisibilityStream = UnboundedReceiver<Vec<VisibilityEvent>>;

/// Source of visibility events.
///
/// Every id passed to one `watch` call shares a stream, so elements that
/// change together arrive in the same batch. The stream ends once all of its
/// ids have been unwatched or the notifier is dropped.
pub trait VisibilityNotifier {
    fn watch(
        &mut self,
        element_ids: &[String],
        options: &WatchOptions,
    ) -> Result<VisibilityStream, VisibilityError>;

    fn unwatch(&mut self, element_id: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(ratio: f64, is_intersecting: bool) -> VisibilityEvent {
        VisibilityEvent {
            element_id: "Inicio".into(),
            intersection_ratio: ratio,
            is_intersecting,
            top: 0.0,
        }
    }

    #[test]
    fn threshold_is_inclusive() {
        assert!(event(0.5, true).meets(0.5));
        assert!(event(0.4999, true).meets(0.5));
        assert!(!event(0.3, true).meets(0.5));
    }

    #[test]
    fn non_intersecting_never_meets() {
        assert!(!event(1.0, false).meets(0.1));
    }
}
