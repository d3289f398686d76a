use std::collections::BTreeMap;

use super::{VisibilityEvent, VIDEO_THRESHOLD};

/// Play / pause decisions for videos in the mobile project scroller.
///
/// Unlike reveals this never latches: a video plays while it is at least
/// `threshold` visible and pauses when it drops below.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackTracker {
    playing: BTreeMap<String, bool>,
    threshold: f64,
}

impl Default for PlaybackTracker {
    fn default() -> Self {
        Self::new(VIDEO_THRESHOLD)
    }
}

impl PlaybackTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            playing: BTreeMap::new(),
            threshold,
        }
    }

    /// Returns `(id, should_play)` for every video whose state flipped.
    pub fn apply(&mut self, batch: &[VisibilityEvent]) -> Vec<(String, bool)> {
        let mut changes = Vec::new();
        for event in batch {
            let play = event.meets(self.threshold);
            let previous = self.playing.insert(event.element_id.clone(), play);
            if previous != Some(play) {
                changes.push((event.element_id.clone(), play));
            }
        }
        changes
    }

    pub fn is_playing(&self, id: &str) -> bool {
        self.playing.get(id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::fake::{hidden, visible};

    #[test]
    fn plays_and_pauses_as_videos_cross_the_threshold() {
        let mut t = PlaybackTracker::default();
        assert_eq!(
            t.apply(&[visible("video-0", 0.9, 0.0), visible("video-1", 0.3, 0.0)]),
            vec![("video-0".to_string(), true), ("video-1".to_string(), false)]
        );
        assert_eq!(
            t.apply(&[hidden("video-0"), visible("video-1", 0.8, 0.0)]),
            vec![("video-0".to_string(), false), ("video-1".to_string(), true)]
        );
        assert!(t.is_playing("video-1"));
        assert!(!t.is_playing("video-0"));
    }

    #[test]
    fn repeated_events_produce_no_changes() {
        let mut t = PlaybackTracker::default();
        t.apply(&[visible("video-2", 1.0, 0.0)]);
        assert!(t.apply(&[visible("video-2", 0.95, 0.0)]).is_empty());
    }
}
