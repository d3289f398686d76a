use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{VisibilityError, VisibilityEvent, VisibilityNotifier, VisibilityStream, WatchOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RevealState {
    #[default]
    Unrevealed,
    Revealed,
}

impl RevealState {
    /// `Revealed` is terminal.
    pub fn observe(self, event: &VisibilityEvent, threshold: f64) -> Self {
        match self {
            RevealState::Revealed => RevealState::Revealed,
            RevealState::Unrevealed if event.meets(threshold) => RevealState::Revealed,
            RevealState::Unrevealed => RevealState::Unrevealed,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// One-shot reveal for a group of elements.
///
/// Each element is unwatched as soon as it is revealed, so it never
/// triggers again. Without a working notifier everything starts revealed.
pub struct RevealWatcher<N: VisibilityNotifier> {
    notifier: Option<N>,
    states: BTreeMap<String, RevealState>,
    threshold: f64,
}

impl<N: VisibilityNotifier> RevealWatcher<N> {
    pub fn start(
        notifier: Result<N, VisibilityError>,
        element_ids: &[String],
        options: &WatchOptions,
    ) -> (Self, Option<VisibilityStream>) {
        let watched = notifier.and_then(|mut notifier| {
            let stream = notifier.watch(element_ids, options)?;
            Ok((notifier, stream))
        });

        let (notifier, stream, initial) = match watched {
            Ok((notifier, stream)) => (Some(notifier), Some(stream), RevealState::Unrevealed),
            Err(e) => {
                log::warn!("Reveal animations disabled: {}", e);
                (None, None, RevealState::Revealed)
            }
        };

        let states = element_ids
            .iter()
            .map(|id| (id.clone(), initial))
            .collect();
        (
            Self {
                notifier,
                states,
                threshold: options.threshold,
            },
            stream,
        )
    }

    /// Applies one batch and returns the ids it revealed.
    pub fn handle_batch(&mut self, batch: &[VisibilityEvent]) -> Vec<String> {
        let mut revealed = Vec::new();
        for event in batch {
            let Some(state) = self.states.get_mut(&event.element_id) else {
                continue;
            };
            let next = state.observe(event, self.threshold);
            if next != *state {
                *state = next;
                revealed.push(event.element_id.clone());
            }
        }
        if let Some(notifier) = self.notifier.as_mut() {
            for id in &revealed {
                notifier.unwatch(id);
            }
        }
        revealed
    }

    pub fn is_revealed(&self, element_id: &str) -> bool {
        self.states
            .get(element_id)
            .map(|s| s.is_revealed())
            .unwrap_or(false)
    }

    pub fn all_revealed(&self) -> bool {
        self.states.values().all(|s| s.is_revealed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::fake::{hidden, visible, FakeNotifier};
    use crate::visibility::REVEAL_THRESHOLD;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn revealed_is_terminal() {
        let state = RevealState::Unrevealed.observe(&visible("a", 0.2, 0.0), 0.1);
        assert_eq!(state, RevealState::Revealed);
        assert_eq!(state.observe(&hidden("a"), 0.1), RevealState::Revealed);
    }

    #[test]
    fn first_qualifying_event_reveals_and_unwatches() {
        let fake = FakeNotifier::default();
        let (mut watcher, stream) = RevealWatcher::start(
            Ok(fake.clone()),
            &ids(&["title", "body"]),
            &WatchOptions::in_scroll_root(REVEAL_THRESHOLD),
        );
        let mut stream = stream.expect("fake notifier always watches");
        assert!(!watcher.is_revealed("title"));

        fake.emit(vec![visible("title", 0.05, 0.0), visible("body", 0.4, 80.0)]);
        let batch = stream.try_next().unwrap().unwrap();
        assert_eq!(watcher.handle_batch(&batch), ["body"]);
        assert!(watcher.is_revealed("body"));
        assert!(!watcher.is_revealed("title"));
        assert_eq!(fake.unwatched(), ["body"]);
        assert_eq!(fake.watched(), ["title"]);
    }

    #[test]
    fn redelivered_events_are_no_ops() {
        let fake = FakeNotifier::default();
        let (mut watcher, _stream) = RevealWatcher::start(
            Ok(fake.clone()),
            &ids(&["card"]),
            &WatchOptions::in_scroll_root(REVEAL_THRESHOLD),
        );
        assert_eq!(watcher.handle_batch(&[visible("card", 1.0, 0.0)]), ["card"]);
        assert!(watcher.handle_batch(&[visible("card", 1.0, 0.0)]).is_empty());
        assert!(watcher.handle_batch(&[hidden("card")]).is_empty());
        assert!(watcher.is_revealed("card"));
        assert_eq!(fake.unwatched(), ["card"]);
    }

    #[test]
    fn stream_ends_once_everything_is_revealed() {
        let fake = FakeNotifier::default();
        let (mut watcher, stream) = RevealWatcher::start(
            Ok(fake.clone()),
            &ids(&["Servicios"]),
            &WatchOptions::in_scroll_root(0.2),
        );
        let mut stream = stream.unwrap();
        watcher.handle_batch(&[visible("Servicios", 0.25, 0.0)]);
        assert!(watcher.all_revealed());
        // sender dropped with the registration
        assert_eq!(stream.try_next().unwrap(), None);
    }

    #[test]
    fn missing_observer_reveals_everything_up_front() {
        let (watcher, stream) = RevealWatcher::<FakeNotifier>::start(
            Err(VisibilityError::Unsupported),
            &ids(&["a", "b"]),
            &WatchOptions::in_scroll_root(REVEAL_THRESHOLD),
        );
        assert!(stream.is_none());
        assert!(watcher.all_revealed());
    }

    #[test]
    fn failed_watch_degrades_the_same_way() {
        let fake = FakeNotifier::failing(VisibilityError::MissingElement("a".into()));
        let (mut watcher, stream) = RevealWatcher::start(
            Ok(fake),
            &ids(&["a"]),
            &WatchOptions::in_scroll_root(REVEAL_THRESHOLD),
        );
        assert!(stream.is_none());
        assert!(watcher.is_revealed("a"));
        assert!(watcher.handle_batch(&[hidden("a")]).is_empty());
    }

    #[test]
    fn watch_uses_the_requested_threshold() {
        let fake = FakeNotifier::default();
        let (_watcher, _stream) = RevealWatcher::start(
            Ok(fake.clone()),
            &ids(&["x"]),
            &WatchOptions::in_scroll_root(0.2),
        );
        let options = fake.options_for("x").unwrap();
        assert_eq!(options.threshold, 0.2);
        assert_eq!(options.root_selector.as_deref(), Some(".scrollable-card"));
    }
}
