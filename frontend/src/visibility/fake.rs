use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::mpsc::{self, UnboundedSender};

use super::{VisibilityError, VisibilityEvent, VisibilityNotifier, VisibilityStream, WatchOptions};

struct Registration {
    ids: Vec<String>,
    options: WatchOptions,
    sender: UnboundedSender<Vec<VisibilityEvent>>,
}

#[derive(Default)]
struct Inner {
    registrations: Vec<Registration>,
    unwatched: Vec<String>,
    fail_with: Option<VisibilityError>,
}

/// In-memory notifier. Clones share state, so a test keeps one handle while
/// the code under test owns another.
#[derive(Clone, Default)]
pub struct FakeNotifier {
    inner: Rc<RefCell<Inner>>,
}

impl FakeNotifier {
    pub fn failing(error: VisibilityError) -> Self {
        let notifier = Self::default();
        notifier.inner.borrow_mut().fail_with = Some(error);
        notifier
    }

    pub fn watched(&self) -> Vec<String> {
        self.inner
            .borrow()
            .registrations
            .iter()
            .flat_map(|r| r.ids.iter().cloned())
            .collect()
    }

    pub fn unwatched(&self) -> Vec<String> {
        self.inner.borrow().unwatched.clone()
    }

    pub fn options_for(&self, id: &str) -> Option<WatchOptions> {
        self.inner
            .borrow()
            .registrations
            .iter()
            .find(|r| r.ids.iter().any(|i| i == id))
            .map(|r| r.options.clone())
    }

    /// Delivers `batch` the way a browser would: every registration receives
    /// the events for the ids it still observes.
    pub fn emit(&self, batch: Vec<VisibilityEvent>) {
        let inner = self.inner.borrow();
        for registration in &inner.registrations {
            let events: Vec<VisibilityEvent> = batch
                .iter()
                .filter(|e| registration.ids.contains(&e.element_id))
                .cloned()
                .collect();
            if !events.is_empty() {
                let _ = registration.sender.unbounded_send(events);
            }
        }
    }
}

impl VisibilityNotifier for FakeNotifier {
    fn watch(
        &mut self,
        element_ids: &[String],
        options: &WatchOptions,
    ) -> Result<VisibilityStream, VisibilityError> {
        let mut inner = self.inner.borrow_mut();
        if let Some(error) = inner.fail_with.clone() {
            return Err(error);
        }
        let (sender, receiver) = mpsc::unbounded();
        inner.registrations.push(Registration {
            ids: element_ids.to_vec(),
            options: options.clone(),
            sender,
        });
        Ok(receiver)
    }

    fn unwatch(&mut self, element_id: &str) {
        let mut inner = self.inner.borrow_mut();
        for registration in inner.registrations.iter_mut() {
            registration.ids.retain(|id| id != element_id);
        }
        inner.registrations.retain(|r| !r.ids.is_empty());
        inner.unwatched.push(element_id.to_string());
    }
}

pub fn visible(id: &str, ratio: f64, top: f64) -> VisibilityEvent {
    VisibilityEvent {
        element_id: id.to_string(),
        intersection_ratio: ratio,
        is_intersecting: ratio > 0.0,
        top,
    }
}

pub fn hidden(id: &str) -> VisibilityEvent {
    VisibilityEvent {
        element_id: id.to_string(),
        intersection_ratio: 0.0,
        is_intersecting: false,
        top: 0.0,
    }
}
