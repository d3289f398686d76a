use futures::channel::mpsc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::{VisibilityError, VisibilityEvent, VisibilityNotifier, VisibilityStream, WatchOptions};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

struct Registration {
    observer: IntersectionObserver,
    targets: Vec<(String, Element)>,
    // Owns the sender half; dropping it closes the stream.
    _callback: ObserverCallback,
}

impl Drop for Registration {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// [`VisibilityNotifier`] over the browser's `IntersectionObserver`.
///
/// One observer per `watch` call. Dropping the notifier disconnects all of
/// them, so components keep it alive exactly as long as they are mounted.
pub struct WebVisibilityNotifier {
    document: Document,
    registrations: Vec<Registration>,
}

impl WebVisibilityNotifier {
    pub fn new() -> Result<Self, VisibilityError> {
        let window = web_sys::window().ok_or(VisibilityError::Unsupported)?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(VisibilityError::Unsupported);
        }
        let document = window.document().ok_or(VisibilityError::Unsupported)?;
        Ok(Self {
            document,
            registrations: Vec::new(),
        })
    }

    pub fn watched_count(&self) -> usize {
        self.registrations.iter().map(|r| r.targets.len()).sum()
    }
}

fn to_event(entry: IntersectionObserverEntry) -> VisibilityEvent {
    VisibilityEvent {
        element_id: entry.target().id(),
        intersection_ratio: entry.intersection_ratio(),
        is_intersecting: entry.is_intersecting(),
        top: entry.bounding_client_rect().top(),
    }
}

impl VisibilityNotifier for WebVisibilityNotifier {
    fn watch(
        &mut self,
        element_ids: &[String],
        options: &WatchOptions,
    ) -> Result<VisibilityStream, VisibilityError> {
        let targets = element_ids
            .iter()
            .map(|id| {
                self.document
                    .get_element_by_id(id)
                    .map(|element| (id.clone(), element))
                    .ok_or_else(|| VisibilityError::MissingElement(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (sender, receiver) = mpsc::unbounded();
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch: Vec<VisibilityEvent> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(to_event)
                    .collect();
                if !batch.is_empty() {
                    let _ = sender.unbounded_send(batch);
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(options.threshold));
        if let Some(selector) = &options.root_selector {
            let root = self
                .document
                .query_selector(selector)
                .map_err(|e| VisibilityError::Observer(format!("{:?}", e)))?;
            if root.is_none() {
                log::warn!("Scroll root {} not found, observing the viewport", selector);
            }
            init.root(root.as_ref());
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| VisibilityError::Observer(format!("{:?}", e)))?;
        for (_, element) in &targets {
            observer.observe(element);
        }

        self.registrations.push(Registration {
            observer,
            targets,
            _callback: callback,
        });
        Ok(receiver)
    }

    fn unwatch(&mut self, element_id: &str) {
        for registration in self.registrations.iter_mut() {
            let observer = &registration.observer;
            registration.targets.retain(|(id, element)| {
                if id == element_id {
                    observer.unobserve(element);
                    false
                } else {
                    true
                }
            });
        }
        self.registrations.retain(|r| !r.targets.is_empty());
    }
}
