#![cfg(target_arch = "wasm32")]

use futures::StreamExt;
use ioniq_web::visibility::{
    VisibilityError, VisibilityNotifier, WatchOptions, WebVisibilityNotifier, SECTION_THRESHOLD,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn viewport_options() -> WatchOptions {
    WatchOptions {
        root_selector: None,
        threshold: SECTION_THRESHOLD,
    }
}

#[wasm_bindgen_test]
fn browsers_provide_an_observer() {
    let notifier = WebVisibilityNotifier::new().expect("IntersectionObserver should exist");
    assert_eq!(notifier.watched_count(), 0);
}

#[wasm_bindgen_test]
fn watching_a_missing_element_fails() {
    let mut notifier = WebVisibilityNotifier::new().unwrap();
    let result = notifier.watch(&["nowhere".to_string()], &viewport_options());
    assert_eq!(
        result.err(),
        Some(VisibilityError::MissingElement("nowhere".to_string()))
    );
    assert_eq!(notifier.watched_count(), 0);
}

#[wasm_bindgen_test]
fn unwatch_forgets_the_element() {
    let a = mount("web-test-a");
    let b = mount("web-test-b");
    let mut notifier = WebVisibilityNotifier::new().unwrap();
    let _stream = notifier
        .watch(&["web-test-a".to_string(), "web-test-b".to_string()], &viewport_options())
        .unwrap();
    assert_eq!(notifier.watched_count(), 2);

    notifier.unwatch("web-test-a");
    assert_eq!(notifier.watched_count(), 1);
    notifier.unwatch("web-test-a");
    assert_eq!(notifier.watched_count(), 1);
    notifier.unwatch("web-test-b");
    assert_eq!(notifier.watched_count(), 0);

    a.remove();
    b.remove();
}

#[wasm_bindgen_test]
async fn dropping_the_notifier_ends_the_stream() {
    let element = mount("web-test-drop");
    let mut notifier = WebVisibilityNotifier::new().unwrap();
    let stream = notifier
        .watch(&["web-test-drop".to_string()], &viewport_options())
        .unwrap();
    drop(notifier);

    // Whatever was already queued drains, then the stream closes.
    let remaining: Vec<_> = stream.collect().await;
    assert!(remaining.len() <= 1);
    element.remove();
}
