use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::StreamExt;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::visibility::{RevealWatcher, WatchOptions, WebVisibilityNotifier, REVEAL_THRESHOLD};

// Every mounted AnimatedText needs its own DOM id for the observer.
static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Stagger between consecutive words, in seconds.
pub fn word_delay(index: usize) -> f64 {
    index as f64 * 0.05
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("p"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub style: AttrValue,
}

/// Text whose words slide in, one after another, the first time the element
/// is at least 10% visible in the scrolling card.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let id = use_state(|| format!("animated-text-{}", NEXT_ID.fetch_add(1, Ordering::Relaxed)));
    let revealed = use_state(|| false);

    {
        let id = (*id).clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let ids = vec![id];
                let (watcher, stream) = RevealWatcher::start(
                    WebVisibilityNotifier::new(),
                    &ids,
                    &WatchOptions::in_scroll_root(REVEAL_THRESHOLD),
                );
                if watcher.all_revealed() {
                    revealed.set(true);
                }
                let watcher = Rc::new(RefCell::new(watcher));

                if let Some(mut stream) = stream {
                    let weak = Rc::downgrade(&watcher);
                    spawn_local(async move {
                        while let Some(batch) = stream.next().await {
                            let Some(watcher) = weak.upgrade() else {
                                break;
                            };
                            let newly_revealed = watcher.borrow_mut().handle_batch(&batch);
                            if !newly_revealed.is_empty() {
                                revealed.set(true);
                            }
                        }
                    });
                }

                // Dropping the watcher disconnects the observer and ends the task.
                move || drop(watcher)
            },
            (),
        );
    }

    let words = props.text.split(' ').enumerate().map(|(i, word)| {
        html! {
            <span class="animated-word-wrapper">
                <span class="animated-word" style={format!("transition-delay: {:.2}s;", word_delay(i))}>
                    { word.to_string() }
                </span>
            </span>
        }
    });

    html! {
        <@{props.tag.to_string()}
            id={(*id).clone()}
            class={classes!("animated-text-container", (*revealed).then_some("visible"))}
            style={props.style.clone()}
        >
            { for words }
        </@>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_staggered_by_fifty_milliseconds() {
        assert_eq!(word_delay(0), 0.0);
        assert!((word_delay(3) - 0.15).abs() < 1e-9);
    }
}
