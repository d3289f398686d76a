use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlMediaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::MOBILE_BREAKPOINT;

/// Whether the viewport is narrower than the mobile breakpoint
pub fn is_mobile_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|width| width < MOBILE_BREAKPOINT)
        .unwrap_or(false)
}

/// Smoothly scroll the element with `id` to the middle of the scrolling card
pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options
                .behavior(ScrollBehavior::Smooth)
                .block(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("Cannot scroll to missing section {}", id),
    }
}

/// Open `url` in a new tab
pub fn open_in_new_tab(url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    match window.open_with_url_and_target(url, "_blank")? {
        Some(_) => Ok(()),
        None => Err(JsValue::from_str("popup blocked")),
    }
}

fn media_element(id: &str) -> Option<HtmlMediaElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlMediaElement>()
        .ok()
}

/// Play or pause the video with `id`. Pausing also rewinds when `rewind` is set.
pub fn set_video_playing(id: &str, play: bool, rewind: bool) {
    let Some(video) = media_element(id) else {
        log::warn!("No video element {}", id);
        return;
    };
    if play {
        // Autoplay policies reject the promise; the poster stays up.
        match video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("Video play was prevented: {:?}", e);
                }
            }),
            Err(e) => log::warn!("Video play was prevented: {:?}", e),
        }
    } else {
        if let Err(e) = video.pause() {
            log::warn!("Could not pause {}: {:?}", id, e);
        }
        if rewind {
            video.set_current_time(0.0);
        }
    }
}
