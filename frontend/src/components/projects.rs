use std::rc::Rc;

use futures::StreamExt;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config::media_url;
use crate::content::projects::{video_element_id, Project};
use crate::content::MediaKind;
use crate::state::AppAction;
use crate::utils::dom::set_video_playing;
use crate::visibility::{
    PlaybackTracker, VisibilityNotifier, WatchOptions, WebVisibilityNotifier, VIDEO_THRESHOLD,
};

/// Scroll container of the mobile project cards.
const SCROLLER_SELECTOR: &str = ".project-scroller";

#[derive(Properties, PartialEq)]
pub struct ProjectsProps {
    pub projects: &'static [Project],
    pub is_mobile: bool,
    pub active: usize,
    pub on_action: Callback<AppAction>,
}

fn tags(project: &Project) -> Html {
    html! {
        <div class="project-tags">
            { for project.tags.iter().map(|tag| html! { <span class="project-tag">{ *tag }</span> }) }
        </div>
    }
}

fn accordion(props: &ProjectsProps) -> Html {
    let columns = props.projects.iter().enumerate().map(|(index, project)| {
        let is_active = props.active == index;
        let onmouseenter = props.on_action.reform(move |_: MouseEvent| AppAction::HoverProject(index));
        let onclick = props.on_action.reform(move |_: MouseEvent| AppAction::OpenProject(index));
        let poster = project.poster().map(media_url);

        let backdrop = if is_active && project.media.kind == MediaKind::Video {
            html! {
                <video
                    key={project.title}
                    class="project-column-media"
                    src={media_url(project.media.src)}
                    poster={poster}
                    autoplay=true
                    loop=true
                    muted=true
                    playsinline=true
                />
            }
        } else {
            let image = poster.unwrap_or_else(|| media_url(project.media.src));
            html! {
                <div class="project-column-media" style={format!("background-image: url({});", image)} />
            }
        };

        html! {
            <div
                key={index}
                role="tab"
                class="project-column"
                aria-selected={is_active.to_string()}
                aria-controls={format!("project-content-{}", index)}
                style={format!("flex: {};", if is_active { 5 } else { 1 })}
                {onmouseenter}
                {onclick}
            >
                { backdrop }
                <div class="project-column-shade" />
                <div
                    id={format!("project-content-{}", index)}
                    class="project-column-content"
                    style={format!("opacity: {};", if is_active { 1 } else { 0 })}
                >
                    <h2 class="project-title">{ project.title }</h2>
                    <p class="project-description">{ project.description }</p>
                    { tags(project) }
                </div>
                <div class="project-column-title" style={format!("opacity: {};", if is_active { "0" } else { "0.8" })}>
                    <span>{ project.title }</span>
                </div>
            </div>
        }
    });

    html! {
        <div class="projects-accordion" role="tablist">{ for columns }</div>
    }
}

fn scroller(props: &ProjectsProps) -> Html {
    let cards = props.projects.iter().enumerate().map(|(index, project)| {
        let onclick = props.on_action.reform(move |_: MouseEvent| AppAction::OpenProject(index));
        let media = match project.media.kind {
            MediaKind::Video => html! {
                <video
                    id={video_element_id(index)}
                    class="project-image"
                    src={media_url(project.media.src)}
                    poster={project.poster().map(media_url)}
                    loop=true
                    muted=true
                    playsinline=true
                    preload="metadata"
                />
            },
            MediaKind::Image => html! {
                <img class="project-image" src={media_url(project.media.src)} alt={project.title} />
            },
        };
        html! {
            <div key={index} class="project-card" {onclick}>
                { media }
                <div class="project-card-content">
                    <h2 class="project-title">{ project.title }</h2>
                    <p class="project-description">{ project.description }</p>
                    { tags(project) }
                </div>
            </div>
        }
    });

    html! {
        <div class="projects-container">
            <div class="project-scroller">{ for cards }</div>
        </div>
    }
}

/// Featured projects: an accordion on desktop, a swipeable row on mobile
/// whose videos only play while mostly on screen.
#[function_component(ProjectsShowcase)]
pub fn projects_showcase(props: &ProjectsProps) -> Html {
    {
        let video_ids: Vec<String> = props
            .projects
            .iter()
            .enumerate()
            .filter(|(_, p)| p.media.kind == MediaKind::Video)
            .map(|(i, _)| video_element_id(i))
            .collect();
        use_effect_with_deps(
            move |(is_mobile, video_ids): &(bool, Vec<String>)| {
                let mut notifier = None;
                if *is_mobile && !video_ids.is_empty() {
                    let options = WatchOptions {
                        root_selector: Some(SCROLLER_SELECTOR.to_string()),
                        threshold: VIDEO_THRESHOLD,
                    };
                    let watched = WebVisibilityNotifier::new().and_then(|mut n| {
                        let stream = n.watch(video_ids, &options)?;
                        Ok((n, stream))
                    });
                    match watched {
                        Ok((n, mut stream)) => {
                            let n = Rc::new(n);
                            let weak = Rc::downgrade(&n);
                            spawn_local(async move {
                                let mut tracker = PlaybackTracker::default();
                                while let Some(batch) = stream.next().await {
                                    if weak.upgrade().is_none() {
                                        break;
                                    }
                                    for (id, play) in tracker.apply(&batch) {
                                        set_video_playing(&id, play, false);
                                    }
                                }
                            });
                            notifier = Some(n);
                        }
                        Err(e) => log::warn!("Project videos will not autoplay: {}", e),
                    }
                }
                move || drop(notifier)
            },
            (props.is_mobile, video_ids),
        );
    }

    if props.is_mobile {
        scroller(props)
    } else {
        accordion(props)
    }
}
