use std::cell::RefCell;
use std::rc::Rc;

use futures::StreamExt;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::components::animated_text::AnimatedText;
use crate::components::background::Background;
use crate::components::configurator::Configurator;
use crate::components::contact::Contact;
use crate::components::header::Header;
use crate::components::icons::Icon;
use crate::components::modals::{CatalogModal, FeatureModal, ProjectModal, ServiceModal};
use crate::components::projects::ProjectsShowcase;
use crate::content::catalog::CATALOG;
use crate::content::features::FEATURES;
use crate::content::services::{entrance_delay, SERVICES};
use crate::content::{
    IconKind, PageVariant, SectionCopy, CATALOGO, CATALOG_COPY, CONTACTANOS, CONTACT_COPY, CONTROL,
    EXCLUSIVE_FEATURES, EXCLUSIVITY, HERO, INICIO, NOSOTROS, PHILOSOPHY, PROJECTS_COPY, PROPOSAL_COPY,
    PROPUESTAS, PROYECTOS, SERVICES_COPY, SERVICIOS, STATS,
};
use crate::state::{AppAction, AppState};
use crate::utils::dom::{is_mobile_viewport, scroll_to_section};
use crate::visibility::{
    RevealWatcher, VisibilityNotifier, WatchOptions, WebVisibilityNotifier, SECTION_THRESHOLD,
    SERVICES_THRESHOLD,
};

/// Quiet period before a resize is acted on, in milliseconds.
const RESIZE_DEBOUNCE_MS: u32 = 150;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub variant: PageVariant,
}

fn section_head(copy: &SectionCopy, hero: bool) -> Html {
    let title_class = if hero { "hero-title" } else { "section-title" };
    html! {
        <>
            if !copy.eyebrow.is_empty() {
                <AnimatedText
                    tag="h2"
                    text={copy.eyebrow}
                    style={if hero { "padding-bottom: 10px; border-bottom: 2px solid var(--text-main); margin-bottom: 10px;" } else { "" }}
                />
            }
            <div class={title_class}>
                <AnimatedText tag="h1" text={copy.title} />
            </div>
            if let Some(body) = copy.body {
                <div class="section-description">
                    <AnimatedText text={body} />
                </div>
            }
        </>
    }
}

fn stats(state: &AppState, on_action: &Callback<AppAction>) -> Html {
    let hovered = state.hovered_stat.as_deref();
    let items = STATS.iter().enumerate().map(|(i, stat)| {
        let (scale, opacity) = match hovered {
            Some(key) if key == stat.key => ("1.05", "1"),
            Some(_) => ("0.95", "0.7"),
            None => ("1", "1"),
        };
        let onmouseenter = on_action.reform(move |_: MouseEvent| AppAction::HoverStat(Some(stat.key.to_string())));
        let onmouseleave = on_action.reform(|_: MouseEvent| AppAction::HoverStat(None));
        html! {
            <>
                if i > 0 {
                    <div class="stat-separator" />
                }
                <div
                    class="stat-item"
                    style={format!("transform: scale({}); opacity: {};", scale, opacity)}
                    {onmouseenter}
                    {onmouseleave}
                >
                    <p class="stat-label">{ stat.label }</p>
                    <p class="stat-value">{ stat.value }</p>
                </div>
            </>
        }
    });
    html! { <div class="combined-stat-card">{ for items }</div> }
}

fn feature_grid(on_action: &Callback<AppAction>) -> Html {
    let cards = FEATURES.iter().enumerate().map(|(i, feature)| {
        let onclick = on_action.reform(move |_: MouseEvent| AppAction::OpenFeature(i));
        html! {
            <div key={i} class="feature-card" style={format!("--glow: {};", feature.glow)} {onclick}>
                <div
                    class="glow-icon"
                    style={format!("background: radial-gradient(circle, {} 0%, transparent 70%); color: {};", feature.glow, feature.accent)}
                >
                    <Icon kind={feature.icon} style="width: 40px; height: 40px;" />
                </div>
                <h2 class="feature-card-title">{ feature.title }</h2>
            </div>
        }
    });
    html! { <div class="feature-grid">{ for cards }</div> }
}

fn service_cards(state: &AppState, on_action: &Callback<AppAction>) -> Html {
    let cards = SERVICES.iter().enumerate().map(|(i, service)| {
        let hovered = state.hovered_service == Some(i);
        let (opacity, transform) = match (state.services_visible, hovered) {
            (false, _) => (0, "translateY(20px)"),
            (true, true) => (1, "translateY(-8px)"),
            (true, false) => (1, "translateY(0)"),
        };
        let style = format!(
            "background-color: {}; opacity: {}; transform: {}; \
             transition: opacity 0.6s ease-out {:.1}s, transform 0.3s ease-out, background-color 0.3s ease-out;",
            if hovered { "var(--card-bg-hover)" } else { "var(--card-bg)" },
            opacity,
            transform,
            entrance_delay(i),
        );
        let onclick = on_action.reform(move |_: MouseEvent| AppAction::OpenService(i));
        let onmouseenter = on_action.reform(move |_: MouseEvent| AppAction::HoverService(Some(i)));
        let onmouseleave = on_action.reform(|_: MouseEvent| AppAction::HoverService(None));
        html! {
            <div key={i} class="service-card" {style} {onclick} {onmouseenter} {onmouseleave}>
                <Icon kind={service.icon} style="width: 40px; height: 40px; color: var(--accent-color);" />
                <h2 class="service-title">{ service.title }</h2>
                <p class="service-description">{ service.description }</p>
            </div>
        }
    });
    html! { <div class="service-grid">{ for cards }</div> }
}

fn exclusivity(is_mobile: bool) -> Html {
    html! {
        <div class="domotics-section-wrapper">
            <div class={classes!("security-section", is_mobile.then_some("stacked"))}>
                <div class="security-illustration">
                    <Icon kind={IconKind::Hub} style="width: 160px; height: 160px; color: var(--accent-color);" />
                </div>
                <div class="security-text">
                    { section_head(&EXCLUSIVITY, false) }
                    <ul class="security-feature-list">
                        { for EXCLUSIVE_FEATURES.iter().map(|(icon, text)| html! {
                            <li class="security-feature-item">
                                <span class="security-feature-icon">
                                    <Icon kind={*icon} style="width: 24px; height: 24px;" />
                                </span>
                                <span>{ *text }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}

/// The whole one-page site for one variant.
#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let variant = props.variant;
    let state = use_reducer(move || AppState::new(variant, is_mobile_viewport()));
    let on_action = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: AppAction| dispatcher.dispatch(action))
    };

    // Viewport size, debounced
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                    let callback = Closure::<dyn Fn()>::new({
                        let pending = pending.clone();
                        move || {
                            let dispatcher = dispatcher.clone();
                            // Replacing the timeout cancels the previous one.
                            *pending.borrow_mut() = Some(Timeout::new(RESIZE_DEBOUNCE_MS, move || {
                                dispatcher.dispatch(AppAction::ViewportChanged {
                                    mobile: is_mobile_viewport(),
                                });
                            }));
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
                    {
                        log::error!("Failed to listen for resize: {:?}", e);
                    }
                    Box::new(move || {
                        pending.borrow_mut().take();
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "resize",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    // Escape and gallery arrows
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                        dispatcher.dispatch(AppAction::KeyPressed(e.key()));
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                    {
                        log::error!("Failed to listen for keys: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    // Active section for the header highlight
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |variant: &PageVariant| {
                let ids = variant.section_ids();
                let watched = WebVisibilityNotifier::new().and_then(|mut notifier| {
                    let stream = notifier.watch(&ids, &WatchOptions::in_scroll_root(SECTION_THRESHOLD))?;
                    Ok((notifier, stream))
                });
                let notifier = match watched {
                    Ok((notifier, mut stream)) => {
                        let notifier = Rc::new(notifier);
                        let weak = Rc::downgrade(&notifier);
                        spawn_local(async move {
                            while let Some(batch) = stream.next().await {
                                if weak.upgrade().is_none() {
                                    break;
                                }
                                dispatcher.dispatch(AppAction::SectionsObserved(batch));
                            }
                        });
                        Some(notifier)
                    }
                    Err(e) => {
                        log::warn!("Section tracking disabled: {}", e);
                        None
                    }
                };
                move || drop(notifier)
            },
            variant,
        );
    }

    // Service cards slide in once
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let ids = vec![SERVICIOS.id.to_string()];
                let (watcher, stream) = RevealWatcher::start(
                    WebVisibilityNotifier::new(),
                    &ids,
                    &WatchOptions::in_scroll_root(SERVICES_THRESHOLD),
                );
                if watcher.all_revealed() {
                    dispatcher.dispatch(AppAction::ServicesRevealed);
                }
                let watcher = Rc::new(RefCell::new(watcher));
                if let Some(mut stream) = stream {
                    let weak = Rc::downgrade(&watcher);
                    spawn_local(async move {
                        while let Some(batch) = stream.next().await {
                            let Some(watcher) = weak.upgrade() else {
                                break;
                            };
                            if !watcher.borrow_mut().handle_batch(&batch).is_empty() {
                                dispatcher.dispatch(AppAction::ServicesRevealed);
                            }
                        }
                    });
                }
                move || drop(watcher)
            },
            (),
        );
    }

    let is_mobile = state.is_mobile;
    let go_to_contact = Callback::from(|_: MouseEvent| scroll_to_section(CONTACTANOS.id));
    let on_navigate = Callback::from(|id: &'static str| scroll_to_section(id));
    let on_request_quote = {
        let on_action = on_action.clone();
        Callback::from(move |_: ()| {
            on_action.emit(AppAction::RequestQuote);
            scroll_to_section(CONTACTANOS.id);
        })
    };
    let open_catalog = on_action.reform(|_: MouseEvent| AppAction::OpenCatalog);

    let overlays = &state.overlays;
    let modals = html! {
        <>
            if let Some(service) = overlays.service.and_then(|i| SERVICES.get(i)) {
                <ServiceModal {service} on_action={on_action.clone()} />
            }
            if let Some((index, feature)) = overlays.feature.and_then(|i| FEATURES.get(i).map(|f| (i, f))) {
                <FeatureModal {index} {feature} {is_mobile} on_action={on_action.clone()} />
            }
            if let Some(project) = overlays.project.and_then(|i| variant.projects().get(i)) {
                <ProjectModal {project} gallery_index={overlays.gallery_index} on_action={on_action.clone()} />
            }
            if overlays.catalog_open {
                <CatalogModal
                    categories={&CATALOG[..]}
                    selected={overlays.catalog_category}
                    on_action={on_action.clone()}
                />
            }
        </>
    };

    html! {
        <main
            class={classes!("landing", is_mobile.then_some("mobile"))}
            style={state.theme.css_variables()}
        >
            <style>{ LANDING_CSS }</style>
            <Background />

            <section class="glass-card">
                <Header
                    sections={variant.sections()}
                    active={state.sections.active().to_string()}
                    theme={state.theme}
                    {is_mobile}
                    menu_open={overlays.menu_open}
                    on_action={on_action.clone()}
                    {on_navigate}
                />

                <div class="scrollable-card">
                    <div class="content-container">
                        <div id={INICIO.id} class="section">
                            { section_head(&HERO, true) }
                            <button class="cta-button" onclick={go_to_contact}>{"CONOCE MÁS"}</button>
                        </div>

                        { stats(&state, &on_action) }

                        <div id={NOSOTROS.id} class="section">
                            { section_head(&PHILOSOPHY, false) }
                        </div>

                        { exclusivity(is_mobile) }

                        <div id={SERVICIOS.id} class="domotics-section-wrapper">
                            { section_head(&CONTROL, false) }
                            { feature_grid(&on_action) }
                        </div>

                        <div class="section">
                            { section_head(&SERVICES_COPY, false) }
                            { service_cards(&state, &on_action) }
                        </div>

                        if variant.has_section(PROYECTOS.id) {
                            <div id={PROYECTOS.id} class="section">
                                { section_head(&PROJECTS_COPY, false) }
                                <ProjectsShowcase
                                    projects={variant.projects()}
                                    {is_mobile}
                                    active={state.active_project}
                                    on_action={on_action.clone()}
                                />
                            </div>
                        }

                        if variant.has_section(CATALOGO.id) {
                            <div id={CATALOGO.id} class="section">
                                { section_head(&CATALOG_COPY, false) }
                                <button class="cta-button" onclick={open_catalog}>{"VER CATÁLOGO"}</button>
                            </div>
                        }

                        <div id={PROPUESTAS.id} class="section">
                            { section_head(&PROPOSAL_COPY, false) }
                            <Configurator
                                config={state.proposal.clone()}
                                {is_mobile}
                                on_action={on_action.clone()}
                                {on_request_quote}
                            />
                        </div>

                        <div id={CONTACTANOS.id} class="section last">
                            { section_head(&CONTACT_COPY, false) }
                            <Contact
                                mode={variant.contact_mode()}
                                form={state.contact.clone()}
                                on_action={on_action.clone()}
                            />
                        </div>
                    </div>
                </div>
            </section>

            { modals }
        </main>
    }
}

const LANDING_CSS: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Poppins:wght@300;400;600;700&display=swap');
    * { box-sizing: border-box; margin: 0; padding: 0; }
    html, body { height: 100%; overflow: hidden; font-family: 'Poppins', sans-serif; }
    .landing {
        position: relative;
        width: 100vw;
        height: 100vh;
        display: flex;
        justify-content: center;
        align-items: center;
        padding: 2rem;
        background: var(--page-bg);
        color: var(--text-main);
        transition: background 0.5s ease;
    }
    .landing.mobile { padding: 0; }

    .background { position: absolute; inset: 0; overflow: hidden; z-index: 0; }
    .sphere {
        position: absolute;
        border-radius: 50%;
        background: radial-gradient(circle, var(--sphere-color) 0%, transparent 70%);
        filter: blur(40px);
        animation-name: drift;
        animation-iteration-count: infinite;
        animation-timing-function: ease-in-out;
        animation-direction: alternate;
    }
    @keyframes drift {
        0% { transform: translate(0, 0); }
        50% { transform: translate(var(--x-1), var(--y-1)); }
        100% { transform: translate(var(--x-2), var(--y-2)); }
    }

    .glass-card {
        width: 100%;
        max-height: 90vh;
        background: var(--glass-bg);
        backdrop-filter: blur(20px);
        -webkit-backdrop-filter: blur(20px);
        border: 1px solid var(--glass-border);
        border-radius: 24px;
        box-shadow: 0 8px 32px 0 rgba(0, 0, 0, 0.37);
        z-index: 1;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        position: relative;
        transition: background 0.5s ease, border 0.5s ease, color 0.5s ease;
    }
    .landing.mobile .glass-card { border-radius: 0; height: 100%; max-height: 100vh; border: none; }

    .site-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        width: 100%;
        padding: 30px 40px;
        z-index: 100;
        background: var(--header-bg);
        backdrop-filter: blur(15px);
        flex-shrink: 0;
    }
    .site-header.mobile { padding: 20px; }
    .logo { font-weight: 700; font-size: 1.5rem; letter-spacing: 1px; text-transform: lowercase; }
    .site-header.mobile .logo { font-size: 1.2rem; }
    .header-controls { display: flex; align-items: center; gap: 30px; }
    .nav { display: flex; gap: 30px; }
    .nav-link, .mobile-nav-link {
        text-decoration: none;
        color: var(--text-main);
        font-size: 0.8rem;
        letter-spacing: 1px;
        text-transform: uppercase;
        transition: opacity 0.3s ease;
    }
    .nav-link:hover { opacity: 0.7; }
    .nav-link.active { text-decoration: underline; text-underline-offset: 5px; }
    .theme-toggle, .menu-button {
        background: transparent;
        border: none;
        color: var(--text-main);
        cursor: pointer;
        padding: 5px;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .mobile-menu-overlay {
        position: absolute;
        inset: 0;
        background: rgba(0, 0, 0, 0.3);
        backdrop-filter: blur(4px);
        z-index: 199;
    }
    .mobile-menu-container {
        position: absolute;
        top: 80px;
        left: 15px;
        right: 15px;
        background: var(--header-bg);
        backdrop-filter: blur(20px);
        z-index: 200;
        display: flex;
        flex-direction: column;
        border-radius: 16px;
        border: 1px solid var(--glass-border);
        box-shadow: 0 8px 32px 0 rgba(0, 0, 0, 0.3);
    }
    .mobile-menu-header { display: flex; justify-content: flex-end; padding: 15px 20px; }
    .mobile-nav { display: flex; flex-direction: column; align-items: center; gap: 30px; padding: 15px 20px 20px; }

    .scrollable-card { flex: 1; min-height: 0; width: 100%; overflow-y: auto; scroll-behavior: smooth; }
    .content-container { padding: 0 40px 40px 40px; }
    .landing.mobile .content-container { padding: 0 20px 20px 20px; }
    .section {
        padding: 60px 20px;
        min-height: 400px;
        display: flex;
        flex-direction: column;
        justify-content: center;
        align-items: center;
        text-align: center;
        border-bottom: 1px solid var(--glass-border);
    }
    .section.last { border-bottom: none; }
    .landing.mobile .section { padding: 40px 10px; min-height: auto; }
    .section h2 { font-size: 1rem; font-weight: 600; text-transform: uppercase; letter-spacing: 1px; opacity: 0.8; }
    .hero-title h1 { font-size: 3.5rem; font-weight: 700; line-height: 1.2; margin: 10px 0; text-transform: uppercase; }
    .section-title h1 { font-size: 2.5rem; font-weight: 700; line-height: 1.2; margin: 10px 0; text-transform: uppercase; }
    .landing.mobile .hero-title h1 { font-size: 2.5rem; }
    .landing.mobile .section-title h1 { font-size: 2rem; }
    .section-description p {
        font-size: 0.9rem;
        font-weight: 300;
        max-width: 600px;
        color: var(--text-secondary);
        margin: 0 auto 30px;
    }

    .animated-word-wrapper { display: inline-block; overflow: hidden; vertical-align: bottom; margin-right: 0.25em; }
    .animated-word {
        display: inline-block;
        transform: translateY(100%);
        opacity: 0;
        transition: transform 0.5s ease-out, opacity 0.5s ease-out;
    }
    .animated-text-container.visible .animated-word { transform: translateY(0); opacity: 1; }

    .cta-button {
        background: transparent;
        border: 1px solid var(--cta-border);
        color: var(--cta-text);
        padding: 10px 25px;
        border-radius: 8px;
        font-size: 0.8rem;
        font-weight: 600;
        cursor: pointer;
        text-transform: uppercase;
        letter-spacing: 1px;
        display: inline-flex;
        align-items: center;
        justify-content: center;
        gap: 8px;
        transition: background-color 0.3s ease;
    }
    .cta-button:hover { background: var(--card-bg-hover); }
    .cta-accent { background: var(--accent-color); border-color: var(--accent-color); color: #fff; width: 100%; margin-top: 20px; }

    .combined-stat-card {
        display: flex;
        justify-content: space-around;
        align-items: center;
        margin-top: 60px;
        padding: 30px;
        background: var(--card-bg);
        border: 1px solid var(--glass-border);
        border-radius: 16px;
    }
    .stat-item { text-align: center; transition: transform 0.3s ease, opacity 0.3s ease; cursor: default; }
    .stat-label { font-size: 0.8rem; color: var(--text-secondary); text-transform: uppercase; letter-spacing: 1px; }
    .stat-value { font-size: 2.5rem; font-weight: 700; }
    .stat-separator { width: 1px; height: 60px; background: var(--separator-color); }

    .domotics-section-wrapper { padding: 60px 20px; border-bottom: 1px solid var(--glass-border); text-align: center; }
    .security-section { display: grid; grid-template-columns: 1fr 1.5fr; gap: 40px; align-items: center; }
    .security-section.stacked { grid-template-columns: 1fr; }
    .security-illustration { display: flex; justify-content: center; }
    .security-text { text-align: left; }
    .security-feature-list { list-style: none; display: flex; flex-direction: column; gap: 15px; }
    .security-feature-item { display: flex; align-items: center; gap: 12px; color: var(--text-secondary); font-size: 0.9rem; }
    .security-feature-icon { color: var(--accent-color); display: flex; }

    .feature-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 20px;
        margin-top: 30px;
    }
    .feature-card {
        background: var(--card-bg);
        border: 1px solid var(--glass-border);
        border-radius: 16px;
        padding: 30px 20px;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 15px;
        cursor: pointer;
        transition: transform 0.3s ease, box-shadow 0.3s ease;
    }
    .feature-card:hover { transform: translateY(-10px); box-shadow: 0 10px 30px var(--glow); }
    .glow-icon { width: 80px; height: 80px; border-radius: 50%; display: flex; align-items: center; justify-content: center; }
    .feature-card-title { font-size: 1rem; font-weight: 600; }

    .service-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 20px;
        width: 100%;
        max-width: 900px;
        margin-top: 30px;
    }
    .service-card {
        padding: 25px;
        border-radius: 16px;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 10px;
        border: 1px solid var(--glass-border);
        cursor: pointer;
    }
    .service-title { font-size: 1.1rem; font-weight: 600; margin: 10px 0 5px 0; }
    .service-description { font-size: 0.85rem; font-weight: 300; color: var(--text-secondary); line-height: 1.5; }

    .projects-accordion { display: flex; width: 100%; height: 450px; gap: 10px; margin-top: 30px; }
    .project-column {
        position: relative;
        border-radius: 16px;
        overflow: hidden;
        cursor: pointer;
        transition: flex 0.6s ease;
    }
    .project-column-media {
        position: absolute;
        inset: 0;
        width: 100%;
        height: 100%;
        object-fit: cover;
        background-size: cover;
        background-position: center;
        z-index: 0;
    }
    .project-column-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(0, 0, 0, 0.8) 0%, rgba(0, 0, 0, 0.2) 60%);
        z-index: 1;
    }
    .project-column-content {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        padding: 25px;
        z-index: 2;
        color: #fff;
        text-align: left;
        transition: opacity 0.4s ease;
    }
    .project-column-content .project-description { color: rgba(255, 255, 255, 0.8); }
    .project-column-title {
        position: absolute;
        left: 50%;
        top: 50%;
        transform: translateX(-50%) translateY(-50%) rotate(180deg);
        writing-mode: vertical-rl;
        white-space: nowrap;
        color: #fff;
        font-weight: 600;
        letter-spacing: 2px;
        text-transform: uppercase;
        z-index: 2;
        transition: opacity 0.4s ease;
    }
    .projects-container { display: flex; width: 100%; max-width: 900px; margin-top: 20px; }
    .project-scroller {
        display: flex;
        overflow-x: auto;
        scroll-snap-type: x mandatory;
        scroll-behavior: smooth;
        width: 100%;
        gap: 20px;
        padding-bottom: 15px;
        scrollbar-width: none;
    }
    .project-card {
        background: var(--card-bg);
        border-radius: 16px;
        flex: 0 0 90%;
        scroll-snap-align: center;
        text-align: left;
        display: flex;
        flex-direction: column;
        overflow: hidden;
        cursor: pointer;
    }
    .project-image { width: 100%; height: 180px; object-fit: cover; }
    .project-card-content { padding: 20px; display: flex; flex-direction: column; flex-grow: 1; }
    .project-title { font-size: 1rem; font-weight: 600; margin-bottom: 10px; }
    .project-description { font-size: 0.85rem; font-weight: 300; color: var(--text-secondary); margin-bottom: 15px; }
    .project-tags { display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 20px; }
    .project-tag {
        font-size: 0.7rem;
        padding: 4px 10px;
        border-radius: 12px;
        background: rgba(139, 92, 246, 0.2);
        color: var(--text-highlight);
    }
    .project-column-content .project-tag { color: #fff; }

    .proposal-grid { display: grid; gap: 30px; width: 100%; max-width: 1000px; margin-top: 30px; text-align: left; }
    .proposal-config { display: flex; flex-direction: column; gap: 30px; }
    .proposal-section-label { font-size: 0.9rem; font-weight: 600; margin-bottom: 15px; opacity: 1; }
    .proposal-type-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; }
    .proposal-option-card, .proposal-feature-card {
        background: var(--card-bg);
        border: 1px solid var(--glass-border);
        border-radius: 12px;
        padding: 20px 10px;
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 10px;
        cursor: pointer;
        font-size: 0.85rem;
        transition: border-color 0.3s ease, background-color 0.3s ease;
    }
    .proposal-option-card.active, .proposal-feature-card.active {
        border-color: var(--accent-color);
        background: rgba(139, 92, 246, 0.12);
    }
    .proposal-feature-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 12px; }
    .proposal-feature-name { font-size: 0.8rem; }
    .custom-slider-container { display: flex; flex-direction: column; gap: 10px; }
    .slider-scale { display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--text-secondary); }
    .custom-range {
        -webkit-appearance: none;
        width: 100%;
        height: 6px;
        border-radius: 3px;
        background: rgba(255, 255, 255, 0.2);
        outline: none;
    }
    .custom-range::-webkit-slider-thumb {
        -webkit-appearance: none;
        appearance: none;
        width: 20px;
        height: 20px;
        border-radius: 50%;
        background: #8B5CF6;
        cursor: pointer;
        box-shadow: 0 0 10px rgba(139, 92, 246, 0.5);
    }
    .custom-range::-moz-range-thumb {
        width: 20px;
        height: 20px;
        border-radius: 50%;
        background: #8B5CF6;
        cursor: pointer;
        box-shadow: 0 0 10px rgba(139, 92, 246, 0.5);
    }
    .proposal-summary-card {
        background: var(--card-bg);
        border: 1px solid var(--glass-border);
        border-radius: 16px;
        padding: 25px;
        display: flex;
        flex-direction: column;
        gap: 12px;
        height: fit-content;
    }
    .proposal-summary-title { font-size: 1.1rem; font-weight: 600; margin-bottom: 10px; }
    .proposal-summary-item { display: flex; justify-content: space-between; font-size: 0.85rem; color: var(--text-secondary); }
    .proposal-summary-value { color: var(--text-main); font-weight: 600; }
    .complexity-bar { height: 8px; border-radius: 4px; background: var(--separator-color); overflow: hidden; margin-top: 8px; }
    .complexity-bar-fill {
        height: 100%;
        background: linear-gradient(90deg, #10B981, #F59E0B, #EF4444);
        transition: width 0.5s ease;
    }
    .complexity-blurb { font-size: 0.8rem; color: var(--text-secondary); margin-top: 10px; }

    .contact-form { display: flex; flex-direction: column; gap: 15px; width: 100%; max-width: 500px; margin-top: 20px; }
    .form-input, .form-textarea {
        background: var(--input-bg);
        border: 1px solid var(--input-border);
        border-radius: 8px;
        padding: 12px;
        color: var(--text-main);
        font-size: 0.9rem;
        font-family: 'Poppins', sans-serif;
    }
    .form-textarea { min-height: 120px; resize: vertical; }
    .social-icons { display: flex; gap: 25px; margin-top: 30px; }
    .social-icon-link { color: var(--text-main); transition: color 0.3s ease, transform 0.3s ease; }
    .social-icon-link:hover { color: var(--hover-color); transform: translateY(-3px); }

    .modal-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        backdrop-filter: blur(8px);
        z-index: 1000;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 20px;
    }
    .modal-content {
        position: relative;
        background: var(--modal-bg);
        border: 1px solid var(--glass-border);
        border-radius: 20px;
        max-width: 700px;
        width: 100%;
        max-height: 90vh;
        overflow-y: auto;
        padding: 40px;
        color: var(--text-main);
    }
    .feature-modal-content, .project-modal-content { max-width: 1000px; padding: 0; }
    .catalog-modal-content { max-width: 900px; }
    .modal-close-button {
        position: absolute;
        top: 15px;
        right: 15px;
        background: var(--nav-button-bg);
        border: 1px solid var(--nav-button-border);
        color: var(--text-main);
        border-radius: 50%;
        width: 40px;
        height: 40px;
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        z-index: 10;
    }
    .modal-icon { color: var(--accent-color); margin-bottom: 15px; }
    .modal-title { font-size: 1.8rem; font-weight: 700; margin-bottom: 15px; }
    .modal-description { color: var(--text-secondary); line-height: 1.6; margin-bottom: 20px; }
    .modal-details { list-style: none; display: flex; flex-direction: column; gap: 12px; }
    .modal-details li { display: flex; gap: 10px; align-items: flex-start; font-size: 0.9rem; }
    .feature-modal-banner { width: 100%; height: 300px; overflow: hidden; }
    .feature-modal-video { width: 100%; height: 100%; object-fit: cover; }
    .feature-modal-body { padding: 30px 40px 40px; }
    .product-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 20px; }
    .product-card {
        background: var(--card-bg);
        border: 1px solid var(--glass-border);
        border-radius: 12px;
        overflow: hidden;
        transition: border-color 0.3s ease;
    }
    .product-card:hover { border-color: var(--feature-accent); }
    .product-card-media { width: 100%; height: 160px; object-fit: cover; display: block; }
    .product-card-info { padding: 15px; }
    .product-card-name { font-size: 0.95rem; font-weight: 600; margin-bottom: 6px; }
    .product-card-description { font-size: 0.8rem; color: var(--text-secondary); line-height: 1.5; }
    .project-modal-cover { width: 100%; height: 320px; object-fit: cover; display: block; }
    .project-modal-body { padding: 30px 40px 40px; }
    .project-chapter { margin-bottom: 25px; }
    .project-chapter h2 { font-size: 1.2rem; margin-bottom: 10px; }
    .project-chapter p { color: var(--text-secondary); line-height: 1.7; margin-bottom: 10px; }
    .project-gallery-main { position: relative; border-radius: 12px; overflow: hidden; }
    .project-gallery-media { width: 100%; max-height: 480px; object-fit: cover; display: block; }
    .gallery-nav {
        position: absolute;
        top: 50%;
        transform: translateY(-50%);
        background: var(--nav-button-bg);
        border: 1px solid var(--nav-button-border);
        color: var(--text-main);
        border-radius: 50%;
        width: 40px;
        height: 40px;
        font-size: 1.5rem;
        cursor: pointer;
    }
    .gallery-nav.prev { left: 15px; }
    .gallery-nav.next { right: 15px; }
    .project-gallery-thumbnails { display: flex; gap: 10px; margin-top: 12px; overflow-x: auto; }
    .gallery-thumb { border: 2px solid transparent; border-radius: 8px; overflow: hidden; cursor: pointer; padding: 0; background: none; opacity: 0.6; }
    .gallery-thumb.active { border-color: var(--accent-color); opacity: 1; }
    .gallery-thumb img { width: 90px; height: 60px; object-fit: cover; display: block; }
    .catalog-category-grid, .catalog-product-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
        gap: 15px;
    }
    .catalog-category-card, .catalog-product-card {
        background: var(--card-bg);
        border: 1px solid var(--glass-border);
        border-radius: 12px;
        padding: 20px;
        display: flex;
        flex-direction: column;
        gap: 8px;
    }
    .catalog-category-card { align-items: center; text-align: center; cursor: pointer; color: var(--accent-color); }
    .catalog-category-card span { color: var(--text-main); font-weight: 600; }
    .catalog-category-card small { color: var(--text-secondary); }
    .catalog-product-card h4 { font-size: 0.95rem; }
    .catalog-product-card p { font-size: 0.8rem; color: var(--text-secondary); line-height: 1.5; }
    .catalog-back-button {
        background: none;
        border: none;
        color: var(--accent-color);
        cursor: pointer;
        font-size: 0.9rem;
        margin-bottom: 15px;
    }

    @media (max-width: 768px) {
        .modal-content { padding: 30px 20px; }
        .feature-modal-body, .project-modal-body { padding: 20px; }
        .proposal-type-grid { grid-template-columns: 1fr; }
        .combined-stat-card { padding: 20px 10px; }
        .stat-value { font-size: 1.8rem; }
    }
"#;
