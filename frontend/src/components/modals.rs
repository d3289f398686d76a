use yew::prelude::*;

use super::icons::{ChromeIcon, Icon, UiIcon};
use crate::config::media_url;
use crate::content::catalog::CatalogCategory;
use crate::content::features::{DomoticsFeature, ProductExample};
use crate::content::projects::Project;
use crate::content::services::Service;
use crate::content::{Media, MediaKind};
use crate::overlay::Overlay;
use crate::state::AppAction;
use crate::utils::dom::set_video_playing;

fn stop_propagation() -> Callback<MouseEvent> {
    Callback::from(|e: MouseEvent| e.stop_propagation())
}

fn close_button(on_close: Callback<MouseEvent>) -> Html {
    html! {
        <button class="modal-close-button" aria-label="Cerrar" onclick={on_close}>
            <ChromeIcon icon={UiIcon::Close} style="width: 24px; height: 24px;" />
        </button>
    }
}

/// Shared backdrop. Clicking outside `children` closes the overlay.
#[derive(Properties, PartialEq)]
struct ModalFrameProps {
    overlay: Overlay,
    on_action: Callback<AppAction>,
    #[prop_or("modal-content".into())]
    class: AttrValue,
    children: Children,
}

#[function_component(ModalFrame)]
fn modal_frame(props: &ModalFrameProps) -> Html {
    let overlay = props.overlay;
    let on_close = props.on_action.reform(move |_: MouseEvent| AppAction::Close(overlay));
    html! {
        <div class="modal-overlay" onclick={on_close.clone()}>
            <div class={props.class.to_string()} role="dialog" aria-modal="true" onclick={stop_propagation()}>
                { close_button(on_close) }
                { for props.children.iter() }
            </div>
        </div>
    }
}

fn media_view(media: &Media, class: &'static str, autoplay: bool) -> Html {
    match media.kind {
        MediaKind::Video => html! {
            <video
                class={class}
                src={media_url(media.src)}
                poster={media.thumbnail.map(media_url)}
                autoplay={autoplay}
                loop=true
                muted=true
                playsinline=true
            />
        },
        MediaKind::Image => html! { <img class={class} src={media_url(media.src)} alt="" /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceModalProps {
    pub service: &'static Service,
    pub on_action: Callback<AppAction>,
}

#[function_component(ServiceModal)]
pub fn service_modal(props: &ServiceModalProps) -> Html {
    let service = props.service;
    html! {
        <ModalFrame overlay={Overlay::Service} on_action={props.on_action.clone()}>
            <div class="modal-icon">
                <Icon kind={service.icon} style="width: 56px; height: 56px;" />
            </div>
            <h2 class="modal-title">{ service.modal_title }</h2>
            <p class="modal-description">{ service.modal_description }</p>
            <ul class="modal-details">
                { for service.modal_details.iter().map(|detail| html! {
                    <li>
                        <ChromeIcon icon={UiIcon::Check} style="width: 20px; height: 20px; color: var(--accent-color);" />
                        <span>{ *detail }</span>
                    </li>
                }) }
            </ul>
        </ModalFrame>
    }
}

#[derive(Properties, PartialEq)]
struct ProductCardProps {
    product: &'static ProductExample,
    video_id: AttrValue,
    is_mobile: bool,
}

/// On desktop the product clip only runs while hovered and restarts on each
/// hover. On mobile it loops.
#[function_component(ProductCard)]
fn product_card(props: &ProductCardProps) -> Html {
    let product = props.product;
    let hover = |play: bool| {
        let id = props.video_id.clone();
        let is_mobile = props.is_mobile;
        Callback::from(move |_: MouseEvent| {
            if !is_mobile {
                set_video_playing(&id, play, !play);
            }
        })
    };

    let media = match product.media.kind {
        MediaKind::Video => html! {
            <video
                id={props.video_id.clone()}
                class="product-card-media"
                src={media_url(product.media.src)}
                poster={product.media.thumbnail.map(media_url)}
                autoplay={props.is_mobile}
                loop=true
                muted=true
                playsinline=true
                preload="metadata"
            />
        },
        MediaKind::Image => media_view(&product.media, "product-card-media", false),
    };

    html! {
        <div class="product-card" onmouseenter={hover(true)} onmouseleave={hover(false)}>
            { media }
            <div class="product-card-info">
                <h4 class="product-card-name">{ product.name }</h4>
                <p class="product-card-description">{ product.description }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureModalProps {
    pub index: usize,
    pub feature: &'static DomoticsFeature,
    pub is_mobile: bool,
    pub on_action: Callback<AppAction>,
}

#[function_component(FeatureModal)]
pub fn feature_modal(props: &FeatureModalProps) -> Html {
    let feature = props.feature;
    html! {
        <ModalFrame
            overlay={Overlay::Feature}
            on_action={props.on_action.clone()}
            class="modal-content feature-modal-content"
        >
            <div class="feature-modal-banner">
                { media_view(&feature.modal_media, "feature-modal-video", true) }
            </div>
            <div class="feature-modal-body" style={format!("--feature-accent: {};", feature.accent)}>
                <h2 class="modal-title">{ feature.modal_title }</h2>
                <p class="modal-description">{ feature.modal_description }</p>
                <div class="product-grid">
                    { for feature.products.iter().enumerate().map(|(i, product)| html! {
                        <ProductCard
                            key={i}
                            {product}
                            video_id={format!("product-video-{}-{}", props.index, i)}
                            is_mobile={props.is_mobile}
                        />
                    }) }
                </div>
            </div>
        </ModalFrame>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectModalProps {
    pub project: &'static Project,
    pub gallery_index: usize,
    pub on_action: Callback<AppAction>,
}

#[function_component(ProjectModal)]
pub fn project_modal(props: &ProjectModalProps) -> Html {
    let project = props.project;
    let gallery = project.gallery;
    let current = gallery.get(props.gallery_index).or_else(|| gallery.first());

    let step = |forward: bool| {
        props.on_action.reform(move |e: MouseEvent| {
            e.stop_propagation();
            AppAction::GalleryStep { forward }
        })
    };

    let cover = project.poster().unwrap_or(project.media.src);

    html! {
        <ModalFrame
            overlay={Overlay::Project}
            on_action={props.on_action.clone()}
            class="modal-content project-modal-content"
        >
            <img class="project-modal-cover" src={media_url(cover)} alt={project.title} />
            <div class="project-modal-body">
                <h1 class="modal-title">{ project.title }</h1>
                { for project.chapters.iter().map(|chapter| html! {
                    <section class="project-chapter">
                        <h2>{ chapter.heading }</h2>
                        { for chapter.paragraphs.iter().map(|p| html! { <p>{ *p }</p> }) }
                    </section>
                }) }

                if let Some(media) = current {
                    <div class="project-gallery">
                        <div class="project-gallery-main">
                            { media_view(media, "project-gallery-media", true) }
                            if gallery.len() > 1 {
                                <button class="gallery-nav prev" aria-label="Anterior" onclick={step(false)}>{"‹"}</button>
                                <button class="gallery-nav next" aria-label="Siguiente" onclick={step(true)}>{"›"}</button>
                            }
                        </div>
                        <div class="project-gallery-thumbnails">
                            { for gallery.iter().enumerate().map(|(i, item)| {
                                let selected = i == props.gallery_index;
                                let onclick = props.on_action.reform(move |_: MouseEvent| AppAction::ShowGalleryItem(i));
                                let thumb = item.thumbnail.unwrap_or(item.src);
                                html! {
                                    <button
                                        key={i}
                                        class={classes!("gallery-thumb", selected.then_some("active"))}
                                        aria-label={format!("Elemento {}", i + 1)}
                                        {onclick}
                                    >
                                        <img src={media_url(thumb)} alt="" />
                                    </button>
                                }
                            }) }
                        </div>
                    </div>
                }
            </div>
        </ModalFrame>
    }
}

#[derive(Properties, PartialEq)]
pub struct CatalogModalProps {
    pub categories: &'static [CatalogCategory],
    pub selected: Option<usize>,
    pub on_action: Callback<AppAction>,
}

#[function_component(CatalogModal)]
pub fn catalog_modal(props: &CatalogModalProps) -> Html {
    let body = match props.selected.and_then(|i| props.categories.get(i)) {
        Some(category) => {
            let back = props.on_action.reform(|_: MouseEvent| AppAction::SelectCatalogCategory(None));
            html! {
                <>
                    <button class="catalog-back-button" onclick={back}>{"← Volver a categorías"}</button>
                    <h2 class="modal-title">{ category.name }</h2>
                    <div class="catalog-product-grid">
                        { for category.products.iter().map(|product| html! {
                            <div key={product.name} class="catalog-product-card">
                                <h4>{ product.name }</h4>
                                <p>{ product.description }</p>
                            </div>
                        }) }
                    </div>
                </>
            }
        }
        None => html! {
            <>
                <h2 class="modal-title">{"Catálogo de Productos"}</h2>
                <div class="catalog-category-grid">
                    { for props.categories.iter().enumerate().map(|(i, category)| {
                        let onclick = props
                            .on_action
                            .reform(move |_: MouseEvent| AppAction::SelectCatalogCategory(Some(i)));
                        html! {
                            <div key={i} class="catalog-category-card" {onclick}>
                                <Icon kind={category.icon} style="width: 36px; height: 36px;" />
                                <span>{ category.name }</span>
                                <small>{ format!("{} productos", category.products.len()) }</small>
                            </div>
                        }
                    }) }
                </div>
            </>
        },
    };

    html! {
        <ModalFrame
            overlay={Overlay::Catalog}
            on_action={props.on_action.clone()}
            class="modal-content catalog-modal-content"
        >
            { body }
        </ModalFrame>
    }
}
