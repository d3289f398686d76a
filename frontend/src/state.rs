use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::content::{catalog::CATALOG, features::FEATURES, services::SERVICES, PageVariant, CATALOGO};
use crate::overlay::{Overlay, OverlayState};
use crate::proposal::estimator::validate_area;
use crate::proposal::message::quote_request_message;
use crate::proposal::{PropertyType, ProposalConfiguration};
use crate::theme::Theme;
use crate::visibility::{ActiveSectionTracker, VisibilityEvent};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Everything the landing page renders from, owned by the root component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub variant: PageVariant,
    pub theme: Theme,
    pub sections: ActiveSectionTracker,
    pub services_visible: bool,
    pub overlays: OverlayState,
    pub proposal: ProposalConfiguration,
    pub contact: ContactForm,
    pub is_mobile: bool,
    pub active_project: usize,
    pub hovered_service: Option<usize>,
    pub hovered_stat: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SectionsObserved(Vec<VisibilityEvent>),
    ServicesRevealed,
    KeyPressed(String),
    ViewportChanged { mobile: bool },
    ToggleTheme,
    OpenMenu,
    OpenService(usize),
    OpenFeature(usize),
    OpenProject(usize),
    OpenCatalog,
    SelectCatalogCategory(Option<usize>),
    Close(Overlay),
    GalleryStep { forward: bool },
    ShowGalleryItem(usize),
    SetPropertyType(PropertyType),
    SetArea(u32),
    ToggleSystem(String),
    RequestQuote,
    SetContactName(String),
    SetContactEmail(String),
    SetContactMessage(String),
    HoverProject(usize),
    HoverService(Option<usize>),
    HoverStat(Option<String>),
}

impl AppState {
    pub fn new(variant: PageVariant, is_mobile: bool) -> Self {
        Self {
            variant,
            theme: variant.default_theme(),
            sections: ActiveSectionTracker::new(variant.section_ids()),
            services_visible: false,
            overlays: OverlayState::default(),
            proposal: ProposalConfiguration::default(),
            contact: ContactForm::default(),
            is_mobile,
            active_project: 0,
            hovered_service: None,
            hovered_stat: None,
        }
    }

    /// Length of the open project's gallery, 0 when no project is open.
    pub fn open_gallery_len(&self) -> usize {
        self.overlays
            .project
            .and_then(|i| self.variant.projects().get(i))
            .map(|p| p.gallery.len())
            .unwrap_or(0)
    }

    /// Applies `action` in place. Returns false when nothing changed.
    pub fn apply(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::SectionsObserved(batch) => self.sections.apply(&batch),
            AppAction::ServicesRevealed => !std::mem::replace(&mut self.services_visible, true),
            AppAction::KeyPressed(key) => {
                let gallery_len = self.open_gallery_len();
                self.overlays.handle_key(&key, gallery_len)
            }
            AppAction::ViewportChanged { mobile } => {
                let before = (self.is_mobile, self.overlays.menu_open);
                self.is_mobile = mobile;
                if !mobile {
                    self.overlays.close(Overlay::MobileMenu);
                }
                before != (self.is_mobile, self.overlays.menu_open)
            }
            AppAction::ToggleTheme => {
                self.theme = self.theme.toggled();
                true
            }
            AppAction::OpenMenu => {
                if !self.is_mobile {
                    return false;
                }
                !std::mem::replace(&mut self.overlays.menu_open, true)
            }
            AppAction::OpenService(index) => {
                open_index(&mut self.overlays.service, index, SERVICES.len())
            }
            AppAction::OpenFeature(index) => {
                open_index(&mut self.overlays.feature, index, FEATURES.len())
            }
            AppAction::OpenProject(index) => {
                if index >= self.variant.projects().len() {
                    log::warn!("No project at index {}", index);
                    return false;
                }
                self.overlays.open_project(index);
                true
            }
            AppAction::OpenCatalog => {
                if !self.variant.has_section(CATALOGO.id) {
                    return false;
                }
                self.overlays.catalog_open = true;
                self.overlays.catalog_category = None;
                true
            }
            AppAction::SelectCatalogCategory(category) => {
                if !self.overlays.catalog_open {
                    return false;
                }
                match category {
                    Some(index) if index >= CATALOG.len() => false,
                    _ => {
                        self.overlays.catalog_category = category;
                        true
                    }
                }
            }
            AppAction::Close(overlay) => {
                if self.overlays.topmost().is_none() {
                    return false;
                }
                let before = self.overlays.clone();
                self.overlays.close(overlay);
                before != self.overlays
            }
            AppAction::GalleryStep { forward } => {
                let gallery_len = self.open_gallery_len();
                self.overlays.step_gallery(forward, gallery_len)
            }
            AppAction::ShowGalleryItem(index) => {
                if index >= self.open_gallery_len() {
                    return false;
                }
                self.overlays.gallery_index = index;
                true
            }
            AppAction::SetPropertyType(property_type) => {
                self.proposal.set_property_type(property_type);
                true
            }
            AppAction::SetArea(area) => match validate_area(area) {
                Ok(area) => {
                    self.proposal.set_area(area);
                    true
                }
                Err(e) => {
                    log::warn!("Ignoring area: {}", e);
                    false
                }
            },
            AppAction::ToggleSystem(name) => {
                self.proposal.toggle_system(&name);
                true
            }
            AppAction::RequestQuote => {
                self.contact.message = quote_request_message(&self.proposal);
                true
            }
            AppAction::SetContactName(name) => {
                self.contact.name = name;
                true
            }
            AppAction::SetContactEmail(email) => {
                self.contact.email = email;
                true
            }
            AppAction::SetContactMessage(message) => {
                self.contact.message = message;
                true
            }
            AppAction::HoverProject(index) => {
                if index >= self.variant.projects().len() || index == self.active_project {
                    return false;
                }
                self.active_project = index;
                true
            }
            AppAction::HoverService(index) => {
                std::mem::replace(&mut self.hovered_service, index) != self.hovered_service
            }
            AppAction::HoverStat(key) => {
                std::mem::replace(&mut self.hovered_stat, key) != self.hovered_stat
            }
        }
    }

    fn snapshot(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!("<unserializable state: {}>", e))
    }
}

fn open_index(slot: &mut Option<usize>, index: usize, len: usize) -> bool {
    if index >= len {
        log::warn!("Index {} out of range ({} items)", index, len);
        return false;
    }
    slot.replace(index) != Some(index)
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        log::debug!("{:?}", action);
        let mut next = (*self).clone();
        if !next.apply(action) {
            return self;
        }
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("state: {}", next.snapshot());
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{INICIO, NOSOTROS};
    use crate::visibility::fake::visible;

    fn night() -> AppState {
        AppState::new(PageVariant::Nocturna, false)
    }

    #[test]
    fn starts_on_the_first_section_with_the_variant_theme() {
        let state = AppState::new(PageVariant::Diurna, true);
        assert_eq!(state.sections.active(), INICIO.id);
        assert_eq!(state.theme, Theme::Day);
        assert!(!state.services_visible);
        assert_eq!(state.proposal, ProposalConfiguration::default());
    }

    #[test]
    fn observed_sections_move_the_highlight() {
        let mut state = night();
        assert!(state.apply(AppAction::SectionsObserved(vec![visible(NOSOTROS.id, 0.8, 10.0)])));
        assert_eq!(state.sections.active(), NOSOTROS.id);
        assert!(!state.apply(AppAction::SectionsObserved(vec![visible("Unknown", 1.0, 0.0)])));
        assert_eq!(state.sections.active(), NOSOTROS.id);
    }

    #[test]
    fn services_reveal_only_once() {
        let mut state = night();
        assert!(state.apply(AppAction::ServicesRevealed));
        assert!(!state.apply(AppAction::ServicesRevealed));
        assert!(state.services_visible);
    }

    #[test]
    fn growing_to_desktop_closes_the_menu() {
        let mut state = AppState::new(PageVariant::Nocturna, true);
        assert!(state.apply(AppAction::OpenMenu));
        assert!(state.overlays.menu_open);
        assert!(state.apply(AppAction::ViewportChanged { mobile: false }));
        assert!(!state.overlays.menu_open);
        assert!(!state.apply(AppAction::OpenMenu));
    }

    #[test]
    fn escape_and_arrows_use_the_open_gallery() {
        let mut state = night();
        // Escobar is the only project with more than one gallery item.
        assert!(state.apply(AppAction::OpenProject(3)));
        assert_eq!(state.open_gallery_len(), 2);
        assert!(state.apply(AppAction::KeyPressed("ArrowLeft".into())));
        assert_eq!(state.overlays.gallery_index, 1);
        assert!(state.apply(AppAction::KeyPressed("ArrowRight".into())));
        assert_eq!(state.overlays.gallery_index, 0);

        assert!(state.apply(AppAction::OpenProject(0)));
        assert!(!state.apply(AppAction::KeyPressed("ArrowRight".into())));

        assert!(state.apply(AppAction::KeyPressed("Escape".into())));
        assert_eq!(state.overlays.project, None);
        assert!(!state.apply(AppAction::KeyPressed("Escape".into())));
    }

    #[test]
    fn essential_variant_refuses_projects_and_catalog() {
        let mut state = AppState::new(PageVariant::Esencial, false);
        assert!(!state.apply(AppAction::OpenProject(0)));
        assert!(!state.apply(AppAction::OpenCatalog));
        assert_eq!(state.overlays, OverlayState::default());
    }

    #[test]
    fn catalog_category_needs_an_open_catalog() {
        let mut state = night();
        assert!(!state.apply(AppAction::SelectCatalogCategory(Some(0))));
        assert!(state.apply(AppAction::OpenCatalog));
        assert!(state.apply(AppAction::SelectCatalogCategory(Some(4))));
        assert!(!state.apply(AppAction::SelectCatalogCategory(Some(CATALOG.len()))));
        assert!(state.apply(AppAction::SelectCatalogCategory(None)));
        assert!(state.overlays.catalog_open);
        assert!(state.apply(AppAction::Close(Overlay::Catalog)));
        assert!(!state.overlays.catalog_open);
    }

    #[test]
    fn out_of_range_modals_are_ignored() {
        let mut state = night();
        assert!(!state.apply(AppAction::OpenService(SERVICES.len())));
        assert!(!state.apply(AppAction::OpenFeature(FEATURES.len())));
        assert!(state.apply(AppAction::OpenFeature(0)));
        assert!(!state.apply(AppAction::OpenFeature(0)));
    }

    #[test]
    fn rejected_area_leaves_the_proposal_alone() {
        let mut state = night();
        assert!(!state.apply(AppAction::SetArea(35)));
        assert!(!state.apply(AppAction::SetArea(105)));
        assert_eq!(state.proposal.area_square_meters(), 100);
        assert!(state.apply(AppAction::SetArea(500)));
        assert_eq!(state.proposal.area_square_meters(), 500);
    }

    #[test]
    fn request_quote_prefills_the_contact_message() {
        let mut state = night();
        state.apply(AppAction::SetPropertyType(PropertyType::House));
        state.apply(AppAction::ToggleSystem("Seguridad".into()));
        state.apply(AppAction::SetContactMessage("hola".into()));
        assert!(state.apply(AppAction::RequestQuote));
        assert_eq!(state.contact.message, quote_request_message(&state.proposal));
        assert!(state.contact.message.contains("- Tipo: Casa"));
        assert!(state.contact.message.contains("Sistemas de interés: Seguridad."));
    }

    #[test]
    fn hover_changes_are_reported_once() {
        let mut state = night();
        assert!(state.apply(AppAction::HoverStat(Some("devices".into()))));
        assert!(!state.apply(AppAction::HoverStat(Some("devices".into()))));
        assert!(state.apply(AppAction::HoverStat(None)));
        assert!(state.apply(AppAction::HoverService(Some(2))));
        assert!(!state.apply(AppAction::HoverProject(0)));
        assert!(state.apply(AppAction::HoverProject(2)));
        assert!(!state.apply(AppAction::HoverProject(9)));
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let state = Rc::new(night());
        let next = state.clone().reduce(AppAction::ServicesRevealed);
        assert!(!Rc::ptr_eq(&state, &next));
        let same = next.clone().reduce(AppAction::ServicesRevealed);
        assert!(Rc::ptr_eq(&next, &same));
    }

    #[test]
    fn snapshot_is_json() {
        let state = night();
        let json: serde_json::Value = serde_json::from_str(&state.snapshot()).unwrap();
        assert_eq!(json["services_visible"], false);
        assert_eq!(json["variant"], "Nocturna");
    }
}
