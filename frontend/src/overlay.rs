use serde::{Deserialize, Serialize};

/// Overlays in the order `Escape` closes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    Catalog,
    Feature,
    Project,
    Service,
    MobileMenu,
}

/// Which modal, menu or catalog view is open. Indices point into the
/// content of the current page variant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayState {
    pub menu_open: bool,
    pub service: Option<usize>,
    pub feature: Option<usize>,
    pub project: Option<usize>,
    pub gallery_index: usize,
    pub catalog_open: bool,
    pub catalog_category: Option<usize>,
}

impl OverlayState {
    pub fn topmost(&self) -> Option<Overlay> {
        if self.catalog_open {
            Some(Overlay::Catalog)
        } else if self.feature.is_some() {
            Some(Overlay::Feature)
        } else if self.project.is_some() {
            Some(Overlay::Project)
        } else if self.service.is_some() {
            Some(Overlay::Service)
        } else if self.menu_open {
            Some(Overlay::MobileMenu)
        } else {
            None
        }
    }

    pub fn close(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::Catalog => {
                self.catalog_open = false;
                self.catalog_category = None;
            }
            Overlay::Feature => self.feature = None,
            Overlay::Project => {
                self.project = None;
                self.gallery_index = 0;
            }
            Overlay::Service => self.service = None,
            Overlay::MobileMenu => self.menu_open = false,
        }
    }

    pub fn close_topmost(&mut self) -> Option<Overlay> {
        let overlay = self.topmost()?;
        self.close(overlay);
        Some(overlay)
    }

    pub fn open_project(&mut self, index: usize) {
        self.project = Some(index);
        self.gallery_index = 0;
    }

    /// Moves through the open project's gallery, wrapping at both ends.
    /// Does nothing unless a project with more than one item is open.
    pub fn step_gallery(&mut self, forward: bool, gallery_len: usize) -> bool {
        if self.project.is_none() || gallery_len < 2 {
            return false;
        }
        let current = self.gallery_index % gallery_len;
        self.gallery_index = if forward {
            (current + 1) % gallery_len
        } else {
            (current + gallery_len - 1) % gallery_len
        };
        true
    }

    /// Global key binding. `gallery_len` is the length of the open project's
    /// gallery, 0 when none is open. Returns true when the key was handled.
    pub fn handle_key(&mut self, key: &str, gallery_len: usize) -> bool {
        match key {
            "Escape" => self.close_topmost().is_some(),
            "ArrowRight" => self.step_gallery(true, gallery_len),
            "ArrowLeft" => self.step_gallery(false, gallery_len),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn everything_open() -> OverlayState {
        OverlayState {
            menu_open: true,
            service: Some(1),
            feature: Some(2),
            project: Some(0),
            gallery_index: 0,
            catalog_open: true,
            catalog_category: Some(3),
        }
    }

    #[test]
    fn escape_closes_in_precedence_order() {
        let mut state = everything_open();
        let mut closed = Vec::new();
        while let Some(overlay) = state.close_topmost() {
            closed.push(overlay);
        }
        assert_eq!(
            closed,
            [
                Overlay::Catalog,
                Overlay::Feature,
                Overlay::Project,
                Overlay::Service,
                Overlay::MobileMenu,
            ]
        );
        assert_eq!(state, OverlayState::default());
    }

    #[test]
    fn closing_the_catalog_forgets_the_category() {
        let mut state = everything_open();
        assert!(state.handle_key("Escape", 0));
        assert!(!state.catalog_open);
        assert_eq!(state.catalog_category, None);
        assert_eq!(state.feature, Some(2));
    }

    #[test]
    fn escape_with_nothing_open_is_ignored() {
        let mut state = OverlayState::default();
        assert!(!state.handle_key("Escape", 0));
    }

    #[test]
    fn arrows_wrap_around_the_gallery() {
        let mut state = OverlayState::default();
        state.open_project(1);
        assert!(state.handle_key("ArrowLeft", 3));
        assert_eq!(state.gallery_index, 2);
        assert!(state.handle_key("ArrowRight", 3));
        assert!(state.handle_key("ArrowRight", 3));
        assert_eq!(state.gallery_index, 1);
    }

    #[test]
    fn arrows_need_an_open_multi_item_gallery() {
        let mut state = OverlayState::default();
        assert!(!state.handle_key("ArrowRight", 3));
        state.open_project(0);
        assert!(!state.handle_key("ArrowRight", 1));
        assert_eq!(state.gallery_index, 0);
    }

    #[test]
    fn opening_a_project_resets_the_gallery() {
        let mut state = OverlayState::default();
        state.open_project(0);
        state.step_gallery(true, 4);
        state.open_project(2);
        assert_eq!(state.gallery_index, 0);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut state = everything_open();
        assert!(!state.handle_key("Enter", 2));
        assert_eq!(state, everything_open());
    }
}
