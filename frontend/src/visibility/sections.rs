use serde::{Deserialize, Serialize};

use super::{VisibilityEvent, SECTION_THRESHOLD};

/// Which section the navigation highlights.
///
/// Holds exactly one active id, always one of `sections`. When several
/// sections qualify in one batch the topmost wins; equal tops fall back to
/// page order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSectionTracker {
    sections: Vec<String>,
    active: usize,
    threshold: f64,
}

impl ActiveSectionTracker {
    pub fn new(sections: Vec<String>) -> Self {
        Self::with_threshold(sections, SECTION_THRESHOLD)
    }

    pub fn with_threshold(sections: Vec<String>, threshold: f64) -> Self {
        assert!(!sections.is_empty(), "a page needs at least one section");
        Self {
            sections,
            active: 0,
            threshold,
        }
    }

    pub fn active(&self) -> &str {
        &self.sections[self.active]
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Applies one batch. Returns true when the active section changed.
    pub fn apply(&mut self, batch: &[VisibilityEvent]) -> bool {
        let winner = batch
            .iter()
            .filter(|e| e.meets(self.threshold))
            .filter_map(|e| {
                self.sections
                    .iter()
                    .position(|s| *s == e.element_id)
                    .map(|index| (index, e.top))
            })
            .min_by(|(ia, ta), (ib, tb)| ta.total_cmp(tb).then(ia.cmp(ib)));

        match winner {
            Some((index, _)) if index != self.active => {
                self.active = index;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::fake::{hidden, visible};

    fn tracker() -> ActiveSectionTracker {
        ActiveSectionTracker::new(
            ["Inicio", "Nosotros", "Servicios", "Contáctanos"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    #[test]
    fn starts_on_the_first_section() {
        assert_eq!(tracker().active(), "Inicio");
    }

    #[test]
    fn section_past_the_threshold_becomes_active() {
        let mut t = tracker();
        assert!(t.apply(&[visible("Servicios", 0.6, 40.0)]));
        assert_eq!(t.active(), "Servicios");
    }

    #[test]
    fn below_threshold_and_hidden_events_are_ignored() {
        let mut t = tracker();
        assert!(!t.apply(&[visible("Nosotros", 0.3, 10.0), hidden("Inicio")]));
        assert_eq!(t.active(), "Inicio");
    }

    #[test]
    fn leaving_the_viewport_keeps_the_last_active_section() {
        let mut t = tracker();
        t.apply(&[visible("Nosotros", 0.9, 0.0)]);
        t.apply(&[hidden("Nosotros")]);
        assert_eq!(t.active(), "Nosotros");
    }

    #[test]
    fn topmost_qualifying_section_wins_a_batch() {
        let mut t = tracker();
        t.apply(&[
            visible("Contáctanos", 0.7, 300.0),
            visible("Nosotros", 0.55, -120.0),
            visible("Servicios", 0.8, 90.0),
        ]);
        assert_eq!(t.active(), "Nosotros");
    }

    #[test]
    fn equal_tops_fall_back_to_page_order() {
        let mut t = tracker();
        t.apply(&[visible("Servicios", 1.0, 0.0), visible("Nosotros", 1.0, 0.0)]);
        assert_eq!(t.active(), "Nosotros");
    }

    #[test]
    fn unknown_ids_never_become_active() {
        let mut t = tracker();
        assert!(!t.apply(&[visible("Blog", 1.0, 0.0)]));
        assert_eq!(t.active(), "Inicio");
    }

    #[test]
    fn active_is_always_a_configured_section() {
        let mut t = tracker();
        let batches = vec![
            vec![visible("Servicios", 0.9, 10.0)],
            vec![hidden("Servicios"), visible("Desconocido", 1.0, -5.0)],
            vec![visible("Inicio", 0.2, 0.0)],
            vec![visible("Contáctanos", 0.5, 200.0), visible("Inicio", 0.5, 250.0)],
        ];
        for batch in batches {
            t.apply(&batch);
            assert!(t.sections().iter().any(|s| s == t.active()));
        }
        assert_eq!(t.active(), "Contáctanos");
    }

    #[test]
    #[should_panic(expected = "at least one section")]
    fn empty_section_list_is_rejected() {
        ActiveSectionTracker::new(Vec::new());
    }
}
