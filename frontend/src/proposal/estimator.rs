use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const AREA_MIN: u32 = 40;
pub const AREA_MAX: u32 = 1000;
pub const AREA_STEP: u32 = 10;
pub const AREA_DEFAULT: u32 = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProposalError {
    #[error("Area is not a number: {0}")]
    InvalidArea(String),
    #[error("Area {0} m² is outside 40..=1000")]
    AreaOutOfRange(u32),
    #[error("Area {0} m² is not a multiple of 10")]
    AreaOffStep(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    #[default]
    Apartment,
    House,
    Business,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Business,
    ];

    /// Spanish label shown in the tiles, the summary and the quote message.
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartamento",
            PropertyType::House => "Casa",
            PropertyType::Business => "Negocio",
        }
    }

    fn base_points(self) -> f64 {
        match self {
            PropertyType::Apartment => 0.0,
            PropertyType::House => 20.0,
            PropertyType::Business => 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    Basico,
    Avanzado,
    Premium,
}

impl Tier {
    pub fn from_score(score: u8) -> Self {
        if score < 30 {
            Tier::Basico
        } else if score < 60 {
            Tier::Avanzado
        } else {
            Tier::Premium
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Basico => "Básico",
            Tier::Avanzado => "Avanzado",
            Tier::Premium => "Premium",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            Tier::Basico => "Ideal para iniciarse en la domótica.",
            Tier::Avanzado => "Un ecosistema conectado y eficiente.",
            Tier::Premium => "Control total y máxima exclusividad.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexityResult {
    pub score: u8,
    pub tier: Tier,
}

/// User choices in the proposal configurator.
///
/// Fields are private so the area domain and the uniqueness of
/// `selected_systems` hold for every value of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalConfiguration {
    property_type: PropertyType,
    area_square_meters: u32,
    // Kept in selection order for the summary and the quote message.
    selected_systems: Vec<String>,
}

impl Default for ProposalConfiguration {
    fn default() -> Self {
        Self {
            property_type: PropertyType::default(),
            area_square_meters: AREA_DEFAULT,
            selected_systems: Vec::new(),
        }
    }
}

impl ProposalConfiguration {
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn area_square_meters(&self) -> u32 {
        self.area_square_meters
    }

    pub fn selected_systems(&self) -> &[String] {
        &self.selected_systems
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_systems.iter().any(|s| s == name)
    }

    pub fn set_property_type(&mut self, property_type: PropertyType) {
        self.property_type = property_type;
    }

    /// Panics when `area` is outside the slider domain. Callers holding raw
    /// input go through [`parse_area`] first.
    pub fn set_area(&mut self, area: u32) {
        assert!(
            validate_area(area).is_ok(),
            "area {} m² violates the slider domain",
            area
        );
        self.area_square_meters = area;
    }

    /// Adds `name` when absent, removes it when present.
    pub fn toggle_system(&mut self, name: &str) {
        if let Some(pos) = self.selected_systems.iter().position(|s| s == name) {
            self.selected_systems.remove(pos);
        } else {
            self.selected_systems.push(name.to_string());
        }
    }

    pub fn estimate(&self) -> ComplexityResult {
        estimate(self)
    }
}

pub fn validate_area(area: u32) -> Result<u32, ProposalError> {
    if !(AREA_MIN..=AREA_MAX).contains(&area) {
        return Err(ProposalError::AreaOutOfRange(area));
    }
    if area % AREA_STEP != 0 {
        return Err(ProposalError::AreaOffStep(area));
    }
    Ok(area)
}

/// Parses the value of the area range input.
pub fn parse_area(raw: &str) -> Result<u32, ProposalError> {
    let area = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| ProposalError::InvalidArea(raw.to_string()))?;
    validate_area(area)
}

pub fn estimate(config: &ProposalConfiguration) -> ComplexityResult {
    let mut raw = config.property_type.base_points();
    raw += (config.area_square_meters as f64 / 500.0) * 20.0;
    raw += 10.0 * config.selected_systems.len() as f64;

    let score = raw.round().min(100.0) as u8;
    ComplexityResult {
        score,
        tier: Tier::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::proposal::PROPOSAL_SYSTEMS;

    fn config(property_type: PropertyType, area: u32, systems: &[&str]) -> ProposalConfiguration {
        let mut c = ProposalConfiguration::default();
        c.set_property_type(property_type);
        c.set_area(area);
        for s in systems {
            c.toggle_system(s);
        }
        c
    }

    #[test]
    fn defaults_match_a_fresh_configurator() {
        let c = ProposalConfiguration::default();
        assert_eq!(c.property_type(), PropertyType::Apartment);
        assert_eq!(c.area_square_meters(), 100);
        assert!(c.selected_systems().is_empty());
    }

    #[test]
    fn apartment_with_default_area_is_basic() {
        let result = estimate(&config(PropertyType::Apartment, 100, &[]));
        assert_eq!(result.score, 4);
        assert_eq!(result.tier, Tier::Basico);
    }

    #[test]
    fn house_of_500_with_two_systems_is_premium() {
        let result = estimate(&config(
            PropertyType::House,
            500,
            &["Iluminación", "Climatización"],
        ));
        assert_eq!(result.score, 60);
        assert_eq!(result.tier, Tier::Premium);
    }

    #[test]
    fn everything_selected_clamps_to_100() {
        let all: Vec<&str> = PROPOSAL_SYSTEMS.iter().map(|s| s.name).collect();
        assert_eq!(all.len(), 8);
        let result = estimate(&config(PropertyType::Business, 1000, &all));
        assert_eq!(result.score, 100);
        assert_eq!(result.tier, Tier::Premium);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(0), Tier::Basico);
        assert_eq!(Tier::from_score(29), Tier::Basico);
        assert_eq!(Tier::from_score(30), Tier::Avanzado);
        assert_eq!(Tier::from_score(59), Tier::Avanzado);
        assert_eq!(Tier::from_score(60), Tier::Premium);
        assert_eq!(Tier::from_score(100), Tier::Premium);
    }

    #[test]
    fn rounding_happens_before_the_tier_lookup() {
        // 20 + 510/500*20 = 40.4 -> 40
        let r = estimate(&config(PropertyType::House, 510, &[]));
        assert_eq!(r.score, 40);
        // 0 + 40/500*20 = 1.6 -> 2
        let r = estimate(&config(PropertyType::Apartment, 40, &[]));
        assert_eq!(r.score, 2);
        // 30 + 740/500*20 + 10 = 69.6 -> 70
        let r = estimate(&config(PropertyType::Business, 740, &["Audio"]));
        assert_eq!(r.score, 70);
    }

    #[test]
    fn estimate_is_deterministic_and_bounded() {
        for property_type in PropertyType::ALL {
            for area in (AREA_MIN..=AREA_MAX).step_by(AREA_STEP as usize) {
                for n in 0..=PROPOSAL_SYSTEMS.len() {
                    let names: Vec<&str> =
                        PROPOSAL_SYSTEMS.iter().take(n).map(|s| s.name).collect();
                    let c = config(property_type, area, &names);
                    let first = estimate(&c);
                    assert_eq!(first, estimate(&c));
                    assert!(first.score <= 100);
                    assert_eq!(first.tier, Tier::from_score(first.score));
                }
            }
        }
    }

    #[test]
    fn score_never_decreases_with_area() {
        for property_type in PropertyType::ALL {
            let mut previous = 0;
            for area in (AREA_MIN..=AREA_MAX).step_by(AREA_STEP as usize) {
                let score = estimate(&config(property_type, area, &["Audio"])).score;
                assert!(score >= previous, "{:?} at {} m²", property_type, area);
                previous = score;
            }
        }
    }

    #[test]
    fn score_never_decreases_with_more_systems_or_bigger_type() {
        let mut c = config(PropertyType::Apartment, 300, &[]);
        let mut previous = c.estimate().score;
        for system in PROPOSAL_SYSTEMS.iter() {
            c.toggle_system(system.name);
            let score = c.estimate().score;
            assert!(score >= previous);
            previous = score;
        }

        let apartment = config(PropertyType::Apartment, 200, &["Video"]).estimate().score;
        let house = config(PropertyType::House, 200, &["Video"]).estimate().score;
        let business = config(PropertyType::Business, 200, &["Video"]).estimate().score;
        assert!(house >= apartment);
        assert!(business >= apartment);
    }

    #[test]
    fn toggling_twice_restores_the_selection() {
        let mut c = config(PropertyType::House, 250, &["Seguridad", "Audio"]);
        let before = c.clone();
        c.toggle_system("Persianas");
        assert!(c.is_selected("Persianas"));
        c.toggle_system("Persianas");
        assert_eq!(c, before);

        c.toggle_system("Audio");
        c.toggle_system("Audio");
        assert_eq!(c.selected_systems(), ["Seguridad", "Audio"]);
    }

    #[test]
    fn toggle_never_duplicates() {
        let mut c = ProposalConfiguration::default();
        c.toggle_system("Audio");
        c.toggle_system("Video");
        c.toggle_system("Audio");
        c.toggle_system("Audio");
        assert_eq!(c.selected_systems(), ["Video", "Audio"]);
    }

    #[test]
    fn parse_area_accepts_slider_values() {
        assert_eq!(parse_area("40"), Ok(40));
        assert_eq!(parse_area(" 1000 "), Ok(1000));
        assert_eq!(parse_area("abc"), Err(ProposalError::InvalidArea("abc".into())));
        assert_eq!(parse_area("30"), Err(ProposalError::AreaOutOfRange(30)));
        assert_eq!(parse_area("1010"), Err(ProposalError::AreaOutOfRange(1010)));
        assert_eq!(parse_area("105"), Err(ProposalError::AreaOffStep(105)));
    }

    #[test]
    #[should_panic(expected = "violates the slider domain")]
    fn set_area_rejects_out_of_domain_values() {
        ProposalConfiguration::default().set_area(5);
    }
}
