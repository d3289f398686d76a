use super::IconKind;
use crate::proposal::PropertyType;

pub struct ProposalSystem {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: IconKind,
}

/// Toggle tiles of the configurator. `name` is what gets stored in the
/// configuration and written into the quote message.
pub static PROPOSAL_SYSTEMS: [ProposalSystem; 8] = [
    ProposalSystem { id: "lighting", name: "Iluminación", icon: IconKind::Lightbulb },
    ProposalSystem { id: "climate", name: "Climatización", icon: IconKind::Thermometer },
    ProposalSystem { id: "security", name: "Seguridad", icon: IconKind::Lock },
    ProposalSystem { id: "audio", name: "Audio", icon: IconKind::Speaker },
    ProposalSystem { id: "video", name: "Video", icon: IconKind::Play },
    ProposalSystem { id: "blinds", name: "Persianas", icon: IconKind::Hub },
    ProposalSystem { id: "network", name: "Red Wi-Fi", icon: IconKind::Hub },
    ProposalSystem { id: "access", name: "Control Acceso", icon: IconKind::Lock },
];

pub fn property_icon(property_type: PropertyType) -> IconKind {
    match property_type {
        PropertyType::Apartment => IconKind::Apartment,
        PropertyType::House => IconKind::Home,
        PropertyType::Business => IconKind::Business,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_names_are_unique() {
        for (i, a) in PROPOSAL_SYSTEMS.iter().enumerate() {
            for b in PROPOSAL_SYSTEMS.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
                assert_ne!(a.id, b.id);
            }
        }
    }
}
