//! Static copy and media for the landing page.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

pub mod catalog;
pub mod features;
pub mod projects;
pub mod proposal;
pub mod services;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Media {
    pub kind: MediaKind,
    /// Absolute URL, or a path resolved against the media host.
    pub src: &'static str,
    pub thumbnail: Option<&'static str>,
}

impl Media {
    pub const fn video(src: &'static str) -> Self {
        Self {
            kind: MediaKind::Video,
            src,
            thumbnail: None,
        }
    }

    pub const fn video_with_thumbnail(src: &'static str, thumbnail: &'static str) -> Self {
        Self {
            kind: MediaKind::Video,
            src,
            thumbnail: Some(thumbnail),
        }
    }

    pub const fn image(src: &'static str) -> Self {
        Self {
            kind: MediaKind::Image,
            src,
            thumbnail: None,
        }
    }
}

/// Icons drawn by `components::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IconKind {
    Consulting,
    Interface,
    Support,
    Apartment,
    Home,
    Business,
    Hub,
    Plug,
    Lock,
    Radar,
    Thermometer,
    Robot,
    Appliance,
    Speaker,
    Lightbulb,
    Play,
    Climate,
    Entertainment,
    Shield,
    Energy,
    Cloud,
    Code,
    Mobile,
    Link,
    TrendUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const INICIO: Section = Section { id: "Inicio", label: "Inicio" };
pub const NOSOTROS: Section = Section { id: "Nosotros", label: "Nosotros" };
pub const SERVICIOS: Section = Section { id: "Servicios", label: "Servicios" };
pub const PROYECTOS: Section = Section { id: "Proyectos", label: "Proyectos" };
pub const CATALOGO: Section = Section { id: "Catálogo", label: "Catálogo" };
pub const PROPUESTAS: Section = Section { id: "Propuestas", label: "Propuestas" };
pub const CONTACTANOS: Section = Section { id: "Contáctanos", label: "Contáctanos" };

static FULL_SECTIONS: [Section; 7] = [
    INICIO, NOSOTROS, SERVICIOS, PROYECTOS, CATALOGO, PROPUESTAS, CONTACTANOS,
];
static ESSENTIAL_SECTIONS: [Section; 5] = [INICIO, NOSOTROS, SERVICIOS, PROPUESTAS, CONTACTANOS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactMode {
    /// The send button opens a WhatsApp chat with the message prefilled.
    WhatsApp,
    /// The form is shown but nothing is sent.
    Static,
}

/// The three published versions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageVariant {
    Nocturna,
    Diurna,
    Esencial,
}

impl PageVariant {
    pub fn default_theme(self) -> Theme {
        match self {
            PageVariant::Nocturna | PageVariant::Esencial => Theme::Night,
            PageVariant::Diurna => Theme::Day,
        }
    }

    pub fn contact_mode(self) -> ContactMode {
        match self {
            PageVariant::Nocturna => ContactMode::WhatsApp,
            PageVariant::Diurna | PageVariant::Esencial => ContactMode::Static,
        }
    }

    pub fn sections(self) -> &'static [Section] {
        match self {
            PageVariant::Nocturna | PageVariant::Diurna => &FULL_SECTIONS,
            PageVariant::Esencial => &ESSENTIAL_SECTIONS,
        }
    }

    pub fn section_ids(self) -> Vec<String> {
        self.sections().iter().map(|s| s.id.to_string()).collect()
    }

    pub fn has_section(self, id: &str) -> bool {
        self.sections().iter().any(|s| s.id == id)
    }

    pub fn projects(self) -> &'static [projects::Project] {
        if self.has_section(PROYECTOS.id) {
            &projects::PROJECTS
        } else {
            &[]
        }
    }
}

pub struct Stat {
    pub key: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub static STATS: [Stat; 2] = [
    Stat {
        key: "devices",
        label: "Dispositivos Conectados",
        value: "350",
    },
    Stat {
        key: "scenes",
        label: "Escenas Automatizadas",
        value: "1110",
    },
];

pub struct SectionCopy {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub body: Option<&'static str>,
}

pub const HERO: SectionCopy = SectionCopy {
    eyebrow: "DOMÓTICA & TECNOLOGÍA AVANZADA",
    title: "Habitat Inteligente",
    body: Some("Transformamos espacios ordinarios en ecosistemas inteligentes y personalizados, desde escenas inmersivas para tu entretenimiento hasta la optimización de tu confort y seguridad. Vive el futuro, hoy."),
};

pub const PHILOSOPHY: SectionCopy = SectionCopy {
    eyebrow: "Nuestra Filosofía",
    title: "INNOVACIÓN Y PERSONALIZACIÓN",
    body: Some("En ioniq, no solo instalamos sistemas domóticos; creamos ecosistemas inteligentes a la medida de tu estilo de vida. Nuestra fortaleza es el desarrollo propio, garantizando soluciones exclusivas, una integración perfecta y una experiencia de usuario inigualable."),
};

pub const EXCLUSIVITY: SectionCopy = SectionCopy {
    eyebrow: "",
    title: "Exclusividad y Desarrollo Propio",
    body: Some("Nuestro mayor diferenciador es la capacidad de desarrollo in-house. No nos limitamos a integrar productos; creamos soluciones a medida que garantizan una experiencia única, cohesiva y perfectamente alineada con tu visión."),
};

pub static EXCLUSIVE_FEATURES: [(IconKind, &str); 4] = [
    (IconKind::Code, "Software y hardware personalizados para tus necesidades exactas."),
    (IconKind::Mobile, "Interfaces de usuario diseñadas exclusivamente para tu proyecto."),
    (IconKind::Link, "IA que aprende de tus hábitos y optimiza las automatizaciones."),
    (IconKind::TrendUp, "Plataforma escalable que crece y evoluciona contigo."),
];

pub const CONTROL: SectionCopy = SectionCopy {
    eyebrow: "",
    title: "Control Total, Experiencia Única",
    body: Some("Más que productos, ofrecemos soluciones. Escuchamos tus necesidades y las transformamos en realidad con desarrollo propio, creando un entorno inteligente diseñado exclusivamente para tu máxima satisfacción."),
};

pub const SERVICES_COPY: SectionCopy = SectionCopy {
    eyebrow: "Lo que hacemos",
    title: "Nuestros Servicios",
    body: None,
};

pub const PROJECTS_COPY: SectionCopy = SectionCopy {
    eyebrow: "Nuestro Trabajo",
    title: "Proyectos Destacados",
    body: None,
};

pub const CATALOG_COPY: SectionCopy = SectionCopy {
    eyebrow: "Nuestros Productos",
    title: "Catálogo de Dispositivos",
    body: Some("Explora una selección curada de los mejores dispositivos del mercado, compatibles con nuestros ecosistemas inteligentes. Desde el control central hasta el último sensor, tenemos la pieza perfecta para tu proyecto."),
};

pub const PROPOSAL_COPY: SectionCopy = SectionCopy {
    eyebrow: "Tu Proyecto en Mente",
    title: "Configurador de Propuesta",
    body: Some("Diseña tu ecosistema ideal y obtén una estimación de complejidad. Selecciona las características de tu espacio para que podamos ofrecerte una solución a medida."),
};

pub const CONTACT_COPY: SectionCopy = SectionCopy {
    eyebrow: "¿Listo para empezar?",
    title: "Contáctanos",
    body: Some("Envíanos un mensaje y nuestro equipo se pondrá en contacto contigo para explorar cómo podemos transformar tu espacio."),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_starts_on_inicio_and_ends_on_contact() {
        for variant in [PageVariant::Nocturna, PageVariant::Diurna, PageVariant::Esencial] {
            let sections = variant.sections();
            assert_eq!(sections.first(), Some(&INICIO));
            assert_eq!(sections.last(), Some(&CONTACTANOS));
            assert!(variant.has_section(PROPUESTAS.id));
        }
    }

    #[test]
    fn section_ids_are_unique() {
        let ids = PageVariant::Nocturna.section_ids();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());
    }

    #[test]
    fn essential_variant_drops_projects_and_catalog() {
        assert!(!PageVariant::Esencial.has_section(PROYECTOS.id));
        assert!(!PageVariant::Esencial.has_section(CATALOGO.id));
        assert!(PageVariant::Esencial.projects().is_empty());
        assert!(!PageVariant::Nocturna.projects().is_empty());
    }

    #[test]
    fn only_the_night_variant_sends_to_whatsapp() {
        assert_eq!(PageVariant::Nocturna.contact_mode(), ContactMode::WhatsApp);
        assert_eq!(PageVariant::Diurna.contact_mode(), ContactMode::Static);
        assert_eq!(PageVariant::Esencial.contact_mode(), ContactMode::Static);
        assert_eq!(PageVariant::Diurna.default_theme(), Theme::Day);
    }
}
