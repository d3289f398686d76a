use super::IconKind;

#[derive(Debug, PartialEq)]
pub struct Service {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
    pub modal_title: &'static str,
    pub modal_description: &'static str,
    pub modal_details: &'static [&'static str],
}

pub static SERVICES: [Service; 3] = [
    Service {
        icon: IconKind::Consulting,
        title: "Consultoría y Diseño",
        description: "Creamos proyectos de domótica a medida, analizando tus necesidades para un diseño funcional y estético.",
        modal_title: "Diseño de Ecosistemas Inteligentes",
        modal_description: "Nuestro proceso de consultoría es el pilar de un proyecto exitoso. No se trata de venderte dispositivos, sino de entender tu estilo de vida para diseñar un hogar que trabaje para ti.",
        modal_details: &[
            "Análisis profundo de tus rutinas y necesidades diarias.",
            "Diseño de la arquitectura del sistema, seleccionando la tecnología más adecuada y robusta.",
            "Planificación de la infraestructura y cableado estructurado para garantizar la fiabilidad.",
            "Integración estética de la tecnología con el diseño interior de tu espacio.",
            "Entrega de una propuesta detallada y transparente, sin sorpresas.",
        ],
    },
    Service {
        icon: IconKind::Interface,
        title: "Interfaces Propias",
        description: "Desarrollamos interfaces de control intuitivas y personalizadas que te dan el control total de tu espacio.",
        modal_title: "Control a tu Medida",
        modal_description: "La experiencia de usuario lo es todo. Por eso creamos nuestra propia capa de software, una interfaz diseñada exclusivamente para ti, que unifica todos los sistemas bajo un control simple y elegante.",
        modal_details: &[
            "Una sola app para controlar iluminación, clima, audio/video, seguridad y más.",
            "Diseño gráfico personalizado que refleja la estética de tu hogar o marca.",
            "Creación de escenas complejas que se activan con un solo toque (ej: 'Modo Cine', 'Llegar a Casa').",
            "Interfaces adaptadas a diferentes usuarios: desde un control simple para niños hasta vistas avanzadas para administradores.",
            "Compatibilidad total con control por voz (Alexa, Google Assistant, Siri).",
        ],
    },
    Service {
        icon: IconKind::Support,
        title: "Soporte Evolutivo",
        description: "Ofrecemos mantenimiento y actualizaciones para que tu sistema esté siempre a la vanguardia tecnológica.",
        modal_title: "Tu Sistema, Siempre Vivo",
        modal_description: "La tecnología avanza, y tu hogar inteligente también debería hacerlo. Nuestro servicio de soporte evolutivo va más allá de la simple reparación; es un compromiso para mantener tu sistema seguro, actualizado y listo para el futuro.",
        modal_details: &[
            "Monitorización remota proactiva para detectar y resolver problemas antes de que te afecten.",
            "Actualizaciones periódicas de software para mejorar la seguridad y añadir nuevas funcionalidades.",
            "Soporte para integrar nuevos dispositivos y tecnologías que aparezcan en el mercado.",
            "Optimización continua de las automatizaciones basadas en tu uso y feedback.",
            "Asistencia técnica prioritaria para resolver cualquier duda o incidencia.",
        ],
    },
];

/// Entrance delay of the `index`-th service card, in seconds.
pub fn entrance_delay(index: usize) -> f64 {
    index as f64 * 0.1
}
