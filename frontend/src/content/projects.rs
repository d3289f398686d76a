use super::Media;

#[derive(Debug, PartialEq)]
pub struct Chapter {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub media: Media,
    pub tags: &'static [&'static str],
    pub chapters: &'static [Chapter],
    pub gallery: &'static [Media],
}

impl Project {
    /// Poster for the collapsed desktop column.
    pub fn poster(&self) -> Option<&'static str> {
        self.gallery.first().and_then(|m| m.thumbnail)
    }
}

/// DOM id of the `index`-th video in the mobile project scroller.
pub fn video_element_id(index: usize) -> String {
    format!("project-video-{}", index)
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "Apartamento \"Mónaco\"",
        description: "Integración completa de iluminación, climatización y seguridad, controlada desde una interfaz única desarrollada por ioniq.",
        media: Media::video("/videos/Contenido%20Monaco/Monaco%20.mp4"),
        tags: &["Iluminación", "Climatización", "Seguridad"],
        chapters: &[
            Chapter {
                heading: "El Desafío: Innovación y Autosuficiencia",
                paragraphs: &["El propietario del Apartamento “Mónaco” buscaba convertir su hogar en un espacio inteligente, funcional y moderno, sin alterar su diseño estético ni la comodidad de los ocupantes. El reto consistió en integrar sistemas de iluminación, sensores, cámaras de seguridad y controladores IR en una sola red central, garantizando un control total y una experiencia intuitiva."],
            },
            Chapter {
                heading: "Nuestra Solución: Un Ecosistema Inteligente Centralizado",
                paragraphs: &["Implementamos un controlador central que actúa como el cerebro del hogar, permitiendo la comunicación entre todos los dispositivos y la incorporación de tecnologías AIIOT para funciones inteligentes y automatizadas. La residencia cuenta con un sistema que gestiona luces, sensores y seguridad de forma sincronizada, adaptándose al estilo de vida de los residentes. Todo el cableado y los equipos fueron instalados cuidadosamente para mantener la armonía visual de cada espacio."],
            },
            Chapter {
                heading: "Resultado: Una Casa que Piensa",
                paragraphs: &["El resultado es una vivienda autosuficiente y funcional que responde de manera natural a las necesidades diarias. Escenas preconfiguradas permiten ajustar iluminación, temperatura o seguridad con un solo toque, ofreciendo confort, eficiencia y tranquilidad. La integración AIIOT eleva la experiencia, logrando que la tecnología se sienta orgánica, elegante y siempre accesible."],
            },
        ],
        gallery: &[Media::video_with_thumbnail(
            "/videos/Contenido%20Monaco/Monaco%20.mp4",
            "/videos/Contenido%20Monaco/Banner.png",
        )],
    },
    Project {
        title: "Muebles \"Nexus\"",
        description: "Desarrollo de un producto IoT propio: muebles abatibles inteligentes con control y monitoreo remoto.",
        media: Media::video("https://assets.mixkit.co/videos/preview/mixkit-a-bed-with-a-gray-quilt-and-many-pillows-4229-large.mp4"),
        tags: &["IoT", "Hardware", "Firmware"],
        chapters: &[
            Chapter {
                heading: "El Desafío: Innovar desde Cero",
                paragraphs: &[
                    "Este proyecto marcó un hito para nosotros: el desarrollo completo de un producto IoT propio, tanto en su diseño físico como en su estructura digital. El objetivo era crear un sistema de muebles abatibles inteligentes, funcionales y adaptados a los nuevos estilos de vida urbanos, donde el espacio es un recurso valioso.",
                    "El principal desafío fue desarrollar desde cero la electrónica, la conectividad y la interacción con el usuario final, garantizando un producto confiable, elegante y de fácil uso.",
                ],
            },
            Chapter {
                heading: "Nuestra Solución: Tecnología que Transforma Espacios",
                paragraphs: &[
                    "Basado en una placa ESP32, diseñamos el sistema completo de control, comunicación y automatización. Se desarrolló la electrónica, el firmware y el entorno digital que permite al usuario monitorear y controlar el mueble de forma remota.",
                    "El proceso incluyó meses de investigación, pruebas y ajustes para lograr una integración fluida entre hardware y software, consolidando un ecosistema funcional que refleja la filosofía AIIOT: inteligencia artificial aplicada al confort cotidiano.",
                ],
            },
            Chapter {
                heading: "Resultado: Un Producto que Reimagina el Espacio",
                paragraphs: &[
                    "El resultado es un mueble inteligente capaz de transformar espacios reducidos en ambientes versátiles y modernos. Su diseño compacto y automatizado brinda soluciones prácticas para hogares contemporáneos, ofreciendo control total desde una aplicación conectada.",
                    "Este desarrollo representa el primer paso hacia una línea de productos propios que combinan ingeniería, diseño y conectividad para redefinir la manera en que vivimos nuestros espacios.",
                ],
            },
        ],
        gallery: &[Media::video_with_thumbnail(
            "https://assets.mixkit.co/videos/preview/mixkit-a-bed-with-a-gray-quilt-and-many-pillows-4229-large.mp4",
            "https://images.unsplash.com/photo-1519974719765-e6559eac2575?auto=format&fit=crop&w=400&q=60",
        )],
    },
    Project {
        title: "Condominio \"Nogales\"",
        description: "Sistema de iluminación inteligente, seguridad avanzada con reconocimiento de placas y conectividad mesh en una residencia de gran extensión.",
        media: Media::video("https://assets.mixkit.co/videos/preview/mixkit-modern-house-with-a-swimming-pool-4238-large.mp4"),
        tags: &["Iluminación LED", "Seguridad Avanzada", "Red Mesh"],
        chapters: &[
            Chapter {
                heading: "El Desafío: Estética y Conectividad sin Límites",
                paragraphs: &["El Condominio “Nogales” representó un reto de diseño y tecnología a gran escala. El objetivo fue crear un entorno estéticamente armonioso que integrara iluminación, seguridad y confort sin comprometer el estilo de los espacios. Además, por tratarse de una residencia de gran extensión, el principal desafío fue garantizar una conectividad estable y fluida entre todos los dispositivos inteligentes."],
            },
            Chapter {
                heading: "Nuestra Solución: Un Ecosistema Luminoso e Inteligente",
                paragraphs: &[
                    "Implementamos un sistema de tiras LED controladas por voz y aplicación móvil, brindando una iluminación ambiental dinámica y elegante. Se añadieron sensores de puertas y ventanas, múltiples cámaras de seguridad y uno de nuestros desarrollos propios: la automatización de la puerta de ingreso con reconocimiento de placas. También se integraron paneles de smart glass y sensores estratégicos para mejorar la experiencia y la eficiencia del hogar.",
                    "Para enfrentar los retos de comunicación, se propuso una red mesh personalizada que optimiza la conectividad y permite la integración de nuevos dispositivos sin saturar la red principal.",
                ],
            },
            Chapter {
                heading: "Resultado: Un Condominio que Evoluciona",
                paragraphs: &["El resultado es un hogar inteligente, escalable y visualmente impactante. Su sistema central coordina iluminación, seguridad y acceso, mientras se prepara para incorporar futuras funciones como persianas automáticas y sensores láser perimetrales. Nogales demuestra que la domótica puede combinar tecnología avanzada, diseño y confort en perfecta armonía."],
            },
        ],
        gallery: &[Media::video_with_thumbnail(
            "https://assets.mixkit.co/videos/preview/mixkit-modern-house-with-a-swimming-pool-4238-large.mp4",
            "https://images.unsplash.com/photo-1613490493576-7fde63acd811?auto=format&fit=crop&w=400&q=60",
        )],
    },
    Project {
        title: "Residencia \"Escobar\"",
        description: "Sistema integral de seguridad con cámaras, apertura de puertas automatizada, smart glass y control de iluminación inteligente.",
        media: Media::video("https://assets.mixkit.co/videos/preview/mixkit-luxurious-house-in-the-middle-of-the-woods-4236-large.mp4"),
        tags: &["Seguridad Total", "Automatización", "Smart Glass"],
        chapters: &[
            Chapter {
                heading: "El Desafío: Seguridad y Autonomía Total",
                paragraphs: &["La Residencia “Escobar” fue un proyecto donde el cliente nos otorgó total libertad para diseñar un sistema integral que combinara seguridad, confort y tecnología avanzada. El reto principal fue crear un entorno completamente conectado que ofreciera protección total sin perder la elegancia del hogar."],
            },
            Chapter {
                heading: "Nuestra Solución: Un Hogar que se Protege y se Adapta",
                paragraphs: &["Diseñamos un sistema de seguridad completo con cámaras interiores y exteriores, junto con un sistema automatizado de apertura de puertas que integra sensores y cámaras de reconocimiento para identificar visitantes en tiempo real. Además, incorporamos paneles smart glass para garantizar privacidad en la habitación principal y una red de switches inteligentes que permiten controlar la iluminación y demás dispositivos desde un único entorno digital. Todo fue integrado bajo un ecosistema AIIOT, lo que permite la creación de escenas inteligentes que automatizan actividades diarias según las rutinas de los habitantes."],
            },
            Chapter {
                heading: "Resultado: Un Espacio Inteligente y Consciente",
                paragraphs: &["El resultado es una vivienda con un nivel de seguridad y autonomía excepcionales. Cada dispositivo trabaja de forma coordinada, anticipándose a las necesidades del usuario. Escenas inteligentes gestionan la iluminación, la privacidad y el acceso, convirtiendo la tecnología en un asistente silencioso que protege, automatiza y optimiza el día a día del hogar."],
            },
        ],
        gallery: &[
            Media::video_with_thumbnail(
                "https://assets.mixkit.co/videos/preview/mixkit-luxurious-house-in-the-middle-of-the-woods-4236-large.mp4",
                "https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=400&q=60",
            ),
            Media::image("https://images.unsplash.com/photo-1600585154340-be6161a56a0c?auto=format&fit=crop&w=1600&q=80"),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_has_a_gallery_and_a_poster() {
        for project in &PROJECTS {
            assert!(!project.gallery.is_empty(), "{}", project.title);
            assert!(project.poster().is_some(), "{}", project.title);
            assert_eq!(project.chapters.len(), 3, "{}", project.title);
        }
    }

    #[test]
    fn video_ids_are_stable() {
        assert_eq!(video_element_id(2), "project-video-2");
    }
}
