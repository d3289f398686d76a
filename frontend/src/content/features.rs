use super::{IconKind, Media};

#[derive(Debug, PartialEq)]
pub struct ProductExample {
    pub name: &'static str,
    pub description: &'static str,
    pub media: Media,
}

/// Card in the "Control Total" grid and the modal it opens.
#[derive(Debug, PartialEq)]
pub struct DomoticsFeature {
    pub title: &'static str,
    pub icon: IconKind,
    /// Glow colour behind the icon.
    pub glow: &'static str,
    pub accent: &'static str,
    pub modal_title: &'static str,
    pub modal_description: &'static str,
    pub modal_media: Media,
    pub products: [ProductExample; 3],
}

pub static FEATURES: [DomoticsFeature; 6] = [
    DomoticsFeature {
        title: "Iluminación Inteligente",
        icon: IconKind::Lightbulb,
        glow: "rgba(99, 102, 241, 0.4)",
        accent: "#6366F1",
        modal_title: "Control Lumínico Total",
        modal_description: "Desde la calidez de una cena romántica hasta la energía de una mañana productiva, ajusta la intensidad y el color de cada luz. Crea escenas personalizadas que se activan con tu voz, un toque en la app o automáticamente según la hora del día.",
        modal_media: Media::video("/videos/Tarjeta%20Iluminacion/Videobanner.mp4"),
        products: [
            ProductExample {
                name: "Tiras LED RGBW",
                description: "Crea ambientes dinámicos y acentúa la arquitectura de tu espacio con millones de colores.",
                media: Media::video("/videos/Tarjeta%20Iluminacion/Video1.mp4"),
            },
            ProductExample {
                name: "Switches Inteligentes",
                description: "Controla tus luces existentes desde cualquier lugar y crea programaciones horarias.",
                media: Media::video("/videos/Tarjeta%20Iluminacion/Video2.mp4"),
            },
            ProductExample {
                name: "Bombillas Regulables",
                description: "Ajusta el brillo y la temperatura del color para cada momento, desde luz fría para trabajar hasta cálida para relajarte.",
                media: Media::video("/videos/Tarjeta%20Iluminacion/Video3.mp4"),
            },
        ],
    },
    DomoticsFeature {
        title: "Climatización Avanzada",
        icon: IconKind::Climate,
        glow: "rgba(59, 130, 246, 0.4)",
        accent: "#3B82F6",
        modal_title: "Confort Climático Inteligente",
        modal_description: "Nuestro sistema aprende tus preferencias y se anticipa a tus necesidades. Geofencing activa el clima ideal antes de que llegues a casa y los sensores optimizan el consumo energético, garantizando confort absoluto con máxima eficiencia.",
        modal_media: Media::video("/videos/Tarjeta%20Climatizacion/Videobanner1.mp4"),
        products: [
            ProductExample {
                name: "Termostato Inteligente",
                description: "Aprende tus rutinas y optimiza la calefacción y el aire acondicionado para ahorrar energía.",
                media: Media::video("/videos/Tarjeta%20Climatizacion/Video1.mp4"),
            },
            ProductExample {
                name: "Controlador de A/C",
                description: "Convierte tu aire acondicionado tradicional en un dispositivo inteligente controlable desde tu móvil.",
                media: Media::video("/videos/Tarjeta%20Climatizacion/Video2.mp4"),
            },
            ProductExample {
                name: "Sensores de Temperatura",
                description: "Asegura una temperatura precisa y homogénea en cada habitación de tu hogar.",
                media: Media::video("/videos/Tarjeta%20Climatizacion/Video3.mp4"),
            },
        ],
    },
    DomoticsFeature {
        title: "Entretenimiento Inmersivo",
        icon: IconKind::Entertainment,
        glow: "rgba(236, 72, 153, 0.4)",
        accent: "#EC4899",
        modal_title: "Cine en Casa, Sonido Envolvente",
        modal_description: "Crea el ambiente perfecto para cada ocasión con un solo toque. Con nuestras escenas automáticas, tu salón se transforma en una sala de cine o un estadio para ver el partido. Las luces, el sonido y las persianas se ajustan al instante para una experiencia totalmente inmersiva.",
        modal_media: Media::video("/videos/Tarjeta%20Entretenimiento/Videobanner.mp4"),
        products: [
            ProductExample {
                name: "Escenas Automáticas",
                description: "El cerebro de tus escenas automáticas. Activa el \"Modo Cine\" y las luces bajarán al instante, o el \"Modo Fútbol\" para sincronizar el partido en las pantallas de donde te encuentres en tu hogar en perfecto 4K.",
                media: Media::video("/videos/Tarjeta%20Entretenimiento/Video1.mp4"),
            },
            ProductExample {
                name: "Altavoces Arquitectónicos",
                description: "Sonido de alta fidelidad que se integra perfectamente en paredes y techos, desapareciendo visualmente.",
                media: Media::video("/videos/Tarjeta%20Entretenimiento/Video2.mp4"),
            },
            ProductExample {
                name: "Control Remoto Universal",
                description: "Un solo mando para gobernarlos a todos. Controla tu TV, sistema de sonido, luces y más.",
                media: Media::video("/videos/Tarjeta%20Entretenimiento/Video3.mp4"),
            },
        ],
    },
    DomoticsFeature {
        title: "Seguridad Incondicional",
        icon: IconKind::Shield,
        glow: "rgba(139, 92, 246, 0.4)",
        accent: "#8B5CF6",
        modal_title: "Tranquilidad, Donde Quiera Que Estés",
        modal_description: "Vigila tu hogar con cámaras de alta definición, recibe alertas de movimiento en tiempo real y controla accesos de forma remota. Simula presencia cuando estás fuera y duerme tranquilo sabiendo que tu hogar está protegido 24/7.",
        modal_media: Media::video("/videos/Tarjeta%20Seguridad/Videobanner.mp4"),
        products: [
            ProductExample {
                name: "Cámaras IP con IA",
                description: "Reconocimiento inteligente de personas, vehículos y paquetes para evitar falsas alarmas.",
                media: Media::video("/videos/Tarjeta%20Seguridad/Video1.mp4"),
            },
            ProductExample {
                name: "Cerradura Inteligente",
                description: "Acceso sin llaves mediante código, huella dactilar o tu móvil. Otorga accesos temporales a distancia.",
                media: Media::video("/videos/Tarjeta%20Seguridad/Video2.mp4"),
            },
            ProductExample {
                name: "Sensores de Apertura",
                description: "Recibe alertas instantáneas en tu móvil si una puerta o ventana se abre inesperadamente.",
                media: Media::video("/videos/Tarjeta%20Seguridad/Video3.mp4"),
            },
        ],
    },
    DomoticsFeature {
        title: "Eficiencia Energética",
        icon: IconKind::Energy,
        glow: "rgba(16, 185, 129, 0.4)",
        accent: "#10B981",
        modal_title: "Hogar Sostenible, Ahorro Inteligente",
        modal_description: "Monitorea tu consumo en tiempo real y deja que el sistema tome decisiones inteligentes. Apaga luces olvidadas, ajusta el termostato y optimiza el uso de electrodomésticos. Reduce tu huella de carbono y tu factura eléctrica sin esfuerzo.",
        modal_media: Media::video("/videos/Tarjeta%20Consumo/Videobanner.mp4"),
        products: [
            ProductExample {
                name: "Medidor de Consumo",
                description: "Monitorea el gasto energético de toda tu casa o de circuitos individuales en tiempo real.",
                media: Media::video("/videos/Tarjeta%20Consumo/Video1.mp4"),
            },
            ProductExample {
                name: "Enchufes Inteligentes",
                description: "Controla y programa el encendido/apagado de cualquier electrodoméstico desde tu móvil.",
                media: Media::video("/videos/Tarjeta%20Consumo/Video2.mp4"),
            },
            ProductExample {
                name: "Controlador de Cargas",
                description: "Gestiona dispositivos de alto consumo, como calentadores, para que funcionen en horas de menor coste energético.",
                media: Media::video("/videos/Tarjeta%20Consumo/Video3.mp4"),
            },
        ],
    },
    DomoticsFeature {
        title: "Acceso por Voz y Remoto",
        icon: IconKind::Cloud,
        glow: "rgba(217, 70, 239, 0.4)",
        accent: "#D946EF",
        modal_title: "Tu Voz es el Mando",
        modal_description: "Integramos los principales asistentes de voz para un control manos libres total. Desde apagar todas las luces al acostarte hasta pedir tu playlist favorita, tu hogar obedece tus palabras. Y con nuestra app, el control viaja contigo a cualquier parte del mundo.",
        modal_media: Media::video("/videos/Tarjeta%20Voz/Videobanner.mp4"),
        products: [
            ProductExample {
                name: "Hub de Automatización",
                description: "El cerebro que unifica todos los dispositivos de diferentes marcas en un solo ecosistema cohesivo.",
                media: Media::video("/videos/Tarjeta%20Voz/Video1.mp4"),
            },
            ProductExample {
                name: "Asistente de Voz",
                description: "Integración nativa con Amazon Alexa, Google Assistant y Apple HomeKit para un control por voz natural.",
                media: Media::video("/videos/Tarjeta%20Voz/Video2.mp4"),
            },
            ProductExample {
                name: "Interfaz Móvil Propia",
                description: "Una app diseñada por y para ti, con la distribución y los controles que realmente necesitas.",
                media: Media::video("/videos/Tarjeta%20Voz/Video3.mp4"),
            },
        ],
    },
];
