use super::IconKind;

#[derive(Debug, PartialEq)]
pub struct CatalogProduct {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct CatalogCategory {
    pub name: &'static str,
    pub icon: IconKind,
    pub products: &'static [CatalogProduct],
}

const fn product(name: &'static str, description: &'static str) -> CatalogProduct {
    CatalogProduct { name, description }
}

pub static CATALOG: [CatalogCategory; 9] = [
    CatalogCategory {
        name: "Control Central y Red",
        icon: IconKind::Hub,
        products: &[
            product("Asistentes de Voz", "Controla tu hogar con comandos de voz."),
            product("Hubs/Bridges", "Unifica dispositivos de diferentes protocolos."),
            product("Controladores Domóticos", "El cerebro avanzado para automatizaciones complejas."),
            product("Control Remoto Universal", "Un solo mando para todos tus aparatos."),
            product("Routers Wi-Fi Mesh", "Cobertura Wi-Fi total y estable en todo tu hogar."),
        ],
    },
    CatalogCategory {
        name: "Electricidad y Energía",
        icon: IconKind::Plug,
        products: &[
            product("Interruptores Inteligentes", "Moderniza tus luces sin cambiar las bombillas."),
            product("Módulos de Relé", "Domotiza cualquier circuito desde el cajetín."),
            product("Enchufes Inteligentes", "Controla y programa cualquier electrodoméstico."),
            product("Regletas Inteligentes", "Gestiona varios dispositivos de forma individual."),
            product("Disyuntores Inteligentes", "Control y protección desde el cuadro eléctrico."),
            product("Medidores de Consumo", "Monitoriza tu gasto energético en tiempo real."),
        ],
    },
    CatalogCategory {
        name: "Iluminación",
        icon: IconKind::Lightbulb,
        products: &[
            product("Bombillas Inteligentes", "Millones de colores y tonalidades de blanco."),
            product("Tiras de Luz LED", "Iluminación ambiental versátil y espectacular."),
            product("Paneles de Luz", "Crea murales de luz decorativos y dinámicos."),
            product("Controladores de LED", "Haz inteligentes tus tiras LED convencionales."),
            product("Sensores de Luminosidad", "Ajuste automático de la luz según el ambiente."),
        ],
    },
    CatalogCategory {
        name: "Seguridad y Accesos",
        icon: IconKind::Lock,
        products: &[
            product("Cámaras de Seguridad", "Vigila tu hogar desde cualquier lugar."),
            product("Timbres con Video", "Ve y habla con tus visitas estés donde estés."),
            product("Mirillas Digitales", "La mirilla tradicional, ahora inteligente."),
            product("Cerraduras Inteligentes", "Acceso sin llaves con código, huella o móvil."),
            product("Abre-puertas de Garaje", "Controla la puerta de tu garaje a distancia."),
            product("Sensores de Vibración", "Detecta roturas de cristal o golpes."),
            product("Botones de Pánico", "Alerta inmediata en caso de emergencia."),
        ],
    },
    CatalogCategory {
        name: "Sensores Específicos",
        icon: IconKind::Radar,
        products: &[
            product("Sensores de Movimiento", "Automatiza luces y alertas con la detección de paso."),
            product("Sensores de Presencia", "Detección precisa de presencia humana, incluso inmóvil."),
            product("Sensores de Apertura", "Recibe notificaciones de puertas y ventanas abiertas."),
            product("Sensores de T/H", "Controla la temperatura y humedad de cada estancia."),
            product("Detectores de Humo y Gas", "Protección esencial contra incendios y fugas."),
            product("Sensores de Fugas de Agua", "Evita desastres por inundación con alertas tempranas."),
        ],
    },
    CatalogCategory {
        name: "Climatización",
        icon: IconKind::Thermometer,
        products: &[
            product("Termostatos Inteligentes", "Optimiza el confort y ahorra en tu factura energética."),
            product("Cabezales Termostáticos", "Control individual de la temperatura de cada radiador."),
            product("Controladores para A/C", "Convierte tu aire acondicionado en un dispositivo smart."),
            product("Calefactores Inteligentes", "Calor instantáneo y controlable desde tu móvil."),
        ],
    },
    CatalogCategory {
        name: "Automatización",
        icon: IconKind::Robot,
        products: &[
            product("Motores para Persianas", "Sube y baja tus persianas y cortinas automáticamente."),
            product("Smart Glass", "Controla la privacidad y la luz con un solo toque."),
            product("Robots Aspiradores", "Limpieza autónoma e inteligente para tu hogar."),
            product("Válvulas de Agua y Gas", "Corta el suministro a distancia en caso de fuga."),
            product("Controladores de Riego", "Riego inteligente y eficiente para tu jardín."),
            product("Estaciones Meteorológicas", "Datos climáticos precisos para tus automatizaciones."),
        ],
    },
    CatalogCategory {
        name: "Electrodomésticos",
        icon: IconKind::Appliance,
        products: &[
            product("Cafeteras Inteligentes", "Despierta con el café recién hecho a tu gusto."),
            product("Neveras Inteligentes", "Gestiona tus alimentos y recibe recetas."),
            product("Lavadoras y Secadoras", "Controla el ciclo de lavado desde cualquier lugar."),
            product("Robots de Cocina", "Cocina guiada y control remoto para tus platos."),
            product("Dispensadores para Mascotas", "Alimenta a tus mascotas estés donde estés."),
        ],
    },
    CatalogCategory {
        name: "Audio y Video",
        icon: IconKind::Speaker,
        products: &[
            product("Altavoces Multi-room", "Sonido sincronizado en toda la casa."),
            product("Dispositivos de Streaming", "Convierte cualquier TV en una Smart TV avanzada."),
            product("Switches HDMI Inteligentes", "Cambia de fuente de video automáticamente."),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_empty_categories() {
        for category in &CATALOG {
            assert!(!category.products.is_empty(), "{}", category.name);
        }
    }
}
