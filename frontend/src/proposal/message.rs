use crate::proposal::estimator::ProposalConfiguration;

/// Prefilled text for the contact form when a quote is requested.
pub fn quote_request_message(config: &ProposalConfiguration) -> String {
    let systems = if config.selected_systems().is_empty() {
        "No especificado".to_string()
    } else {
        config.selected_systems().join(", ")
    };
    format!(
        "Hola, me gustaría solicitar una propuesta para un proyecto con las siguientes características:\n\n- Tipo: {}\n- Área: {} m²\n- Sistemas de interés: {}.\n\nQuedo atento a su respuesta.",
        config.property_type().label(),
        config.area_square_meters(),
        systems,
    )
}

/// `wa.me` deep link that opens a chat with `number` and `message` typed in.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(message)
    )
}

/// Message sent from the contact form, signed with the visitor's details.
pub fn contact_message(name: &str, email: &str, message: &str) -> String {
    let mut text = String::new();
    if !name.trim().is_empty() {
        text.push_str(&format!("Nombre: {}\n", name.trim()));
    }
    if !email.trim().is_empty() {
        text.push_str(&format!("Email: {}\n", email.trim()));
    }
    if !text.is_empty() {
        text.push('\n');
    }
    text.push_str(message.trim());
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::estimator::PropertyType;

    #[test]
    fn message_without_systems_uses_the_fallback() {
        let config = ProposalConfiguration::default();
        assert_eq!(
            quote_request_message(&config),
            "Hola, me gustaría solicitar una propuesta para un proyecto con las siguientes características:\n\n- Tipo: Apartamento\n- Área: 100 m²\n- Sistemas de interés: No especificado.\n\nQuedo atento a su respuesta."
        );
    }

    #[test]
    fn message_lists_systems_in_selection_order() {
        let mut config = ProposalConfiguration::default();
        config.set_property_type(PropertyType::Business);
        config.set_area(750);
        config.toggle_system("Seguridad");
        config.toggle_system("Iluminación");
        assert_eq!(
            quote_request_message(&config),
            "Hola, me gustaría solicitar una propuesta para un proyecto con las siguientes características:\n\n- Tipo: Negocio\n- Área: 750 m²\n- Sistemas de interés: Seguridad, Iluminación.\n\nQuedo atento a su respuesta."
        );
    }

    #[test]
    fn whatsapp_link_percent_encodes_the_text() {
        assert_eq!(
            whatsapp_link("573001234567", "Hola, área: 40 m²\n¿Sí?"),
            "https://wa.me/573001234567?text=Hola%2C%20%C3%A1rea%3A%2040%20m%C2%B2%0A%C2%BFS%C3%AD%3F"
        );
    }

    #[test]
    fn contact_message_skips_blank_fields() {
        assert_eq!(contact_message("", " ", "Hola"), "Hola");
        assert_eq!(
            contact_message("Ana", "ana@example.com", " Quiero domótica \n"),
            "Nombre: Ana\nEmail: ana@example.com\n\nQuiero domótica"
        );
    }
}
