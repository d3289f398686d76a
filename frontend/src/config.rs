use thiserror::Error;

/// Viewports narrower than this get the mobile layout.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

const DEFAULT_WHATSAPP_NUMBER: &str = "573000000000";
const DEFAULT_INSTAGRAM_URL: &str = "https://www.instagram.com/";
const DEFAULT_X_URL: &str = "https://x.com/";
const DEFAULT_MEDIA_BASE_URL: &str = "https://spa-ioniq.vercel.app";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("WhatsApp number must be digits only, got {0:?}")]
    InvalidWhatsAppNumber(String),
}

pub fn get_media_base_url() -> &'static str {
    option_env!("IONIQ_MEDIA_BASE_URL").unwrap_or(DEFAULT_MEDIA_BASE_URL)
}

pub fn get_instagram_url() -> &'static str {
    option_env!("IONIQ_INSTAGRAM_URL").unwrap_or(DEFAULT_INSTAGRAM_URL)
}

pub fn get_x_url() -> &'static str {
    option_env!("IONIQ_X_URL").unwrap_or(DEFAULT_X_URL)
}

pub fn get_whatsapp_number() -> Result<&'static str, ConfigError> {
    validate_whatsapp_number(option_env!("IONIQ_WHATSAPP_NUMBER").unwrap_or(DEFAULT_WHATSAPP_NUMBER))
}

fn validate_whatsapp_number(raw: &str) -> Result<&str, ConfigError> {
    let number = raw.trim();
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ConfigError::InvalidWhatsAppNumber(raw.to_string()));
    }
    Ok(number)
}

/// Resolves a content path against the media host. Absolute URLs pass through.
pub fn media_url(src: &str) -> String {
    resolve_media(get_media_base_url(), src)
}

fn resolve_media(base: &str, src: &str) -> String {
    if src.starts_with('/') {
        format!("{}{}", base.trim_end_matches('/'), src)
    } else {
        src.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_number_must_be_digits() {
        assert_eq!(validate_whatsapp_number("573001112233"), Ok("573001112233"));
        assert_eq!(validate_whatsapp_number(" 573001112233\n"), Ok("573001112233"));
        assert!(matches!(
            validate_whatsapp_number("+57 300"),
            Err(ConfigError::InvalidWhatsAppNumber(_))
        ));
        assert!(validate_whatsapp_number("").is_err());
    }

    #[test]
    fn default_number_is_valid() {
        assert!(validate_whatsapp_number(DEFAULT_WHATSAPP_NUMBER).is_ok());
    }

    #[test]
    fn relative_media_goes_through_the_media_host() {
        assert_eq!(
            resolve_media("https://cdn.example/", "/videos/a.mp4"),
            "https://cdn.example/videos/a.mp4"
        );
        assert_eq!(
            resolve_media("https://cdn.example", "https://other/b.mp4"),
            "https://other/b.mp4"
        );
    }
}
