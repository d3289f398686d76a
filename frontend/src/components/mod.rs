pub mod animated_text;
pub mod background;
pub mod configurator;
pub mod contact;
pub mod header;
pub mod icons;
pub mod modals;
pub mod projects;
