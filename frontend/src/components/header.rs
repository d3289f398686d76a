use yew::prelude::*;

use super::icons::{ChromeIcon, UiIcon};
use crate::content::Section;
use crate::overlay::Overlay;
use crate::state::AppAction;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub sections: &'static [Section],
    pub active: AttrValue,
    pub theme: Theme,
    pub is_mobile: bool,
    pub menu_open: bool,
    pub on_action: Callback<AppAction>,
    /// Scroll request for a section id.
    pub on_navigate: Callback<&'static str>,
}

fn nav_link(section: &'static Section, current: bool, class: &'static str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <a
            href={format!("#{}", section.id)}
            class={classes!(class, current.then_some("active"))}
            aria-current={current.then_some("page")}
            onclick={on_click}
        >
            { section.label }
        </a>
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let link_click = |section: &'static Section, close_menu: bool| {
        let on_navigate = props.on_navigate.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section.id);
            if close_menu {
                on_action.emit(AppAction::Close(Overlay::MobileMenu));
            }
        })
    };

    let toggle_theme = props.on_action.reform(|_: MouseEvent| AppAction::ToggleTheme);
    let open_menu = props.on_action.reform(|_: MouseEvent| AppAction::OpenMenu);
    let close_menu = props.on_action.reform(|_: MouseEvent| AppAction::Close(Overlay::MobileMenu));

    let (theme_icon, theme_label) = if props.theme.is_night() {
        (UiIcon::Sun, "Cambiar a tema claro")
    } else {
        (UiIcon::Moon, "Cambiar a tema oscuro")
    };

    html! {
        <>
            <header class={classes!("site-header", props.is_mobile.then_some("mobile"))}>
                <div class="logo">{"ioniq"}</div>
                <div class="header-controls">
                    if !props.is_mobile {
                        <nav class="nav">
                            { for props.sections.iter().map(|section| {
                                let current = props.active.as_str() == section.id;
                                nav_link(section, current, "nav-link", link_click(section, false))
                            }) }
                        </nav>
                    }
                    <button class="theme-toggle" aria-label={theme_label} onclick={toggle_theme}>
                        <ChromeIcon icon={theme_icon} style="width: 22px; height: 22px;" />
                    </button>
                    if props.is_mobile {
                        <button class="menu-button" aria-label="Abrir menú" onclick={open_menu}>
                            <ChromeIcon icon={UiIcon::Menu} style="width: 28px; height: 28px;" />
                        </button>
                    }
                </div>
            </header>

            if props.is_mobile && props.menu_open {
                <>
                <div class="mobile-menu-overlay" onclick={close_menu.clone()}></div>
                <div class="mobile-menu-container">
                    <div class="mobile-menu-header">
                        <button class="menu-button" aria-label="Cerrar menú" onclick={close_menu}>
                            <ChromeIcon icon={UiIcon::Close} style="width: 28px; height: 28px;" />
                        </button>
                    </div>
                    <nav class="mobile-nav">
                        { for props.sections.iter().map(|section| {
                            let current = props.active.as_str() == section.id;
                            nav_link(section, current, "mobile-nav-link", link_click(section, true))
                        }) }
                    </nav>
                </div>
                </>
            }
        </>
    }
}
