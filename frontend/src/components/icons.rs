use yew::prelude::*;

use crate::content::IconKind;

/// Outline (stroked) or solid (filled) 24x24 glyph.
struct Glyph {
    filled: bool,
    stroke_width: &'static str,
    paths: &'static [&'static str],
}

const fn outline(stroke_width: &'static str, paths: &'static [&'static str]) -> Glyph {
    Glyph {
        filled: false,
        stroke_width,
        paths,
    }
}

const fn solid(paths: &'static [&'static str]) -> Glyph {
    Glyph {
        filled: true,
        stroke_width: "0",
        paths,
    }
}

const LIGHTBULB: &str = "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z";
const BUILDING: &str = "M3.75 21h16.5M4.5 3h15M5.25 3v18m13.5-18v18M9 6.75h1.5M12 6.75h1.5M15 6.75h1.5M9 10.5h1.5M12 10.5h1.5M15 10.5h1.5M9 14.25h1.5M12 14.25h1.5M15 14.25h1.5M9 18h1.5M12 18h1.5M15 18h1.5";
const SHIELD_CHECK: &str = "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z";
const MOBILE: &str = "M12 18h.01M8 21h8a2 2 0 002-2V5a2 2 0 00-2-2H8a2 2 0 00-2 2v14a2 2 0 002 2z";

fn glyph(kind: IconKind) -> Glyph {
    match kind {
        IconKind::Consulting => outline("2", &[LIGHTBULB]),
        IconKind::Interface => outline("2", &[MOBILE]),
        IconKind::Support => outline("2", &[SHIELD_CHECK]),
        IconKind::Apartment | IconKind::Business => outline("1.5", &[BUILDING]),
        IconKind::Home => outline("1.5", &["M2.25 12l8.954-8.955c.44-.439 1.152-.439 1.591 0L21.75 12M4.5 9.75v10.125c0 .621.504 1.125 1.125 1.125H9.75v-4.875c0-.621.504-1.125 1.125-1.125h2.25c.621 0 1.125.504 1.125 1.125V21h4.125c.621 0 1.125-.504 1.125-1.125V9.75M8.25 21h8.25"]),
        IconKind::Hub => outline("1.5", &["M8.25 3.75H19.5M8.25 3.75v16.5M8.25 3.75h-3.75c-.621 0-1.125.504-1.125 1.125v14.25c0 .621.504 1.125 1.125 1.125h3.75m0-16.5h11.25c.621 0 1.125.504 1.125 1.125v14.25c0 .621-.504 1.125-1.125 1.125H8.25m0-16.5v16.5m0 0H4.5m15 0h-15"]),
        IconKind::Plug => outline("1.5", &["M5.636 5.636a9 9 0 1012.728 0M12 3v9"]),
        IconKind::Lock => outline("1.5", &["M16.5 10.5V6.75a4.5 4.5 0 10-9 0v3.75m-.75 11.25h10.5a2.25 2.25 0 002.25-2.25v-6.75a2.25 2.25 0 00-2.25-2.25H6.75a2.25 2.25 0 00-2.25 2.25v6.75a2.25 2.25 0 002.25 2.25z"]),
        IconKind::Radar => outline("1.5", &["M2.036 12.322a1.012 1.012 0 010-.639l4.418-2.209a1.012 1.012 0 011.123.083l4.093 3.509a1.011 1.011 0 001.217 0l4.093-3.509a1.012 1.012 0 011.123-.083l4.418 2.21a1.012 1.012 0 010 .638l-4.418 2.21a1.012 1.012 0 01-1.123-.082l-4.093-3.51a1.011 1.011 0 00-1.217 0l-4.093 3.509a1.012 1.012 0 01-1.123.083L2.036 12.322z"]),
        IconKind::Thermometer => outline("1.5", &[
            "M12 6v6m0 0v6m0-6h6m-6 0H6",
            "M12 12.75a.75.75 0 100-1.5.75.75 0 000 1.5z",
            "M12 21a9 9 0 100-18 9 9 0 000 18z",
        ]),
        IconKind::Robot => outline("1.5", &["M7.5 7.5h-.75A2.25 2.25 0 004.5 9.75v7.5a2.25 2.25 0 002.25 2.25h7.5a2.25 2.25 0 002.25-2.25v-7.5a2.25 2.25 0 00-2.25-2.25h-.75m0-3l-3-3m0 0l-3 3m3-3v11.25m6.75 2.25h.75a2.25 2.25 0 002.25-2.25v-7.5a2.25 2.25 0 00-2.25-2.25h-.75"]),
        IconKind::Appliance => outline("1.5", &[
            "M13.5 21v-7.5c0-.933.224-1.83.627-2.643a10.457 10.457 0 00-4.254 0c.403.813.627 1.71.627 2.643V21m4.5-3.75h-6a.375.375 0 01-.375-.375v-1.5c0-.207.168-.375.375-.375h6c.207 0 .375.168.375.375v1.5c0 .207-.168.375-.375.375z",
            "M6 3h12M6 3v12a2.25 2.25 0 002.25 2.25h7.5A2.25 2.25 0 0018 15V3",
        ]),
        IconKind::Speaker => outline("1.5", &["M19.114 5.636a9 9 0 010 12.728M16.463 8.288a5.25 5.25 0 010 7.424M6.75 8.25l4.72-4.72a.75.75 0 011.28.53v15.88a.75.75 0 01-1.28.53l-4.72-4.72H4.51c-.88 0-1.704-.507-1.938-1.354A9.01 9.01 0 012 12c0-.83.112-1.633.322-2.396C2.556 8.756 3.379 8.25 4.26 8.25h2.49z"]),
        IconKind::Lightbulb => outline("1.5", &[LIGHTBULB]),
        IconKind::Play => solid(&["M8 5v14l11-7z"]),
        IconKind::Climate => outline("1.5", &["M12 2l2.121 2.121L12 6.243 9.879 4.121 12 2zm0 20l-2.121-2.121L12 17.757l2.121 2.122L12 22zM2 12l2.121-2.121L6.243 12l-2.122 2.121L2 12zm20 0l-2.121 2.121L17.757 12l2.122-2.121L22 12zM5.636 5.636l1.414 1.414L8.464 8.464 7.05 7.05 5.636 5.636zm12.728 12.728l-1.414-1.414L15.536 15.536l1.414 1.414-1.414-1.414zM5.636 18.364l1.414-1.414L8.464 15.536 7.05 16.95l-1.414 1.414zm12.728-12.728l-1.414 1.414L15.536 8.464l1.414-1.414 1.414 1.414z"]),
        IconKind::Entertainment => outline("1.5", &[
            "M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664z",
            "M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        ]),
        IconKind::Shield => outline("1.5", &[SHIELD_CHECK]),
        IconKind::Energy => outline("1.5", &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"]),
        IconKind::Cloud => solid(&["M19.35 10.04C18.67 6.59 15.64 4 12 4 9.11 4 6.6 5.64 5.35 8.04 2.34 8.36 0 10.91 0 14c0 3.31 2.69 6 6 6h13c2.76 0 5-2.24 5-5 0-2.64-2.05-4.78-4.65-4.96z"]),
        IconKind::Code => outline("2", &["M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4"]),
        IconKind::Mobile => outline("2", &[MOBILE]),
        IconKind::Link => outline("2", &["M13.828 10.172a4 4 0 00-5.656 0l-4 4a4 4 0 105.656 5.656l1.102-1.101m-.758-4.899a4 4 0 005.656 0l4-4a4 4 0 00-5.656-5.656l-1.1 1.1"]),
        IconKind::TrendUp => outline("2", &["M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"]),
    }
}

/// Page chrome that is not part of the content model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIcon {
    Menu,
    Close,
    Sun,
    Moon,
    Check,
    WhatsApp,
    Instagram,
    X,
}

fn ui_glyph(icon: UiIcon) -> Glyph {
    match icon {
        UiIcon::Menu => outline("2", &["M4 6h16M4 12h16m-7 6h7"]),
        UiIcon::Close => outline("2", &["M6 18L18 6M6 6l12 12"]),
        UiIcon::Sun => outline("2", &["M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"]),
        UiIcon::Moon => outline("2", &["M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"]),
        UiIcon::Check => outline("2", &["M20 6L9 17l-5-5"]),
        UiIcon::WhatsApp => solid(&["M19.043 4.957c-2.26-2.26-5.283-3.515-8.485-3.515C4.54 1.442 0 5.982 0 12.001c0 2.021.523 3.938 1.48 5.636L0 24l6.364-1.48c1.698.957 3.615 1.48 5.637 1.48h.001c6.018 0 10.958-4.94 10.958-10.958 0-3.203-1.255-6.226-3.516-8.485zM12.001 22.123c-1.84 0-3.593-.485-5.116-1.385l-.366-.218-3.81 1.057 1.074-3.722-.24-.378c-.997-1.574-1.52-3.41-1.52-5.32 0-5.183 4.226-9.409 9.41-9.409 2.522 0 4.896.98 6.654 2.738s2.738 4.132 2.738 6.654c-.001 5.183-4.227 9.409-9.41 9.409zm5.34-6.958c-.28-.141-1.652-.814-1.908-.908-.256-.094-.442-.14-.628.14-.186.281-.721.908-.883 1.094-.162.186-.324.205-.604.064-.28-.141-1.183-.436-2.253-1.39-.834-.744-1.394-1.652-1.556-1.928-.162-.281-.019-.436.122-.578.129-.129.281-.324.422-.486.141-.162.186-.281.28-.467.094-.186.047-.35-.018-.492-.065-.141-.628-1.513-.86-2.075-.22-.544-.442-.467-.604-.475-.15-.009-.324-.009-.496-.009s-.422.065-.65.324c-.227.256-.883.86-.883 2.094s.908 2.426 1.033 2.593c.125.168 1.793 2.738 4.343 3.822.595.256 1.057.41 1.42.536.604.205 1.144.177 1.565.105.467-.082 1.652-.676 1.887-1.332.235-.656.235-1.215.162-1.332-.072-.117-.258-.186-.538-.328z"]),
        UiIcon::Instagram => outline("2", &[
            "M7 2h10a5 5 0 015 5v10a5 5 0 01-5 5H7a5 5 0 01-5-5V7a5 5 0 015-5z",
            "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
            "M17.5 6.5h.01",
        ]),
        UiIcon::X => solid(&["M18.244 2.25h3.308l-7.227 8.26 8.502 11.24H16.17l-5.214-6.817L4.99 21.75H1.68l7.73-8.835L1.254 2.25H8.08l4.713 6.231zm-1.161 17.52h1.833L7.084 4.126H5.117z"]),
    }
}

fn render(glyph: Glyph, style: &AttrValue) -> Html {
    let paths = glyph.paths.iter().map(|d| {
        html! { <path stroke-linecap="round" stroke-linejoin="round" d={*d} /> }
    });
    if glyph.filled {
        html! {
            <svg style={style.clone()} xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor">
                { for paths }
            </svg>
        }
    } else {
        html! {
            <svg style={style.clone()} xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width={glyph.stroke_width}>
                { for paths }
            </svg>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub style: AttrValue,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    render(glyph(props.kind), &props.style)
}

#[derive(Properties, PartialEq)]
pub struct UiIconProps {
    pub icon: UiIcon,
    #[prop_or_default]
    pub style: AttrValue,
}

#[function_component(ChromeIcon)]
pub fn chrome_icon(props: &UiIconProps) -> Html {
    render(ui_glyph(props.icon), &props.style)
}
