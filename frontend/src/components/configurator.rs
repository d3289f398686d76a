use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::icons::Icon;
use crate::content::proposal::{property_icon, PROPOSAL_SYSTEMS};
use crate::proposal::estimator::{AREA_MAX, AREA_MIN, AREA_STEP};
use crate::proposal::{parse_area, PropertyType, ProposalConfiguration, Tier};
use crate::state::AppAction;

fn tier_color(tier: Tier) -> &'static str {
    match tier {
        Tier::Basico => "#10B981",
        Tier::Avanzado => "#F59E0B",
        Tier::Premium => "#EF4444",
    }
}

fn icon_color(selected: bool) -> String {
    let color = if selected { "var(--accent-color)" } else { "var(--text-secondary)" };
    format!("width: 32px; height: 32px; color: {};", color)
}

#[derive(Properties, PartialEq)]
pub struct ConfiguratorProps {
    pub config: ProposalConfiguration,
    pub is_mobile: bool,
    pub on_action: Callback<AppAction>,
    pub on_request_quote: Callback<()>,
}

#[function_component(Configurator)]
pub fn configurator(props: &ConfiguratorProps) -> Html {
    let config = &props.config;
    let result = config.estimate();

    let on_area = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            match parse_area(&input.value()) {
                Ok(area) => on_action.emit(AppAction::SetArea(area)),
                Err(err) => log::warn!("Rejected slider value: {}", err),
            }
        })
    };
    let request_quote = props.on_request_quote.reform(|_: MouseEvent| ());

    let type_tiles: Vec<Html> = PropertyType::ALL.iter().map(|&property_type| {
        let selected = config.property_type() == property_type;
        let onclick = props
            .on_action
            .reform(move |_: MouseEvent| AppAction::SetPropertyType(property_type));
        html! {
            <div class={classes!("proposal-option-card", selected.then_some("active"))} {onclick}>
                <Icon kind={property_icon(property_type)} style={icon_color(selected)} />
                <span>{ property_type.label() }</span>
            </div>
        }
    }).collect();

    let system_tiles = PROPOSAL_SYSTEMS.iter().map(|system| {
        let selected = config.is_selected(system.name);
        let onclick = props
            .on_action
            .reform(move |_: MouseEvent| AppAction::ToggleSystem(system.name.to_string()));
        let color = if selected { "var(--accent-color)" } else { "var(--text-main)" };
        html! {
            <div key={system.id} class={classes!("proposal-feature-card", selected.then_some("active"))} {onclick}>
                <div style={format!("color: {};", color)}>
                    <Icon kind={system.icon} style="width: 24px; height: 24px;" />
                </div>
                <span class="proposal-feature-name">{ system.name }</span>
            </div>
        }
    });

    let grid_columns = if props.is_mobile { "1fr" } else { "1.5fr 1fr" };

    html! {
        <div class="proposal-grid" style={format!("grid-template-columns: {};", grid_columns)}>
            <div class="proposal-config">
                <div>
                    <h3 class="proposal-section-label">{"1. Tipo de Espacio"}</h3>
                    <div class="proposal-type-grid">{ for type_tiles }</div>
                </div>

                <div>
                    <h3 class="proposal-section-label">
                        { format!("2. Área Aproximada: {} m²", config.area_square_meters()) }
                    </h3>
                    <div class="custom-slider-container">
                        <input
                            type="range"
                            class="custom-range"
                            min={AREA_MIN.to_string()}
                            max={AREA_MAX.to_string()}
                            step={AREA_STEP.to_string()}
                            value={config.area_square_meters().to_string()}
                            oninput={on_area}
                        />
                        <div class="slider-scale">
                            <span>{"40m²"}</span>
                            <span>{"500m²"}</span>
                            <span>{"1000m²"}</span>
                        </div>
                    </div>
                </div>

                <div>
                    <h3 class="proposal-section-label">{"3. Sistemas de Interés"}</h3>
                    <div class="proposal-feature-grid">{ for system_tiles }</div>
                </div>
            </div>

            <div class="proposal-summary-card">
                <h3 class="proposal-summary-title">{"Resumen Estimado"}</h3>
                <div class="proposal-summary-item">
                    <span>{"Tipo:"}</span>
                    <span class="proposal-summary-value">{ config.property_type().label() }</span>
                </div>
                <div class="proposal-summary-item">
                    <span>{"Área:"}</span>
                    <span class="proposal-summary-value">{ format!("{} m²", config.area_square_meters()) }</span>
                </div>
                <div class="proposal-summary-item">
                    <span>{"Sistemas:"}</span>
                    <span class="proposal-summary-value">
                        { format!("{} seleccionados", config.selected_systems().len()) }
                    </span>
                </div>

                <div style="margin-top: 10px;">
                    <div class="proposal-summary-item">
                        <span>{"Nivel de Automatización:"}</span>
                        <span style={format!("color: {}; font-weight: 700;", tier_color(result.tier))}>
                            { result.tier.label() }
                        </span>
                    </div>
                    <div class="complexity-bar">
                        <div class="complexity-bar-fill" style={format!("width: {}%;", result.score)}></div>
                    </div>
                    <p class="complexity-blurb">{ result.tier.blurb() }</p>
                </div>

                <button class="cta-button cta-accent" onclick={request_quote}>
                    {"SOLICITAR PRESUPUESTO"}
                </button>
            </div>
        </div>
    }
}
