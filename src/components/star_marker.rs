use yew::prelude::*;

use crate::model::{DisplayPosition, Star};
use crate::overlay::{Glyph, marker_style};

#[derive(Properties, PartialEq, Clone)]
pub struct StarMarkerProps {
    pub star: Star,
    pub position: DisplayPosition,
    #[prop_or(false)]
    pub ambient: bool,
    #[prop_or_default]
    pub on_click: Option<Callback<Star>>,
}

/// A floating, twinkling star. Content stars are clickable and show their title on hover.
#[function_component(StarMarker)]
pub fn star_marker(props: &StarMarkerProps) -> Html {
    let hovered = use_state(|| false);
    let star = &props.star;
    let g = Glyph::for_star(star, props.ambient);
    let glow = format!("0 0 4px {}", star.color);

    let onclick = match (&props.on_click, props.ambient) {
        (Some(cb), false) => {
            let cb = cb.clone();
            let star = star.clone();
            Some(Callback::from(move |_: MouseEvent| cb.emit(star.clone())))
        }
        _ => None,
    };
    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let pulse = if !props.ambient && *hovered { "star-pulse" } else { "star-twinkle" };

    html! {
        <div class="star-float" style={marker_style(star, props.position, props.ambient)}
            {onclick} {onmouseenter} {onmouseleave}
            role={if props.ambient { "presentation" } else { "button" }}
            aria-label={if props.ambient { String::new() } else { format!("Open blog post: {}", star.title) }}>
            <div class={pulse} style="position:relative; display:flex; align-items:center; justify-content:center;">
                <div style={format!("position:absolute; width:{}px; height:{}px; border-radius:9999px; background:linear-gradient(90deg, transparent 0%, #ffffff 50%, transparent 100%); opacity:0.9; box-shadow:{glow};", g.spike_length, g.spike_thickness)}></div>
                <div style={format!("position:absolute; width:{}px; height:{}px; border-radius:9999px; background:linear-gradient(180deg, transparent 0%, #ffffff 50%, transparent 100%); opacity:0.9; box-shadow:{glow};", g.spike_thickness, g.spike_length)}></div>
                <div style={format!("position:absolute; width:{}px; height:{}px; border-radius:9999px; transform:rotate(45deg); background:linear-gradient(90deg, transparent 0%, #ffffff 50%, transparent 100%); opacity:0.7; box-shadow:{glow};", g.diagonal_length, g.spike_thickness)}></div>
                <div style={format!("position:absolute; width:{}px; height:{}px; border-radius:9999px; transform:rotate(-45deg); background:linear-gradient(90deg, transparent 0%, #ffffff 50%, transparent 100%); opacity:0.7; box-shadow:{glow};", g.diagonal_length, g.spike_thickness)}></div>
                <div style={format!("position:absolute; width:{c}px; height:{c}px; border-radius:9999px; background:#fff; box-shadow:0 0 {}px {c}px {col}, 0 0 {}px {}px {col}80;", g.core * 2.0, g.core * 4.0, g.core * 2.0, c = g.core, col = star.color)}></div>
            </div>
            { if !props.ambient {
                html! { <div style={format!("position:absolute; top:32px; left:50%; transform:translateX(-50%); margin-top:8px; padding:4px 12px; background:rgba(30,41,59,0.9); border:1px solid #475569; color:#fff; font-size:12px; border-radius:4px; white-space:nowrap; pointer-events:none; z-index:30; transition:opacity 0.3s; opacity:{};", if *hovered { 1 } else { 0 })}>
                    { star.title.clone() }
                </div> }
            } else { html! {} } }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn props(on_click: Callback<Star>) -> StarMarkerProps {
        let catalog = Catalog::new(|| 0.5);
        let star = catalog.list_content_stars()[0].clone();
        StarMarkerProps {
            position: DisplayPosition { x: star.x, y: star.y },
            star,
            ambient: false,
            on_click: Some(on_click),
        }
    }

    #[test]
    fn marker_props_stay_equal_while_click_handler_is_reused() {
        let handler = Callback::from(|_: Star| ());
        assert!(props(handler.clone()) == props(handler));
        // a handler rebuilt on every render forces every marker to re-diff
        assert!(props(Callback::from(|_: Star| ())) != props(Callback::from(|_: Star| ())));
    }
}
