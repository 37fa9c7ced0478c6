use yew::prelude::*;

use super::app::AppContext;
use crate::route::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct LinkProps {
    pub to: Route,
    #[prop_or_default]
    pub style: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

/// In-app anchor: keeps the real href but navigates without a reload.
#[function_component(Link)]
pub fn link(props: &LinkProps) -> Html {
    let ctx = use_context::<AppContext>();
    let onclick = {
        let to = props.to.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(ctx) = &ctx {
                e.prevent_default();
                ctx.navigate.emit(to.clone());
            }
        })
    };
    html! {
        <a href={props.to.to_path()} style={props.style.clone()} {onclick}>{ props.children.clone() }</a>
    }
}
