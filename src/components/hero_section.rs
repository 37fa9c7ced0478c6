use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use super::app::AppContext;
use crate::config::{QUOTE_FADE_MS, QUOTE_ROTATE_MS};
use crate::services::fetch_daily_quote;
use crate::state::{QuoteAction, QuoteRotation};

#[derive(Properties, PartialEq, Clone)]
pub struct HeroSectionProps {
    #[prop_or(false)]
    pub blurred: bool,
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroSectionProps) -> Html {
    let ctx = use_context::<AppContext>();
    let rotation = use_reducer(QuoteRotation::default);
    let visible = use_state(|| true);

    // Daily quote, appended once it arrives
    {
        let dispatcher = rotation.dispatcher();
        let client = ctx.map(|c| c.text_gen);
        use_effect_with((), move |_| {
            if let Some(client) = client {
                wasm_bindgen_futures::spawn_local(async move {
                    let quote = fetch_daily_quote(client.as_ref()).await;
                    dispatcher.dispatch(QuoteAction::Fetched(quote));
                });
            }
            || ()
        });
    }

    // Rotation: fade out, swap after the fade, fade back in
    {
        let dispatcher = rotation.dispatcher();
        let visible = visible.clone();
        use_effect_with((), move |_| {
            let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let tick = {
                let pending = pending.clone();
                Interval::new(QUOTE_ROTATE_MS, move || {
                    visible.set(false);
                    let dispatcher = dispatcher.clone();
                    let visible = visible.clone();
                    *pending.borrow_mut() = Some(Timeout::new(QUOTE_FADE_MS, move || {
                        dispatcher.dispatch(QuoteAction::Advance);
                        visible.set(true);
                    }));
                })
            };
            move || {
                drop(tick);
                pending.borrow_mut().take();
            }
        });
    }

    let quote = rotation.current().clone();
    let fade = if *visible {
        "opacity:1; transform:translateY(0); filter:blur(0);"
    } else {
        "opacity:0; transform:translateY(-16px); filter:blur(4px);"
    };
    let blur = if props.blurred { "filter:blur(4px); opacity:0.5;" } else { "" };

    html! {
        <div style={format!("position:absolute; inset:0; z-index:50; pointer-events:none; display:flex; flex-direction:column; align-items:center; padding-top:112px; transition:all 0.7s; {blur}")}>
            <div style={format!("max-width:896px; width:100%; padding:0 24px; display:flex; flex-direction:column; align-items:center; text-align:center; transition:all {QUOTE_FADE_MS}ms ease-in-out; {fade}")}>
                <p style="margin:0; font-size:clamp(24px, 3.5vw, 36px); font-weight:300; line-height:1.6; letter-spacing:0.02em; color:#fff; text-shadow:0 0 20px rgba(0,0,0,0.8);">
                    { quote.text.clone() }
                </p>
                <div style="width:80px; height:6px; margin:32px 0; border-radius:9999px; background:linear-gradient(90deg, #9333ea, #6366f1); box-shadow:0 0 15px rgba(139,92,246,0.6);"></div>
                <p style="margin:0; font-size:13px; font-weight:700; letter-spacing:0.3em; text-transform:uppercase; color:#c7d2fe;">
                    { quote.author.clone() }
                </p>
            </div>
        </div>
    }
}
