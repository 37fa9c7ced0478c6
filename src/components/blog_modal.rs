use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::app::AppContext;
use crate::model::Star;
use crate::services::fetch_teaser;
use crate::state::TeaserTicket;

#[derive(Properties, PartialEq, Clone)]
pub struct BlogModalProps {
    pub star: Option<Star>,
    pub on_close: Callback<()>,
    /// Receives the article id.
    pub on_read_more: Callback<String>,
}

#[function_component(BlogModal)]
pub fn blog_modal(props: &BlogModalProps) -> Html {
    let ctx = use_context::<AppContext>();
    let ticket = use_mut_ref(TeaserTicket::default);
    // None while the teaser request is in flight
    let teaser = use_state(|| None::<String>);

    // Effect: request a teaser for each newly opened star
    {
        let ticket = ticket.clone();
        let teaser = teaser.clone();
        let client = ctx.map(|c| c.text_gen);
        let opened = props.star.as_ref().map(|s| (s.id.clone(), s.title.clone()));
        use_effect_with(opened, move |opened| {
            teaser.set(None);
            match opened {
                Some((_, title)) => {
                    let issued = ticket.borrow_mut().issue();
                    if let Some(client) = client {
                        let title = title.clone();
                        wasm_bindgen_futures::spawn_local(async move {
                            let text = fetch_teaser(client.as_ref(), &title).await;
                            if ticket.borrow().is_current(issued) {
                                teaser.set(Some(text));
                            } else {
                                log::debug!("dropping stale teaser for {title}");
                            }
                        });
                    }
                }
                None => {
                    ticket.borrow_mut().invalidate();
                    teaser.set(None);
                }
            }
            || ()
        });
    }

    // Escape closes
    {
        let on_close = props.on_close.clone();
        let open = props.star.is_some();
        use_effect_with(open, move |open| {
            let listener = match (*open, web_sys::window()) {
                (true, Some(window)) => Some(EventListener::new(&window, "keydown", move |e| {
                    if e.unchecked_ref::<KeyboardEvent>().key() == "Escape" {
                        on_close.emit(());
                    }
                })),
                _ => None,
            };
            move || drop(listener)
        });
    }

    let Some(star) = props.star.clone() else {
        return html! {};
    };

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let read_more = {
        let cb = props.on_read_more.clone();
        let id = star.id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };
    let chip = "display:inline-flex; align-items:center; gap:4px; padding:4px 8px; border-radius:9999px; background:#1e293b; border:1px solid #334155;";

    html! {
        <div style="position:fixed; inset:0; z-index:50; display:flex; align-items:center; justify-content:center; padding:16px;"
            role="dialog" aria-modal="true">
            <div onclick={close.clone()} style="position:absolute; inset:0; background:rgba(0,0,0,0.6); backdrop-filter:blur(4px);"></div>
            <div style="position:relative; width:100%; max-width:672px; background:rgba(15,23,42,0.9); border:1px solid #334155; color:#f1f5f9; border-radius:16px; box-shadow:0 0 50px rgba(0,0,0,0.5); overflow:hidden;">
                <div style={format!("position:relative; height:128px; width:100%; overflow:hidden; background:linear-gradient(135deg, {}40, #0f172a);", star.color)}>
                    <button onclick={close} aria-label="Close"
                        style="position:absolute; top:16px; right:16px; padding:8px 12px; border:none; border-radius:9999px; background:rgba(0,0,0,0.2); color:#fff; font-size:18px; cursor:pointer;">
                        {"✕"}
                    </button>
                </div>
                <div style="padding:32px;">
                    <div style="display:flex; align-items:center; gap:16px; margin-bottom:16px; font-size:14px; color:#94a3b8;">
                        <span style={chip}>{ star.category.clone() }</span>
                        <span>{ star.date.clone() }</span>
                    </div>
                    <h2 style="margin:0 0 16px; font-size:32px; font-weight:700; color:#fff;">{ star.title.clone() }</h2>
                    <p style="margin:0 0 24px; font-size:18px; line-height:1.6; color:#cbd5e1;">{ star.excerpt.clone() }</p>
                    <div style="margin-bottom:32px; padding:16px; border-radius:8px; background:rgba(30,41,59,0.5); border:1px solid rgba(51,65,85,0.5);">
                        <h4 style="margin:0 0 8px; font-size:12px; font-weight:700; letter-spacing:0.08em; text-transform:uppercase; color:#818cf8;">{"Gemini Insight"}</h4>
                        { match &*teaser {
                            None => html! {
                                <div style="display:flex; gap:4px;" aria-label="Loading">
                                    { for [0, 75, 150].iter().map(|delay| html! {
                                        <div class="bounce" style={format!("width:8px; height:8px; border-radius:9999px; background:#818cf8; animation-delay:{delay}ms;")}></div>
                                    }) }
                                </div>
                            },
                            Some(text) => html! {
                                <p style="margin:0; font-size:14px; font-style:italic; color:#c7d2fe;">{ format!("\"{text}\"") }</p>
                            },
                        } }
                    </div>
                    <div style="display:flex; justify-content:flex-end;">
                        <button onclick={read_more}
                            style="display:flex; align-items:center; gap:8px; padding:12px 24px; border:none; border-radius:9999px; background:#fff; color:#0f172a; font-weight:700; cursor:pointer;">
                            {"Read Full Story"}
                            <span>{"→"}</span>
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn render(star: Option<Star>) -> String {
        let renderer = yew::ServerRenderer::<BlogModal>::with_props(move || BlogModalProps {
            star,
            on_close: Callback::noop(),
            on_read_more: Callback::noop(),
        });
        pollster::block_on(renderer.render())
    }

    #[test]
    fn opened_modal_waits_for_its_own_teaser() {
        let catalog = Catalog::new(|| 0.5);
        let star = catalog.get_article_by_id("1").cloned();
        let html = render(star.clone());
        assert!(html.contains(&star.map(|s| s.title).unwrap_or_default()), "{html}");
        assert!(html.contains("aria-label=\"Loading\""), "{html}");
    }

    #[test]
    fn closed_modal_renders_nothing() {
        let html = render(None);
        assert!(!html.contains("dialog"), "{html}");
    }
}
