use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{blog_post_page::BlogPostPage, universe_page::UniversePage};
use crate::catalog::Catalog;
use crate::config::TextGenConfig;
use crate::route::Route;
use crate::services::GeminiClient;
use crate::util;

// Shared session data, so pages can read articles and navigate without prop drilling
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Rc<Catalog>,
    pub text_gen: Rc<GeminiClient>,
    pub navigate: Callback<Route>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
            && Rc::ptr_eq(&self.text_gen, &other.text_gen)
            && self.navigate == other.navigate
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(Route::current);
    let catalog = use_state(|| Rc::new(Catalog::new(util::random)));
    let text_gen = use_state(|| Rc::new(GeminiClient::new(TextGenConfig::from_build_env())));

    // Back/forward buttons
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let popstate_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                route.set(Route::current());
            }) as Box<dyn FnMut(_)>);
            if let Some(win) = &window {
                let _ = win.add_event_listener_with_callback("popstate", popstate_cb.as_ref().unchecked_ref());
            }
            move || {
                if let Some(win) = &window {
                    let _ = win.remove_event_listener_with_callback("popstate", popstate_cb.as_ref().unchecked_ref());
                }
                drop(popstate_cb);
            }
        });
    }

    let navigate = {
        let route = route.clone();
        use_callback((), move |to: Route, _| {
            to.push();
            route.set(to);
        })
    };

    let ctx = AppContext {
        catalog: (*catalog).clone(),
        text_gen: (*text_gen).clone(),
        navigate,
    };

    let content = match (*route).clone() {
        Route::Universe => html! { <UniversePage /> },
        Route::Article { id } => html! { <BlogPostPage {id} /> },
    };

    html! { <ContextProvider<AppContext> context={ctx}>{ content }</ContextProvider<AppContext>> }
}
