use yew::prelude::*;

use super::app::AppContext;
use super::blog_modal::BlogModal;
use super::control_center::ControlCenter;
use super::hero_section::HeroSection;
use super::star_map::StarMap;
use crate::config::BUTTON_ZOOM_STEP;
use crate::model::{ClusterMode, Star};
use crate::route::Route;
use crate::state::{CameraRevision, SharedCamera};

/// The landing page: star map, hero quote, modal and control center.
#[function_component(UniversePage)]
pub fn universe_page() -> Html {
    let ctx = use_context::<AppContext>();
    let camera = (*use_state(SharedCamera::default)).clone();
    let revision = use_reducer(CameraRevision::default);
    let selected = use_state(|| None::<Star>);
    let cluster_mode = use_state(ClusterMode::default);
    let menu_open = use_state(|| false);
    let show_galaxy = use_state(|| true);

    let on_camera_change = {
        let dispatcher = revision.dispatcher();
        use_callback((), move |_: (), _| dispatcher.dispatch(()))
    };
    let on_reset = {
        let camera = camera.clone();
        let on_camera_change = on_camera_change.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            camera.update(|cam| cam.reset());
            on_camera_change.emit(());
            menu_open.set(false);
        })
    };
    let zoom_by = |delta: f64| {
        let camera = camera.clone();
        let on_camera_change = on_camera_change.clone();
        Callback::from(move |_: ()| {
            camera.update(|cam| cam.zoom(delta));
            on_camera_change.emit(());
        })
    };
    let on_zoom_in = zoom_by(BUTTON_ZOOM_STEP);
    let on_zoom_out = zoom_by(-BUTTON_ZOOM_STEP);

    let on_star_click = {
        let selected = selected.clone();
        use_callback((), move |star: Star, _| selected.set(Some(star)))
    };
    let on_close = {
        let selected = selected.clone();
        use_callback((), move |_: (), _| selected.set(None))
    };
    let on_read_more = {
        let navigate = ctx.map(|c| c.navigate);
        Callback::from(move |id: String| {
            if let Some(navigate) = &navigate {
                navigate.emit(Route::Article { id });
            }
        })
    };
    let on_toggle = {
        let menu_open = menu_open.clone();
        use_callback(*menu_open, move |_: (), open| menu_open.set(!*open))
    };
    let on_cluster_mode = {
        let cluster_mode = cluster_mode.clone();
        Callback::from(move |mode: ClusterMode| cluster_mode.set(mode))
    };
    let on_toggle_galaxy = {
        let show_galaxy = show_galaxy.clone();
        Callback::from(move |_: ()| show_galaxy.set(!*show_galaxy))
    };

    html! {
        <main style="position:relative; width:100vw; height:100vh; background:#020617; color:#fff; overflow:hidden;">
            <StarMap
                camera={camera}
                revision={revision.0}
                on_camera_change={on_camera_change}
                cluster_mode={*cluster_mode}
                show_galaxy={*show_galaxy}
                on_star_click={on_star_click}
            />
            <HeroSection blurred={selected.is_some()} />
            <BlogModal star={(*selected).clone()} {on_close} {on_read_more} />
            <ControlCenter
                open={*menu_open}
                {on_toggle}
                {on_reset}
                {on_zoom_in}
                {on_zoom_out}
                cluster_mode={*cluster_mode}
                {on_cluster_mode}
                show_galaxy={*show_galaxy}
                {on_toggle_galaxy}
            />
        </main>
    }
}
