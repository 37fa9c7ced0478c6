use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let rs = {
        let cb = props.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let button = "padding:10px 12px; border-radius:12px; background:rgba(30,41,59,0.5); border:1px solid rgba(255,255,255,0.05); color:#e2e8f0; cursor:pointer;";
    html! {<div style="display:flex; gap:8px; align-items:stretch;">
        <button onclick={zo} style={button} aria-label="Zoom out">{"−"}</button>
        <button onclick={zi} style={button} aria-label="Zoom in">{"+"}</button>
        <button onclick={rs} style={format!("{button} flex:1; display:flex; align-items:center; gap:10px;")}>
            <span style="color:#c084fc;">{"⟲"}</span>
            <span>{"Reset View"}</span>
        </button>
    </div>}
}
