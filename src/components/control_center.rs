use yew::prelude::*;

use super::camera_controls::CameraControls;
use crate::model::ClusterMode;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlCenterProps {
    pub open: bool,
    pub on_toggle: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub cluster_mode: ClusterMode,
    pub on_cluster_mode: Callback<ClusterMode>,
    pub show_galaxy: bool,
    pub on_toggle_galaxy: Callback<()>,
}

#[function_component]
pub fn ControlCenter(props: &ControlCenterProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let galaxy_cb = {
        let cb = props.on_toggle_galaxy.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let label = "display:block; margin-bottom:8px; font-size:11px; font-weight:600; letter-spacing:0.08em; text-transform:uppercase; color:#94a3b8;";
    let panel = if props.open {
        "opacity:1; transform:scale(1) translateY(0);"
    } else {
        "opacity:0; transform:scale(0.95) translateY(-16px); pointer-events:none;"
    };

    html! {<div style="position:fixed; top:16px; right:16px; z-index:50; display:flex; flex-direction:column; align-items:flex-end;">
        <button aria-label="Menu" onclick={toggle_cb}
            style={format!("padding:12px; border-radius:9999px; background:rgba(15,23,42,0.5); border:1px solid rgba(255,255,255,0.1); color:rgba(255,255,255,0.8); cursor:pointer; transition:transform 0.3s; {}", if props.open { "transform:rotate(90deg);" } else { "" })}>
            {"☰"}
        </button>
        <div style={format!("margin-top:16px; width:288px; padding:20px; border-radius:16px; background:rgba(15,23,42,0.8); border:1px solid rgba(255,255,255,0.1); backdrop-filter:blur(16px); transform-origin:top right; transition:all 0.5s; {panel}")}>
            <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:24px;">
                <h3 style="margin:0; font-size:18px; font-weight:500; color:#fff;">{"Control Center"}</h3>
                <span style="width:8px; height:8px; border-radius:9999px; background:#22c55e; box-shadow:0 0 10px rgba(34,197,94,0.5);"></span>
            </div>
            <div style="display:flex; flex-direction:column; gap:20px;">
                <div>
                    <span style={label}>{"Navigation"}</span>
                    <CameraControls
                        on_zoom_in={props.on_zoom_in.clone()}
                        on_zoom_out={props.on_zoom_out.clone()}
                        on_reset={props.on_reset.clone()}
                    />
                </div>
                <div>
                    <span style={label}>{"Constellation Mode"}</span>
                    <div style="display:grid; grid-template-columns:repeat(3, 1fr); gap:8px; padding:4px; border-radius:12px; background:rgba(30,41,59,0.5);">
                        { for ClusterMode::ALL.iter().map(|&mode| {
                            let cb = props.on_cluster_mode.clone();
                            let active = mode == props.cluster_mode;
                            html! {
                                <button key={mode.label()} onclick={Callback::from(move |_| cb.emit(mode))}
                                    style={format!("padding:8px; border-radius:8px; border:none; font-size:12px; cursor:pointer; {}", if active { "background:#9333ea; color:#fff;" } else { "background:transparent; color:#94a3b8;" })}>
                                    { mode.label() }
                                </button>
                            }
                        }) }
                    </div>
                </div>
                <label style="display:flex; align-items:center; gap:8px; cursor:pointer; padding-top:16px; border-top:1px solid rgba(255,255,255,0.05); font-size:13px; color:#cbd5e1;">
                    <input type="checkbox" checked={props.show_galaxy} onclick={galaxy_cb} />
                    <span>{"Show Galaxy"}</span>
                </label>
            </div>
        </div>
    </div>}
}
