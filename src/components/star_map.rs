use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, WheelEvent};
use yew::prelude::*;

use super::app::AppContext;
use super::star_marker::StarMarker;
use crate::layout::{ViewportBucket, display_positions};
use crate::model::{ClusterMode, DisplayPosition, Star};
use crate::overlay::visible_ambient_count;
use crate::render::{FrameInput, FrameLoop, Starfield, paint_frame};
use crate::state::{DragState, SharedCamera, wheel_zoom};
use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct StarMapProps {
    pub camera: SharedCamera,
    /// Bumped by the owner whenever `camera` changes, so the overlay re-renders.
    pub revision: u64,
    pub on_camera_change: Callback<()>,
    pub cluster_mode: ClusterMode,
    pub show_galaxy: bool,
    pub on_star_click: Callback<Star>,
}

fn size_canvas(canvas: &HtmlCanvasElement, (w, h): (f64, f64)) {
    canvas.set_width(w.max(0.0) as u32);
    canvas.set_height(h.max(0.0) as u32);
}

#[function_component(StarMap)]
pub fn star_map(props: &StarMapProps) -> Html {
    let ctx = use_context::<AppContext>();
    let canvas_ref = use_node_ref();
    let container_ref = use_node_ref();
    let drag = use_mut_ref(DragState::default);
    let dragging = use_state(|| false);
    let viewport = use_state(util::viewport_size);
    let show_galaxy_flag = use_mut_ref(|| props.show_galaxy);
    let camera_changed = use_mut_ref(|| props.on_camera_change.clone());
    *camera_changed.borrow_mut() = props.on_camera_change.clone();

    // Effect: galaxy toggle, read by the frame loop
    {
        let flag = props.show_galaxy;
        let show_galaxy_flag = show_galaxy_flag.clone();
        use_effect_with(flag, move |_| {
            *show_galaxy_flag.borrow_mut() = flag;
            || ()
        });
    }

    // Main mount effect (frame loop, pointer + resize listeners)
    {
        let canvas_ref = canvas_ref.clone();
        let container_ref = container_ref.clone();
        let camera = props.camera.clone();
        let drag = drag.clone();
        let dragging = dragging.clone();
        let viewport = viewport.clone();
        let show_galaxy_flag = show_galaxy_flag.clone();
        let camera_changed = camera_changed.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            let mut frame_loop = None;
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let container = container_ref.cast::<HtmlElement>();
            let context = canvas
                .as_ref()
                .and_then(|c| c.get_context("2d").ok().flatten())
                .and_then(|o| o.dyn_into::<CanvasRenderingContext2d>().ok());

            match (window, canvas, container, context) {
                (Some(window), Some(canvas), Some(container), Some(mut context)) => {
                    size_canvas(&canvas, util::viewport_size());
                    let field = Starfield::generate(util::random);
                    {
                        let canvas = canvas.clone();
                        let camera = camera.clone();
                        let show_galaxy_flag = show_galaxy_flag.clone();
                        frame_loop = Some(FrameLoop::start(window.clone(), move |ts| {
                            let frame = FrameInput {
                                width: canvas.width() as f64,
                                height: canvas.height() as f64,
                                time_ms: ts,
                                camera: camera.get(),
                                show_galaxy: *show_galaxy_flag.borrow(),
                            };
                            paint_frame(&mut context, &field, &frame);
                        }));
                    }

                    {
                        let drag = drag.clone();
                        let dragging = dragging.clone();
                        listeners.push(EventListener::new(&container, "mousedown", move |e| {
                            let e = e.unchecked_ref::<MouseEvent>();
                            drag.borrow_mut().pointer_down(e.client_x() as f64, e.client_y() as f64);
                            dragging.set(true);
                        }));
                    }
                    {
                        let drag = drag.clone();
                        let camera = camera.clone();
                        let camera_changed = camera_changed.clone();
                        listeners.push(EventListener::new(&container, "mousemove", move |e| {
                            let e = e.unchecked_ref::<MouseEvent>();
                            let mut moved = false;
                            camera.update(|cam| {
                                moved = drag
                                    .borrow_mut()
                                    .pointer_move(e.client_x() as f64, e.client_y() as f64, cam);
                            });
                            if moved {
                                camera_changed.borrow().emit(());
                            }
                        }));
                    }
                    for name in ["mouseup", "mouseleave"] {
                        let drag = drag.clone();
                        let dragging = dragging.clone();
                        listeners.push(EventListener::new(&container, name, move |_| {
                            let mut d = drag.borrow_mut();
                            if !d.is_dragging() {
                                return;
                            }
                            if name == "mouseleave" {
                                d.pointer_leave();
                            } else {
                                d.pointer_up();
                            }
                            dragging.set(false);
                        }));
                    }
                    {
                        let camera = camera.clone();
                        let camera_changed = camera_changed.clone();
                        // not passive: the page itself must not scroll
                        let options = EventListenerOptions::enable_prevent_default();
                        listeners.push(EventListener::new_with_options(&container, "wheel", options, move |e| {
                            e.prevent_default();
                            let e = e.unchecked_ref::<WheelEvent>();
                            camera.update(|cam| wheel_zoom(e.delta_y(), cam));
                            camera_changed.borrow().emit(());
                        }));
                    }
                    {
                        let canvas = canvas.clone();
                        let viewport = viewport.clone();
                        listeners.push(EventListener::new(&window, "resize", move |_| {
                            let size = util::viewport_size();
                            log::debug!("canvas resized to {}x{}", size.0, size.1);
                            size_canvas(&canvas, size);
                            viewport.set(size);
                        }));
                    }
                }
                _ => log::error!("star map: canvas or 2d context unavailable"),
            }

            move || {
                drop(listeners);
                drop(frame_loop);
            }
        });
    }

    let bucket = ViewportBucket::from_width(viewport.0);
    let catalog = ctx.map(|c| c.catalog);
    let positions = {
        let catalog = catalog.clone();
        use_memo((props.cluster_mode, bucket), move |(mode, bucket)| {
            catalog
                .map(|c| display_positions(c.list_content_stars(), *mode, *bucket))
                .unwrap_or_default()
        })
    };

    let content = catalog
        .as_ref()
        .map(|c| c.list_content_stars())
        .unwrap_or_default();
    let ambient = catalog
        .as_ref()
        .map(|c| c.list_ambient_stars())
        .unwrap_or_default();
    let ambient_visible = visible_ambient_count(ambient.len(), viewport.0, util::device_pixel_ratio());

    let cursor = if *dragging { "grabbing" } else { "grab" };
    let transform = props.camera.get().css_transform();

    html! {
        <div ref={container_ref}
            style={format!("position:absolute; inset:0; overflow:hidden; z-index:10; cursor:{cursor}; user-select:none;")}>
            <canvas ref={canvas_ref} style="position:absolute; inset:0; display:block; pointer-events:none;" />
            <div style={format!("position:absolute; inset:0; transform:{transform}; transform-origin:50% 50%;")}>
                { for ambient.iter().take(ambient_visible).map(|star| html! {
                    <StarMarker key={star.id.clone()} star={star.clone()}
                        position={DisplayPosition { x: star.x, y: star.y }} ambient={true} />
                }) }
                { for content.iter().zip(positions.iter()).map(|(star, pos)| html! {
                    <StarMarker key={star.id.clone()} star={star.clone()} position={*pos}
                        on_click={Some(props.on_star_click.clone())} />
                }) }
            </div>
            <div style="position:absolute; bottom:32px; left:50%; transform:translateX(-50%); color:rgba(255,255,255,0.3); font-size:12px; pointer-events:none; user-select:none;">
                {"Drag to explore • Scroll to zoom"}
            </div>
        </div>
    }
}
