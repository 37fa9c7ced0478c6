use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A requestAnimationFrame loop that re-arms itself every frame until dropped.
/// Dropping cancels the pending frame and frees the callback.
pub struct FrameLoop {
    window: Window,
    raf_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// `on_frame` receives the frame timestamp in ms (monotonic).
    pub fn start(window: Window, mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let raf_id = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let raf_id = raf_id.clone();
            let cell = callback.clone();
            let window_loop = window.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
                on_frame(ts);
                // schedule next frame
                if let Some(cb) = cell.borrow().as_ref() {
                    raf_id.set(window_loop.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }) as Box<dyn FnMut(f64)>));
        }
        if let Some(cb) = callback.borrow().as_ref() {
            raf_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
        log::debug!("frame loop started");
        Self {
            window,
            raf_id,
            callback,
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // the closure holds a handle to its own cell
        self.callback.borrow_mut().take();
        log::debug!("frame loop stopped");
    }
}
