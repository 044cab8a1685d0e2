// Ambient particle backdrop: 50 slow-drifting dots on a full-viewport
// canvas, with faint lines joining nearby pairs. The hosting page mounts
// it behind its content and drives nothing; the loop runs off
// requestAnimationFrame until stop() is called.

mod utils;

pub mod color;
pub mod field;
pub mod particle;
pub mod renderer;
pub mod surface;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::field::ParticleField;
use crate::surface::{Bounds, CanvasSurface, Surface};

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

// One frame's worth of work over whatever surface backs the scene. The
// simulation step always finishes before the render step starts, so a
// frame never shows half-updated positions.
struct Scene<S: Surface> {
    field: ParticleField,
    surface: S,
    bounds: Bounds,
}

impl<S: Surface> Scene<S> {
    fn tick(&mut self) {
        self.field.step(self.bounds);
        renderer::render(&mut self.surface, &self.field, self.bounds);
    }
}

// Handles owned while the backdrop is running. stop() consumes this to
// cancel the pending animation frame and detach the resize listener.
struct Running {
    window: Window,
    frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    raf_id: Rc<Cell<i32>>,
    on_resize: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
pub struct ParticleBackdrop {
    canvas_id: String,
    running: Option<Running>,
}

#[wasm_bindgen]
impl ParticleBackdrop {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> ParticleBackdrop {
        ParticleBackdrop {
            canvas_id: canvas_id.to_owned(),
            running: None,
        }
    }

    // Acquires the canvas, spawns the field, and kicks off the frame loop.
    // A second start() while running is a no-op. If the canvas or its 2d
    // context cannot be acquired the backdrop stays uninitialized; it is
    // purely decorative, so it degrades to "no animation" rather than
    // throwing into the host page.
    pub fn start(&mut self) {
        if self.running.is_some() {
            return;
        }
        self.running = self.spawn_loop();
    }

    // Halts the frame loop and detaches the resize listener. Safe to call
    // repeatedly; stopping an already-stopped backdrop does nothing.
    pub fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            let _ = running.window.cancel_animation_frame(running.raf_id.get());
            let _ = running.window.remove_event_listener_with_callback(
                "resize",
                running.on_resize.as_ref().unchecked_ref(),
            );
            // The frame closure holds an Rc back to its own slot so it can
            // reschedule itself; emptying the slot breaks the cycle and
            // drops the closure, so no callback outlives the backdrop.
            running.frame.borrow_mut().take();
        }
    }
}

impl ParticleBackdrop {
    fn spawn_loop(&self) -> Option<Running> {
        let (window, canvas, ctx) = match self.acquire_canvas() {
            Some(acquired) => acquired,
            None => {
                warn(&format!(
                    "particle backdrop: canvas '{}' unavailable, not starting",
                    self.canvas_id
                ));
                return None;
            }
        };

        let bounds = viewport_bounds(&window);
        canvas.set_width(bounds.width as u32);
        canvas.set_height(bounds.height as u32);

        let mut rng = rand::thread_rng();
        let scene = Rc::new(RefCell::new(Scene {
            field: ParticleField::spawn(&mut rng, bounds),
            surface: CanvasSurface::new(ctx),
            bounds,
        }));

        // The frame closure lives in a shared slot so it can hand itself
        // back to requestAnimationFrame; each tick records the new raf id
        // as the cancellation handle for stop().
        let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let raf_id = Rc::new(Cell::new(0));
        {
            let window = window.clone();
            let scene = Rc::clone(&scene);
            let frame_slot = Rc::clone(&frame);
            let raf_id = Rc::clone(&raf_id);
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                scene.borrow_mut().tick();
                if let Some(frame) = frame_slot.borrow().as_ref() {
                    if let Ok(id) =
                        window.request_animation_frame(frame.as_ref().unchecked_ref())
                    {
                        raf_id.set(id);
                    }
                }
            }) as Box<dyn FnMut()>));
        }
        let first = frame
            .borrow()
            .as_ref()
            .and_then(|f| window.request_animation_frame(f.as_ref().unchecked_ref()).ok());
        match first {
            Some(id) => raf_id.set(id),
            None => {
                frame.borrow_mut().take();
                warn("particle backdrop: could not schedule an animation frame, not starting");
                return None;
            }
        }

        // Resizes retarget the canvas backing store and the wrap bounds for
        // later steps; particle positions are deliberately left alone. A
        // particle stranded outside the new bounds comes back through the
        // wrap rule on its next update.
        let on_resize = {
            let window = window.clone();
            let canvas = canvas.clone();
            let scene = Rc::clone(&scene);
            Closure::wrap(Box::new(move || {
                let bounds = viewport_bounds(&window);
                canvas.set_width(bounds.width as u32);
                canvas.set_height(bounds.height as u32);
                scene.borrow_mut().bounds = bounds;
            }) as Box<dyn FnMut()>)
        };
        if window
            .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            .is_err()
        {
            let _ = window.cancel_animation_frame(raf_id.get());
            frame.borrow_mut().take();
            warn("particle backdrop: could not attach the resize listener, not starting");
            return None;
        }

        Some(Running {
            window,
            frame,
            raf_id,
            on_resize,
        })
    }

    fn acquire_canvas(&self) -> Option<(Window, HtmlCanvasElement, CanvasRenderingContext2d)> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(&self.canvas_id)?
            .dyn_into()
            .ok()?;
        let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
        Some((window, canvas, ctx))
    }
}

fn warn(message: &str) {
    console::warn_1(&message.into());
}

fn viewport_bounds(window: &Window) -> Bounds {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Bounds::new(width, height)
}
