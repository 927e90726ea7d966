//! Bridge component between Leptos state and the imperative `scene::engine::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the scene, camera, and hover state. This host mounts it on
//! the canvas, runs the `requestAnimationFrame` loop (viewport sync, damping,
//! billboarding, drawing), forwards pointer and wheel events, hands packing
//! outcomes from [`ViewerState`] to the engine, and loads label glyphs through
//! the shared [`FontCache`]. Engine actions that concern the page are folded
//! back into [`ViewerState`].

use leptos::prelude::*;

use crate::state::viewer::ViewerState;
#[cfg(feature = "csr")]
use crate::net::api::fetch_typeface;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{map_button, pointer_point, wheel_delta};
#[cfg(feature = "csr")]
use crate::util::canvas_viewport::{color_seed, sync_viewport};

#[cfg(feature = "csr")]
use scene::config::ViewerConfig;
#[cfg(feature = "csr")]
use scene::engine::{Action, Engine};
#[cfg(feature = "csr")]
use scene::glyph::FontCache;
#[cfg(feature = "csr")]
use scene::scene::LabelRequest;
#[cfg(feature = "csr")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "csr")]
use std::rc::Rc;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
type EngineSlot = Rc<RefCell<Option<Engine>>>;

/// Everything needed to fulfil a batch of label requests after the host returns.
#[cfg(feature = "csr")]
#[derive(Clone)]
struct LabelLoader {
    engine: EngineSlot,
    fonts: Rc<FontCache>,
    font_url: String,
}

#[cfg(feature = "csr")]
impl LabelLoader {
    /// Fetch the typeface once, then build and attach every label. Labels for
    /// a generation that was replaced in the meantime are dropped by the engine.
    fn load(&self, requests: Vec<LabelRequest>) {
        let Some(generation) = requests.first().map(|r| r.generation) else {
            return;
        };
        let url = self.font_url.clone();
        let face = self.fonts.get(move || fetch_typeface(url));
        let engine = Rc::clone(&self.engine);
        leptos::task::spawn_local(async move {
            let result = face.await;
            let mut slot = engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            let face = match result {
                Ok(face) => face,
                Err(e) => {
                    engine.fail_labels(generation, &e);
                    return;
                }
            };
            for request in &requests {
                if let Err(e) = engine.deliver_label(&face, request) {
                    engine.fail_labels(request.generation, &e);
                }
            }
        });
    }
}

#[cfg(feature = "csr")]
fn process_actions(actions: Vec<Action>, labels: &LabelLoader, viewer: RwSignal<ViewerState>) {
    for action in actions {
        match action {
            Action::LoadLabels(requests) => labels.load(requests),
            other => viewer.update(|v| {
                v.apply(other);
            }),
        }
    }
}

#[cfg(feature = "csr")]
fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
}

/// Drive the engine every animation frame for the lifetime of the page.
#[cfg(feature = "csr")]
fn start_render_loop(engine: EngineSlot, canvas_ref: NodeRef<leptos::html::Canvas>) {
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(engine) = engine.borrow_mut().as_mut() {
            sync_viewport(engine, &canvas_ref);
            if let Err(e) = engine.frame() {
                log::warn!("canvas host: frame failed: {e:?}");
            }
        }
        if let Some(cb) = holder_for_cb.borrow().as_ref() {
            if !request_frame(cb) {
                log::warn!("canvas host: render loop stopped");
            }
        }
    }) as Box<dyn FnMut(f64)>);

    if request_frame(&cb) {
        *holder.borrow_mut() = Some(cb);
    } else {
        log::warn!("canvas host: requestAnimationFrame unavailable");
    }
}

/// Canvas host component.
///
/// On mount this creates the engine and starts the render loop; afterwards
/// it visualizes each new packing outcome and forwards pointer input.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let viewer = expect_context::<RwSignal<ViewerState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "csr")]
    let config = expect_context::<ViewerConfig>();
    #[cfg(feature = "csr")]
    let engine: EngineSlot = Rc::new(RefCell::new(None));
    #[cfg(feature = "csr")]
    let engine_ready = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let labels = LabelLoader {
        engine: Rc::clone(&engine),
        fonts: Rc::new(FontCache::new()),
        font_url: config.font_url.clone(),
    };

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_mount = canvas_ref;
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = Engine::new(canvas, config.clone(), color_seed());
            sync_viewport(&mut instance, &canvas_ref_mount);
            if let Err(e) = instance.render() {
                log::warn!("canvas host: initial render failed: {e:?}");
            }
            *engine.borrow_mut() = Some(instance);
            start_render_loop(Rc::clone(&engine), canvas_ref_mount);
            engine_ready.set(true);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let labels = labels.clone();
        let applied_seq = Cell::new(0_u64);
        Effect::new(move || {
            if !engine_ready.get() {
                return;
            }
            let Some(outcome) = viewer.with(|v| v.outcome.clone()) else {
                return;
            };
            if outcome.seq <= applied_seq.get() {
                return;
            }
            applied_seq.set(outcome.seq);

            let actions = {
                let mut slot = engine.borrow_mut();
                let Some(engine) = slot.as_mut() else {
                    return;
                };
                engine.apply_packing_result(outcome.container, outcome.result)
            };
            process_actions(actions, &labels, viewer);
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let labels = labels.clone();
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    if let Err(e) = canvas.set_pointer_capture(ev.pointer_id()) {
                        log::debug!("canvas host: pointer capture failed: {e:?}");
                    }
                }
                let actions = {
                    let mut slot = engine.borrow_mut();
                    let Some(engine) = slot.as_mut() else {
                        return;
                    };
                    sync_viewport(engine, &canvas_ref);
                    engine.on_pointer_down(pointer_point(&ev), map_button(ev.button()))
                };
                process_actions(actions, &labels, viewer);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let labels = labels.clone();
            move |ev: leptos::ev::PointerEvent| {
                let actions = {
                    let mut slot = engine.borrow_mut();
                    let Some(engine) = slot.as_mut() else {
                        return;
                    };
                    sync_viewport(engine, &canvas_ref);
                    engine.on_pointer_move(pointer_point(&ev))
                };
                process_actions(actions, &labels, viewer);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let labels = labels.clone();
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get() {
                    if let Err(e) = canvas.release_pointer_capture(ev.pointer_id()) {
                        log::debug!("canvas host: pointer release failed: {e:?}");
                    }
                }
                let actions = {
                    let mut slot = engine.borrow_mut();
                    let Some(engine) = slot.as_mut() else {
                        return;
                    };
                    engine.on_pointer_up()
                };
                process_actions(actions, &labels, viewer);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            let labels = labels.clone();
            move |_ev: leptos::ev::PointerEvent| {
                let actions = {
                    let mut slot = engine.borrow_mut();
                    let Some(engine) = slot.as_mut() else {
                        return;
                    };
                    engine.on_pointer_leave()
                };
                process_actions(actions, &labels, viewer);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_wheel = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::WheelEvent| {
                ev.prevent_default();
                let actions = {
                    let mut slot = engine.borrow_mut();
                    let Some(engine) = slot.as_mut() else {
                        return;
                    };
                    engine.on_wheel(wheel_delta(&ev))
                };
                process_actions(actions, &labels, viewer);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::WheelEvent| {}
        }
    };

    #[cfg(not(feature = "csr"))]
    let _ = viewer;

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
            on:wheel=on_wheel
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
