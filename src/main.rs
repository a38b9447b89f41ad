//! Campus FX entry point
//!
//! Boots the interaction controller in the hosting document: scans for the
//! effect targets once on page-ready and wires DOM events into the pure
//! effect logic.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        AnimationEvent, Document, Element, HtmlElement, IntersectionObserver,
        IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
    };

    use campus_fx::consts::*;
    use campus_fx::fx::{self, FramePacer, RevealState, TiltAngles};
    use campus_fx::platform::frames;
    use campus_fx::platform::{MediaQueryPreference, MotionPreferenceSource};

    pub fn boot() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Campus FX starting...");

        let Some(window) = web_sys::window() else {
            log::warn!("No window - effects disabled");
            return;
        };
        let Some(document) = window.document() else {
            log::warn!("No document - effects disabled");
            return;
        };

        // Setup runs once per page load
        if document.ready_state() == "loading" {
            let doc = document.clone();
            let closure = Closure::once(move || run(&doc));
            let _ = document.add_event_listener_with_callback(
                "DOMContentLoaded",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        } else {
            run(&document);
        }
    }

    fn run(document: &Document) {
        let effects = fx::enabled_effects(MediaQueryPreference.reduced_motion());
        if !effects.reveal {
            log::info!("Reduced motion requested - reveal/tilt disabled");
        }

        if effects.ripple {
            setup_ripples(document);
        }
        if effects.reveal {
            setup_reveals(document);
        }
        if effects.tilt {
            setup_tilt(document);
        }

        log::info!("Campus FX running!");
    }

    /// Attach ripple feedback to every clickable control.
    fn setup_ripples(document: &Document) {
        let controls = match document.query_selector_all(RIPPLE_SELECTOR) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("Control scan failed: {:?}", err);
                return;
            }
        };

        for i in 0..controls.length() {
            let Some(el) = controls
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };

            if let Err(err) = prepare_ripple_host(&el) {
                log::debug!("Ripple host prep skipped: {:?}", err);
            }
            attach_ripple(el);
        }
    }

    /// Force a positioning context and clipping on the control so the
    /// overlay stays inside it.
    fn prepare_ripple_host(el: &HtmlElement) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let computed = window
            .get_computed_style(el)?
            .ok_or_else(|| JsValue::from_str("no computed style"))?;

        if computed.get_property_value("position")? == "static" {
            el.style().set_property("position", "relative")?;
        }
        if computed.get_property_value("overflow")? == "visible" {
            el.style().set_property("overflow", "hidden")?;
        }
        Ok(())
    }

    fn attach_ripple(el: HtmlElement) {
        let host = el.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            // Best-effort: a failed overlay means no ripple, never an error
            if let Err(err) = spawn_ripple(&host, &event) {
                log::debug!("Ripple suppressed: {:?}", err);
            }
        });
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Build and mount one overlay; it removes itself when its entrance
    /// animation ends.
    fn spawn_ripple(host: &HtmlElement, event: &MouseEvent) -> Result<(), JsValue> {
        let rect = host.get_bounding_client_rect();

        // detail() == 0 marks a synthesized (keyboard) activation
        let pointer = (event.detail() != 0).then(|| {
            Vec2::new(
                event.client_x() as f32 - rect.left() as f32,
                event.client_y() as f32 - rect.top() as f32,
            )
        });
        let geom = fx::ripple_geometry(rect.width() as f32, rect.height() as f32, pointer);

        let document = host
            .owner_document()
            .ok_or_else(|| JsValue::from_str("detached host"))?;
        let overlay: HtmlElement = document.create_element("span")?.dyn_into()?;
        overlay.set_class_name(RIPPLE_CLASS);

        let style = overlay.style();
        style.set_property("width", &format!("{}px", geom.size))?;
        style.set_property("height", &format!("{}px", geom.size))?;
        style.set_property("left", &format!("{}px", geom.left))?;
        style.set_property("top", &format!("{}px", geom.top))?;

        let doomed = overlay.clone();
        let cleanup = Closure::once(move |_event: AnimationEvent| {
            doomed.remove();
        });
        overlay
            .add_event_listener_with_callback("animationend", cleanup.as_ref().unchecked_ref())?;
        cleanup.forget();

        host.append_child(&overlay)?;
        Ok(())
    }

    /// One-way reveal for surfaces scrolled into view.
    fn setup_reveals(document: &Document) {
        let surfaces = match document.query_selector_all(REVEAL_SELECTOR) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("Surface scan failed: {:?}", err);
                return;
            }
        };
        if surfaces.length() == 0 {
            return;
        }

        // Side table keyed by element identity; revealed entries never revert
        let tracked: Rc<RefCell<Vec<(Element, RevealState)>>> = Rc::new(RefCell::new(Vec::new()));

        let callback = {
            let tracked = tracked.clone();
            Closure::<dyn FnMut(_, _)>::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                            continue;
                        };
                        let target = entry.target();

                        let mut table = tracked.borrow_mut();
                        let Some((el, state)) = table
                            .iter_mut()
                            .find(|(el, _)| js_sys::Object::is(el.as_ref(), target.as_ref()))
                        else {
                            continue;
                        };

                        if state.advance(entry.intersection_ratio()) {
                            let classes = el.class_list();
                            let _ = classes.remove_1(REVEAL_PENDING_CLASS);
                            let _ = classes.add_1(REVEAL_DONE_CLASS);
                            observer.unobserve(el);
                        }
                    }
                },
            )
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_RATIO));
        options.set_root_margin(REVEAL_ROOT_MARGIN);

        let observer =
            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => observer,
                Err(err) => {
                    log::warn!("Intersection observer unavailable: {:?}", err);
                    return;
                }
            };
        callback.forget();

        let mut table = tracked.borrow_mut();
        for i in 0..surfaces.length() {
            let Some(el) = surfaces
                .item(i)
                .and_then(|node| node.dyn_into::<Element>().ok())
            else {
                continue;
            };
            let _ = el.class_list().add_1(REVEAL_PENDING_CLASS);
            observer.observe(&el);
            table.push((el, RevealState::Pending));
        }

        log::info!("Observing {} surfaces", table.len());
    }

    /// Per-card hover state shared between the pointer handlers and the
    /// frame callback.
    struct TiltRig {
        angles: TiltAngles,
        pacer: FramePacer,
    }

    /// Pointer tilt for cards.
    fn setup_tilt(document: &Document) {
        let cards = match document.query_selector_all(TILT_SELECTOR) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("Card scan failed: {:?}", err);
                return;
            }
        };

        for i in 0..cards.length() {
            let Some(el) = cards
                .item(i)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            attach_tilt(el);
        }
    }

    fn attach_tilt(el: HtmlElement) {
        let rig = Rc::new(RefCell::new(TiltRig {
            angles: TiltAngles::NEUTRAL,
            pacer: FramePacer::new(),
        }));

        // One persistent frame callback per card; mousemove reschedules it
        let frame_cb: Rc<Closure<dyn FnMut(f64)>> = {
            let rig = rig.clone();
            let card = el.clone();
            Rc::new(Closure::new(move |_time: f64| {
                let angles = {
                    let mut rig = rig.borrow_mut();
                    rig.pacer.complete();
                    rig.angles
                };
                apply_tilt(&card, angles);
            }))
        };

        // Pointer entry
        {
            let card = el.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let _ = card.class_list().add_1(TILT_ACTIVE_CLASS);
            });
            let _ =
                el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move: recompute angles, coalesce to one pending frame
        {
            let rig = rig.clone();
            let card = el.clone();
            let frame_cb = frame_cb.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = card.get_bounding_client_rect();
                let size = Vec2::new(rect.width() as f32, rect.height() as f32);
                let local = Vec2::new(
                    event.client_x() as f32 - rect.left() as f32,
                    event.client_y() as f32 - rect.top() as f32,
                );

                let mut rig = rig.borrow_mut();
                rig.angles = fx::tilt_angles(size, local);

                // Last writer wins: cancel before rescheduling
                if let Some(stale) = rig.pacer.take() {
                    frames::cancel_frame(stale);
                }
                if let Some(handle) = frames::request_frame(&frame_cb) {
                    rig.pacer.store(handle);
                }
            });
            let _ =
                el.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer exit: drop any queued write, snap back to neutral
        {
            let card = el.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                {
                    let mut rig = rig.borrow_mut();
                    rig.angles = TiltAngles::NEUTRAL;
                    if let Some(stale) = rig.pacer.take() {
                        frames::cancel_frame(stale);
                    }
                }
                let _ = card.class_list().remove_1(TILT_ACTIVE_CLASS);
                apply_tilt(&card, TiltAngles::NEUTRAL);
            });
            let _ =
                el.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn apply_tilt(card: &HtmlElement, angles: TiltAngles) {
        let transform = format!(
            "perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg)",
            angles.rot_x, angles.rot_y
        );
        let _ = card.style().set_property("transform", &transform);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::boot();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Campus FX (native) starting...");
    log::info!("Effects need a hosting document - build with trunk for the web version");

    println!("\nRunning effect math checks...");
    check_effect_math();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn check_effect_math() {
    use campus_fx::fx::{ripple_geometry, tilt_angles};
    use glam::Vec2;

    let geom = ripple_geometry(200.0, 100.0, Some(Vec2::ZERO));
    assert_eq!(geom.size, 200.0);
    assert_eq!(geom.left, -100.0);
    assert_eq!(geom.top, -100.0);

    let angles = tilt_angles(Vec2::new(200.0, 100.0), Vec2::new(150.0, 25.0));
    assert!((angles.rot_x - 1.5).abs() < 0.001);
    assert!((angles.rot_y - 1.5).abs() < 0.001);

    println!("✓ Effect math checks passed!");
}
