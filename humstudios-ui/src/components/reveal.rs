//! Reveal Components
//!
//! A section that reveals itself once when scrolled into view, and the
//! animated elements inside it. The browser's `IntersectionObserver` feeds
//! intersection ratios into a [`RevealController`]; observation stops on the
//! update that reveals.

use leptos::html::Section;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::state::reveal::{Motion, RevealController, Visibility, DEFAULT_THRESHOLD};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Observer of a mounted section and the callback it holds
struct ActiveObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

/// Visibility of the enclosing reveal section
#[derive(Clone, Copy)]
struct RevealContext(Signal<Visibility>);

/// Section revealed as one unit
#[component]
pub fn RevealSection(
    #[prop(into)] id: String,
    #[prop(optional)] threshold: Option<f64>,
    children: Children,
) -> impl IntoView {
    let controller = create_rw_signal(RevealController::new(
        threshold.unwrap_or(DEFAULT_THRESHOLD),
    ));
    let visibility = Signal::derive(move || controller.with(|c| c.state()));
    provide_context(RevealContext(visibility));

    let active = store_value(None::<ActiveObserver>);
    let section_ref = create_node_ref::<Section>();

    section_ref.on_load(move |section| {
        active.set_value(observe(&section, controller));
    });

    on_cleanup(move || {
        active.try_update_value(|active| {
            if let Some(active) = active.take() {
                active.observer.disconnect();
            }
        });
    });

    view! {
        <section
            id=id
            class="reveal"
            node_ref=section_ref
            data-reveal-state=move || visibility.get().as_str()
        >
            {children()}
        </section>
    }
}

/// Start observing `element`; without observer support it is revealed at once
fn observe(
    element: &web_sys::Element,
    controller: RwSignal<RevealController>,
) -> Option<ActiveObserver> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let ratio = entry
                    .unchecked_into::<IntersectionObserverEntry>()
                    .intersection_ratio();
                if controller.try_update(|c| c.observe(ratio)).unwrap_or(false) {
                    observer.disconnect();
                    break;
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(
        controller.with_untracked(|c| c.threshold()),
    ));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(ActiveObserver {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            web_sys::console::warn_2(&"IntersectionObserver unavailable:".into(), &err);
            controller.update(|c| {
                c.reveal_now();
            });
            None
        }
    }
}

/// Element that moves from its motion's initial pose to rest on reveal
///
/// Outside a [`RevealSection`] it is shown at rest.
#[component]
pub fn Animated(
    motion: Motion,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let visibility = use_context::<RevealContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::derive(|| Visibility::Seen));

    let style = move || format!("{}; {}", motion.pose(visibility.get()), motion.transition());

    view! {
        <div class=class style=style>
            {children()}
        </div>
    }
}
