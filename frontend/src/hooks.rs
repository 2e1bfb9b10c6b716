use crate::scroll::{FadeInSchedule, ParallaxState, ScrollSample};
use std::rc::Rc;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

// Anything that can move a tracked element relative to the viewport.
const GEOMETRY_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Reads the current geometry of the element behind `node`.
/// `None` until the element is mounted.
pub fn read_sample(node: &NodeRef) -> Option<ScrollSample> {
    let element = node.cast::<HtmlElement>()?;
    let window = web_sys::window()?;
    let rect = element.get_bounding_client_rect();
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_y = window.scroll_y().ok()?;
    Some(ScrollSample {
        bounding_top: rect.top(),
        bounding_bottom: rect.bottom(),
        bounding_height: rect.height(),
        offset_top: element.offset_top() as f64,
        scroll_y,
        viewport_height,
    })
}

/// Registers `handler` for every geometry event on the window and returns the
/// matching teardown for the effect destructor.
pub fn subscribe_window<F>(handler: F) -> Box<dyn FnOnce()>
where
    F: Fn() + 'static,
{
    let Some(window) = web_sys::window() else {
        return Box::new(|| ());
    };
    let callback = Closure::<dyn Fn()>::new(handler);
    for event in GEOMETRY_EVENTS {
        if let Err(err) =
            window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            log::warn!("Failed to add {} listener: {:?}", event, err);
        }
    }
    Box::new(move || {
        if let Some(win) = web_sys::window() {
            for event in GEOMETRY_EVENTS {
                if let Err(err) = win
                    .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                {
                    log::warn!("Failed to remove {} listener: {:?}", event, err);
                }
            }
        }
        drop(callback);
    })
}

pub struct Parallax {
    pub node: NodeRef,
    pub progress: f64,
    pub visible: bool,
}

pub enum ParallaxAction {
    Mounted(ScrollSample),
    Scrolled(ScrollSample),
}

impl Reducible for ParallaxState {
    type Action = ParallaxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ParallaxAction::Mounted(sample) => ParallaxState::mounted(&sample).into(),
            ParallaxAction::Scrolled(sample) => self.after_scroll(&sample).into(),
        }
    }
}

/// Tracks how far the referenced element has scrolled through the viewport.
///
/// Progress is only recomputed while the element is on screen, so it keeps its
/// last value once the element leaves. Mounting samples visibility alone.
#[hook]
pub fn use_parallax() -> Parallax {
    let node = use_node_ref();
    let state = use_reducer_eq(ParallaxState::default);
    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let unsubscribe = subscribe_window({
                    let node = node.clone();
                    let state = state.clone();
                    move || {
                        if let Some(sample) = read_sample(&node) {
                            state.dispatch(ParallaxAction::Scrolled(sample));
                        }
                    }
                });
                if let Some(sample) = read_sample(&node) {
                    state.dispatch(ParallaxAction::Mounted(sample));
                }
                move || unsubscribe()
            },
            (),
        );
    }
    Parallax {
        node,
        progress: state.progress,
        visible: state.visible,
    }
}

pub struct FadeIn {
    pub node: NodeRef,
    pub opacities: Vec<f64>,
}

/// Fades `items` children in one after another while the referenced section
/// is pinned in view. Everything drops back to 0 once the section leaves.
#[hook]
pub fn use_fade_in_parallax(items: usize, plateau: f64) -> FadeIn {
    let node = use_node_ref();
    let opacities = use_state_eq(|| vec![0.0; items]);
    {
        let node = node.clone();
        let opacities = opacities.clone();
        use_effect_with_deps(
            move |schedule: &FadeInSchedule| {
                let schedule = *schedule;
                let on_geometry = move || {
                    if let Some(sample) = read_sample(&node) {
                        opacities.set(schedule.for_sample(&sample));
                    }
                };
                on_geometry();
                let unsubscribe = subscribe_window(on_geometry);
                move || unsubscribe()
            },
            // sanitized, so a NaN plateau still compares equal between renders
            FadeInSchedule::new(items, plateau),
        );
    }
    FadeIn {
        node,
        opacities: (*opacities).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_at(scroll_y: f64) -> ScrollSample {
        let (offset_top, height) = (1200.0, 3000.0);
        let top = offset_top - scroll_y;
        ScrollSample {
            bounding_top: top,
            bounding_bottom: top + height,
            bounding_height: height,
            offset_top,
            scroll_y,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn reducer_tracks_then_holds() {
        let state = Rc::new(ParallaxState::default());
        let state = state.reduce(ParallaxAction::Mounted(sample_at(2300.0)));
        assert!(state.visible);
        assert_eq!(state.progress, 0.0);

        let state = state.reduce(ParallaxAction::Scrolled(sample_at(2300.0)));
        assert!((state.progress - 0.5).abs() < 1e-9);

        let state = state.reduce(ParallaxAction::Scrolled(sample_at(9000.0)));
        assert!(!state.visible);
        assert!((state.progress - 0.5).abs() < 1e-9);
    }
}
