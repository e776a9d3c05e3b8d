//! Scroll-spy wiring between `IntersectionObserver` and the active section.

use leptos::prelude::*;
use sqwish_docs_core::{ActiveSectionTracker, IntersectionSample};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observe the elements with the given IDs and report the active one.
///
/// The observer is created once the page has mounted and is disconnected on
/// cleanup. Missing elements are skipped with a warning.
pub fn use_scroll_spy(ids: Vec<String>, tracker: ActiveSectionTracker) -> ReadSignal<String> {
    let (active, set_active) = signal(tracker.active().to_string());
    let threshold = tracker.threshold();
    let tracker = StoredValue::new(tracker);
    let observer = StoredValue::new_local(None::<IntersectionObserver>);

    Effect::new(move |_| {
        if observer.with_value(Option::is_some) {
            return;
        }

        let on_batch = move |samples: Vec<IntersectionSample>| {
            let changed = tracker
                .try_update_value(|t| t.observe(&samples).map(str::to_owned))
                .flatten();
            if let Some(id) = changed {
                log::debug!("active section: {id}");
                set_active.set(id);
            }
        };

        match observe_elements(&ids, threshold, on_batch) {
            Ok(created) => observer.set_value(Some(created)),
            Err(err) => log::warn!("scroll-spy unavailable: {err:?}"),
        }
    });

    on_cleanup(move || {
        observer.try_with_value(|observer| {
            if let Some(observer) = observer {
                observer.disconnect();
            }
        });
    });

    active
}

fn observe_elements(
    ids: &[String],
    threshold: f64,
    on_batch: impl Fn(Vec<IntersectionSample>) + 'static,
) -> Result<IntersectionObserver, JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            let samples = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    IntersectionSample::new(
                        entry.target().id(),
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        entry.bounding_client_rect().top(),
                    )
                })
                .collect();
            on_batch(samples);
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    // The observer holds the callback for the lifetime of the page.
    callback.forget();

    for id in ids {
        match document.get_element_by_id(id) {
            Some(element) => observer.observe(&element),
            None => log::warn!("scroll-spy: no element with id `{id}`"),
        }
    }

    Ok(observer)
}
