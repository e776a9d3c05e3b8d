//! Sidebar navigation for the documentation sections.
//!
//! Provides SectionNav and the sidebar click classifier used by the mobile
//! menu.

use leptos::prelude::*;
use sqwish_docs_core::{ClickTarget, Section};
use wasm_bindgen::JsCast;

/// Selector of navigation entries, shared by the markup and [`classify_click`].
const ENTRY_SELECTOR: &str = "a.sqwish-nav-link";

/// Sidebar list of sections with scroll-spy highlighting.
#[component]
pub fn SectionNav(
    /// Sections to list, already filtered.
    #[prop(into)]
    sections: Signal<Vec<Section>>,
    /// Anchor ID of the section currently in view.
    #[prop(into)]
    active_id: Signal<String>,
) -> impl IntoView {
    view! {
      <nav class="sqwish-nav" aria-label="Documentation sections">
        <ul class="sqwish-nav-list">
          <For
            each=move || sections.get()
            key=|section| section.id.clone()
            children=move |section| {
              view! { <SectionLink section=section active_id=active_id /> }
            }
          />

        </ul>
      </nav>
    }
}

/// A section entry and its sub-section entries.
#[component]
fn SectionLink(
    /// The section to link to.
    section: Section,
    /// Anchor ID of the section currently in view.
    active_id: Signal<String>,
) -> impl IntoView {
    let id = section.id.clone();
    let is_active = Memo::new(move |_| active_id.with(|active| *active == id));

    let sub_links: Vec<(String, String)> = section
        .sub_sections
        .iter()
        .map(|sub| (section.sub_section_id(sub), sub.clone()))
        .collect();
    let has_children = !sub_links.is_empty();
    let sub_links = StoredValue::new(sub_links);

    view! {
      <li class="sqwish-nav-item">
        <a
          href=format!("#{}", section.id)
          class="sqwish-nav-link"
          class:active=move || is_active.get()
          aria-current=move || is_active.get().then_some("location")
        >
          {section.label.clone()}
        </a>

        <Show when=move || has_children>
          <ul class="sqwish-nav-children">
            <For
              each=move || sub_links.get_value()
              key=|(sub_id, _)| sub_id.clone()
              children=move |(sub_id, label)| {
                let href = format!("#{sub_id}");
                let is_sub_active = Memo::new(move |_| {
                  active_id.with(|active| *active == sub_id)
                });
                view! {
                  <li class="sqwish-nav-item">
                    <a
                      href=href
                      class="sqwish-nav-link sqwish-nav-sub-link"
                      class:active=move || is_sub_active.get()
                      aria-current=move || is_sub_active.get().then_some("location")
                    >
                      {label}
                    </a>
                  </li>
                }
              }
            />

          </ul>
        </Show>
      </li>
    }
}

/// Classify a click inside the sidebar for [`MenuState::on_sidebar_click`].
///
/// [`MenuState::on_sidebar_click`]: sqwish_docs_core::MenuState::on_sidebar_click
pub fn classify_click(ev: &web_sys::MouseEvent) -> ClickTarget {
    let Some(element) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
    else {
        return ClickTarget::Elsewhere;
    };

    let within = |selector: &str| matches!(element.closest(selector), Ok(Some(_)));

    if within("input[type=\"text\"]") {
        ClickTarget::SearchInput
    } else if within(ENTRY_SELECTOR) {
        ClickTarget::NavigationEntry
    } else if within("nav ul") {
        ClickTarget::NavigationList
    } else {
        ClickTarget::Elsewhere
    }
}
