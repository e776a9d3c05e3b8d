//! Sidebar search input.

use leptos::prelude::*;

/// Text input bound to the section filter query.
#[component]
pub fn SearchBox(
    /// Placeholder text for the input.
    #[prop(default = "Search...".to_string())]
    placeholder: String,
    /// Signal to track the current query.
    query: RwSignal<String>,
) -> impl IntoView {
    view! {
      <div class="sqwish-search-box">
        <input
          type="text"
          class="sqwish-search-input"
          placeholder=placeholder
          aria-label="Search sections"
          prop:value=move || query.get()
          on:input=move |ev| {
            let value = event_target_value(&ev);
            query.set(value);
          }
        />
      </div>
    }
}
