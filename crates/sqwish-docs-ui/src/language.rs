//! Page-wide language selector for code examples.

use leptos::prelude::*;
use sqwish_docs_core::Language;

/// Exclusive choice of example language; every snippet follows `selected`.
#[component]
pub fn LanguageSelector(
    /// Languages to offer, in tab order.
    #[prop(into)]
    languages: Signal<Vec<Language>>,
    /// The selected language.
    selected: RwSignal<Language>,
) -> impl IntoView {
    view! {
      <div class="sqwish-language-selector">
        <div class="sqwish-language-prompt">
          <strong>"Select your preferred language:"</strong>
        </div>
        <div class="sqwish-language-tabs" role="tablist">
          <For
            each=move || languages.get()
            key=|language| *language
            children=move |language| {
              let is_selected = Memo::new(move |_| selected.get() == language);
              view! {
                <button
                  type="button"
                  role="tab"
                  class="sqwish-language-tab"
                  class:selected=move || is_selected.get()
                  aria-selected=move || is_selected.get().to_string()
                  on:click=move |_| {
                    log::debug!("example language set to {language}");
                    selected.set(language);
                  }
                >
                  {language.label()}
                </button>
              }
            }
          />

        </div>
      </div>
    }
}
