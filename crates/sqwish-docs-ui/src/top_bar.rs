//! Mobile top bar with the navigation menu toggle.

use leptos::prelude::*;
use sqwish_docs_core::MenuState;

const OPEN_ICON_PATH: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE_ICON_PATH: &str = "M6 18L18 6M6 6l12 12";

/// Sticky top bar that slides away while `visible` is false.
#[component]
pub fn TopBar(
    /// Whether the bar is shown.
    #[prop(into)]
    visible: Signal<bool>,
    /// Mobile menu state, toggled by the bar's button.
    menu: RwSignal<MenuState>,
    /// Brand text shown next to the toggle.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let is_open = Memo::new(move |_| menu.with(MenuState::is_open));

    view! {
      <div class="sqwish-top-bar" class:hidden=move || !visible.get()>
        <button
          type="button"
          class="sqwish-menu-toggle"
          title="Toggle Menu"
          aria-expanded=move || is_open.get().to_string()
          on:click=move |_| menu.update(MenuState::toggle)
        >
          <svg
            xmlns="http://www.w3.org/2000/svg"
            class="sqwish-menu-icon"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
          >
            <path
              stroke-linecap="round"
              stroke-linejoin="round"
              d=move || if is_open.get() { CLOSE_ICON_PATH } else { OPEN_ICON_PATH }
            ></path>
          </svg>
        </button>
        <span class="sqwish-top-bar-title">{title}</span>
        <div class="sqwish-top-bar-spacer"></div>
      </div>
    }
}
