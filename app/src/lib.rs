#![recursion_limit = "256"]

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use sqwish_docs_core::DocsConfig;

mod docs_page;

pub use docs_page::DocsPage;

#[component]
pub fn App(
    /// Site configuration; defaults apply when omitted.
    #[prop(optional)]
    config: Option<DocsConfig>,
) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = config.unwrap_or_default();
    let title = config.site.title.clone();
    provide_context(config);

    view! {
      <Title text=title />

      <Router>
        <Routes fallback=|| "Page not found.".into_view()>
          <Route path=StaticSegment("") view=DocsPage />
          <Route path=StaticSegment("docs") view=DocsPage />
        </Routes>
      </Router>
    }
}
