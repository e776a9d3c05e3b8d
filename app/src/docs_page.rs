//! The single-page API documentation.

use leptos::prelude::*;
use sqwish_docs_core::{
    ActiveSectionTracker, DocsConfig, HeadroomTracker, MenuState, Topic, default_sections,
    filter_sections, observed_ids,
};
use sqwish_docs_ui::{
    CodeSnippet, LanguageSelector, SearchBox, SectionNav, TopBar, classify_click, use_scroll_spy,
};

const BRAND: &str = "Sqwish Docs";

/// Renders the documentation page and owns its view state.
#[component]
pub fn DocsPage() -> impl IntoView {
    let config = use_context::<DocsConfig>().unwrap_or_default();

    let sections = StoredValue::new(default_sections());
    let query = RwSignal::new(String::new());
    let filtered = Signal::derive(move || {
        let query = query.get();
        sections.with_value(|all| {
            filter_sections(all, &query)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    let active = use_scroll_spy(
        sections.with_value(|all| observed_ids(all)),
        ActiveSectionTracker::new("introduction", config.page.active_section_threshold),
    );

    let language = RwSignal::new(config.page.default_language);
    let menu = RwSignal::new(MenuState::default());
    let menu_open = Memo::new(move |_| menu.with(MenuState::is_open));

    let headroom = RwSignal::new(HeadroomTracker::new(config.page.top_bar_hide_threshold));
    let top_bar_visible = Memo::new(move |_| headroom.with(HeadroomTracker::visible));
    let main_ref = NodeRef::<leptos::html::Main>::new();
    let on_scroll = move |_| {
        if let Some(main) = main_ref.get_untracked() {
            let offset = f64::from(main.scroll_top());
            headroom.update(|tracker| {
                tracker.on_scroll(offset);
            });
        }
    };

    let on_sidebar_click = move |ev: leptos::ev::MouseEvent| {
        let target = classify_click(&ev);
        menu.update(|menu| {
            if menu.on_sidebar_click(target) {
                log::debug!("menu closed by {target:?} click");
            }
        });
    };

    let feedback = config.snippet.copied_feedback();
    let snippet = move |topic: Topic| {
        let code = Signal::derive(move || topic.code(language.get()).to_string());
        view! { <CodeSnippet code=code feedback=feedback /> }
    };

    let keys_path = config.site.keys_path.clone();
    let languages = config.page.languages.clone();

    view! {
      <div class="sqwish-docs">
        <Show when=move || menu_open.get()>
          <div class="sqwish-overlay" on:click=move |_| menu.update(MenuState::close)></div>
        </Show>

        <aside class="sqwish-sidebar" class:open=move || menu_open.get() on:click=on_sidebar_click>
          <div class="sqwish-sidebar-brand">{BRAND}</div>
          <SearchBox query=query />
          <SectionNav sections=filtered active_id=active />
        </aside>

        <main node_ref=main_ref class="sqwish-main" on:scroll=on_scroll>
          <TopBar visible=top_bar_visible menu=menu title=BRAND />

          <section id="introduction" class="sqwish-section">
            <h2>"Introduction"</h2>
            <p>
              "Welcome to the Sqwish API documentation. This guide will help you understand how to use our real-time prompt optimization API."
            </p>
            <p>
              "With Sqwish, you can optimize long text prompts into shorter, token-efficient versions, saving computation and costs when working with large language models."
            </p>
          </section>

          <LanguageSelector languages=languages selected=language />

          <section id="setup" class="sqwish-section">
            <h2>"Setup"</h2>
            <p class="sqwish-callout">
              "Generate and manage your API Keys "
              <a href=keys_path target="_blank" rel="noopener noreferrer">
                "here"
              </a>
              "."
            </p>
            <p>
              "Below are the instructions to install and initialize the Sqwish client library in your preferred language:"
            </p>
            {snippet(Topic::Setup)}
          </section>

          <section id="getting-started" class="sqwish-section">
            <h2>"Getting Started"</h2>
            <p>
              "After setting your API key, you can optimize prompts easily. Here's a quick example showing how to optimize a prompt and inspect additional metadata returned by the API:"
            </p>
            {snippet(Topic::GettingStarted)}
          </section>

          <section id="api-reference" class="sqwish-section">
            <h2>"API Reference"</h2>
            <p>
              "Our API provides endpoints for optimizing text prompts in real-time. The main endpoint is "
              <code>"/v1/optimization/optimize"</code>
              "."
            </p>
            <section id="api-reference-optimize-endpoint" class="sqwish-subsection">
              <h3>"Optimize Endpoint"</h3>
              <p>"Endpoint: " <code>"/v1/optimization/optimize"</code></p>
              <p>"Method: " <code>"POST"</code></p>
              <p>"Parameters:"</p>
              <ul>
                <li><code>"text"</code> " (string): The text prompt to optimize."</li>
              </ul>
              <p>"The JSON response includes:"</p>
              <ul>
                <li><strong>"message:"</strong> " The optimized text."</li>
                <li><strong>"tokens_reduced:"</strong> " Number of tokens saved by optimizing."</li>
              </ul>
              <p>
                "Here is an example making a REST API call directly to the optimization endpoint. You can easily integrate this into any application or system:"
              </p>
              {snippet(Topic::RestApiExample)}
            </section>
          </section>

          <section id="troubleshooting" class="sqwish-section">
            <h2>"Troubleshooting"</h2>
            <p>"If you encounter issues, here are some common errors and solutions:"</p>
            <ul>
              <li><strong>"Error 401:"</strong> " Check your API key and ensure it is valid."</li>
              <li><strong>"Error 500:"</strong> " Server error. Try again later or contact support."</li>
            </ul>
          </section>

          <section id="use-cases" class="sqwish-section">
            <h2>"Use Cases"</h2>
            <p>"Explore how the Sqwish API can be used in various scenarios:"</p>
            <ul>
              <li>"Reduce latency in real-time or low-latency environments (e.g. finance, analytics)."</li>
              <li>"Handle longer documents or complex queries within a single context window."</li>
              <li>"Keep chatbots snappy even as conversations grow."</li>
              <li>
                "Use optimized multi-shot examples for chain of thought prompting: fewer tokens, faster thinking, same reasoning."
              </li>
              <li>"Fit more documents into retrieval-augmented generation (RAG) flows."</li>
              <li>"Lower costs for frequent short prompts by optimization every time."</li>
            </ul>
          </section>
        </main>
      </div>
    }
}
