//! Code snippet component with lightweight highlighting and copy button.

use std::time::Duration;

use leptos::{prelude::*, task::spawn_local};
use sqwish_docs_core::{
    CopyIndicator, Line, Token, TokenKind, copy::DEFAULT_COPIED_FEEDBACK, highlight,
};
use wasm_bindgen_futures::JsFuture;

const COMMENT_STYLE: &str = "color: #5c6370";

const CHECK_PATH: &str = "M9 16.2l-3.5-3.5L4 14l5 5 12-12-1.5-1.5L9 16.2z";

const COPY_PATH: &str = "M7 5a3 3 0 0 1 3-3h9a3 3 0 0 1 3 3v9a3 3 0 0 1-3 3h-2v2a3 3 0 0 1-3 3H5a3 3 0 0 1-3-3v-9a3 3 0 0 1 3-3h2V5Zm2 2h5a3 3 0 0 1 3 3v5h2a1 1 0 0 0 1-1V5a1 1 0 0 0-1-1h-9a1 1 0 0 0-1 1v2ZM5 9a1 1 0 0 0-1 1v9a1 1 0 0 0 1 1h9a1 1 0 0 0 1-1v-9a1 1 0 0 0-1-1H5Z";

/// CSS class and inline style for a token kind. Plain text is unstyled.
pub fn token_style(kind: TokenKind) -> Option<(&'static str, &'static str)> {
    match kind {
        TokenKind::Plain => None,
        TokenKind::String => Some(("sqwish-code-string", "color: #d19a66")),
        TokenKind::Keyword => Some((
            "sqwish-code-keyword",
            "color: #61afef; font-weight: bold",
        )),
    }
}

/// Highlighted, copyable code block.
///
/// The copy button writes `code` verbatim, never the rendered markup. Each
/// copy restarts the "copied" interval.
#[component]
pub fn CodeSnippet(
    /// Source text to display.
    #[prop(into)]
    code: Signal<String>,
    /// How long the copied indicator stays up.
    #[prop(default = DEFAULT_COPIED_FEEDBACK)]
    feedback: Duration,
) -> impl IntoView {
    let indicator = RwSignal::new(CopyIndicator::new());
    let pending = StoredValue::new(None::<TimeoutHandle>);

    let on_copy = move |_| {
        write_clipboard(code.get_untracked());

        let Some(ticket) = indicator.try_update(CopyIndicator::trigger) else {
            return;
        };
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }

        let revert = move || {
            indicator.try_update(|i| i.expire(ticket));
        };
        match set_timeout_with_handle(revert, feedback) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                log::warn!("could not schedule copy indicator reset: {err:?}");
                indicator.try_update(|i| i.expire(ticket));
            }
        }
    };

    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_get_value() {
            handle.clear();
        }
    });

    let copied = Memo::new(move |_| indicator.with(CopyIndicator::is_copied));

    view! {
      <div class="sqwish-snippet">
        <button
          type="button"
          class="sqwish-snippet-copy"
          title="Copy code"
          aria-label=move || if copied.get() { "Copied" } else { "Copy code" }
          on:click=on_copy
        >
          <Show when=move || copied.get() fallback=|| icon(COPY_PATH)>
            {icon(CHECK_PATH)}
          </Show>
        </button>

        <pre class="sqwish-snippet-pre">
          <code>
            {move || {
              let source = code.get();
              highlight(&source).into_iter().map(render_line).collect_view()
            }}
          </code>
        </pre>
      </div>
    }
}

fn icon(path: &'static str) -> impl IntoView {
    view! {
      <svg
        xmlns="http://www.w3.org/2000/svg"
        width="1em"
        height="1em"
        fill="white"
        viewBox="0 0 24 24"
        aria-hidden="true"
      >
        <path fill-rule="evenodd" clip-rule="evenodd" d=path></path>
      </svg>
    }
}

fn render_line(line: Line<'_>) -> AnyView {
    match line {
        // Non-breaking space keeps the empty line's height.
        Line::Blank => view! { <div class="sqwish-code-line">"\u{a0}"</div> }.into_any(),
        Line::Comment(text) => view! {
          <div class="sqwish-code-line sqwish-code-comment" style=COMMENT_STYLE>
            {text.to_string()}
          </div>
        }
        .into_any(),
        Line::Code(tokens) => view! {
          <div class="sqwish-code-line">{tokens.into_iter().map(render_token).collect_view()}</div>
        }
        .into_any(),
    }
}

fn render_token(token: Token<'_>) -> AnyView {
    let text = token.text.to_string();
    match token_style(token.kind) {
        None => text.into_any(),
        Some((class, style)) => view! {
          <span class=class style=style>
            {text}
          </span>
        }
        .into_any(),
    }
}

/// Fire-and-forget clipboard write; failures are only logged.
fn write_clipboard(text: String) {
    let Some(window) = web_sys::window() else {
        log::warn!("clipboard unavailable: no window");
        return;
    };

    let promise = window.navigator().clipboard().write_text(&text);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::debug!("copied {} bytes to clipboard", text.len()),
            Err(err) => log::warn!("clipboard write failed: {err:?}"),
        }
    });
}
