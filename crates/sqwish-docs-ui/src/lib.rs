//! Sqwish Docs UI Components
//!
//! Leptos components for the API documentation page.
//!
//! # Components
//!
//! ## Code
//! - [`CodeSnippet`] - Highlighted code block with copy-to-clipboard
//! - [`LanguageSelector`] - Tabs choosing the example language page-wide
//!
//! ## Navigation
//! - [`SectionNav`] - Sidebar list of sections with active highlighting
//! - [`SearchBox`] - Sidebar filter input
//! - [`TopBar`] - Mobile top bar with the menu toggle
//!
//! ## Hooks
//! - [`use_scroll_spy`] - Active section from an `IntersectionObserver`
//! - [`classify_click`] - Maps a sidebar click to a [`ClickTarget`]
//!
//! # Example
//!
//! ```ignore
//! use leptos::prelude::*;
//! use sqwish_docs_core::{Language, Topic};
//! use sqwish_docs_ui::{CodeSnippet, LanguageSelector};
//!
//! #[component]
//! fn Examples() -> impl IntoView {
//!     let language = RwSignal::new(Language::Python);
//!     let code = Signal::derive(move || Topic::Setup.code(language.get()).to_string());
//!
//!     view! {
//!         <LanguageSelector languages=Language::SELECTABLE.to_vec() selected=language />
//!         <CodeSnippet code=code />
//!     }
//! }
//! ```
//!
//! [`ClickTarget`]: sqwish_docs_core::ClickTarget

pub mod language;
pub mod navigation;
pub mod observer;
pub mod search;
pub mod snippet;
pub mod top_bar;

pub use language::LanguageSelector;
pub use navigation::{SectionNav, classify_click};
pub use observer::use_scroll_spy;
pub use search::SearchBox;
pub use snippet::CodeSnippet;
pub use top_bar::TopBar;
