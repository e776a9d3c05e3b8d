//! Sqwish Docs Core Library
//!
//! Platform-independent pieces of the Sqwish API documentation site: the
//! static content (sections and code examples), configuration, the snippet
//! highlighter, and the small state machines behind the page's interactive
//! behaviour. Nothing here touches the DOM, so all of it runs in host tests.

pub mod active;
pub mod config;
pub mod copy;
pub mod error;
pub mod examples;
pub mod highlight;
pub mod menu;
pub mod scroll;
pub mod section;

pub use active::{ActiveSectionTracker, IntersectionSample};
pub use config::DocsConfig;
pub use copy::{CopyIndicator, CopyState};
pub use error::{DocsError, Result};
pub use examples::{ExampleSet, Language, Topic};
pub use highlight::{Line, Token, TokenKind, highlight, highlight_line};
pub use menu::{ClickTarget, MenuState};
pub use scroll::HeadroomTracker;
pub use section::{Section, default_sections, filter_sections, observed_ids};
