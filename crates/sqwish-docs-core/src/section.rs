//! Navigable documentation sections and the sidebar search filter.

use serde::{Deserialize, Serialize};

/// A named, navigable block of documentation content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Section {
    /// Anchor ID of the section element.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Sub-section labels, in display order.
    #[serde(default)]
    pub sub_sections: Vec<String>,
}

impl Section {
    /// Create a new section without sub-sections.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sub_sections: Vec::new(),
        }
    }

    /// Add sub-section labels.
    pub fn with_sub_sections<I, S>(mut self, sub_sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_sections = sub_sections.into_iter().map(Into::into).collect();
        self
    }

    /// Anchor ID of one of this section's sub-sections.
    ///
    /// The label is lower-cased and each whitespace run becomes a single `-`.
    pub fn sub_section_id(&self, sub_label: &str) -> String {
        let mut id = String::with_capacity(self.id.len() + sub_label.len() + 1);
        id.push_str(&self.id);
        id.push('-');

        let mut in_whitespace = false;
        for ch in sub_label.to_lowercase().chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    id.push('-');
                }
                in_whitespace = true;
            } else {
                id.push(ch);
                in_whitespace = false;
            }
        }
        id
    }

    /// Whether the label or any sub-label contains `query`, ignoring case.
    ///
    /// `query` must already be lower-cased.
    fn matches_lowercase(&self, query: &str) -> bool {
        self.label.to_lowercase().contains(query)
            || self
                .sub_sections
                .iter()
                .any(|sub| sub.to_lowercase().contains(query))
    }

    /// Whether the label or any sub-label contains `query`, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        self.matches_lowercase(&query.to_lowercase())
    }

    /// This section's ID followed by the IDs of its sub-sections.
    pub fn anchor_ids(&self) -> Vec<String> {
        std::iter::once(self.id.clone())
            .chain(self.sub_sections.iter().map(|sub| self.sub_section_id(sub)))
            .collect()
    }
}

/// The sections of the API documentation page, in page order.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("introduction", "Introduction"),
        Section::new("setup", "Setup"),
        Section::new("getting-started", "Getting Started"),
        Section::new("api-reference", "API Reference").with_sub_sections(["Optimize Endpoint"]),
        Section::new("troubleshooting", "Troubleshooting"),
        Section::new("use-cases", "Use Cases"),
    ]
}

/// Sections whose label or any sub-label contains `query`, ignoring case.
///
/// An empty query keeps every section. Order is preserved.
pub fn filter_sections<'a>(sections: &'a [Section], query: &str) -> Vec<&'a Section> {
    let query = query.to_lowercase();
    sections
        .iter()
        .filter(|section| section.matches_lowercase(&query))
        .collect()
}

/// Every anchor the scroll-spy observes: section IDs interleaved with their
/// sub-section IDs.
pub fn observed_ids(sections: &[Section]) -> Vec<String> {
    sections.iter().flat_map(Section::anchor_ids).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_creation() {
        let section = Section::new("setup", "Setup");
        assert_eq!(section.id, "setup");
        assert_eq!(section.label, "Setup");
        assert!(section.sub_sections.is_empty());
    }

    #[test]
    fn test_sub_section_id() {
        let section =
            Section::new("api-reference", "API Reference").with_sub_sections(["Optimize Endpoint"]);
        assert_eq!(
            section.sub_section_id("Optimize Endpoint"),
            "api-reference-optimize-endpoint"
        );
        assert_eq!(section.sub_section_id("Rate  \tLimits"), "api-reference-rate-limits");
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        let sections = default_sections();
        let filtered = filter_sections(&sections, "");
        assert_eq!(filtered.len(), sections.len());
        assert!(filtered.iter().zip(&sections).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_case_insensitive() {
        let sections = default_sections();
        let filtered = filter_sections(&sections, "STARTED");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "getting-started");
    }

    #[test]
    fn test_filter_matches_sub_label() {
        let sections = default_sections();
        let filtered = filter_sections(&sections, "endpoint");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "api-reference");
    }

    #[test]
    fn test_filter_no_match() {
        let sections = default_sections();
        assert!(filter_sections(&sections, "billing").is_empty());
    }

    #[test]
    fn test_observed_ids_include_sub_sections() {
        let ids = observed_ids(&default_sections());
        assert_eq!(
            ids,
            vec![
                "introduction",
                "setup",
                "getting-started",
                "api-reference",
                "api-reference-optimize-endpoint",
                "troubleshooting",
                "use-cases",
            ]
        );
    }

    #[test]
    fn test_section_serialization() {
        let section = Section::new("setup", "Setup");
        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"id\":\"setup\""));

        let parsed: Section = serde_json::from_str(r#"{"id":"faq","label":"FAQ"}"#).unwrap();
        assert!(parsed.sub_sections.is_empty());
    }
}
