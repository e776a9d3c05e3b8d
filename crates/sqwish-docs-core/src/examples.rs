//! Code example sets shown by the page's snippets.
//!
//! Every [`Topic`] carries one literal source string per [`Language`]. The
//! page never computes code; it only selects which string to hand to the
//! snippet renderer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language variant of a code example.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    Curl,
}

impl Language {
    /// Every language the example data is written in.
    pub const ALL: [Language; 3] = [Language::Python, Language::JavaScript, Language::Curl];

    /// Languages offered by the selector unless configuration says otherwise.
    pub const SELECTABLE: [Language; 2] = [Language::Python, Language::Curl];

    /// Stable identifier, also used as the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Curl => "curl",
        }
    }

    /// Label shown on the selector tab.
    pub fn label(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::Curl => "curl",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Documentation topic that embeds a code example.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Setup,
    GettingStarted,
    RestApiExample,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Setup, Topic::GettingStarted, Topic::RestApiExample];

    /// The example set for this topic.
    pub fn examples(self) -> &'static ExampleSet {
        match self {
            Topic::Setup => &SETUP,
            Topic::GettingStarted => &GETTING_STARTED,
            Topic::RestApiExample => &REST_API_EXAMPLE,
        }
    }

    /// Source text for this topic in the given language.
    pub fn code(self, language: Language) -> &'static str {
        self.examples().get(language)
    }
}

/// One literal source string per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleSet {
    pub python: &'static str,
    pub javascript: &'static str,
    pub curl: &'static str,
}

impl ExampleSet {
    /// Select the string for a language.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Python => self.python,
            Language::JavaScript => self.javascript,
            Language::Curl => self.curl,
        }
    }
}

const CURL_OPTIMIZE: &str = r#"curl -X POST "https://api.sqwish.ai/v1/optimization/optimize" \
  -H "Content-Type: application/json" \
  -H "Authorization: Bearer $SQWISH_API_KEY" \
  -d '{
    "text": "Write a haiku about recursion in programming.",
    "target_model": "gpt4o",
    "optimization_model": "latest"
}'"#;

const CURL_REST: &str = r#"curl -X POST "https://api.sqwish.ai/v1/optimization/optimize" \
  -H "Content-Type: application/json" \
  -H "Authorization: Bearer $SQWISH_API_KEY" \
  -d '{
    "text": "Write a detailed blog post about recursion in programming.",
    "target_model": "gpt4o",
    "optimization_model": "latest"
}'"#;

static SETUP: ExampleSet = ExampleSet {
    javascript: r#"npm install sqwishai

// Then set your API key as an environment variable
// process.env.SQWISH_API_KEY = "YOUR_API_KEY""#,
    python: r#"pip install sqwishai

# Then set your API key as an environment variable or in your code:
# import os
# os.environ["SQWISH_API_KEY"] = "YOUR_API_KEY""#,
    curl: r#"# There's no installation via curl.
# Just ensure you have an API key. E.g.:
# export SQWISH_API_KEY=YOUR_API_KEY"#,
};

static GETTING_STARTED: ExampleSet = ExampleSet {
    javascript: r#"const { Sqwish } = require('sqwishai');
const sqwishClient = new Sqwish(process.env.SQWISH_API_KEY);

const inputPrompt = "Write a haiku about recursion in programming.";
const response = sqwishClient.text.optimize(inputPrompt)"#,
    python: r#"from sqwishai import Sqwish
import os

sqwish_client = Sqwish(os.environ.get("SQWISH_API_KEY"))

input_prompt = "Write a haiku about recursion in programming."
response = sqwish_client.text.optimize(input_prompt)"#,
    curl: CURL_OPTIMIZE,
};

static REST_API_EXAMPLE: ExampleSet = ExampleSet {
    javascript: r#"// Using fetch in JavaScript:
fetch("https://api.sqwish.ai/v1/optimization/optimize", {
  method: "POST",
  headers: {
    "Authorization": `Bearer ${process.env.SQWISH_API_KEY}`,
    "Content-Type": "application/json"
  },
  body: JSON.stringify({
    text: "Write a detailed blog post about recursion in programming.",
    target_model: "gpt4o",
    optimization_model: "latest"
  })
})
.then(response => response.json())
.then(data => {
  console.log("Optimized message:", data.message);
  console.log("Tokens Saved:", data.tokens_reduced);
});"#,
    python: r#"import requests, os

headers = {
  "Authorization": f"Bearer {os.environ.get('SQWISH_API_KEY')}",
  "Content-Type": "application/json"
}

payload = {
  "text": "Write a detailed blog post about recursion in programming.",
  "target_model": "gpt4o",
  "optimization_model": "latest"
}

response = requests.post("https://api.sqwish.ai/v1/optimization/optimize", json=payload, headers=headers)
data = response.json()

print("Optimized message:", data["message"])
print("Tokens Saved:", data["tokens_reduced"])"#,
    curl: CURL_REST,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_every_language() {
        for topic in Topic::ALL {
            for language in Language::ALL {
                assert!(
                    !topic.code(language).is_empty(),
                    "{topic:?} has no {language} example"
                );
            }
        }
    }

    #[test]
    fn test_selectable_languages_exclude_javascript() {
        assert_eq!(Language::SELECTABLE, [Language::Python, Language::Curl]);
        assert!(!Language::SELECTABLE.contains(&Language::JavaScript));
    }

    #[test]
    fn test_language_labels() {
        assert_eq!(Language::Python.label(), "Python");
        assert_eq!(Language::Curl.label(), "curl");
        assert_eq!(Language::JavaScript.to_string(), "javascript");
    }

    #[test]
    fn test_language_serialization() {
        let json = serde_json::to_string(&Language::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");

        let parsed: Language = serde_json::from_str("\"curl\"").unwrap();
        assert_eq!(parsed, Language::Curl);
    }

    #[test]
    fn test_curl_continuations_are_literal_backslashes() {
        let code = Topic::GettingStarted.code(Language::Curl);
        assert!(code.lines().next().unwrap().ends_with(" \\"));
    }

    #[test]
    fn test_javascript_template_literal_kept_verbatim() {
        let code = Topic::RestApiExample.code(Language::JavaScript);
        assert!(code.contains("`Bearer ${process.env.SQWISH_API_KEY}`"));
    }
}
