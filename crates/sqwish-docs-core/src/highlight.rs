//! Lightweight syntax decoration for code snippets.
//!
//! This is text decoration, not a lexer. Each line is classified as blank,
//! comment, or code. Code lines are split into quoted-string spans and
//! everything else, and the non-string text is then scanned for a fixed
//! keyword vocabulary. Concatenating a code line's tokens always reproduces
//! the line.

use std::sync::LazyLock;

use regex::Regex;

/// Words styled as keywords when they appear outside string literals.
pub const KEYWORDS: &[&str] = &[
    "const",
    "let",
    "var",
    "function",
    "return",
    "import",
    "from",
    "interface",
    "type",
    "class",
    "extends",
    "public",
    "private",
    "protected",
    "implements",
    "new",
    "try",
    "catch",
    "finally",
    "throw",
    "if",
    "else",
    "for",
    "while",
    "do",
    "switch",
    "case",
    "break",
    "continue",
    "default",
    "async",
    "await",
];

/// Line prefixes (after trimming) that mark a whole-line comment.
pub const COMMENT_MARKERS: &[&str] = &["//", "#"];

// A quote without a closing partner on the same line falls through to the
// single-character `text` alternative.
static SPAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<string>"[^"]*"|'[^']*'|`[^`]*`)|(?P<text>[^"'`]+|["'`])"#)
        .expect("span pattern is valid")
});

static KEYWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b(?:{})\b", KEYWORDS.join("|"))).expect("keyword pattern is valid")
});

/// Styling class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Unstyled text.
    Plain,
    /// A keyword from [`KEYWORDS`].
    Keyword,
    /// A quoted string literal, quotes included.
    String,
}

/// A styled fragment of a code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

/// A classified snippet line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// An empty line; rendered as a placeholder to keep vertical spacing.
    Blank,
    /// A whole-line comment, rendered verbatim in a single muted style.
    Comment(&'a str),
    /// A tokenized code line.
    Code(Vec<Token<'a>>),
}

impl Line<'_> {
    /// The original text of the line.
    pub fn text(&self) -> String {
        match self {
            Line::Blank => String::new(),
            Line::Comment(text) => (*text).to_string(),
            Line::Code(tokens) => tokens.iter().map(|token| token.text).collect(),
        }
    }
}

/// Highlight a whole snippet, one entry per `\n`-separated line.
pub fn highlight(code: &str) -> Vec<Line<'_>> {
    code.split('\n').map(highlight_line).collect()
}

/// Classify and tokenize a single line.
pub fn highlight_line(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }

    let trimmed = line.trim();
    if COMMENT_MARKERS
        .iter()
        .any(|marker| trimmed.starts_with(marker))
    {
        return Line::Comment(line);
    }

    Line::Code(tokenize(line))
}

/// Collects tokens, merging adjacent plain fragments.
struct TokenBuilder<'a> {
    line: &'a str,
    tokens: Vec<Token<'a>>,
    plain_start: Option<usize>,
}

impl<'a> TokenBuilder<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            tokens: Vec::new(),
            plain_start: None,
        }
    }

    fn plain(&mut self, start: usize) {
        self.plain_start.get_or_insert(start);
    }

    fn styled(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.flush(start);
        self.tokens.push(Token::new(kind, &self.line[start..end]));
    }

    fn flush(&mut self, end: usize) {
        if let Some(start) = self.plain_start.take() {
            if start < end {
                self.tokens
                    .push(Token::new(TokenKind::Plain, &self.line[start..end]));
            }
        }
    }

    fn finish(mut self) -> Vec<Token<'a>> {
        self.flush(self.line.len());
        self.tokens
    }
}

fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut builder = TokenBuilder::new(line);

    for caps in SPAN_PATTERN.captures_iter(line) {
        if let Some(string) = caps.name("string") {
            builder.styled(TokenKind::String, string.start(), string.end());
            continue;
        }

        let Some(text) = caps.name("text") else {
            continue;
        };

        let offset = text.start();
        let mut cursor = offset;
        for keyword in KEYWORD_PATTERN.find_iter(text.as_str()) {
            let start = offset + keyword.start();
            if start > cursor {
                builder.plain(cursor);
            }
            let end = offset + keyword.end();
            builder.styled(TokenKind::Keyword, start, end);
            cursor = end;
        }
        if cursor < text.end() {
            builder.plain(cursor);
        }
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds<'a>(line: &'a Line<'a>) -> Vec<(TokenKind, &'a str)> {
        match line {
            Line::Code(tokens) => tokens.iter().map(|t| (t.kind, t.text)).collect(),
            other => panic!("expected a code line, got {other:?}"),
        }
    }

    #[test]
    fn test_keyword_and_string() {
        let line = highlight_line(r#"const x = "return";"#);
        assert_eq!(
            kinds(&line),
            vec![
                (TokenKind::Keyword, "const"),
                (TokenKind::Plain, " x = "),
                (TokenKind::String, "\"return\""),
                (TokenKind::Plain, ";"),
            ]
        );
    }

    #[test]
    fn test_hash_comment_line() {
        let line = highlight_line("# export SQWISH_API_KEY=YOUR_API_KEY");
        assert_eq!(line, Line::Comment("# export SQWISH_API_KEY=YOUR_API_KEY"));
    }

    #[test]
    fn test_indented_slash_comment_keeps_indent() {
        let line = highlight_line("    // return early");
        assert_eq!(line, Line::Comment("    // return early"));
    }

    #[test]
    fn test_empty_line_is_blank() {
        assert_eq!(highlight_line(""), Line::Blank);
    }

    #[test]
    fn test_whitespace_line_is_plain_code() {
        let line = highlight_line("   ");
        assert_eq!(kinds(&line), vec![(TokenKind::Plain, "   ")]);
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        let line = highlight_line("imports = format(returned)");
        assert_eq!(
            kinds(&line),
            vec![(TokenKind::Plain, "imports = format(returned)")]
        );
    }

    #[test]
    fn test_single_and_backtick_strings() {
        let line = highlight_line("require('sqwishai') + `for ${x}`");
        assert_eq!(
            kinds(&line),
            vec![
                (TokenKind::Plain, "require("),
                (TokenKind::String, "'sqwishai'"),
                (TokenKind::Plain, ") + "),
                (TokenKind::String, "`for ${x}`"),
            ]
        );
    }

    #[test]
    fn test_unclosed_quote_is_kept_as_text() {
        let line = highlight_line("it's a new day");
        assert_eq!(
            kinds(&line),
            vec![
                (TokenKind::Plain, "it's a "),
                (TokenKind::Keyword, "new"),
                (TokenKind::Plain, " day"),
            ]
        );
        assert_eq!(line.text(), "it's a new day");
    }

    #[test]
    fn test_mixed_quotes_inside_string() {
        let line = highlight_line(r#"f"Bearer {os.environ.get('KEY')}""#);
        assert_eq!(
            kinds(&line),
            vec![
                (TokenKind::Plain, "f"),
                (TokenKind::String, r#""Bearer {os.environ.get('KEY')}""#),
            ]
        );
    }

    #[test]
    fn test_highlight_splits_on_newlines() {
        let lines = highlight("import os\n\n# comment\n");
        assert_eq!(lines.len(), 4);
        assert!(matches!(lines[0], Line::Code(_)));
        assert_eq!(lines[1], Line::Blank);
        assert_eq!(lines[2], Line::Comment("# comment"));
        assert_eq!(lines[3], Line::Blank);
    }

    #[test]
    fn test_line_text_round_trip() {
        let source = r#"const { Sqwish } = require('sqwishai'); if (a) { return "b" }"#;
        assert_eq!(highlight_line(source).text(), source);
    }
}
