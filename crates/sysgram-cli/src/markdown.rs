//! Fenced diagram blocks in markdown pages.
//!
//! Every fenced block whose language is a configured diagram fence is
//! replaced by the rendered inline diagram. The rest of the page is copied
//! through unchanged.

use std::sync::LazyLock;

use log::{debug, error};
use regex::{Captures, Regex};

use sysgram::{DiagramBuilder, OutputFormat, SysgramError};

use crate::config::{MarkdownConfig, TitleSource};

/// Title used when neither the block nor the page provide one.
pub const FALLBACK_TITLE: &str = "SysML diagram";

/// CSS class of the `<pre>` that replaces a block that failed to render.
pub const ERROR_CLASS: &str = "sysml-error";

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?P<header>[^\n]*)\n(?P<body>.*?)```")
        .expect("fence pattern is valid")
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\w+)\s*=\s*"([^"]*)""#).expect("attribute pattern is valid")
});

/// Result of rendering one page.
#[derive(Debug)]
pub struct RenderedPage {
    pub text: String,
    pub diagrams: usize,
    pub failures: usize,
}

/// Renders the diagram blocks of markdown pages.
pub struct PageRenderer<'a> {
    builder: &'a DiagramBuilder,
    config: &'a MarkdownConfig,
    format: OutputFormat,
    title: Option<&'a str>,
}

impl<'a> PageRenderer<'a> {
    /// `title`, when given, replaces the title derived from the page.
    pub fn new(
        builder: &'a DiagramBuilder,
        config: &'a MarkdownConfig,
        format: OutputFormat,
        title: Option<&'a str>,
    ) -> Self {
        Self {
            builder,
            config,
            format,
            title,
        }
    }

    /// Replace every diagram block of `markdown`.
    ///
    /// `path` is the page's path, used as provenance and as a title source.
    ///
    /// # Errors
    ///
    /// In strict mode the first block that fails to render fails the page.
    /// Otherwise failed blocks are replaced by an error `<pre>` and counted.
    pub fn render_page(&self, markdown: &str, path: &str) -> Result<RenderedPage, SysgramError> {
        let default_title = self
            .title
            .map(str::to_string)
            .unwrap_or_else(|| self.default_title(markdown, path));

        let mut page = RenderedPage {
            text: String::with_capacity(markdown.len()),
            diagrams: 0,
            failures: 0,
        };
        let mut last = 0;

        for captures in FENCE.captures_iter(markdown) {
            let Some(block) = captures.get(0) else {
                continue;
            };
            let (language, attributes) = parse_header(&captures["header"]);
            if !self.config.is_diagram_fence(&language) {
                continue;
            }

            page.text.push_str(&markdown[last..block.start()]);
            last = block.end();

            let title = attribute(&attributes, "title").unwrap_or(default_title.as_str());
            match self.render_block(&captures, title, path) {
                Ok(html) => {
                    page.diagrams += 1;
                    page.text.push_str(&format!("\n\n{html}\n\n"));
                }
                Err(err) if self.config.strict() => return Err(err),
                Err(err) => {
                    error!(path, err:%; "Diagram block failed to render");
                    page.failures += 1;
                    page.text.push_str(&format!(
                        "<pre class=\"{ERROR_CLASS}\">SysML rendering failed: {}</pre>",
                        escape_html(&err.to_string())
                    ));
                }
            }
        }
        page.text.push_str(&markdown[last..]);

        debug!(path, diagrams = page.diagrams, failures = page.failures; "Page rendered");
        Ok(page)
    }

    fn render_block(
        &self,
        captures: &Captures<'_>,
        title: &str,
        path: &str,
    ) -> Result<String, SysgramError> {
        let model = self.builder.parse(&captures["body"], Some(path));
        self.builder.render_as(&model, self.format, title, true)
    }

    fn default_title(&self, markdown: &str, path: &str) -> String {
        match self.config.title_source() {
            TitleSource::Page => page_heading(markdown).unwrap_or(path).to_string(),
            TitleSource::File => path.to_string(),
            TitleSource::None => FALLBACK_TITLE.to_string(),
        }
    }
}

/// Lower-cased fence language and `key="value"` attributes of a fence header.
fn parse_header(header: &str) -> (String, Vec<(String, String)>) {
    let header = header.trim();
    let (language, rest) = header
        .split_once(char::is_whitespace)
        .unwrap_or((header, ""));

    let attributes = ATTRIBUTE
        .captures_iter(rest)
        .map(|caps| (caps[1].to_ascii_lowercase(), caps[2].to_string()))
        .collect();

    (language.to_ascii_lowercase(), attributes)
}

fn attribute<'a>(attributes: &'a [(String, String)], key: &str) -> Option<&'a str> {
    attributes
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.trim().is_empty())
}

/// Text of the first level-one heading.
fn page_heading(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
        .filter(|heading| !heading.is_empty())
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
