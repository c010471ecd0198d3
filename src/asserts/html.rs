//! Text content and HTML rule evaluation
//!
//! Documents are parsed with the HTML5 algorithm, which recovers from
//! unclosed tags, stray elements and a missing doctype the way browsers do.

use scraper::{Html, Selector};

use super::{Assertion, Failure, Outcome};
use crate::suite::{HtmlAssert, TextContentAssert};

/// Reported when the document cannot be parsed or queried
pub const PARSE_FAILED: &str = "Failed to parse HTML content";

/// Reported when `/html/head/title` does not exist
pub const NO_TITLE: &str = "HTML document contains no title";

const TITLE_PATH: &str = "html > head > title";

impl Assertion for TextContentAssert {
    type Subject = str;

    fn check(&self, value: &str) -> Outcome {
        if let Some(html) = &self.html {
            html.check(value).map_err(|f| f.within("Html"))?;
        }
        Ok(())
    }
}

impl Assertion for HtmlAssert {
    type Subject = str;

    fn check(&self, value: &str) -> Outcome {
        let document = Html::parse_document(value);
        if !document.errors.is_empty() {
            tracing::trace!("Recovered from {} HTML parse errors", document.errors.len());
        }

        if let Some(rule) = &self.title {
            let title = document_title(&document)?;
            rule.check(&title).map_err(|f| f.within("Title"))?;
        }
        Ok(())
    }
}

fn document_title(document: &Html) -> std::result::Result<String, Failure> {
    let selector = Selector::parse(TITLE_PATH).map_err(|_| Failure::new(PARSE_FAILED))?;
    document
        .select(&selector)
        .next()
        .map(|title| title.text().collect())
        .ok_or_else(|| Failure::new(NO_TITLE))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{assert_should_fail, assert_should_pass};
    use super::*;
    use crate::suite::StringAssert;

    fn title_rule(title: StringAssert) -> TextContentAssert {
        TextContentAssert {
            html: Some(HtmlAssert { title: Some(title) }),
        }
    }

    fn title_equals(expected: &str) -> TextContentAssert {
        title_rule(StringAssert {
            equals: Some(expected.to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_title_in_head() {
        let rule = title_equals("Hello World");
        assert_should_pass("<html><head><title> Hello World </title></head></html>", &rule);
        let f = assert_should_fail("<html><head><title>Hi World</title></head></html>", &rule);
        assert!(f.message().starts_with("Html > Title > Should have been:"));
    }

    #[test]
    fn test_title_outside_head_is_not_found() {
        let rule = title_equals("Hello World");
        let f = assert_should_fail("<html><body><title>Hello World</title></body></html>", &rule);
        assert_eq!(f.message(), format!("Html > {NO_TITLE}"));
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let rule = title_equals("Welcome");
        assert_should_pass("<title>Welcome</title><p>unclosed <b>bold", &rule);
        assert_should_pass("<HTML><HEAD><TITLE>Welcome</TITLE><BODY><div>", &rule);
    }

    #[test]
    fn test_no_markup_at_all() {
        let rule = title_equals("anything");
        let f = assert_should_fail("plain text body", &rule);
        assert_eq!(f.message(), format!("Html > {NO_TITLE}"));
    }

    #[test]
    fn test_title_contains() {
        let rule = title_rule(StringAssert {
            contains: Some("Hello World!".to_string()),
            ..Default::default()
        });
        assert_should_pass(
            "<!DOCTYPE html><html><head><title>Hello World! - Home</title></head><body></body></html>",
            &rule,
        );
    }

    #[test]
    fn test_empty_rules_pass() {
        assert_should_pass("<not html", &TextContentAssert::default());
        let rule = TextContentAssert {
            html: Some(HtmlAssert::default()),
        };
        assert_should_pass("no title needed", &rule);
    }
}
