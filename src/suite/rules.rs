//! Assertion rule shapes
//!
//! Every predicate is optional and independent; an absent field imposes no
//! constraint. New predicates are added as new optional fields so existing
//! suite files keep parsing.

use serde::Deserialize;

/// Predicates over an integer value
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntAssert {
    pub equals: Option<i64>,
    pub at_least: Option<i64>,
    pub at_most: Option<i64>,
    pub less_than: Option<i64>,
    pub greater_than: Option<i64>,
    pub not_equals: Option<i64>,
}

/// Predicates over a string value
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StringAssert {
    /// Byte-for-byte comparison
    pub exactly: Option<String>,
    /// Comparison against the observed value with surrounding whitespace trimmed
    pub equals: Option<String>,
    pub contains: Option<String>,
    pub not_contains: Option<String>,
    /// Regular expression that must match somewhere in the value
    pub matches: Option<String>,
}

/// Predicates over a text payload interpreted as structured content
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TextContentAssert {
    pub html: Option<HtmlAssert>,
}

/// Predicates over an HTML document
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HtmlAssert {
    /// Applied to the text of `/html/head/title`
    pub title: Option<StringAssert>,
}

/// Gate deciding whether an action runs
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Checked against the failures accumulated by previously completed suites
    pub failures_so_far: Option<IntAssert>,
}
