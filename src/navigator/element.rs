//! Owned DOM element snapshots
//!
//! `ElementHandle` detaches an element from the live document so extractor
//! logic can hold, pass, and test element data without borrowing from a
//! parsed page. Each handle captures the element's tag, attributes, collected
//! text, and its full descendant tree.

use crate::navigator::SelectorSpec;
use scraper::ElementRef;

/// An owned snapshot of one DOM element and its descendants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementHandle {
    tag: String,
    attrs: Vec<(String, String)>,
    text: String,
    children: Vec<ElementHandle>,
}

impl ElementHandle {
    /// Snapshots a live element and its descendant elements
    pub fn from_element(element: ElementRef<'_>) -> Self {
        let value = element.value();
        ElementHandle {
            tag: value.name().to_string(),
            attrs: value
                .attrs()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            text: element.text().collect::<String>(),
            children: element
                .children()
                .filter_map(ElementRef::wrap)
                .map(ElementHandle::from_element)
                .collect(),
        }
    }

    /// The element's tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The element's visible text, including descendant text, as captured
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The element's visible text with surrounding whitespace removed
    pub fn text_trimmed(&self) -> String {
        self.text.trim().to_string()
    }

    /// Looks up an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Finds the first descendant matching the selector, in document order
    ///
    /// Tag and class selectors are supported on snapshots; CSS path selectors
    /// apply at document level only and match nothing here.
    pub fn find(&self, selector: &SelectorSpec) -> Option<&ElementHandle> {
        for child in &self.children {
            if child.matches(selector) {
                return Some(child);
            }
            if let Some(found) = child.find(selector) {
                return Some(found);
            }
        }
        None
    }

    /// Finds all descendants matching the selector, in document order
    pub fn find_all(&self, selector: &SelectorSpec) -> Vec<&ElementHandle> {
        let mut matches = Vec::new();
        self.collect_matches(selector, &mut matches);
        matches
    }

    fn collect_matches<'a>(&'a self, selector: &SelectorSpec, out: &mut Vec<&'a ElementHandle>) {
        for child in &self.children {
            if child.matches(selector) {
                out.push(child);
            }
            child.collect_matches(selector, out);
        }
    }

    fn matches(&self, selector: &SelectorSpec) -> bool {
        match selector {
            SelectorSpec::Tag(tag) => self.tag.eq_ignore_ascii_case(tag),
            SelectorSpec::Class(class) => self
                .attr("class")
                .map(|attr| attr.split_whitespace().any(|c| c == class))
                .unwrap_or(false),
            SelectorSpec::Path(_) => false,
        }
    }
}
