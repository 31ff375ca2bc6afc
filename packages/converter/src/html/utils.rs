//! DOM utility functions for navigating `markup5ever_rcdom` trees.

use markup5ever_rcdom::{Handle, NodeData};

/// Get the local tag name of an element, or `None` for non-element nodes.
///
/// # Examples
/// ```
/// use kanun_converter::html::{element_children, get_tag_name, parse_html};
///
/// let dom = parse_html("<p>text</p>");
/// let html = element_children(&dom.document).remove(0);
/// assert_eq!(get_tag_name(&html), Some("html"));
/// ```
pub fn get_tag_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// Check if a node is an element with the given tag name.
pub fn has_tag(node: &Handle, tag: &str) -> bool {
    get_tag_name(node) == Some(tag)
}

/// Check if a node is an element.
pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

/// Get an attribute value from an element.
///
/// # Returns
/// Attribute value, or `None` if the node is not an element or lacks the attribute
pub fn get_attribute(node: &Handle, name: &str) -> Option<String> {
    let NodeData::Element { attrs, .. } = &node.data else {
        return None;
    };
    attrs
        .borrow()
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| attr.value.to_string())
}

/// Check if an element carries a class in its whitespace-separated `class` list.
pub fn has_class(node: &Handle, class: &str) -> bool {
    get_attribute(node, "class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

/// Get all element children of a node, in document order.
///
/// Text nodes, comments and processing instructions are excluded.
pub fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| is_element(child))
        .cloned()
        .collect()
}

/// All descendants of a node in document (pre-)order, excluding the node itself.
pub fn descendants(node: &Handle) -> Vec<Handle> {
    let mut result = Vec::new();
    let mut stack: Vec<Handle> = node.children.borrow().iter().rev().cloned().collect();

    while let Some(current) = stack.pop() {
        stack.extend(current.children.borrow().iter().rev().cloned());
        result.push(current);
    }

    result
}

/// Find the first descendant element matching a tag and class.
pub fn find_by_tag_and_class(node: &Handle, tag: &str, class: &str) -> Option<Handle> {
    descendants(node)
        .into_iter()
        .find(|n| has_tag(n, tag) && has_class(n, class))
}

/// Find all descendant elements carrying a class, in document order.
pub fn find_all_by_class(node: &Handle, class: &str) -> Vec<Handle> {
    descendants(node)
        .into_iter()
        .filter(|n| has_class(n, class))
        .collect()
}

/// Concatenated text of all descendant text nodes, untrimmed.
///
/// Comments are not text, so conditional comments in Word exports
/// contribute nothing.
pub fn get_text(node: &Handle) -> String {
    let mut text = String::new();
    if let NodeData::Text { contents } = &node.data {
        text.push_str(&contents.borrow());
    }
    for descendant in descendants(node) {
        if let NodeData::Text { contents } = &descendant.data {
            text.push_str(&contents.borrow());
        }
    }
    text
}
