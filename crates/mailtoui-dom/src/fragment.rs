//! Element specs
//!
//! A detached description of an element subtree. Markup builders return
//! one of these instead of a string, and [`Document::mount`] turns it
//! into live nodes.
//!
//! [`Document::mount`]: crate::Document::mount

/// Structured description of an element and its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Set an attribute (replacing an earlier value of the same name)
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    /// Append class tokens
    pub fn class(self, class: &str) -> Self {
        let joined = match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.attr("class", &joined)
    }

    /// Leading text child
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn children_from(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[ElementSpec] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|value| value.split_whitespace().any(|token| token == class))
    }

    /// Depth-first search over this spec and its descendants
    pub fn find(&self, predicate: &dyn Fn(&ElementSpec) -> bool) -> Option<&ElementSpec> {
        if predicate(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(predicate))
    }

    /// Collect every spec in the subtree matching `predicate`, in order
    pub fn find_all(&self, predicate: &dyn Fn(&ElementSpec) -> bool) -> Vec<&ElementSpec> {
        let mut out = Vec::new();
        self.collect(predicate, &mut out);
        out
    }

    fn collect<'a>(&'a self, predicate: &dyn Fn(&ElementSpec) -> bool, out: &mut Vec<&'a ElementSpec>) {
        if predicate(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(predicate, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let spec = ElementSpec::new("DIV")
            .class("a")
            .class("b")
            .attr("role", "dialog")
            .attr("role", "alertdialog")
            .child(ElementSpec::new("span").text("hi"));

        assert_eq!(spec.tag(), "div");
        assert_eq!(spec.get_attr("class"), Some("a b"));
        assert_eq!(spec.get_attr("role"), Some("alertdialog"));
        assert!(spec.has_class("b"));
        assert_eq!(spec.children()[0].text_content(), Some("hi"));
    }

    #[test]
    fn test_find() {
        let spec = ElementSpec::new("div")
            .child(ElementSpec::new("a").class("x"))
            .child(ElementSpec::new("p").child(ElementSpec::new("a").class("x")));

        assert_eq!(spec.find_all(&|s| s.has_class("x")).len(), 2);
        assert!(spec.find(&|s| s.tag() == "p").is_some());
        assert!(spec.find(&|s| s.tag() == "table").is_none());
    }
}
