/// A node in the rendered page tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Elements rendered without a closing tag.
const VOID_TAGS: &[&str] = &["img", "meta", "link", "br", "hr", "input"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    /// Set or overwrite an attribute. First-set order is kept.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: &str) {
        self.children = vec![Node::Text(text.to_string())];
    }

    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(el) => el.write_html(out),
                Node::Text(text) => out.push_str(&escape_text(text)),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let el = Element::new("a")
            .with_attr("href", "https://example.com")
            .with_child(Element::new("span").with_text("Hi"));
        assert_eq!(el.to_html(), r#"<a href="https://example.com"><span>Hi</span></a>"#);
    }

    #[test]
    fn void_tags_have_no_close() {
        let el = Element::new("img").with_attr("src", "x.png");
        assert_eq!(el.to_html(), r#"<img src="x.png">"#);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let el = Element::new("p")
            .with_attr("title", r#"a "b" & c"#)
            .with_text("<script>");
        assert_eq!(
            el.to_html(),
            r#"<p title="a &quot;b&quot; &amp; c">&lt;script&gt;</p>"#
        );
    }

    #[test]
    fn set_attr_overwrites_in_place() {
        let mut el = Element::new("img").with_attr("src", "a").with_attr("alt", "x");
        el.set_attr("src", "b");
        assert_eq!(el.attr("src"), Some("b"));
        assert_eq!(el.to_html(), r#"<img src="b" alt="x">"#);
    }

    #[test]
    fn set_text_replaces_children() {
        let mut el = Element::new("h1").with_child(Element::new("b").with_text("old"));
        el.set_text("new");
        assert_eq!(el.children(), &[Node::Text("new".to_string())]);
        assert_eq!(el.text_content(), "new");
    }
}
