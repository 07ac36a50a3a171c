//! Minimal XML element tree
//!
//! Only what the build document needs: elements with ordered attributes,
//! optional text, and children. Output is compact (no declaration, no
//! indentation) and childless elements are self-closed. The output is pure
//! ASCII: anything outside it is written as a numeric character reference.

use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.name);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }

        let text = self.text.as_deref().unwrap_or("");
        if text.is_empty() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        out.push_str(&escape_text(text));
        for child in &self.children {
            child.write_into(out);
        }
        let _ = write!(out, "</{}>", self.name);
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#13;"),
            other => push_ascii(&mut out, other),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            other => push_ascii(&mut out, other),
        }
    }
    out
}

fn push_ascii(out: &mut String, ch: char) {
    if ch.is_ascii() {
        out.push(ch);
    } else {
        let _ = write!(out, "&#{};", ch as u32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_closing() {
        let el = Element::new("Sockets");
        assert_eq!(el.to_xml(), "<Sockets/>");
    }

    #[test]
    fn test_attribute_order() {
        let el = Element::new("Gem")
            .attr("level", 20)
            .attr("quality", 0)
            .attr("enabled", "true")
            .attr("nameSpec", "Fireball");
        assert_eq!(
            el.to_xml(),
            r#"<Gem level="20" quality="0" enabled="true" nameSpec="Fireball"/>"#
        );
    }

    #[test]
    fn test_nested_with_text() {
        let el = Element::new("Spec")
            .child(Element::new("URL").text("https://example.com/AAAA"))
            .child(Element::new("Sockets"));
        assert_eq!(
            el.to_xml(),
            "<Spec><URL>https://example.com/AAAA</URL><Sockets/></Spec>"
        );
    }

    #[test]
    fn test_escaping() {
        let el = Element::new("Item")
            .attr("id", "a\"b<c>&")
            .text("Rarity: RARE\n<Doom> & \"Loop\"");
        assert_eq!(
            el.to_xml(),
            "<Item id=\"a&quot;b&lt;c&gt;&amp;\">Rarity: RARE\n&lt;Doom&gt; &amp; \"Loop\"</Item>"
        );
    }

    #[test]
    fn test_non_ascii_references() {
        let el = Element::new("Item").attr("id", 1).text("Mjölner");
        assert_eq!(el.to_xml(), r#"<Item id="1">Mj&#246;lner</Item>"#);

        let slot = Element::new("Slot").attr("name", "鐵冠");
        assert_eq!(slot.to_xml(), r#"<Slot name="&#37941;&#20896;"/>"#);
    }

    #[test]
    fn test_children_iter() {
        let el = Element::new("Items").children((1..=2).map(|id| Element::new("Item").attr("id", id)));
        assert_eq!(el.to_xml(), r#"<Items><Item id="1"/><Item id="2"/></Items>"#);
    }
}
