use crate::domain::ports::{Document, ListContainer};

/// 記憶體中的元素節點
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    id: Option<String>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// 子節點的文字內容，依順序
    pub fn child_texts(&self) -> Vec<&str> {
        self.children
            .iter()
            .map(|child| child.text().unwrap_or_default())
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_id_mut(id))
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        if let Some(id) = &self.id {
            out.push_str(" id=\"");
            out.push_str(&escape_html(id));
            out.push('"');
        }
        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape_html(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl ListContainer for Element {
    fn clear_children(&mut self) {
        self.children.clear();
    }

    fn append_item(&mut self, text: &str) {
        self.children.push(Element::new("li").with_text(text));
    }
}

/// 以元素樹表示的宿主頁面
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryDocument {
    body: Element,
}

impl MemoryDocument {
    /// 空白頁面，只有 `<body>`
    pub fn new() -> Self {
        Self {
            body: Element::new("body"),
        }
    }

    /// 含有指定 id 的 `<ul>` 的頁面
    pub fn with_list(id: &str) -> Self {
        Self {
            body: Element::new("body").with_child(Element::new("ul").with_id(id)),
        }
    }

    pub fn from_body(body: Element) -> Self {
        Self { body }
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.body.write_html(&mut out);
        out
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn list_by_id(&mut self, id: &str) -> Option<&mut dyn ListContainer> {
        self.body
            .find_by_id_mut(id)
            .map(|element| element as &mut dyn ListContainer)
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
