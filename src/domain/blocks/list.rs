use serde::{Deserialize, Deserializer, de::IgnoredAny};
use serde_json::Value;

use super::{BlockKind, decode_payload};
use crate::domain::{error::BlockError, sanitize::inline_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    Ordered,
    #[default]
    Unordered,
    /// List 2.x checklist; rendered as a `ul` whose items carry their state.
    Checklist,
}

impl ListStyle {
    fn open_tag(self) -> &'static str {
        match self {
            ListStyle::Ordered => "<ol>",
            ListStyle::Unordered => "<ul>",
            ListStyle::Checklist => "<ul class=\"cdx-checklist\">",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            ListStyle::Ordered => "</ol>",
            ListStyle::Unordered | ListStyle::Checklist => "</ul>",
        }
    }

    fn open_item(self, item: &ListItem) -> &'static str {
        match self {
            ListStyle::Checklist if item.checked => {
                "<li class=\"cdx-checklist__item cdx-checklist__item--checked\">"
            }
            ListStyle::Checklist => "<li class=\"cdx-checklist__item\">",
            ListStyle::Ordered | ListStyle::Unordered => "<li>",
        }
    }
}

/// One list entry. Nested lists (Editor.js List 2.x) populate `children`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub content: String,
    pub children: Vec<ListItem>,
    /// `meta.checked` of a checklist item; `false` everywhere else.
    pub checked: bool,
}

impl ListItem {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            children: Vec::new(),
            checked: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListBlock {
    #[serde(default)]
    pub style: ListStyle,
    #[serde(default, deserialize_with = "deserialize_items")]
    pub items: Vec<ListItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawListItem {
    Text(String),
    Nested {
        content: String,
        #[serde(default)]
        meta: Option<RawItemMeta>,
        #[serde(default)]
        items: Vec<RawListItem>,
    },
    Unsupported(IgnoredAny),
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawItemMeta {
    checked: bool,
}

impl RawListItem {
    fn into_item(self) -> Option<ListItem> {
        match self {
            RawListItem::Text(content) => Some(ListItem::new(content)),
            RawListItem::Nested {
                content,
                meta,
                items,
            } => Some(ListItem {
                content,
                children: items.into_iter().filter_map(Self::into_item).collect(),
                checked: meta.is_some_and(|meta| meta.checked),
            }),
            RawListItem::Unsupported(_) => None,
        }
    }
}

fn deserialize_items<'de, D>(deserializer: D) -> Result<Vec<ListItem>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<RawListItem>::deserialize(deserializer)?;
    Ok(raw.into_iter().filter_map(RawListItem::into_item).collect())
}

impl ListBlock {
    pub fn from_data(data: &Value) -> Result<Self, BlockError> {
        decode_payload(BlockKind::List, data)
    }

    pub fn render(&self, sanitize: bool) -> String {
        let mut html = String::new();
        push_list(&mut html, self.style, &self.items, sanitize);
        html
    }
}

fn push_list(html: &mut String, style: ListStyle, items: &[ListItem], sanitize: bool) {
    html.push_str(style.open_tag());
    for item in items {
        html.push_str(style.open_item(item));
        html.push_str(&inline_text(&item.content, sanitize));
        if !item.children.is_empty() {
            push_list(html, style, &item.children, sanitize);
        }
        html.push_str("</li>");
    }
    html.push_str(style.close_tag());
}
