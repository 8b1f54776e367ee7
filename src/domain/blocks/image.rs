use serde::Deserialize;
use serde_json::Value;

use super::{BlockKind, decode_payload};
use crate::domain::{
    error::BlockError,
    sanitize::{image_source, inline_text},
};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageFile {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageBlock {
    pub file: ImageFile,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub with_border: bool,
    #[serde(default)]
    pub with_background: bool,
    #[serde(default)]
    pub stretched: bool,
}

impl ImageBlock {
    pub fn from_data(data: &Value) -> Result<Self, BlockError> {
        decode_payload(BlockKind::Image, data)
    }

    fn class_list(&self) -> String {
        let mut classes = vec!["image-tool"];
        if self.with_border {
            classes.push("image-tool--withBorder");
        }
        if self.with_background {
            classes.push("image-tool--withBackground");
        }
        if self.stretched {
            classes.push("image-tool--stretched");
        }
        classes.join(" ")
    }

    pub fn render(&self, sanitize: bool) -> String {
        let mut html = format!(
            "<figure class=\"{}\"><img class=\"image-tool__image\" src=\"{}\">",
            self.class_list(),
            image_source(&self.file.url, sanitize)
        );

        if let Some(caption) = self.caption.as_deref().filter(|c| !c.trim().is_empty()) {
            html.push_str(&format!(
                "<figcaption class=\"image-tool__caption\">{}</figcaption>",
                inline_text(caption, sanitize)
            ));
        }

        html.push_str("</figure>");
        html
    }
}
