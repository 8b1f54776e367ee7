const BUNDLED_CSS: &str = include_str!("../../../../static/editorjs.css");

/// Stylesheet embedded in every rendered document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    css: &'static str,
}

impl Stylesheet {
    /// The stylesheet shipped with the crate, compiled into the binary.
    pub fn bundled() -> Self {
        Self { css: BUNDLED_CSS }
    }

    pub fn as_str(&self) -> &'static str {
        self.css
    }

    pub(crate) fn head_element(&self) -> String {
        format!("<head><style type=\"text/css\">{}</style></head>", self.css)
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::bundled()
    }
}
