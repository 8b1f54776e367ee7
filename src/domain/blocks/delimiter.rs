/// Visual separator between sections; carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelimiterBlock;

impl DelimiterBlock {
    pub fn render(&self, _sanitize: bool) -> String {
        "<hr>".to_string()
    }
}
