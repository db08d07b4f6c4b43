use crate::item::Item;
use derive_more::{Display, From, Into};
use strum::{Display as StrumDisplay, EnumCount, EnumIter};

/// Text fields of the info panel, in reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumCount)]
#[strum(serialize_all = "lowercase")]
pub enum PanelField {
    Title,
    Description,
    Button,
}

impl PanelField {
    pub fn as_index(&self) -> usize {
        *self as usize
    }
}

/// Stamp identifying one panel sequence; stages carrying an older stamp are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct TransitionToken(u64);

impl TransitionToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStage {
    /// Write the item's text into the (hidden) panel.
    Swap(usize),
    Reveal(PanelField),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelContent {
    pub title: String,
    pub description: String,
    pub button: String,
}

impl PanelContent {
    pub fn for_item(item: &Item, viewport_width: f64, breakpoint: f64, words: usize) -> Self {
        Self {
            title: item.title.clone(),
            description: truncate_description(&item.description, viewport_width, breakpoint, words),
            button: item.button.clone(),
        }
    }
}

/// Shortens `text` to its first `words` words plus an ellipsis on viewports at or below
/// `breakpoint`. Wider viewports and short texts pass through untouched.
pub fn truncate_description(text: &str, viewport_width: f64, breakpoint: f64, words: usize) -> String {
    if viewport_width > breakpoint {
        return text.to_string();
    }
    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.len() > words {
        format!("{}...", parts[..words].join(" "))
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_truncate_on_narrow_viewport() {
        let text = "A quiet harbour at dawn";
        assert_eq!(truncate_description(text, 768.0, 768.0, 3), "A quiet harbour...");
        assert_eq!(truncate_description(text, 320.0, 768.0, 3), "A quiet harbour...");
        assert_eq!(truncate_description(text, 769.0, 768.0, 3), text);
    }

    #[test]
    fn test_short_text_is_untouched() {
        assert_eq!(truncate_description("Three word title", 300.0, 768.0, 3), "Three word title");
        assert_eq!(truncate_description("", 300.0, 768.0, 3), "");
    }

    #[test]
    fn test_reveal_order() {
        let fields: Vec<_> = PanelField::iter().collect();
        assert_eq!(
            fields,
            vec![PanelField::Title, PanelField::Description, PanelField::Button]
        );
        assert_eq!(PanelField::Button.as_index(), 2);
        assert_eq!(PanelField::Description.to_string(), "description");
    }

    #[test]
    fn test_token_advances() {
        let token = TransitionToken::default();
        assert!(token.next() > token);
        assert_ne!(token.next(), token.next().next());
    }
}
