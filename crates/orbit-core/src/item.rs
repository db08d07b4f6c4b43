use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Opaque handle the host uses to render an item (the desktop host reads it as an image path).
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Visual(String);

crate::impl_string_newtype!(Visual);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub button: String,
    #[serde(default)]
    pub visual: Option<Visual>,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        button: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            button: button.into(),
            visual: None,
        }
    }

    pub fn with_visual(mut self, visual: Visual) -> Self {
        self.visual = Some(visual);
        self
    }
}
