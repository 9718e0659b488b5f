//! Plain data passed between the resolver and the gallery view.

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    /// 1-based position shown in the alt text.
    pub index: u32,
    pub src: String,
}

impl GalleryEntry {
    pub fn new(index: u32, src: impl Into<String>) -> Self {
        Self {
            index,
            src: src.into(),
        }
    }

    pub fn alt_text(&self) -> String {
        format!("Project {}", self.index)
    }
}

/// How a resolver run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Discovery {
    Manifest { count: u32 },
    /// `last_index` is the final index probed, whether it hit or not.
    Probed { found: u32, last_index: u32 },
}

impl Discovery {
    pub fn found(&self) -> u32 {
        match *self {
            Discovery::Manifest { count } => count,
            Discovery::Probed { found, .. } => found,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.found() == 0
    }
}
