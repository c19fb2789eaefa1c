//! Injected style configuration

/// Style values injected by the embedding grid: the class prefix carried
/// by every overlay element and the highlight stroke width used to inset
/// outline rectangles.
#[derive(Debug, Clone)]
pub struct SelectorStyle {
    pub class_prefix: String,
    pub border_width: f64,
}

impl Default for SelectorStyle {
    fn default() -> Self {
        Self {
            class_prefix: "websheet".to_string(),
            border_width: 2.0,
        }
    }
}

impl SelectorStyle {
    /// `{prefix}-{suffix}` class name; an empty suffix yields the bare
    /// prefix (the focus highlight).
    pub fn class(&self, suffix: &str) -> String {
        if suffix.is_empty() {
            self.class_prefix.clone()
        } else {
            format!("{}-{suffix}", self.class_prefix)
        }
    }
}
