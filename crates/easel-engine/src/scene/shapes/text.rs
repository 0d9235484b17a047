use crate::signal::Signal;

/// Text payload. Font fields come from the node's style.
#[derive(Debug, Clone)]
pub struct TextShape {
    pub text: Signal<String>,
}

impl TextShape {
    pub fn new(text: impl Into<Signal<String>>) -> Self {
        Self { text: text.into() }
    }
}
