use std::borrow::Cow;

/// A payload as it was unveiled from a stego buffer
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Payload {
    pub content: Vec<u8>,
}

impl Payload {
    pub fn new(content: Vec<u8>) -> Self {
        Self { content }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Interprets the content as UTF-8 text.
    /// Invalid sequences are replaced by `U+FFFD`, this never fails.
    pub fn to_text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.content
    }
}

impl From<Vec<u8>> for Payload {
    fn from(content: Vec<u8>) -> Self {
        Self::new(content)
    }
}

impl AsRef<[u8]> for Payload {
    fn as_ref(&self) -> &[u8] {
        &self.content
    }
}
