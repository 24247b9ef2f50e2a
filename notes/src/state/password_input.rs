/// Character shown in place of each password character while masked
pub const MASK_CHAR: char = '•';

/// Password text entry with a show/hide toggle
///
/// The value belongs to the form; the mask flag is the only state this
/// widget owns. Toggling never touches the value.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordInput {
    value: String,
    masked: bool,
}

impl PasswordInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn toggle_mask(&mut self) {
        self.masked = !self.masked;
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Text to render for the current mode
    pub fn display(&self) -> String {
        if self.masked {
            MASK_CHAR.to_string().repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordInput")
            .field("value", &"[REDACTED]")
            .field("masked", &self.masked)
            .finish()
    }
}
