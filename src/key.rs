use std::fmt;

/// Keys are compared by their rendered text only.
pub trait Key {
    fn render(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlainKey {
    pub text: String,
}

impl PlainKey {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Key for PlainKey {
    fn render(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for PlainKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for PlainKey {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PlainKey {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl Key for &str {
    fn render(&self) -> String {
        (*self).to_owned()
    }
}

impl Key for String {
    fn render(&self) -> String {
        self.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct UserId(u32);

    impl Key for UserId {
        fn render(&self) -> String {
            format!("user/{}", self.0)
        }
    }

    #[test]
    fn test_plain_key_renders_unchanged() {
        assert_eq!(PlainKey::new("x").render(), "x");
        assert_eq!(PlainKey::from(String::from("a/b")).render(), "a/b");
        assert_eq!(PlainKey::from("").render(), "");
    }

    #[test]
    fn test_different_types_same_text() {
        assert_eq!(UserId(7).render(), PlainKey::new("user/7").render());
        assert_eq!("user/7".render(), UserId(7).render());
    }
}
