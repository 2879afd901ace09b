//! Component titles.

/// How prominently a title is laid out.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TitleStyle {
    #[default]
    Major,
    /// Indented under the preceding major entry.
    Minor,
}

impl TitleStyle {
    /// Leading columns before the title text.
    pub fn inset(self) -> usize {
        match self {
            TitleStyle::Major => 1,
            TitleStyle::Minor => 6,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Title {
    pub text: String,
    pub style: TitleStyle,
}

impl Title {
    pub fn new(text: impl Into<String>, style: TitleStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn major(text: impl Into<String>) -> Self {
        Self::new(text, TitleStyle::Major)
    }

    pub fn minor(text: impl Into<String>) -> Self {
        Self::new(text, TitleStyle::Minor)
    }
}

impl From<&str> for Title {
    fn from(text: &str) -> Self {
        Self::major(text)
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Self::major(text)
    }
}
