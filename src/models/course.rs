use serde::Serialize;

/// Where a course card's call-to-action button sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CourseAction {
    /// Path on this site.
    Internal(&'static str),
    /// Third-party URL, opened in a new browsing context.
    External(&'static str),
}

impl CourseAction {
    pub fn href(&self) -> &'static str {
        match self {
            Self::Internal(href) | Self::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static str,
    pub price: &'static str,
    pub icon: &'static str,
    pub button_text: &'static str,
    pub action: CourseAction,
}
