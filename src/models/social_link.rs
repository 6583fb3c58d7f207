use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
    /// Accent class applied to the card, e.g. `social-whatsapp`.
    pub accent: &'static str,
}
