use askama::Template;

use dsatmath::frontend::content::{
    COURSE_PLATFORM_URL, COURSES, FALLBACK_LOGO, FEATURES, INSTRUCTOR, LOGO_TIPS, SITE_NAME,
    SOCIAL_LINKS,
};
use dsatmath::frontend::{NavItem, NavShell, Route};
use dsatmath::models::{Course, Feature, FeedbackMessage, SocialLink};
use dsatmath::services::LogoSettings;

/// Header, footer and document-level values shared by every page.
pub struct PageChrome {
    pub title: String,
    pub site_name: &'static str,
    pub nav: NavShell,
    pub items: Vec<NavItem>,
    pub footer_links: Vec<NavItem>,
    pub header_logo: String,
    pub has_custom_logo: bool,
    pub socials: &'static [SocialLink],
}

impl PageChrome {
    pub fn new(route: Option<Route>, nav: NavShell, header_logo: Option<String>) -> Self {
        let title = match route {
            Some(Route::Home) | None => SITE_NAME.to_string(),
            Some(r) => format!("{} | {}", r.label(), SITE_NAME),
        };
        let items = nav.items();
        let footer_links = NavShell::default().items();

        Self {
            title,
            site_name: SITE_NAME,
            nav,
            items,
            footer_links,
            has_custom_logo: header_logo.is_some(),
            header_logo: header_logo.unwrap_or_else(|| FALLBACK_LOGO.to_string()),
            socials: &SOCIAL_LINKS,
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub layout: PageChrome,
    pub instructor: &'static str,
    pub platform_url: &'static str,
    pub features: &'static [Feature],
}

impl HomeTemplate {
    pub fn new(layout: PageChrome) -> Self {
        Self {
            layout,
            instructor: INSTRUCTOR,
            platform_url: COURSE_PLATFORM_URL,
            features: &FEATURES,
        }
    }
}

#[derive(Template)]
#[template(path = "courses.html")]
pub struct CoursesTemplate {
    pub layout: PageChrome,
    pub courses: &'static [Course],
}

impl CoursesTemplate {
    pub fn new(layout: PageChrome) -> Self {
        Self {
            layout,
            courses: &COURSES,
        }
    }
}

#[derive(Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub layout: PageChrome,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub layout: PageChrome,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate {
    pub layout: PageChrome,
    pub logo_src: Option<String>,
    pub has_logo: bool,
    pub feedback: Option<FeedbackMessage>,
    pub busy: bool,
    pub tips: &'static [&'static str],
}

impl SettingsTemplate {
    pub fn from_view(layout: PageChrome, view: &LogoSettings) -> Self {
        let display = view.display();
        Self {
            layout,
            logo_src: display.src().map(str::to_string),
            has_logo: display.persisted_url().is_some(),
            feedback: view.feedback().cloned(),
            busy: view.is_busy(),
            tips: &LOGO_TIPS,
        }
    }
}
