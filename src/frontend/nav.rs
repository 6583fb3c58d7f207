//! Header navigation state.
//!
//! The header gets a shadow once the page is scrolled past
//! [`SCROLL_THRESHOLD`] pixels, highlights the link whose path equals the
//! request path exactly, and has a mobile menu that any link selection closes.

/// Vertical scroll offset, in CSS pixels, past which the header is "scrolled".
pub const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Courses,
    Contact,
    Settings,
}

impl Route {
    pub const ALL: [Route; 4] = [Route::Home, Route::Courses, Route::Contact, Route::Settings];

    /// Routes shown in the header and footer. Settings is reachable by URL only.
    pub const NAV: [Route; 3] = [Route::Home, Route::Courses, Route::Contact];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Courses => "/courses",
            Self::Contact => "/contact",
            Self::Settings => "/settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Courses => "Courses",
            Self::Contact => "Contact",
            Self::Settings => "Settings",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// One rendered header link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavShell {
    pub active: Option<Route>,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavShell {
    pub fn for_path(path: &str) -> Self {
        Self {
            active: Route::from_path(path),
            ..Self::default()
        }
    }

    pub fn with_menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a header link: it becomes active and the mobile menu closes.
    pub fn select_link(&mut self, route: Route) {
        self.active = Some(route);
        self.menu_open = false;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = scroll_y > SCROLL_THRESHOLD;
    }

    pub fn is_active(&self, route: Route) -> bool {
        self.active == Some(route)
    }

    pub fn items(&self) -> Vec<NavItem> {
        Route::NAV
            .into_iter()
            .map(|route| NavItem {
                label: route.label(),
                href: route.path(),
                active: self.is_active(route),
            })
            .collect()
    }

    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }

    /// Link target for the menu button when scripts are off: the current page
    /// with the menu flipped.
    pub fn menu_toggle_href(&self) -> String {
        let base = self.active.map_or("/", Route::path);
        if self.menu_open {
            base.to_string()
        } else {
            format!("{base}?menu=open")
        }
    }

    pub fn scroll_threshold(&self) -> f64 {
        SCROLL_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_requires_exact_path() {
        assert_eq!(NavShell::for_path("/courses").active, Some(Route::Courses));
        assert_eq!(NavShell::for_path("/courses/").active, None);
        assert_eq!(NavShell::for_path("/Courses").active, None);
        assert_eq!(NavShell::for_path("/").active, Some(Route::Home));
        assert_eq!(NavShell::for_path("/settings").active, Some(Route::Settings));
    }

    #[test]
    fn only_one_item_is_active() {
        let nav = NavShell::for_path("/contact");
        let active: Vec<_> = nav.items().into_iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].href, "/contact");

        let settings = NavShell::for_path("/settings");
        assert!(settings.items().iter().all(|i| !i.active));
    }

    #[test]
    fn selecting_a_link_closes_the_menu() {
        let mut nav = NavShell::for_path("/");
        nav.toggle_menu();
        assert!(nav.menu_open);

        nav.select_link(Route::Courses);
        assert!(!nav.menu_open);
        assert!(nav.is_active(Route::Courses));

        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn scroll_threshold_is_strict() {
        let mut nav = NavShell::default();
        nav.on_scroll(20.0);
        assert!(!nav.scrolled);
        nav.on_scroll(20.5);
        assert!(nav.scrolled);
        assert_eq!(nav.header_class(), "site-header scrolled");
        nav.on_scroll(0.0);
        assert_eq!(nav.header_class(), "site-header");
    }

    #[test]
    fn menu_toggle_href_flips_state() {
        let nav = NavShell::for_path("/courses");
        assert_eq!(nav.menu_toggle_href(), "/courses?menu=open");
        assert_eq!(nav.with_menu_open(true).menu_toggle_href(), "/courses");
    }
}
