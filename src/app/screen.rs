// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration and route mapping for kiosk navigation.
//!
//! Each screen corresponds to a path the original kiosk exposed, which is
//! what the `--screen` launch flag accepts. Unknown paths land on
//! [`Screen::NotFound`] rather than failing the launch.

/// Screens the visitor can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Login,
    Menu,
    Faqs,
    Directory,
    Announcements,
    Calendar,
    Inquiry,
    NotFound,
}

impl Screen {
    /// Resolve a route path to a screen.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Screen::Home,
            "/login" => Screen::Login,
            "/menu" => Screen::Menu,
            "/faqs" => Screen::Faqs,
            "/directory" => Screen::Directory,
            "/announcements" => Screen::Announcements,
            "/calendar" => Screen::Calendar,
            "/inquiry" => Screen::Inquiry,
            _ => Screen::NotFound,
        }
    }

    /// The canonical route path for this screen.
    pub fn path(self) -> &'static str {
        match self {
            Screen::Home => "/",
            Screen::Login => "/login",
            Screen::Menu => "/menu",
            Screen::Faqs => "/faqs",
            Screen::Directory => "/directory",
            Screen::Announcements => "/announcements",
            Screen::Calendar => "/calendar",
            Screen::Inquiry => "/inquiry",
            Screen::NotFound => "/not-found",
        }
    }

    /// Title shown on the header bar.
    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Welcome",
            Screen::Login => "Login",
            Screen::Menu => "Main Menu",
            Screen::Faqs => "FAQs",
            Screen::Directory => "Office Directory",
            Screen::Announcements => "Announcements",
            Screen::Calendar => "School Calendar",
            Screen::Inquiry => "Submit Inquiry",
            Screen::NotFound => "Not Found",
        }
    }

    /// Whether this screen shows the shared header bar. The welcome and
    /// login screens carry their own full-bleed layout.
    pub fn has_header(self) -> bool {
        !matches!(self, Screen::Home | Screen::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_their_screens() {
        assert_eq!(Screen::from_path("/"), Screen::Home);
        assert_eq!(Screen::from_path("/menu"), Screen::Menu);
        assert_eq!(Screen::from_path("/directory"), Screen::Directory);
        assert_eq!(Screen::from_path("/inquiry"), Screen::Inquiry);
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Screen::from_path("/admin"), Screen::NotFound);
        assert_eq!(Screen::from_path(""), Screen::NotFound);
        assert_eq!(Screen::from_path("menu"), Screen::NotFound);
    }

    #[test]
    fn paths_round_trip_for_every_routable_screen() {
        for screen in [
            Screen::Home,
            Screen::Login,
            Screen::Menu,
            Screen::Faqs,
            Screen::Directory,
            Screen::Announcements,
            Screen::Calendar,
            Screen::Inquiry,
        ] {
            assert_eq!(Screen::from_path(screen.path()), screen);
        }
    }

    #[test]
    fn full_bleed_screens_hide_the_header() {
        assert!(!Screen::Home.has_header());
        assert!(!Screen::Login.has_header());
        assert!(Screen::Menu.has_header());
        assert!(Screen::Faqs.has_header());
    }
}
