//! Collapsible navigation bar

/// An in-page navigation link
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Site title shown at the left of the bar
pub const NAV_TITLE: NavLink = NavLink {
    label: "Portfolio",
    href: "/",
};

/// Menu entries, top to bottom
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Experience",
        href: "#experience",
    },
    NavLink {
        label: "Contact",
        href: "#contact",
    },
];

/// Menu icon asset
pub const MENU_ICON: &str = "menuIcon.png";

/// Navbar menu state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Navbar {
    menu_open: bool,
}

impl Navbar {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Menu icon clicked
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A link in the menu was chosen; the menu always closes
    pub fn select_link(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_select() {
        let mut nav = Navbar::default();
        assert!(!nav.is_menu_open());
        assert!(nav.toggle_menu());
        nav.select_link();
        assert!(!nav.is_menu_open());
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
    }

    #[test]
    fn test_links_are_anchors() {
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('#')));
    }
}
