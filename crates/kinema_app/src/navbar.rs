//! Navbar state
//!
//! Purely ephemeral UI state: which section each link targets, whether the
//! mobile menu is open, and whether the bar has picked up its "scrolled"
//! styling. None of this persists across sessions.

use crate::page::{self, NAVBAR_HEIGHT};
use kinema_theme::ThemeMode;

/// Scroll offset past which the bar switches to its scrolled styling.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// The four anchor links, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavLink {
    Home,
    About,
    Projects,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 4] = [
        NavLink::Home,
        NavLink::About,
        NavLink::Projects,
        NavLink::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::About => "About",
            NavLink::Projects => "Projects",
            NavLink::Contact => "Contact",
        }
    }

    /// Stable id used in the link's region name.
    pub fn id(self) -> &'static str {
        match self {
            NavLink::Home => "home",
            NavLink::About => "about",
            NavLink::Projects => "projects",
            NavLink::Contact => "contact",
        }
    }

    /// Name of the document region the link anchor occupies.
    pub fn region_name(self) -> String {
        format!("nav-link-{}", self.id())
    }

    /// Scroll target for the link: the section top, less the bar height so
    /// the section heading clears the fixed bar. Home anchors to the very
    /// top.
    pub fn scroll_target(self) -> f32 {
        let tops = page::section_tops();
        match self {
            NavLink::Home => 0.0,
            NavLink::About => tops[1].1 - NAVBAR_HEIGHT,
            NavLink::Projects => tops[2].1 - NAVBAR_HEIGHT,
            NavLink::Contact => tops[3].1 - NAVBAR_HEIGHT,
        }
    }
}

/// Fixed top bar: brand, anchor links, theme toggle, mobile menu button.
#[derive(Debug, Default)]
pub struct Navbar {
    menu_open: bool,
    scrolled: bool,
}

impl Navbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Flip the mobile menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::debug!(open = self.menu_open, "mobile menu toggled");
    }

    /// Follow a link: the menu closes and the caller scrolls to the
    /// returned offset.
    pub fn navigate(&mut self, link: NavLink) -> f32 {
        self.menu_open = false;
        link.scroll_target()
    }

    /// Per-frame styling update from the current scroll offset.
    pub fn on_scroll(&mut self, position: f32) {
        self.scrolled = position > SCROLLED_THRESHOLD;
    }

    /// Accessible label for the theme toggle button, describing the mode
    /// the press switches to.
    pub fn theme_toggle_label(mode: ThemeMode) -> &'static str {
        match mode {
            ThemeMode::Light => "Switch to dark theme",
            ThemeMode::Dark => "Switch to light theme",
        }
    }
}
