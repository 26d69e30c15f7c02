//! Mobile navigation menu toggle.

use tracing::trace;

/// Glyph shown on the menu toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuIcon {
    Bars,
    Close,
}

pub trait MenuSurface {
    fn is_menu_open(&self) -> bool;

    fn set_menu_open(&mut self, open: bool);

    fn set_menu_icon(&mut self, icon: MenuIcon);
}

/// Opens and closes the navigation list on small screens.
#[derive(Debug, Default, Clone, Copy)]
pub struct MobileMenu;

impl MobileMenu {
    pub fn new() -> Self {
        Self
    }

    pub fn toggle<M: MenuSurface + ?Sized>(&self, surface: &mut M) {
        let open = !surface.is_menu_open();
        surface.set_menu_open(open);
        surface.set_menu_icon(if open { MenuIcon::Close } else { MenuIcon::Bars });
        trace!(open, "menu toggled");
    }

    /// Close the menu after a navigation link was clicked.
    pub fn on_nav_link_click<M: MenuSurface + ?Sized>(&self, surface: &mut M) {
        if surface.is_menu_open() {
            surface.set_menu_open(false);
            surface.set_menu_icon(MenuIcon::Bars);
        }
    }
}
