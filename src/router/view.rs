//! Surfaces the router mutates.

use crate::core::PathToken;

/// Marks a page section can carry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PageMark {
    /// The page is shown
    Active,
    /// The page is playing its exit animation
    Exit,
}

impl PageMark {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Exit => "exit",
        }
    }
}

/// Document operations needed to swap pages.
///
/// Pages are addressed by page id (a path token without its marker). Every
/// operation on a page that does not exist is a no-op.
pub trait PageView {
    fn has_page(&self, page_id: &str) -> bool;

    fn add_page_mark(&mut self, page_id: &str, mark: PageMark);

    fn remove_page_marks(&mut self, page_id: &str, marks: &[PageMark]);

    fn set_loader_visible(&mut self, visible: bool);

    /// Current vertical scroll offset of the viewport.
    fn scroll_offset(&self) -> u32;

    fn scroll_to(&mut self, offset: u32);

    /// Hrefs of every navigation link, in document order.
    fn nav_link_hrefs(&self) -> Vec<String>;

    fn set_nav_link_active(&mut self, href: &str, active: bool);
}

/// The location/history boundary.
pub trait AddressBar {
    /// Current location fragment, including its marker (`#about`).
    fn fragment(&self) -> Option<String>;

    /// Push a new history entry for `path` without reloading.
    fn push_entry(&mut self, path: &PathToken);
}
