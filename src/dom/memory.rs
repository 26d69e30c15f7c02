//! In-memory document.

use super::builder::MemoryDocumentBuilder;
use super::{Anchor, AnchorLookup};
use crate::router::{PageMark, PageView};
use crate::widgets::{
    ContactMessage, Fade, FilterSurface, FormSurface, MenuIcon, MenuSurface, ScrollSurface,
    SkillSurface,
};
use std::collections::HashSet;

/// A page section, identified by its page id.
#[derive(Clone, Debug, PartialEq)]
pub struct PageSection {
    pub id: String,
    pub marks: HashSet<PageMark>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub href: String,
    pub active: bool,
}

/// A skill card laid out on a page.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillCard {
    pub id: String,
    /// Page the card sits on; cards on inactive pages are never visible
    pub page: String,
    /// Document offset of the card's top edge
    pub top: u32,
    pub height: u32,
    pub target_percent: u8,
    /// Progress bar width, once revealed
    pub width: Option<u8>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    pub id: String,
    pub categories: Vec<String>,
    pub fade: Fade,
    pub displayed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub(super) struct FilterButton {
    pub(super) filter: String,
    pub(super) active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub(super) struct ContactFields {
    pub(super) values: ContactMessage,
    pub(super) submit_label: String,
    pub(super) submit_disabled: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub(super) struct Menu {
    pub(super) open: bool,
    pub(super) icon: MenuIcon,
}

/// Plain-data document implementing every surface trait.
///
/// Optional anchors are `None` when the markup lacks them; operations on a
/// missing anchor are no-ops.
#[derive(Clone, Debug, PartialEq)]
pub struct MemoryDocument {
    pub(super) pages: Vec<PageSection>,
    pub(super) nav_links: Vec<NavLink>,
    pub(super) loader: Option<bool>,
    pub(super) nav_scrolled: Option<bool>,
    pub(super) back_to_top: Option<bool>,
    pub(super) menu: Option<Menu>,
    pub(super) form: Option<ContactFields>,
    pub(super) notices: Vec<String>,
    pub(super) skills: Vec<SkillCard>,
    pub(super) filter_buttons: Vec<FilterButton>,
    pub(super) projects: Vec<ProjectCard>,
    pub(super) scroll_y: u32,
    pub(super) viewport_height: u32,
}

impl MemoryDocument {
    pub fn builder() -> MemoryDocumentBuilder {
        MemoryDocumentBuilder::new()
    }

    /// The stock portfolio: five pages with matching nav links, every anchor,
    /// skill cards on the skills page and a handful of projects.
    pub fn portfolio() -> Self {
        let builder = ["home", "about", "skills", "projects", "contact"]
            .iter()
            .fold(MemoryDocument::builder(), |b, page| {
                b.page(page).nav_link(&format!("#{page}"))
            })
            .active_page("home")
            .with_all_anchors()
            .skill("html", "skills", 120, 80, 95)
            .skill("javascript", "skills", 240, 80, 85)
            .skill("rust", "skills", 1_400, 80, 70)
            .filter_button("all")
            .filter_button("web")
            .filter_button("design")
            .filter_button("app")
            .project("storefront", &["web", "design"])
            .project("brand-kit", &["design"])
            .project("task-tracker", &["app"])
            .project("dashboard", &["web"]);

        builder
            .build()
            .expect("Stock portfolio layout should always build")
    }

    pub fn page(&self, id: &str) -> Option<&PageSection> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn has_mark(&self, page_id: &str, mark: PageMark) -> bool {
        self.page(page_id).is_some_and(|p| p.marks.contains(&mark))
    }

    /// Ids of pages carrying the active mark, in document order.
    pub fn active_pages(&self) -> Vec<&str> {
        self.pages
            .iter()
            .filter(|p| p.marks.contains(&PageMark::Active))
            .map(|p| p.id.as_str())
            .collect()
    }

    pub fn active_links(&self) -> Vec<&str> {
        self.nav_links
            .iter()
            .filter(|l| l.active)
            .map(|l| l.href.as_str())
            .collect()
    }

    pub fn loader_visible(&self) -> bool {
        self.loader.unwrap_or(false)
    }

    pub fn scroll_y(&self) -> u32 {
        self.scroll_y
    }

    pub fn nav_scrolled(&self) -> bool {
        self.nav_scrolled.unwrap_or(false)
    }

    pub fn back_to_top_visible(&self) -> bool {
        self.back_to_top.unwrap_or(false)
    }

    pub fn menu_open(&self) -> bool {
        self.menu.as_ref().is_some_and(|m| m.open)
    }

    pub fn menu_icon(&self) -> Option<MenuIcon> {
        self.menu.as_ref().map(|m| m.icon)
    }

    pub fn skill_card(&self, id: &str) -> Option<&SkillCard> {
        self.skills.iter().find(|s| s.id == id)
    }

    pub fn project(&self, id: &str) -> Option<&ProjectCard> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn active_filter_buttons(&self) -> Vec<&str> {
        self.filter_buttons
            .iter()
            .filter(|b| b.active)
            .map(|b| b.filter.as_str())
            .collect()
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn submit_state(&self) -> Option<(&str, bool)> {
        self.form
            .as_ref()
            .map(|f| (f.submit_label.as_str(), f.submit_disabled))
    }

    /// Type into the contact form.
    pub fn fill_form(&mut self, values: ContactMessage) {
        if let Some(form) = self.form.as_mut() {
            form.values = values;
        }
    }

    fn page_mut(&mut self, id: &str) -> Option<&mut PageSection> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    fn page_is_active(&self, id: &str) -> bool {
        self.has_mark(id, PageMark::Active)
    }
}

impl PageView for MemoryDocument {
    fn has_page(&self, page_id: &str) -> bool {
        self.page(page_id).is_some()
    }

    fn add_page_mark(&mut self, page_id: &str, mark: PageMark) {
        if let Some(page) = self.page_mut(page_id) {
            page.marks.insert(mark);
        }
    }

    fn remove_page_marks(&mut self, page_id: &str, marks: &[PageMark]) {
        if let Some(page) = self.page_mut(page_id) {
            for mark in marks {
                page.marks.remove(mark);
            }
        }
    }

    fn set_loader_visible(&mut self, visible: bool) {
        if let Some(loader) = self.loader.as_mut() {
            *loader = visible;
        }
    }

    fn scroll_offset(&self) -> u32 {
        self.scroll_y
    }

    fn scroll_to(&mut self, offset: u32) {
        self.scroll_y = offset;
    }

    fn nav_link_hrefs(&self) -> Vec<String> {
        self.nav_links.iter().map(|l| l.href.clone()).collect()
    }

    fn set_nav_link_active(&mut self, href: &str, active: bool) {
        for link in self.nav_links.iter_mut().filter(|l| l.href == href) {
            link.active = active;
        }
    }
}

impl SkillSurface for MemoryDocument {
    fn skill_cards(&self) -> Vec<String> {
        self.skills.iter().map(|s| s.id.clone()).collect()
    }

    fn visible_ratio(&self, card: &str) -> f32 {
        let Some(skill) = self.skill_card(card) else {
            return 0.0;
        };
        if skill.height == 0 || !self.page_is_active(&skill.page) {
            return 0.0;
        }
        let view_top = self.scroll_y;
        let view_bottom = self.scroll_y.saturating_add(self.viewport_height);
        let top = skill.top.max(view_top);
        let bottom = skill.top.saturating_add(skill.height).min(view_bottom);
        bottom.saturating_sub(top) as f32 / skill.height as f32
    }

    fn target_percent(&self, card: &str) -> Option<u8> {
        self.skill_card(card).map(|s| s.target_percent)
    }

    fn set_progress_width(&mut self, card: &str, percent: u8) {
        if let Some(skill) = self.skills.iter_mut().find(|s| s.id == card) {
            skill.width = Some(percent);
        }
    }
}

impl FilterSurface for MemoryDocument {
    fn filter_buttons(&self) -> Vec<String> {
        self.filter_buttons.iter().map(|b| b.filter.clone()).collect()
    }

    fn set_filter_button_active(&mut self, filter: &str, active: bool) {
        for button in self.filter_buttons.iter_mut().filter(|b| b.filter == filter) {
            button.active = active;
        }
    }

    fn project_cards(&self) -> Vec<String> {
        self.projects.iter().map(|p| p.id.clone()).collect()
    }

    fn card_categories(&self, card: &str) -> Vec<String> {
        self.project(card)
            .map(|p| p.categories.clone())
            .unwrap_or_default()
    }

    fn set_card_fade(&mut self, card: &str, fade: Fade) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == card) {
            project.fade = fade;
        }
    }

    fn set_card_displayed(&mut self, card: &str, displayed: bool) {
        if let Some(project) = self.projects.iter_mut().find(|p| p.id == card) {
            project.displayed = displayed;
        }
    }
}

impl FormSurface for MemoryDocument {
    fn form_values(&self) -> ContactMessage {
        self.form
            .as_ref()
            .map(|f| f.values.clone())
            .unwrap_or_default()
    }

    fn submit_label(&self) -> String {
        self.form
            .as_ref()
            .map(|f| f.submit_label.clone())
            .unwrap_or_default()
    }

    fn set_submit_state(&mut self, label: &str, disabled: bool) {
        if let Some(form) = self.form.as_mut() {
            form.submit_label = label.to_string();
            form.submit_disabled = disabled;
        }
    }

    fn reset_form(&mut self) {
        if let Some(form) = self.form.as_mut() {
            form.values = ContactMessage::default();
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

impl MenuSurface for MemoryDocument {
    fn is_menu_open(&self) -> bool {
        self.menu_open()
    }

    fn set_menu_open(&mut self, open: bool) {
        if let Some(menu) = self.menu.as_mut() {
            menu.open = open;
        }
    }

    fn set_menu_icon(&mut self, icon: MenuIcon) {
        if let Some(menu) = self.menu.as_mut() {
            menu.icon = icon;
        }
    }
}

impl ScrollSurface for MemoryDocument {
    fn set_nav_scrolled(&mut self, scrolled: bool) {
        if let Some(nav) = self.nav_scrolled.as_mut() {
            *nav = scrolled;
        }
    }

    fn set_back_to_top_visible(&mut self, visible: bool) {
        if let Some(button) = self.back_to_top.as_mut() {
            *button = visible;
        }
    }
}

impl AnchorLookup for MemoryDocument {
    fn has_anchor(&self, anchor: Anchor) -> bool {
        match anchor {
            Anchor::Loader => self.loader.is_some(),
            Anchor::NavBar => self.nav_scrolled.is_some(),
            Anchor::MenuToggle => self.menu.is_some(),
            Anchor::BackToTop => self.back_to_top.is_some(),
            Anchor::ContactForm => self.form.is_some(),
        }
    }
}
