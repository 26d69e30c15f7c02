//! Builder for in-memory documents.

use super::memory::{
    ContactFields, FilterButton, Menu, MemoryDocument, NavLink, PageSection, ProjectCard,
    SkillCard,
};
use crate::core::PATH_MARKER;
use crate::router::PageMark;
use crate::widgets::{ContactMessage, Fade, MenuIcon};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors raised when assembling a document.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("Page '{0}' is declared more than once")]
    DuplicatePage(String),

    #[error("Navigation link '{0}' is declared more than once")]
    DuplicateLink(String),

    #[error("Navigation link '{0}' is not a path token")]
    InvalidHref(String),

    #[error("Element '{element}' refers to unknown page '{page}'")]
    UnknownPage { element: String, page: String },

    #[error("Card id '{0}' is used more than once")]
    DuplicateCard(String),
}

const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;
const DEFAULT_SUBMIT_LABEL: &str = "Send Message";

/// Fluent builder for [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryDocumentBuilder {
    pages: Vec<String>,
    active_page: Option<String>,
    nav_links: Vec<String>,
    loader: bool,
    nav_bar: bool,
    back_to_top: bool,
    menu_toggle: bool,
    submit_label: Option<String>,
    skills: Vec<SkillCard>,
    filter_buttons: Vec<String>,
    projects: Vec<(String, Vec<String>)>,
    viewport_height: u32,
}

impl Default for MemoryDocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocumentBuilder {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            active_page: None,
            nav_links: Vec::new(),
            loader: false,
            nav_bar: false,
            back_to_top: false,
            menu_toggle: false,
            submit_label: None,
            skills: Vec::new(),
            filter_buttons: Vec::new(),
            projects: Vec::new(),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }

    /// Add a page section with the given page id.
    pub fn page(mut self, id: &str) -> Self {
        self.pages.push(id.to_string());
        self
    }

    /// Page that carries the active mark in the initial markup.
    pub fn active_page(mut self, id: &str) -> Self {
        self.active_page = Some(id.to_string());
        self
    }

    pub fn nav_link(mut self, href: &str) -> Self {
        self.nav_links.push(href.to_string());
        self
    }

    pub fn loader(mut self) -> Self {
        self.loader = true;
        self
    }

    pub fn nav_bar(mut self) -> Self {
        self.nav_bar = true;
        self
    }

    pub fn back_to_top(mut self) -> Self {
        self.back_to_top = true;
        self
    }

    pub fn menu_toggle(mut self) -> Self {
        self.menu_toggle = true;
        self
    }

    pub fn contact_form(mut self, submit_label: &str) -> Self {
        self.submit_label = Some(submit_label.to_string());
        self
    }

    /// Add the loader, nav bar, back-to-top control, menu toggle and contact
    /// form.
    pub fn with_all_anchors(self) -> Self {
        self.loader()
            .nav_bar()
            .back_to_top()
            .menu_toggle()
            .contact_form(DEFAULT_SUBMIT_LABEL)
    }

    /// Add a skill card on `page`, spanning `height` pixels from `top`.
    pub fn skill(mut self, id: &str, page: &str, top: u32, height: u32, percent: u8) -> Self {
        self.skills.push(SkillCard {
            id: id.to_string(),
            page: page.to_string(),
            top,
            height,
            target_percent: percent.min(100),
            width: None,
        });
        self
    }

    pub fn filter_button(mut self, filter: &str) -> Self {
        self.filter_buttons.push(filter.to_string());
        self
    }

    pub fn project(mut self, id: &str, categories: &[&str]) -> Self {
        self.projects.push((
            id.to_string(),
            categories.iter().map(|c| c.to_string()).collect(),
        ));
        self
    }

    pub fn viewport_height(mut self, height: u32) -> Self {
        self.viewport_height = height;
        self
    }

    /// Validate and assemble the document.
    pub fn build(self) -> Result<MemoryDocument, BuildError> {
        let mut pages: Vec<PageSection> = Vec::with_capacity(self.pages.len());
        for id in self.pages {
            if pages.iter().any(|p| p.id == id) {
                return Err(BuildError::DuplicatePage(id));
            }
            pages.push(PageSection {
                id,
                marks: HashSet::new(),
            });
        }

        let known = |page: &str| pages.iter().any(|p| p.id == page);

        if let Some(active) = &self.active_page {
            if !known(active) {
                return Err(BuildError::UnknownPage {
                    element: "active page".to_string(),
                    page: active.clone(),
                });
            }
        }
        for skill in &self.skills {
            if !known(&skill.page) {
                return Err(BuildError::UnknownPage {
                    element: skill.id.clone(),
                    page: skill.page.clone(),
                });
            }
        }

        let mut nav_links = Vec::with_capacity(self.nav_links.len());
        let mut seen = HashSet::new();
        for href in self.nav_links {
            if !href.starts_with(PATH_MARKER) || href.len() == PATH_MARKER.len_utf8() {
                return Err(BuildError::InvalidHref(href));
            }
            if !seen.insert(href.clone()) {
                return Err(BuildError::DuplicateLink(href));
            }
            nav_links.push(NavLink {
                href,
                active: false,
            });
        }

        let mut card_ids: HashMap<&str, ()> = HashMap::new();
        let ids = self
            .skills
            .iter()
            .map(|s| s.id.as_str())
            .chain(self.projects.iter().map(|(id, _)| id.as_str()));
        for id in ids {
            if card_ids.insert(id, ()).is_some() {
                return Err(BuildError::DuplicateCard(id.to_string()));
            }
        }

        if let Some(active) = &self.active_page {
            if let Some(page) = pages.iter_mut().find(|p| &p.id == active) {
                page.marks.insert(PageMark::Active);
            }
        }

        Ok(MemoryDocument {
            pages,
            nav_links,
            loader: self.loader.then_some(false),
            nav_scrolled: self.nav_bar.then_some(false),
            back_to_top: self.back_to_top.then_some(false),
            menu: self.menu_toggle.then_some(Menu {
                open: false,
                icon: MenuIcon::Bars,
            }),
            form: self.submit_label.map(|submit_label| ContactFields {
                values: ContactMessage::default(),
                submit_label,
                submit_disabled: false,
            }),
            notices: Vec::new(),
            skills: self.skills,
            filter_buttons: self
                .filter_buttons
                .into_iter()
                .map(|filter| FilterButton {
                    filter,
                    active: false,
                })
                .collect(),
            projects: self
                .projects
                .into_iter()
                .map(|(id, categories)| ProjectCard {
                    id,
                    categories,
                    fade: Fade::SHOWN,
                    displayed: true,
                })
                .collect(),
            scroll_y: 0,
            viewport_height: self.viewport_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Anchor, AnchorLookup};

    #[test]
    fn builder_rejects_duplicate_pages() {
        let result = MemoryDocument::builder().page("home").page("home").build();
        assert_eq!(result.unwrap_err(), BuildError::DuplicatePage("home".into()));
    }

    #[test]
    fn builder_rejects_non_token_hrefs() {
        let result = MemoryDocument::builder().nav_link("about.html").build();
        assert_eq!(result.unwrap_err(), BuildError::InvalidHref("about.html".into()));

        let result = MemoryDocument::builder().nav_link("#").build();
        assert!(matches!(result, Err(BuildError::InvalidHref(_))));
    }

    #[test]
    fn builder_rejects_duplicate_links() {
        let result = MemoryDocument::builder()
            .nav_link("#home")
            .nav_link("#home")
            .build();
        assert_eq!(result.unwrap_err(), BuildError::DuplicateLink("#home".into()));
    }

    #[test]
    fn builder_rejects_skills_on_unknown_pages() {
        let result = MemoryDocument::builder()
            .page("home")
            .skill("rust", "skills", 0, 10, 90)
            .build();
        assert!(matches!(result, Err(BuildError::UnknownPage { .. })));
    }

    #[test]
    fn builder_rejects_unknown_active_page() {
        let result = MemoryDocument::builder().page("home").active_page("about").build();
        assert!(matches!(result, Err(BuildError::UnknownPage { .. })));
    }

    #[test]
    fn builder_rejects_duplicate_card_ids() {
        let result = MemoryDocument::builder()
            .page("skills")
            .skill("rust", "skills", 0, 10, 90)
            .project("rust", &["app"])
            .build();
        assert_eq!(result.unwrap_err(), BuildError::DuplicateCard("rust".into()));
    }

    #[test]
    fn anchors_are_opt_in() {
        let doc = MemoryDocument::builder().page("home").loader().build().unwrap();

        assert!(doc.has_anchor(Anchor::Loader));
        assert!(!doc.has_anchor(Anchor::NavBar));
        assert!(!doc.has_anchor(Anchor::ContactForm));
    }

    #[test]
    fn projects_start_displayed() {
        let doc = MemoryDocument::builder()
            .project("shop", &["web"])
            .build()
            .unwrap();

        let card = doc.project("shop").unwrap();
        assert!(card.displayed);
        assert_eq!(card.fade, Fade::SHOWN);
    }
}
