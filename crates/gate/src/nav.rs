//! The render cycle: navigation intents, page access and the menu.

use crate::{Access, AccessController, Catalog, Denial, PageSpec, Section, SessionContext};
use compact_str::CompactString;
use identity::SessionIdentity;

/// A menu group with the pages visible in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection<'a> {
    pub section: Section,
    pub pages: Vec<&'a PageSpec>,
}

/// Result of one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render<'a> {
    /// The page may render.
    Page {
        page: &'a PageSpec,
        /// Set for protected pages, optional for public ones.
        identity: Option<SessionIdentity>,
        menu: Vec<MenuSection<'a>>,
    },
    /// The page was denied; the next cycle lands on `to`.
    Redirected { to: CompactString, denial: Denial },
}

/// Drives page selection for a session.
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Catalog,
    controller: AccessController,
}

impl Navigator {
    /// Navigate `catalog`, redirecting denials to its landing page.
    pub fn new(catalog: Catalog) -> Self {
        let controller = AccessController::new(catalog.landing().slug);
        Self {
            catalog,
            controller,
        }
    }

    /// Navigator over the console's pages.
    pub fn console() -> Self {
        Self::new(Catalog::console())
    }

    /// The page catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The access controller pages call `protect` on.
    pub fn controller(&self) -> &AccessController {
        &self.controller
    }

    /// Run one render cycle for `requested`.
    ///
    /// A pending navigation intent wins over `requested` and is consumed
    /// here, once. Unknown slugs render the landing page.
    pub fn render(&self, ctx: &mut SessionContext, requested: &str) -> Render<'_> {
        let forced = ctx.consume_redirect();
        let slug = forced.as_ref().map_or(requested, |r| r.target.as_str());
        if forced.is_some() {
            tracing::debug!("navigation intent to '{slug}' consumed");
        }

        let page = self.catalog.get(slug).unwrap_or_else(|| {
            tracing::debug!("unknown page '{slug}', rendering landing page");
            self.catalog.landing()
        });

        let identity = match page.access {
            Access::Public => ctx.identity().cloned(),
            Access::Protected(tier) => match self.controller.protect(ctx, tier) {
                Ok(identity) => Some(identity),
                Err(denial) => {
                    return Render::Redirected {
                        to: self.controller.landing().into(),
                        denial,
                    };
                }
            },
        };

        Render::Page {
            page,
            menu: self.menu(identity.as_ref()),
            identity,
        }
    }

    /// Menu sections and pages visible to `identity`. Empty sections are
    /// left out.
    pub fn menu(&self, identity: Option<&SessionIdentity>) -> Vec<MenuSection<'_>> {
        let mut sections: Vec<MenuSection<'_>> = Vec::new();
        for page in self.catalog.pages() {
            if !page.access.visible_to(identity) {
                continue;
            }
            match sections.iter_mut().find(|s| s.section == page.section) {
                Some(section) => section.pages.push(page),
                None => sections.push(MenuSection {
                    section: page.section,
                    pages: vec![page],
                }),
            }
        }
        sections
    }

    /// End the session: wipe all of its state and send the next render to
    /// the landing page.
    pub fn logout(&self, ctx: &mut SessionContext) {
        if let Some(identity) = ctx.identity() {
            tracing::info!("logout for {}", identity.email());
        }
        ctx.reset();
        ctx.force_page(self.controller.landing());
    }
}
