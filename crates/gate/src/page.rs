//! The console's pages and what each requires.

use identity::{Role, SessionIdentity};

/// Access requirement of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anyone, logged in or not. Never goes through `protect`.
    Public,
    /// A logged-in session, with at least the given role when set.
    Protected(Option<Role>),
}

impl Access {
    /// Whether the page belongs in the navigation menu for `identity`.
    ///
    /// Pure: no messages, no intents.
    pub fn visible_to(self, identity: Option<&SessionIdentity>) -> bool {
        match (self, identity) {
            (Self::Public, _) => true,
            (Self::Protected(_), None) => false,
            (Self::Protected(None), Some(_)) => true,
            (Self::Protected(Some(tier)), Some(identity)) => identity.meets(tier),
        }
    }
}

/// Navigation menu group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Section {
    Home,
    Admin,
    Editor,
}

impl Section {
    /// Menu heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Admin => "Admin",
            Self::Editor => "Editor",
        }
    }
}

/// One console page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSpec {
    /// Routing key.
    pub slug: &'static str,
    /// Menu label.
    pub title: &'static str,
    /// Menu icon.
    pub icon: &'static str,
    /// Menu group.
    pub section: Section,
    /// Requirement checked on every render.
    pub access: Access,
}

impl PageSpec {
    const fn new(
        slug: &'static str,
        title: &'static str,
        icon: &'static str,
        section: Section,
        access: Access,
    ) -> Self {
        Self {
            slug,
            title,
            icon,
            section,
            access,
        }
    }
}

/// Slug of the console's landing page.
pub const HOME: &str = "home";

const MEMBER: Access = Access::Protected(None);
const EDITOR: Access = Access::Protected(Some(Role::Editor));
const ADMIN: Access = Access::Protected(Some(Role::Admin));

const CONSOLE_PAGES: [PageSpec; 10] = [
    PageSpec::new(HOME, "Home", "🚀", Section::Home, Access::Public),
    PageSpec::new("docs", "Documentation", "📚", Section::Home, Access::Public),
    PageSpec::new("logs", "Logs", "📜", Section::Home, MEMBER),
    PageSpec::new("admin", "Admin Panel", "🔧", Section::Admin, ADMIN),
    PageSpec::new(
        "user_settings",
        "User Management",
        "👤",
        Section::Admin,
        ADMIN,
    ),
    PageSpec::new(
        "client_settings",
        "Client Settings",
        "💸",
        Section::Admin,
        ADMIN,
    ),
    PageSpec::new(
        "local",
        "Cloud Deploy (Local Mode)",
        "⚙️",
        Section::Admin,
        ADMIN,
    ),
    PageSpec::new(
        "prompt_engineering",
        "Prompt Engineering",
        "📝",
        Section::Editor,
        EDITOR,
    ),
    PageSpec::new("client_data", "Client Data", "📊", Section::Editor, EDITOR),
    PageSpec::new("testing", "AI Testing", "🔍", Section::Editor, EDITOR),
];

/// Invalid page catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("landing page '{0}' is not in the catalog")]
    MissingLanding(String),
    /// Denials redirect to the landing page, so a protected landing
    /// page would redirect to itself forever.
    #[error("landing page '{0}' must be public")]
    ProtectedLanding(String),
    #[error("page '{0}' is listed twice")]
    DuplicateSlug(String),
}

/// The set of pages and the landing page denials redirect to.
#[derive(Debug, Clone)]
pub struct Catalog {
    pages: Vec<PageSpec>,
    landing: usize,
}

impl Catalog {
    /// Build a catalog. The landing page must exist and be public.
    pub fn new(pages: Vec<PageSpec>, landing: &str) -> Result<Self, CatalogError> {
        for (i, page) in pages.iter().enumerate() {
            if pages[..i].iter().any(|p| p.slug == page.slug) {
                return Err(CatalogError::DuplicateSlug(page.slug.into()));
            }
        }
        let Some(index) = pages.iter().position(|p| p.slug == landing) else {
            return Err(CatalogError::MissingLanding(landing.into()));
        };
        if pages[index].access != Access::Public {
            return Err(CatalogError::ProtectedLanding(landing.into()));
        }
        Ok(Self {
            pages,
            landing: index,
        })
    }

    /// The console's pages, landing on `home`.
    pub fn console() -> Self {
        Self {
            pages: CONSOLE_PAGES.to_vec(),
            landing: 0,
        }
    }

    /// Look up a page by slug.
    pub fn get(&self, slug: &str) -> Option<&PageSpec> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// The landing page.
    pub fn landing(&self) -> &PageSpec {
        &self.pages[self.landing]
    }

    /// All pages in menu order.
    pub fn pages(&self) -> &[PageSpec] {
        &self.pages
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::console()
    }
}
