use crate::models::{Company, Inquiry, InquiryStatus, Popup, Post, PostCategory};
use crate::portfolio::{PortfolioQuery, PortfolioView};
use crate::search::{self, SearchResults};
use crate::seed::SeedData;
use chrono::NaiveDate;
use tracing::debug;

pub const MSG_NAME_REQUIRED: &str = "이름을 입력해주세요";
pub const MSG_EMAIL_REQUIRED: &str = "이메일을 입력해주세요";
pub const MSG_INQUIRY_BODY_REQUIRED: &str = "문의 내용을 입력해주세요";

/// The whole site state: four independent collections plus an id counter
///
/// Owned by the application and passed by reference to whoever needs a
/// derived view. Only the admin handlers and the contact form mutate it.
#[derive(Debug, Clone, Default)]
pub struct SiteStore {
    pub(crate) companies: Vec<Company>,
    pub(crate) posts: Vec<Post>,
    pub(crate) inquiries: Vec<Inquiry>,
    pub(crate) popups: Vec<Popup>,
    next_id: u64,
}

/// Contact form input
#[derive(Debug, Clone, Default)]
pub struct InquiryDraft {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub body: String,
}

impl SiteStore {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Store populated with the embedded mock data
    pub fn seeded() -> crate::Result<Self> {
        Ok(Self::from_seed(SeedData::embedded()?))
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let max_id = seed
            .posts
            .iter()
            .map(|p| p.id)
            .chain(seed.inquiries.iter().map(|i| i.id))
            .chain(seed.popups.iter().map(|p| p.id))
            .max()
            .unwrap_or(0);

        Self {
            companies: crate::seed::dedup_companies(seed.companies),
            posts: seed.posts,
            inquiries: seed.inquiries,
            popups: seed.popups,
            next_id: max_id + 1,
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn inquiries(&self) -> &[Inquiry] {
        &self.inquiries
    }

    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    /// Board listing: every post, or only those in `category`, in collection order
    pub fn posts_in(&self, category: Option<PostCategory>) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }

    pub fn company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn portfolio(&self, query: &PortfolioQuery) -> PortfolioView<'_> {
        query.apply(&self.companies)
    }

    pub fn search(&self, query: &str) -> SearchResults<'_> {
        search::search(query, &self.posts, &self.companies)
    }

    /// Popups the home page should show on `today`
    pub fn active_popups(&self, today: NaiveDate) -> Vec<&Popup> {
        self.popups.iter().filter(|p| p.is_active_on(today)).collect()
    }

    /// Public contact form submission, always starts as pending
    pub fn submit_inquiry(&mut self, draft: InquiryDraft, today: NaiveDate) -> crate::Result<u64> {
        require(&draft.name, MSG_NAME_REQUIRED)?;
        require(&draft.email, MSG_EMAIL_REQUIRED)?;
        require(&draft.body, MSG_INQUIRY_BODY_REQUIRED)?;

        let id = self.allocate_id();
        self.inquiries.insert(
            0,
            Inquiry {
                id,
                name: draft.name.trim().to_string(),
                contact: draft.contact.trim().to_string(),
                email: draft.email.trim().to_string(),
                body: draft.body,
                submitted: today,
                status: InquiryStatus::Pending,
            },
        );

        debug!("Inquiry {} submitted", id);
        Ok(id)
    }

    /// Next numeric id for posts, inquiries and popups
    ///
    /// Monotonic within the store, so back-to-back creates never collide.
    pub(crate) fn allocate_id(&mut self) -> u64 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Slug of the name, suffixed until it is unused
    pub(crate) fn allocate_company_id(&self, name: &str) -> String {
        let base = slugify(name);
        let base = if base.is_empty() { "company".to_string() } else { base };

        if self.company(&base).is_none() {
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.company(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Blocking "required field" check used by every save action
pub(crate) fn require(value: &str, message: &str) -> crate::Result<()> {
    if value.trim().is_empty() {
        Err(crate::Error::Validation(message.to_string()))
    } else {
        Ok(())
    }
}

/// Lowercase, keep letters and digits (Hangul included), dash the rest
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}
