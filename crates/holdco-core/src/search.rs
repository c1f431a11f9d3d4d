use crate::models::{Company, Post, PostCategory};
use crate::navigation::Page;
use tracing::debug;

/// Max hits shown per collection in the header search modal
pub const SEARCH_RESULT_LIMIT: usize = 5;

/// Hits for one query, borrowed from the collections that were searched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults<'a> {
    pub posts: Vec<&'a Post>,
    pub companies: Vec<&'a Company>,
}

impl<'a> SearchResults<'a> {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.companies.is_empty()
    }

    pub fn total(&self) -> usize {
        self.posts.len() + self.companies.len()
    }
}

fn contains(field: &str, needle: &str) -> bool {
    field.to_lowercase().contains(needle)
}

fn post_matches(post: &Post, needle: &str) -> bool {
    contains(&post.title, needle)
        || post.body.as_deref().is_some_and(|b| contains(b, needle))
        || post.author.as_deref().is_some_and(|a| contains(a, needle))
}

fn company_matches(company: &Company, needle: &str) -> bool {
    contains(&company.name, needle)
        || contains(&company.business, needle)
        || contains(&company.ceo, needle)
}

/// Case-insensitive substring search over posts and companies
///
/// A linear scan on every call, no index. Blank queries return nothing.
/// Hits keep collection order and are capped at [`SEARCH_RESULT_LIMIT`].
pub fn search<'a>(query: &str, posts: &'a [Post], companies: &'a [Company]) -> SearchResults<'a> {
    if query.trim().is_empty() {
        return SearchResults::default();
    }

    let needle = query.to_lowercase();

    let results = SearchResults {
        posts: posts
            .iter()
            .filter(|p| post_matches(p, &needle))
            .take(SEARCH_RESULT_LIMIT)
            .collect(),
        companies: companies
            .iter()
            .filter(|c| company_matches(c, &needle))
            .take(SEARCH_RESULT_LIMIT)
            .collect(),
    };

    debug!(
        "Search {:?}: {} posts, {} companies",
        query,
        results.posts.len(),
        results.companies.len()
    );

    results
}

/// Where selecting a post from the results should land
pub fn post_target(post: &Post) -> Page {
    match post.category {
        PostCategory::Faq => Page::Board(PostCategory::Faq),
        other => Page::PostDetail {
            id: post.id,
            label: other.label(),
        },
    }
}

pub fn company_target(company: &Company) -> Page {
    Page::CompanyDetail {
        id: company.id.clone(),
    }
}

/// The header search overlay: query text plus open/closed state
#[derive(Debug, Clone, Default)]
pub struct SearchOverlay {
    pub query: String,
    pub open: bool,
}

impl SearchOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn results<'a>(&self, posts: &'a [Post], companies: &'a [Company]) -> SearchResults<'a> {
        search(&self.query, posts, companies)
    }

    /// Pick a post hit; clears the query and closes the overlay
    pub fn select_post(&mut self, post: &Post) -> Page {
        self.close();
        post_target(post)
    }

    /// Pick a company hit; clears the query and closes the overlay
    pub fn select_company(&mut self, company: &Company) -> Page {
        self.close();
        company_target(company)
    }

    pub fn close(&mut self) {
        self.query.clear();
        self.open = false;
    }
}
