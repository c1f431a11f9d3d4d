use crate::collate::korean_cmp;
use crate::models::{Company, CompanyCategory};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Which slice of the company collection the listing page shows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    SubsidiariesOnly,
    TipsOnly,
    #[default]
    All,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::SubsidiariesOnly => "subsidiaries-only",
            ViewMode::TipsOnly => "tips-only",
            ViewMode::All => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::SubsidiariesOnly => "자회사",
            ViewMode::TipsOnly => "TIPS 선정기업",
            ViewMode::All => "포트폴리오",
        }
    }

    pub fn all() -> Vec<ViewMode> {
        vec![ViewMode::SubsidiariesOnly, ViewMode::TipsOnly, ViewMode::All]
    }
}

/// Category dropdown; ignored when the view is already subsidiaries-only
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Subsidiary,
    Portfolio,
}

impl CategoryFilter {
    fn category(&self) -> Option<CompanyCategory> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Subsidiary => Some(CompanyCategory::Subsidiary),
            CategoryFilter::Portfolio => Some(CompanyCategory::Portfolio),
        }
    }
}

/// Sort dropdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    FoundedNewest,
    FoundedOldest,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "이름순 (가나다)",
            SortKey::NameDesc => "이름순 (역순)",
            SortKey::FoundedNewest => "설립일 (최신순)",
            SortKey::FoundedOldest => "설립일 (오래된순)",
        }
    }

    pub fn all() -> Vec<SortKey> {
        vec![
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::FoundedNewest,
            SortKey::FoundedOldest,
        ]
    }
}

/// Everything the listing page's controls can select
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortfolioQuery {
    pub view: ViewMode,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

impl PortfolioQuery {
    pub fn new(view: ViewMode) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Does this company survive the view and category filters?
    pub fn matches(&self, company: &Company) -> bool {
        let in_view = match self.view {
            ViewMode::SubsidiariesOnly => company.category == CompanyCategory::Subsidiary,
            ViewMode::TipsOnly => company.tips,
            ViewMode::All => true,
        };
        if !in_view {
            return false;
        }

        if self.view == ViewMode::SubsidiariesOnly {
            return true;
        }

        match self.category.category() {
            Some(cat) => company.category == cat,
            None => true,
        }
    }

    /// Filter then sort. The source slice is left untouched.
    pub fn apply<'a>(&self, companies: &'a [Company]) -> PortfolioView<'a> {
        let mut items: Vec<&Company> = companies.iter().filter(|c| self.matches(c)).collect();
        sort_companies(&mut items, self.sort);

        debug!(
            "Portfolio view {:?}/{:?}/{:?}: {} of {} companies",
            self.view,
            self.category,
            self.sort,
            items.len(),
            companies.len()
        );

        PortfolioView { items }
    }
}

/// Sort a list of company references in place
///
/// Name-descending is the exact reverse of name-ascending, ties included.
/// Companies without a founding date always go last.
pub fn sort_companies(items: &mut [&Company], sort: SortKey) {
    match sort {
        SortKey::NameAsc => items.sort_by(|a, b| korean_cmp(&a.name, &b.name)),
        SortKey::NameDesc => {
            items.sort_by(|a, b| korean_cmp(&a.name, &b.name));
            items.reverse();
        }
        SortKey::FoundedNewest => items.sort_by(|a, b| founded_cmp(a, b, true)),
        SortKey::FoundedOldest => items.sort_by(|a, b| founded_cmp(a, b, false)),
    }
}

fn founded_cmp(a: &Company, b: &Company, newest_first: bool) -> Ordering {
    match (a.founded, b.founded) {
        (Some(x), Some(y)) if newest_first => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// The derived listing, borrowed from the store
#[derive(Debug, Clone)]
pub struct PortfolioView<'a> {
    items: Vec<&'a Company>,
}

impl<'a> PortfolioView<'a> {
    pub fn companies(&self) -> &[&'a Company] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The page shows a "no matches" message instead of an empty grid
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.items.iter().map(|c| c.id.as_str()).collect()
    }
}
