// Page state for the site - not URL routing, just an in-memory enum
use crate::config::{LinkConfig, NavigationConfig};
use crate::models::PostCategory;
use crate::portfolio::ViewMode;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutSection {
    Greeting,
    History,
    Organization,
    Location,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentSection {
    Program,
    Process,
}

/// Every page and sub-page the site can show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    About(AboutSection),
    Investment(InvestmentSection),
    Companies(ViewMode),
    CompanyDetail { id: String },
    Board(PostCategory),
    PostDetail { id: u64, label: &'static str },
    Contact,
    /// The admin "login" is a plain navigation, there is no auth
    Admin,
}

impl Page {
    pub fn title(&self) -> String {
        match self {
            Page::Home => "홈".to_string(),
            Page::About(AboutSection::Greeting) => "인사말".to_string(),
            Page::About(AboutSection::History) => "연혁".to_string(),
            Page::About(AboutSection::Organization) => "조직도".to_string(),
            Page::About(AboutSection::Location) => "오시는 길".to_string(),
            Page::Investment(InvestmentSection::Program) => "투자 프로그램".to_string(),
            Page::Investment(InvestmentSection::Process) => "투자 절차".to_string(),
            Page::Companies(view) => view.label().to_string(),
            Page::CompanyDetail { id } => format!("기업 상세 ({})", id),
            Page::Board(category) => category.label().to_string(),
            Page::PostDetail { label, .. } => label.to_string(),
            Page::Contact => "문의하기".to_string(),
            Page::Admin => "관리자".to_string(),
        }
    }
}

/// Outbound links, opened in a new browsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    IncubationCenter,
    Map,
}

impl ExternalLink {
    pub fn url<'a>(&self, links: &'a LinkConfig) -> &'a str {
        match self {
            ExternalLink::IncubationCenter => &links.incubation_center_url,
            ExternalLink::Map => &links.map_url,
        }
    }
}

#[derive(Debug)]
struct NavState {
    current: Page,
    loading: bool,
    generation: u64,
}

/// Applies page transitions after the cosmetic loading delay
///
/// Each navigation takes a generation ticket. If another navigation starts
/// while one is still waiting, the older one is dropped instead of
/// committing a stale page.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: Arc<Mutex<NavState>>,
    delay: Duration,
}

impl Navigator {
    pub fn new(config: &NavigationConfig) -> Self {
        Self::with_delay(Duration::from_millis(config.loading_delay_ms))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(NavState {
                current: Page::Home,
                loading: false,
                generation: 0,
            })),
            delay,
        }
    }

    pub fn current(&self) -> Page {
        self.lock().current.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    /// Switch pages immediately, superseding anything in flight
    pub fn jump(&self, page: Page) {
        let mut state = self.lock();
        state.generation += 1;
        state.loading = false;
        debug!("Jump to {:?}", page);
        state.current = page;
    }

    /// Show the loading state, wait, then switch pages.
    ///
    /// Returns false if a newer navigation superseded this one.
    pub async fn navigate(&self, page: Page) -> bool {
        let ticket = {
            let mut state = self.lock();
            state.generation += 1;
            state.loading = true;
            state.generation
        };

        tokio::time::sleep(self.delay).await;

        let mut state = self.lock();
        if state.generation != ticket {
            warn!("Navigation to {:?} superseded", page);
            return false;
        }

        debug!("Navigated to {:?}", page);
        state.current = page;
        state.loading = false;
        true
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, NavState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_navigate_commits_after_delay() {
        let nav = Navigator::with_delay(Duration::from_millis(10));
        assert_eq!(nav.current(), Page::Home);

        let committed = nav.navigate(Page::Contact).await;
        assert!(committed);
        assert_eq!(nav.current(), Page::Contact);
        assert!(!nav.is_loading());
    }

    #[tokio::test]
    async fn test_overlapping_navigation_latest_wins() {
        let nav = Navigator::with_delay(Duration::from_millis(50));

        let first = {
            let nav = nav.clone();
            tokio::spawn(async move { nav.navigate(Page::Admin).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(nav.is_loading());

        let second = nav.navigate(Page::Board(PostCategory::Press)).await;

        assert!(!first.await.unwrap());
        assert!(second);
        assert_eq!(nav.current(), Page::Board(PostCategory::Press));
    }

    #[tokio::test]
    async fn test_jump_cancels_pending_navigation() {
        let nav = Navigator::with_delay(Duration::from_millis(30));
        let pending = {
            let nav = nav.clone();
            tokio::spawn(async move { nav.navigate(Page::Contact).await })
        };
        tokio::time::sleep(Duration::from_millis(5)).await;
        nav.jump(Page::Admin);

        assert!(!pending.await.unwrap());
        assert_eq!(nav.current(), Page::Admin);
    }

    #[test]
    fn test_external_links_resolve_from_config() {
        let links = LinkConfig::default();
        assert_eq!(ExternalLink::Map.url(&links), links.map_url);
        assert_eq!(
            ExternalLink::IncubationCenter.url(&links),
            links.incubation_center_url
        );
    }

    #[test]
    fn test_page_titles() {
        assert_eq!(Page::Board(PostCategory::Notice).title(), "공지사항");
        assert_eq!(Page::Companies(ViewMode::TipsOnly).title(), "TIPS 선정기업");
    }
}
