use anyhow::Context;
use clap::{Parser, ValueEnum};
use holdco_core::models::{Company, PostCategory};
use holdco_core::{
    CategoryFilter, Config, Exporter, ExternalLink, Navigator, Page, PortfolioQuery, Preferences,
    SearchOverlay, SiteStore, SortKey, ViewMode,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "holdco")]
#[command(version, about = "Technology holding company site, in your terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// List subsidiaries and portfolio companies
    Companies {
        #[arg(long, value_enum, default_value_t = ViewArg::All)]
        view: ViewArg,
        #[arg(long, value_enum, default_value_t = CategoryArg::All)]
        category: CategoryArg,
        #[arg(long, value_enum, default_value_t = SortArg::NameAsc)]
        sort: SortArg,
        /// Write the listing to a .json, .csv or .md file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show one company
    Company {
        /// Company id
        id: String,
    },
    /// Search posts and companies
    Search {
        /// Search query
        query: String,
    },
    /// List board posts
    Posts {
        #[arg(long, value_enum)]
        category: Option<BoardArg>,
    },
    /// Popups shown on the home page
    Popups {
        /// Day to check, defaults to today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Show or change the saved font scale
    FontScale {
        #[arg(value_enum)]
        action: Option<ScaleAction>,
    },
    /// Print the external links
    Links,
    /// Write the current configuration to the config file
    InitConfig,
}

#[derive(Clone, Copy, ValueEnum)]
enum ViewArg {
    All,
    Subsidiaries,
    Tips,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::All => ViewMode::All,
            ViewArg::Subsidiaries => ViewMode::SubsidiariesOnly,
            ViewArg::Tips => ViewMode::TipsOnly,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CategoryArg {
    All,
    Subsidiary,
    Portfolio,
}

impl From<CategoryArg> for CategoryFilter {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::All => CategoryFilter::All,
            CategoryArg::Subsidiary => CategoryFilter::Subsidiary,
            CategoryArg::Portfolio => CategoryFilter::Portfolio,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    NameAsc,
    NameDesc,
    FoundedNewest,
    FoundedOldest,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::NameAsc => SortKey::NameAsc,
            SortArg::NameDesc => SortKey::NameDesc,
            SortArg::FoundedNewest => SortKey::FoundedNewest,
            SortArg::FoundedOldest => SortKey::FoundedOldest,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BoardArg {
    Notice,
    Press,
    Resources,
    Faq,
}

impl From<BoardArg> for PostCategory {
    fn from(arg: BoardArg) -> Self {
        match arg {
            BoardArg::Notice => PostCategory::Notice,
            BoardArg::Press => PostCategory::Press,
            BoardArg::Resources => PostCategory::Resources,
            BoardArg::Faq => PostCategory::Faq,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ScaleAction {
    Up,
    Down,
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - helps when things go sideways
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holdco=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("loading config")?;
    let store = SiteStore::seeded().context("loading seed data")?;
    let navigator = Navigator::new(&config.navigation);

    match cli.command {
        Some(Commands::Companies {
            view,
            category,
            sort,
            output,
        }) => {
            let view: ViewMode = view.into();
            navigator.navigate(Page::Companies(view)).await;

            let query = PortfolioQuery::new(view)
                .with_category(category.into())
                .with_sort(sort.into());
            let listing = store.portfolio(&query);

            if let Some(path) = output {
                Exporter::export_to_file(listing.companies(), &path)?;
                tracing::info!("Exported {} companies to {:?}", listing.len(), path);
            }

            println!("{} ({})", navigator.current().title(), query.sort.label());
            if listing.is_empty() {
                println!("조건에 맞는 기업이 없습니다.");
            } else {
                for company in listing.companies() {
                    print_company_line(company);
                }
            }
        }
        Some(Commands::Company { id }) => match store.company(&id) {
            Some(company) => {
                navigator.navigate(Page::CompanyDetail { id: id.clone() }).await;
                print_company_detail(company);
            }
            None => anyhow::bail!("no company with id {}", id),
        },
        Some(Commands::Search { query }) => {
            tracing::info!("Searching for: {}", query);
            let mut overlay = SearchOverlay::new();
            overlay.open();
            overlay.set_query(query);

            let results = overlay.results(store.posts(), store.companies());
            if results.is_empty() {
                println!("검색 결과가 없습니다.");
            }
            for post in &results.posts {
                let target = holdco_core::search::post_target(post);
                println!("[{}] {} ({}) -> {}", post.category.label(), post.title, post.date, target.title());
            }
            for company in &results.companies {
                println!("[기업] {} - {}", company.name, company.business);
            }
        }
        Some(Commands::Posts { category }) => {
            let boards: Vec<PostCategory> = match category {
                Some(c) => vec![c.into()],
                None => PostCategory::all(),
            };
            for board in boards {
                navigator.navigate(Page::Board(board)).await;
                println!("== {} ==", board.label());
                for post in store.posts_in(Some(board)) {
                    let badge = if post.is_new.unwrap_or(false) { " N" } else { "" };
                    println!("{:>4}  {}{}  {}", post.id, post.title, badge, post.date);
                }
            }
        }
        Some(Commands::Popups { date }) => {
            let day = match date {
                Some(d) => holdco_core::models::parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };
            let popups = store.active_popups(day);
            if popups.is_empty() {
                println!("{} 기준 표시할 팝업이 없습니다.", day);
            }
            for popup in popups {
                println!("{}  ({} ~ {})", popup.title, popup.start, popup.end);
                if let Some(link) = &popup.link {
                    println!("    {}", link);
                }
            }
        }
        Some(Commands::FontScale { action }) => {
            let mut prefs = Preferences::load(&config)?;
            if let Some(action) = action {
                prefs.font_scale = match action {
                    ScaleAction::Up => prefs.font_scale.increase(),
                    ScaleAction::Down => prefs.font_scale.decrease(),
                    ScaleAction::Reset => Default::default(),
                };
                prefs.save(&config)?;
            }
            println!("글자 크기: {}", prefs.font_scale);
        }
        Some(Commands::Links) => {
            println!("창업보육센터: {}", ExternalLink::IncubationCenter.url(&config.links));
            println!("지도: {}", ExternalLink::Map.url(&config.links));
        }
        Some(Commands::InitConfig) => {
            let path = config.save()?;
            println!("Config written to {}", path.display());
        }
        None => {
            println!("No command specified. Try --help");
        }
    }

    Ok(())
}

fn print_company_line(company: &Company) {
    let founded = company
        .founded
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let tips = if company.tips { " [TIPS]" } else { "" };
    println!(
        "{:<20} {:<6} {}  {}{}",
        company.name,
        company.category.label(),
        founded,
        company.business,
        tips
    );
}

fn print_company_detail(company: &Company) {
    println!("{} ({})", company.name, company.category.label());
    if let Some(summary) = &company.summary {
        println!("  {}", summary);
    }
    println!("  대표: {}", company.ceo);
    if let Some(founded) = company.founded {
        println!("  설립일: {}", founded);
    }
    println!("  사업분야: {}", company.business);
    if !company.room.is_empty() {
        println!("  입주: {}", company.room);
    }
    if let Some(move_in) = company.move_in {
        println!("  입주일: {}", move_in);
    }
    if !company.homepage.is_empty() {
        println!("  홈페이지: {}", company.homepage);
    }
    if company.tips {
        println!("  TIPS 선정기업");
    }
}
