//! Showroom - headless entry point.
//!
//! Loads configuration and the catalog, binds a storefront to an in-memory
//! page and drives it with line commands read from stdin.

use std::time::Duration;

use showroom_core::{AppConfig, CardAction, Catalog};
use showroom_ui::page::{selectors, MemoryPage, Page, PageError};
use showroom_ui::Storefront;
use tokio::io::{AsyncBufReadExt, BufReader};

// =============================================================================
// Configuration
// =============================================================================

/// Load the configured catalog, falling back to the sample on error.
fn load_catalog(config: &AppConfig) -> Catalog {
    let Some(path) = &config.catalog.path else {
        return Catalog::sample();
    };

    match Catalog::load(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!("{} - using the sample catalog", e);
            Catalog::sample()
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

const HELP: &str = "\
commands:
  category <all|ebike|scooter|atv|kids|gadgets>
  sort <featured|priceAsc|priceDesc|nameAsc>
  price <range>          toggle a price range checkbox (0-500, 500-1000, 1000-1500, 1500-inf)
  reset
  grid | list
  search <text>
  view <product name>
  add <product name>
  show
  quit";

#[derive(Debug, PartialEq)]
enum Command {
    Select { selector: &'static str, value: String },
    TogglePrice(String),
    Click(&'static str),
    Search(String),
    Card(CardAction),
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (verb, arg) = line.split_once(' ').unwrap_or((line, ""));
    let arg = arg.trim();

    let command = match verb {
        "category" => Command::Select {
            selector: selectors::CATEGORY,
            value: arg.to_string(),
        },
        "sort" => Command::Select {
            selector: selectors::SORT,
            value: arg.to_string(),
        },
        "price" => Command::TogglePrice(arg.to_string()),
        "reset" => Command::Click(selectors::RESET),
        "grid" => Command::Click(selectors::GRID_BUTTON),
        "list" => Command::Click(selectors::LIST_BUTTON),
        // Empty search text is passed through; the storefront rejects it
        "search" => Command::Search(arg.to_string()),
        "view" => Command::Card(CardAction::view(arg)),
        "add" => Command::Card(CardAction::add(arg)),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Act out a command on the page as a user would.
fn apply(page: &MemoryPage, command: &Command) -> Result<(), PageError> {
    match command {
        Command::Select { selector, value } => page.select(selector, value),
        Command::TogglePrice(range) => {
            let checked = page
                .query_all(selectors::PRICE)
                .iter()
                .any(|el| page.value(el) == *range && page.is_checked(el));
            page.set_price_range(range, !checked)
        }
        Command::Click(selector) => page.click(selector),
        Command::Search(text) => page.submit_search(text),
        Command::Card(action) => {
            if !page.click_card(action)? {
                println!("no visible product named {:?}", action.name);
            }
            Ok(())
        }
        Command::Show | Command::Help | Command::Quit => Ok(()),
    }
}

/// Product names currently in the grid markup.
fn visible_names(markup: &str) -> Vec<String> {
    markup
        .lines()
        .filter_map(|line| {
            line.trim()
                .strip_prefix(r#"<h3 class="card__title">"#)
                .and_then(|rest| rest.strip_suffix("</h3>"))
                .map(str::to_string)
        })
        .collect()
}

fn print_page(page: &MemoryPage) {
    let text = |selector| page.text(selector).unwrap_or_default();

    println!("status: {}", text(selectors::STATUS));
    println!(
        "layout: {}  cart: {}",
        page.class_name(selectors::GRID).unwrap_or_default(),
        text(selectors::CART_COUNT)
    );
    if page.has_class(selectors::TOAST, "show") {
        println!("toast:  {}", text(selectors::TOAST));
    }
    for name in visible_names(&page.markup(selectors::GRID).unwrap_or_default()) {
        println!("  - {name}");
    }
}

/// Read commands from stdin until EOF or `quit`.
async fn drive(page: MemoryPage, settle_delay: Duration) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{HELP}");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read stdin: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let Some(command) = parse_command(&line) else {
            println!("unknown command: {line}");
            continue;
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            command => {
                if let Err(e) = apply(&page, &command) {
                    println!("error: {e}");
                    continue;
                }
                // Let the storefront finish any simulated load before printing
                tokio::time::sleep(settle_delay).await;
                print_page(&page);
            }
        }
    }
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Showroom starting...");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load config: {} - using defaults", e);
            AppConfig::default()
        }
    };
    let catalog = load_catalog(&config);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to create tokio runtime");

    rt.block_on(async move {
        let page = MemoryPage::storefront();
        let mut storefront = match Storefront::new(page.clone(), catalog, config.timing.clone()) {
            Ok(storefront) => storefront,
            Err(e) => {
                tracing::error!("Failed to bind storefront: {}", e);
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        };

        storefront.start();
        let settle_delay = config.timing.load_latency() + Duration::from_millis(20);
        let driver = tokio::spawn(drive(page, settle_delay));
        storefront.run_until(driver).await;
    });

    tracing::info!("Showroom stopped");
}
