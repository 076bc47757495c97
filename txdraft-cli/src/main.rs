use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use txdraft_classify::{Classifier, MemoryCatalog, MemoryWallets};
use txdraft_core::time::today_in_tz;
use txdraft_core::types::ClassificationRequest;

#[derive(Parser, Debug)]
#[command(name = "txdraft", version, about = "Rule-based transaction draft classifier")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify an utterance into a transaction draft and print it as JSON
    Classify {
        /// Free-text utterance, PT or EN ("gastei 23.50 no supermercado ontem")
        text: String,

        /// Wallet the draft targets
        #[arg(long, default_value_t = 1)]
        wallet: u64,

        /// Requesting user id (scopes catalog visibility)
        #[arg(long, default_value_t = 1)]
        user: u64,

        /// IANA timezone anchoring "today" for relative dates
        #[arg(long, default_value = "Europe/Lisbon")]
        tz: String,

        /// Override today's date (YYYY-MM-DD) instead of the timezone clock
        #[arg(long)]
        date: Option<NaiveDate>,

        /// JSON catalog file (defaults to the built-in default taxonomy)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the catalog the classifier runs against
    Catalog {
        /// JSON catalog file (defaults to the built-in default taxonomy)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// User id for visibility scoping
        #[arg(long, default_value_t = 1)]
        user: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Classify { text, wallet, user, tz, date, catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;

            // The CLI is a harness without a wallet backend; the requested
            // wallet is assumed to belong to the requesting user.
            let mut wallets = MemoryWallets::new();
            wallets.add_wallet(wallet, "cli", user);

            let today = match date {
                Some(date) => date,
                None => today_in_tz(&tz)?,
            };

            let classifier = Classifier::new(&wallets, &catalog);
            let request = ClassificationRequest { wallet_id: wallet, text };
            let draft = classifier.classify(&request, user, today)?;

            println!("{}", serde_json::to_string_pretty(&draft)?);
            println!(
                "\n[{:?}] {:.2} | {} / {} | {} {}",
                draft.kind,
                draft.amount,
                draft.category,
                draft.subcategory,
                draft.date,
                if draft.date_detected { "(from text)" } else { "(default)" },
            );
        }

        Command::Catalog { catalog, user } => {
            let catalog = load_catalog(catalog.as_deref())?;
            for category in catalog.categories() {
                if !category.owner.visible_to(user) {
                    continue;
                }
                println!("[{:?}] {}", category.kind, category.name);
                for subcategory in catalog.subcategories() {
                    if subcategory.category_id == category.id && subcategory.owner.visible_to(user)
                    {
                        println!("    {}", subcategory.name);
                    }
                }
            }
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<MemoryCatalog> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))
        }
        None => Ok(MemoryCatalog::with_defaults()),
    }
}
