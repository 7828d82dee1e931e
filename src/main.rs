//! `casedeck` - builds the case-study decks, report, screenshots and PDFs.
//!
//! Usage: casedeck [deck|deck-short|report|placeholders|export-decks|export-report|all]

use anyhow::{bail, Context};
use tracing_subscriber::EnvFilter;

use casedeck::config::Config;
use casedeck::export::{self, ExportOutcome, Soffice};
use casedeck::services::{ArtifactGenerator, CaseStudyReport, FullDeck, PlaceholderScreenshots, ShortDeck};

/// One unit of work, named after the command that runs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Deck,
    DeckShort,
    Report,
    Placeholders,
    ExportDecks,
    ExportReport,
    All,
}

impl Command {
    fn parse(arg: &str) -> Option<Self> {
        match arg {
            "deck" => Some(Self::Deck),
            "deck-short" => Some(Self::DeckShort),
            "report" => Some(Self::Report),
            "placeholders" => Some(Self::Placeholders),
            "export-decks" => Some(Self::ExportDecks),
            "export-report" => Some(Self::ExportReport),
            "all" => Some(Self::All),
            _ => None,
        }
    }
}

const USAGE: &str = "Usage: casedeck [deck|deck-short|report|placeholders|export-decks|export-report|all]

  deck           Write project_presentation.pptx (16 slides)
  deck-short     Write project_presentation_short.pptx (9 slides)
  report         Write project_report.docx
  placeholders   Write placeholder screenshots (overwrites existing ones)
  export-decks   Convert both decks to PDF
  export-report  Convert the report to PDF
  all            Missing placeholders, both decks, report, then PDFs (default)

Environment: CASEDECK_OUT_DIR, CASEDECK_SCREENSHOTS_DIR, CASEDECK_SOFFICE,
CASEDECK_REPORT_DATE, CASEDECK_AUTHOR, RUST_LOG";

fn generate(generator: &dyn ArtifactGenerator, config: &Config) -> anyhow::Result<()> {
    let written = generator
        .generate(config)
        .with_context(|| format!("{} generation failed", generator.format_name()))?;
    tracing::debug!("{}: {} file(s)", generator.format_name(), written.len());
    Ok(())
}

fn report_exports(outcomes: &[ExportOutcome]) {
    for outcome in outcomes {
        if let ExportOutcome::Exported(path) = outcome {
            println!("{}", path.display());
        }
    }
}

fn run(command: Command, config: &Config) -> anyhow::Result<()> {
    let soffice = Soffice::new(&config.soffice_path);
    match command {
        Command::Deck => generate(&FullDeck, config),
        Command::DeckShort => generate(&ShortDeck, config),
        Command::Report => generate(&CaseStudyReport::default(), config),
        Command::Placeholders => generate(&PlaceholderScreenshots::default(), config),
        Command::ExportDecks => {
            let outcomes = export::export_decks(&soffice, config).context("Deck export failed")?;
            report_exports(&outcomes);
            Ok(())
        }
        Command::ExportReport => {
            let outcome = export::export_report(&soffice, config).context("Report export failed")?;
            report_exports(&[outcome]);
            Ok(())
        }
        Command::All => {
            generate(&PlaceholderScreenshots { keep_existing: true }, config)?;
            for step in [Command::Deck, Command::DeckShort, Command::Report, Command::ExportDecks, Command::ExportReport] {
                run(step, config)?;
            }
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{USAGE}");
        return Ok(());
    }
    if args.len() > 1 {
        bail!("expected at most one command\n\n{USAGE}");
    }
    let command = match args.first() {
        Some(arg) => Command::parse(arg).with_context(|| format!("unknown command `{arg}`\n\n{USAGE}"))?,
        None => Command::All,
    };

    let config = Config::load().context("Failed to load config")?;
    tracing::debug!("{} {} -> {}", config.app_name(), config.app_version(), config.out_dir.display());
    fs_err::create_dir_all(&config.out_dir)?;

    run(command, &config)
}
