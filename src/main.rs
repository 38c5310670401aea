//! wanderbook - Travel photo book generator

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wanderbook::book::BookGenerator;
use wanderbook::error::Result;
use wanderbook::model::{
    BookSettings, SortOrder, TravelForBook, book_presets, find_preset, preset_categories,
};
use wanderbook::theme::theme_names;

#[derive(Parser)]
#[command(name = "wanderbook")]
#[command(version, about = "Travel photo book generator", long_about = None)]
#[command(after_help = "EXAMPLES:
    wanderbook travels.json                      Generate book.html with defaults
    wanderbook travels.json -o minsk.html        Choose the output file
    wanderbook travels.json --preset route-book  Start from a preset
    wanderbook travels.json --theme romantic --no-gallery
    wanderbook --list-presets                    Show the preset catalog")]
struct Cli {
    /// JSON file with the travel list
    #[arg(value_name = "TRAVELS_JSON", required_unless_present_any = ["list_themes", "list_presets"])]
    travels: Option<PathBuf>,

    /// Output HTML file
    #[arg(short, long, value_name = "OUTPUT", default_value = "book.html")]
    output: PathBuf,

    /// Start from a preset's settings
    #[arg(long, value_name = "ID")]
    preset: Option<String>,

    /// JSON file with settings overriding the preset
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Theme name (see --list-themes)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Book title shown on the cover
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Travel order: date-desc, date-asc, country, alphabetical
    #[arg(long, value_name = "ORDER")]
    sort: Option<SortOrder>,

    /// Skip the table of contents
    #[arg(long)]
    no_toc: bool,

    /// Skip per-travel photo galleries
    #[arg(long)]
    no_gallery: bool,

    /// Skip per-travel route maps
    #[arg(long)]
    no_map: bool,

    /// Fix the quote seed for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Suppress the summary line
    #[arg(short, long)]
    quiet: bool,

    /// List shipped themes and exit
    #[arg(long)]
    list_themes: bool,

    /// List shipped presets and exit
    #[arg(long)]
    list_presets: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.list_themes {
        list_themes();
        return ExitCode::SUCCESS;
    }
    if cli.list_presets {
        list_presets();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let travels_path = cli.travels.as_ref().expect("travel list required");
    let json = std::fs::read_to_string(travels_path)?;
    let travels: Vec<TravelForBook> = serde_json::from_str(&json)?;

    let settings = build_settings(cli, &travels)?;
    settings.validate()?;

    let mut generator = BookGenerator::new(settings);
    if let Some(seed) = cli.seed {
        generator = generator.with_seed(seed);
    }

    let html = generator.generate(&travels);
    std::fs::write(&cli.output, &html)?;

    if !cli.quiet {
        let pages = html.matches("class=\"pdf-page").count();
        println!(
            "Generated {}: {} travels, {} pages",
            cli.output.display(),
            travels.len(),
            pages
        );
    }

    Ok(())
}

/// Resolve the settings sources: a settings file replaces the preset
/// wholesale (missing fields take their defaults), then flags override
/// individual fields.
fn build_settings(cli: &Cli, travels: &[TravelForBook]) -> Result<BookSettings> {
    let mut settings = match &cli.preset {
        Some(id) => BookSettings::from_preset(find_preset(id)?),
        None => BookSettings::default(),
    };

    if let Some(path) = &cli.settings {
        let json = std::fs::read_to_string(path)?;
        settings = serde_json::from_str(&json)?;
    }

    if let Some(theme) = &cli.theme {
        settings.template = theme.clone();
    }
    if let Some(title) = &cli.title {
        settings.title = title.clone();
    }
    if let Some(sort) = cli.sort {
        settings.sort_order = sort;
    }
    if cli.no_toc {
        settings.include_toc = false;
    }
    if cli.no_gallery {
        settings.include_gallery = false;
    }
    if cli.no_map {
        settings.include_map = false;
    }

    let user_name = travels.first().and_then(|travel| travel.user_name.as_deref());
    Ok(settings.resolve(user_name))
}

fn list_themes() {
    for name in theme_names() {
        println!("{name}");
    }
}

fn list_presets() {
    for category in preset_categories() {
        println!("{} ({})", category.name, category.description);
        for preset in book_presets().iter().filter(|p| p.category == category.id) {
            let default = if preset.is_default { " [default]" } else { "" };
            println!("  {} {} - {}{}", preset.icon, preset.id, preset.description, default);
        }
    }
}
