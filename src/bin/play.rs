//! Play Binary
//!
//! Hot-seat terminal match on a built-in or file-based layout.
//!
//! Options: --layout, --file, --animation-ms, --red, --blue

use clap::Parser;
use laserchess::board::Allegiance;
use laserchess::layout::Layout;
use laserchess::players::*;
use laserchess::session::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = "classic", help = "Built-in layout name")]
    layout: String,
    #[arg(long, help = "Layout JSON file, overrides --layout")]
    file: Option<std::path::PathBuf>,
    #[arg(long, default_value_t = laserchess::ANIMATION_MILLIS)]
    animation_ms: u64,
    #[arg(long, default_value = "red", help = "Name shown to blue")]
    red: String,
    #[arg(long, default_value = "blue", help = "Name shown to red")]
    blue: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    laserchess::log();
    let args = Args::parse();
    let layout = match args.file {
        Some(ref path) => Layout::load(path)?,
        None => Layout::named(&args.layout)?,
    };
    log::info!("starting {} ({} pieces)", layout.name(), layout.board().len());
    let outcome = Match::new(layout.board())
        .animation(AnimationConfig::millis(args.animation_ms))
        .sit(Allegiance::Red, args.red, Human::default())
        .sit(Allegiance::Blue, args.blue, Human::default())
        .run()
        .await?;
    println!("{} wins after {} moves", outcome.winner, outcome.history.len());
    Ok(())
}
