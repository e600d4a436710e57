//! Rules engine and turn protocol for a two-player laser strategy game.
//!
//! Pieces move, rotate, and reflect a laser that fires at the end of every
//! turn. A piece struck from an unfavourable angle is captured; the game ends
//! when a king is hit.
//!
//! ## Modules
//!
//! - [`board`]: positions, directions, pieces, and board snapshots
//! - [`rules`]: move validation, laser propagation, and the authoritative [`rules::Game`]
//! - [`layout`]: initial board loading from JSON records
//! - [`render`]: renderer-facing descriptors and beam animation math
//! - [`session`]: controller ↔ peer protocol and the per-peer turn-phase machine
//! - [`players`]: concrete [`session::Player`] implementations
pub mod board;
pub mod layout;
pub mod players;
pub mod render;
pub mod rules;
pub mod session;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and random playouts.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// BOARD PARAMETERS
// ============================================================================
/// Columns in the reference board.
pub const COLS: i32 = 10;
/// Rows in the reference board.
pub const ROWS: i32 = 8;
/// Largest side length a layout may declare.
pub const MAX_SIDE: i32 = 256;
/// Allegiance that makes the opening move.
pub const FIRST: board::Allegiance = board::Allegiance::Red;

// ============================================================================
// ANIMATION
// ============================================================================
/// Wall-clock length of one beam animation.
pub const ANIMATION_MILLIS: u64 = 1000;
/// Interval between animation frames (~60 fps).
pub const FRAME_MILLIS: u64 = 16;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, WARN to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
