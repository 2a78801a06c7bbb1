//! Terminal attack heatmap viewer.
//!
//! Usage:
//! `cargo run --release -- [--fen <FEN>] [--trace]`

use attack_heatmap::frontend::terminal_session::run_stdio_loop;
use attack_heatmap::frontend::viewer_config::ViewerConfig;

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ViewerConfig::from_args(&args)?;
    if config.trace {
        eprintln!("viewer_start fen=\"{}\"", config.fen);
    }
    run_stdio_loop(&config)
}
