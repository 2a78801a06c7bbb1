//! Command-line options for the terminal viewer.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub fen: String,
    /// Print one `event=... outcome=...` line per handled event on stderr.
    pub trace: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            fen: STARTING_POSITION_FEN.to_owned(),
            trace: false,
        }
    }
}

impl ViewerConfig {
    /// Parse arguments (program name already stripped).
    ///
    /// `--fen` consumes every following token up to the next `--` flag, so the
    /// FEN can be passed unquoted.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = Self::default();
        let mut tokens = args.iter().map(String::as_str).peekable();

        while let Some(tok) = tokens.next() {
            match tok {
                "--fen" => {
                    let mut fen_parts = Vec::<&str>::new();
                    while let Some(next) = tokens.peek() {
                        if next.starts_with("--") {
                            break;
                        }
                        fen_parts.extend(tokens.next());
                    }
                    if fen_parts.is_empty() {
                        return Err("missing FEN after '--fen'".to_owned());
                    }
                    config.fen = fen_parts.join(" ");
                }
                "--trace" => config.trace = true,
                other => return Err(format!("unknown argument '{other}'")),
            }
        }

        Ok(config)
    }
}
