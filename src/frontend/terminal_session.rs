//! Line-oriented terminal loop driving the interaction controller.
//!
//! One input line is one frame: the command's events are dispatched, then the
//! scene is composed and drawn with `TextRenderer`. End of input quits.

use std::io::{self, BufRead, Write};

use crate::frontend::terminal_commands::{parse_command, TerminalCommand};
use crate::frontend::viewer_config::ViewerConfig;
use crate::render::text_renderer::TextRenderer;
use crate::rules_engine::board_rules_engine::BoardRulesEngine;
use crate::rules_engine::rules_engine_trait::RulesEngine;
use crate::visualizer::interaction_controller::{EventOutcome, InputEvent, InteractionController};

pub fn run_stdio_loop(config: &ViewerConfig) -> Result<(), String> {
    let engine = BoardRulesEngine::from_fen(&config.fen).map_err(|e| format!("bad start position: {e}"))?;
    let mut session = ViewerSession::new(engine, config.trace);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout).map_err(|e| format!("terminal i/o failed: {e}"))
}

pub struct ViewerSession<R> {
    controller: InteractionController<R>,
    trace: bool,
}

impl<R: RulesEngine> ViewerSession<R> {
    pub fn new(engine: R, trace: bool) -> Self {
        Self {
            controller: InteractionController::new(engine),
            trace,
        }
    }

    #[inline]
    pub fn controller(&self) -> &InteractionController<R> {
        &self.controller
    }

    /// Draw the opening frame, then handle lines until quit or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.present(out)?;

        for line in input.lines() {
            let line = line?;
            let should_quit = self.handle_command(&line, out)?;
            out.flush()?;
            if should_quit {
                return Ok(());
            }
        }

        self.dispatch(InputEvent::Quit);
        Ok(())
    }

    /// Handle one line. Returns `true` once the viewer should exit.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(false),
            Err(err) => {
                writeln!(out, "error: {}", err)?;
                return Ok(false);
            }
        };

        match command {
            TerminalCommand::PrintFen => {
                writeln!(out, "fen {}", self.controller.engine().to_fen())?;
            }
            TerminalCommand::PrintMoves => {
                let history = self.controller.history();
                writeln!(out, "applied {}", join_moves(history.applied()))?;
                writeln!(out, "undone {}", join_moves(history.undone()))?;
            }
            _ => {
                for event in command.events(self.controller.layout()) {
                    if self.dispatch(event) == EventOutcome::Quit {
                        return Ok(true);
                    }
                }
            }
        }

        self.present(out)?;
        Ok(false)
    }

    fn dispatch(&mut self, event: InputEvent) -> EventOutcome {
        let outcome = self.controller.handle_event(event);
        if self.trace {
            eprintln!("event={} outcome={}", event, outcome);
        }
        outcome
    }

    fn present(&self, out: &mut impl Write) -> io::Result<()> {
        self.controller.present_frame(&mut TextRenderer::new(&mut *out))
    }
}

fn join_moves<T: std::fmt::Display>(moves: &[T]) -> String {
    if moves.is_empty() {
        return "-".to_owned();
    }
    moves.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::ViewerSession;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::rules_engine::board_rules_engine::BoardRulesEngine;
    use crate::rules_engine::rules_engine_trait::RulesEngine;

    fn run_script(script: &str) -> (ViewerSession<BoardRulesEngine>, String) {
        let mut session = ViewerSession::new(BoardRulesEngine::default(), false);
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).expect("in-memory i/o");
        (session, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn scripted_drag_undo_redo() {
        let (session, out) = run_script("drag e2 e4\nundo\nredo\nmoves\nquit\n");
        assert_eq!(session.controller().history().applied().len(), 1);
        assert!(out.contains("applied e2e4\nundone -\n"));
        assert!(out.contains("[Undo Move] (Redo Move)"));
    }

    #[test]
    fn raw_pointer_events_and_fen() {
        let (session, out) = run_script("down 330 490\nup 330 330\nfen\n");
        assert_eq!(
            session.controller().engine().to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
        assert!(out.contains("fen rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1\n"));
    }

    #[test]
    fn bad_lines_report_errors_and_keep_running() {
        let (session, out) = run_script("castle long\ndrag e2 e5\nwhite\n");
        assert!(out.contains("error: unknown command 'castle'"));
        assert!(out.contains("[White Attacks: N]"));
        assert_eq!(session.controller().engine().to_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn quit_stops_before_later_lines() {
        let (session, _) = run_script("quit\ndrag e2 e4\n");
        assert!(session.controller().history().applied().is_empty());
    }
}
