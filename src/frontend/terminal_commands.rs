//! Line commands understood by the terminal viewer.
//!
//! Pointer commands are translated to the same `InputEvent`s a windowed
//! frontend would produce, so everything goes through the controller's event
//! dispatch.

use crate::game_state::chess_types::Square;
use crate::visualizer::board_layout::{BoardLayout, ButtonAction};
use crate::visualizer::interaction_controller::InputEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCommand {
    PointerDown { x: i32, y: i32 },
    PointerUp { x: i32, y: i32 },
    Drag { from: Square, to: Square },
    Press(ButtonAction),
    PrintFen,
    PrintMoves,
    Quit,
}

impl TerminalCommand {
    /// Input events this command stands for, in dispatch order.
    pub fn events(&self, layout: &BoardLayout) -> Vec<InputEvent> {
        match *self {
            TerminalCommand::PointerDown { x, y } => vec![InputEvent::PointerDown { x, y }],
            TerminalCommand::PointerUp { x, y } => vec![InputEvent::PointerUp { x, y }],
            TerminalCommand::Drag { from, to } => {
                let (from_x, from_y) = layout.square_rect(from).center();
                let (to_x, to_y) = layout.square_rect(to).center();
                vec![
                    InputEvent::PointerDown { x: from_x, y: from_y },
                    InputEvent::PointerUp { x: to_x, y: to_y },
                ]
            }
            TerminalCommand::Press(action) => {
                let (x, y) = layout.button_rect(action).center();
                vec![InputEvent::PointerDown { x, y }]
            }
            TerminalCommand::Quit => vec![InputEvent::Quit],
            TerminalCommand::PrintFen | TerminalCommand::PrintMoves => Vec::new(),
        }
    }
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<TerminalCommand>, String> {
    let mut tokens = line.split_whitespace();
    let Some(cmd) = tokens.next() else {
        return Ok(None);
    };

    let command = match cmd {
        "down" | "up" => {
            let x = parse_coordinate(tokens.next(), cmd)?;
            let y = parse_coordinate(tokens.next(), cmd)?;
            if cmd == "down" {
                TerminalCommand::PointerDown { x, y }
            } else {
                TerminalCommand::PointerUp { x, y }
            }
        }
        "drag" => {
            let from = parse_square(tokens.next(), "drag")?;
            let to = parse_square(tokens.next(), "drag")?;
            TerminalCommand::Drag { from, to }
        }
        "undo" => TerminalCommand::Press(ButtonAction::Undo),
        "redo" => TerminalCommand::Press(ButtonAction::Redo),
        "white" => TerminalCommand::Press(ButtonAction::ToggleWhite),
        "black" => TerminalCommand::Press(ButtonAction::ToggleBlack),
        "fen" => TerminalCommand::PrintFen,
        "moves" => TerminalCommand::PrintMoves,
        "quit" | "exit" => TerminalCommand::Quit,
        other => return Err(format!("unknown command '{other}'")),
    };

    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected token '{extra}' after '{cmd}'"));
    }

    Ok(Some(command))
}

fn parse_coordinate(token: Option<&str>, cmd: &str) -> Result<i32, String> {
    let token = token.ok_or_else(|| format!("'{cmd}' needs X and Y pixel coordinates"))?;
    token
        .parse::<i32>()
        .map_err(|_| format!("invalid pixel coordinate '{token}'"))
}

fn parse_square(token: Option<&str>, cmd: &str) -> Result<Square, String> {
    let token = token.ok_or_else(|| format!("'{cmd}' needs two squares, e.g. '{cmd} e2 e4'"))?;
    token.parse::<Square>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{parse_command, TerminalCommand};
    use crate::game_state::chess_types::Square;
    use crate::visualizer::board_layout::{BoardLayout, ButtonAction};
    use crate::visualizer::interaction_controller::InputEvent;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn parses_every_command() {
        assert_eq!(parse_command("down 330 490"), Ok(Some(TerminalCommand::PointerDown { x: 330, y: 490 })));
        assert_eq!(parse_command("  up -4 12 "), Ok(Some(TerminalCommand::PointerUp { x: -4, y: 12 })));
        assert_eq!(
            parse_command("drag e2 e4"),
            Ok(Some(TerminalCommand::Drag { from: sq("e2"), to: sq("e4") }))
        );
        assert_eq!(parse_command("undo"), Ok(Some(TerminalCommand::Press(ButtonAction::Undo))));
        assert_eq!(parse_command("redo"), Ok(Some(TerminalCommand::Press(ButtonAction::Redo))));
        assert_eq!(parse_command("white"), Ok(Some(TerminalCommand::Press(ButtonAction::ToggleWhite))));
        assert_eq!(parse_command("black"), Ok(Some(TerminalCommand::Press(ButtonAction::ToggleBlack))));
        assert_eq!(parse_command("fen"), Ok(Some(TerminalCommand::PrintFen)));
        assert_eq!(parse_command("moves"), Ok(Some(TerminalCommand::PrintMoves)));
        assert_eq!(parse_command("quit"), Ok(Some(TerminalCommand::Quit)));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn malformed_lines_are_errors() {
        assert!(parse_command("down 10").is_err());
        assert!(parse_command("up ten 10").is_err());
        assert!(parse_command("drag e2").is_err());
        assert!(parse_command("drag e2 z9").is_err());
        assert!(parse_command("undo now").is_err());
        assert!(parse_command("castle").is_err());
    }

    #[test]
    fn drag_and_buttons_expand_to_pointer_events() {
        let layout = BoardLayout::STANDARD;
        let drag = TerminalCommand::Drag { from: sq("e2"), to: sq("e4") };
        assert_eq!(
            drag.events(&layout),
            vec![InputEvent::PointerDown { x: 360, y: 520 }, InputEvent::PointerUp { x: 360, y: 360 }]
        );
        assert_eq!(
            TerminalCommand::Press(ButtonAction::ToggleBlack).events(&layout),
            vec![InputEvent::PointerDown { x: 480, y: 700 }]
        );
        assert!(TerminalCommand::PrintFen.events(&layout).is_empty());
    }
}
