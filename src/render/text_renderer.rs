//! Terminal-oriented Unicode scene renderer.
//!
//! Draws the piece board with selection (`>`) and move target (`+`) markers,
//! then the heat grid as `white/black` attacker counts (`.` when a layer is
//! hidden or empty), then the button rows. Disabled buttons are drawn in
//! parentheses.

use std::io::Write;

use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};
use crate::render::scene_renderer::SceneRenderer;
use crate::visualizer::scene::{OverlayKind, Scene};

pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SceneRenderer for TextRenderer<W> {
    type Error = std::io::Error;

    fn present(&mut self, scene: &Scene) -> Result<(), Self::Error> {
        writeln!(self.out, "{}", render_scene(scene))?;
        self.out.flush()
    }
}

/// Render the full scene to a string.
pub fn render_scene(scene: &Scene) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");
    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');
        for file in 0..8u8 {
            let Some(square) = Square::from_coords(file, rank) else {
                continue;
            };
            out.push(marker_on(scene, square));
            out.push(scene.piece_on(square).map_or('·', piece_to_unicode));
            out.push(' ');
        }
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }
    out.push_str("   a  b  c  d  e  f  g  h\n");

    out.push_str("heat white/black\n");
    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        for file in 0..8u8 {
            let Some(square) = Square::from_coords(file, rank) else {
                continue;
            };
            out.push(' ');
            out.push_str(&heat_cell(scene, square, Side::White));
            out.push('/');
            out.push_str(&heat_cell(scene, square, Side::Black));
        }
        out.push('\n');
    }

    let mut rows: Vec<i32> = scene.buttons.iter().map(|button| button.rect.y).collect();
    rows.dedup();
    for (idx, row) in rows.iter().enumerate() {
        let line: Vec<String> = scene
            .buttons
            .iter()
            .filter(|button| button.rect.y == *row)
            .map(|button| {
                if button.enabled {
                    format!("[{}]", button.label)
                } else {
                    format!("({})", button.label)
                }
            })
            .collect();
        out.push_str(&line.join(" "));
        if idx + 1 < rows.len() {
            out.push('\n');
        }
    }

    out
}

fn marker_on(scene: &Scene, square: Square) -> char {
    let mut marker = ' ';
    for overlay in scene.overlays_on(square) {
        match overlay.kind {
            OverlayKind::Selection => return '>',
            OverlayKind::Target => marker = '+',
            OverlayKind::Heat { .. } => {}
        }
    }
    marker
}

fn heat_cell(scene: &Scene, square: Square, side: Side) -> String {
    scene
        .heat_on(square, side)
        .map_or_else(|| ".".to_string(), |count| count.to_string())
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.side, piece.kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_scene, TextRenderer};
    use crate::render::scene_renderer::SceneRenderer;
    use crate::rules_engine::board_rules_engine::BoardRulesEngine;
    use crate::visualizer::interaction_controller::{InputEvent, InteractionController};

    #[test]
    fn start_position_renders_pieces_heat_and_buttons() {
        let controller = InteractionController::new(BoardRulesEngine::default());
        let text = render_scene(&controller.compose_scene());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "8  ♜  ♞  ♝  ♛  ♚  ♝  ♞  ♜ 8");
        assert_eq!(lines[5], "4  ·  ·  ·  ·  ·  ·  ·  · 4");
        assert_eq!(lines[8], "1  ♖  ♘  ♗  ♕  ♔  ♗  ♘  ♖ 1");
        // Rank 3: a3 b3 c3 d3 e3 f3 g3 h3 attacked by white only.
        assert_eq!(lines[16], "3 2/. 2/. 3/. 2/. 2/. 3/. 2/. 2/.");
        // Nothing to undo or redo yet.
        assert_eq!(lines[19], "(Undo Move) (Redo Move)");
        assert_eq!(lines[20], "[White Attacks: Y] [Black Attacks: Y]");
    }

    #[test]
    fn selection_and_targets_are_marked() {
        let mut controller = InteractionController::new(BoardRulesEngine::default());
        // g1 knight.
        controller.handle_event(InputEvent::PointerDown { x: 6 * 80 + 40, y: 7 * 80 + 40 });
        let text = render_scene(&controller.compose_scene());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[6], "3  ·  ·  ·  ·  · +·  · +· 3");
        assert_eq!(lines[8], "1  ♖  ♘  ♗  ♕  ♔  ♗ >♘  ♖ 1");
    }

    #[test]
    fn present_writes_a_frame() {
        let controller = InteractionController::new(BoardRulesEngine::default());
        let mut renderer = TextRenderer::new(Vec::new());
        controller.present_frame(&mut renderer).expect("writing to a Vec cannot fail");
        let written = String::from_utf8(renderer.into_inner()).expect("utf8 output");
        assert!(written.contains("White Attacks: Y"));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn renderer_trait_object_is_usable() {
        let controller = InteractionController::new(BoardRulesEngine::default());
        let mut renderer: Box<dyn SceneRenderer<Error = std::io::Error>> = Box::new(TextRenderer::new(Vec::new()));
        assert!(renderer.present(&controller.compose_scene()).is_ok());
    }
}
