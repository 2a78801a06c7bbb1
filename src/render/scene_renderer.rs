//! Output seam for composed frames.

use crate::visualizer::scene::Scene;

/// Draws a `Scene` exactly as composed. Implementations hold no game logic.
pub trait SceneRenderer {
    type Error;

    fn present(&mut self, scene: &Scene) -> Result<(), Self::Error>;
}
