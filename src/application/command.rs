use crate::domain::CellCoord;

/// One-shot user intent produced by input translation and consumed by
/// [`GameState::apply`](super::GameState::apply).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    Play,
    Pause,
    Clear,
    ToggleCell(CellCoord),
    TogglePlaying,
    Reseed,
    Quit,
}
