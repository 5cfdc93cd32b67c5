//! Player intents, already decoded from raw key events.

use crate::grid::Direction;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    ChangeDirection(Direction),
    TogglePause,
    Restart,
    Quit,
    MenuUp,
    MenuDown,
    MenuConfirm,
}
