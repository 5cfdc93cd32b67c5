//! Keyboard to intent mapping.

use macroquad::prelude::{KeyCode, is_key_pressed};

use snake_xtreme::{Direction, Intent};

const DIRECTION_KEYS: [(KeyCode, KeyCode, Direction); 4] = [
    (KeyCode::Up, KeyCode::W, Direction::Up),
    (KeyCode::Down, KeyCode::S, Direction::Down),
    (KeyCode::Left, KeyCode::A, Direction::Left),
    (KeyCode::Right, KeyCode::D, Direction::Right),
];

fn pressed(a: KeyCode, b: KeyCode) -> bool {
    is_key_pressed(a) || is_key_pressed(b)
}

fn confirm_pressed() -> bool {
    is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter)
}

/// Intents for keys pressed since the last frame. Menu and game share
/// keys, so the caller says which one is on screen.
pub fn poll(in_menu: bool) -> Vec<Intent> {
    let mut intents = Vec::new();
    if is_key_pressed(KeyCode::Escape) {
        intents.push(Intent::Quit);
        return intents;
    }

    if in_menu {
        if pressed(KeyCode::Up, KeyCode::W) {
            intents.push(Intent::MenuUp);
        }
        if pressed(KeyCode::Down, KeyCode::S) {
            intents.push(Intent::MenuDown);
        }
        if confirm_pressed() {
            intents.push(Intent::MenuConfirm);
        }
        return intents;
    }

    intents.extend(direction_intents(pressed));
    if is_key_pressed(KeyCode::P) {
        intents.push(Intent::TogglePause);
    }
    if confirm_pressed() {
        intents.push(Intent::Restart);
    }
    intents
}

/// One turn per pressed direction key, so quick double turns survive a frame.
fn direction_intents<F: Fn(KeyCode, KeyCode) -> bool>(pressed: F) -> Vec<Intent> {
    DIRECTION_KEYS
        .iter()
        .filter(|(a, b, _)| pressed(*a, *b))
        .map(|(_, _, dir)| Intent::ChangeDirection(*dir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(keys: &[KeyCode]) -> impl Fn(KeyCode, KeyCode) -> bool + '_ {
        move |a, b| keys.contains(&a) || keys.contains(&b)
    }

    #[test]
    fn every_pressed_direction_becomes_an_intent() {
        let intents = direction_intents(held(&[KeyCode::W, KeyCode::Left]));
        assert_eq!(
            intents,
            vec![
                Intent::ChangeDirection(Direction::Up),
                Intent::ChangeDirection(Direction::Left),
            ]
        );
    }

    #[test]
    fn no_keys_no_turns() {
        assert!(direction_intents(held(&[KeyCode::P])).is_empty());
    }
}
