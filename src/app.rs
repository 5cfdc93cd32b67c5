//! Frame driver: owns the menu or the active session, the clock and the RNG.

use std::collections::HashMap;

use log::info;
use rand::Rng;

use crate::clock::{GameClock, TimeSource};
use crate::config::GameConfig;
use crate::entity::Effect;
use crate::intent::Intent;
use crate::mode::{Mode, ModeMenu};
use crate::session::{GameSession, Phase};
use crate::snapshot::{MenuView, Snapshot};

pub enum Screen {
    Menu(ModeMenu),
    Game(GameSession),
}

pub struct App<S: TimeSource, R: Rng> {
    config: GameConfig,
    screen: Screen,
    clock: GameClock<S>,
    rng: R,
    effects: Vec<Effect>,
    // Best score per mode for this run only.
    best: HashMap<Mode, u32>,
    running: bool,
    new_game: bool,
}

impl<S: TimeSource, R: Rng> App<S, R> {
    pub fn new(config: GameConfig, time: S, rng: R) -> Self {
        let clock = GameClock::new(time, config.ticks_per_second_floor);
        let screen = Screen::Menu(ModeMenu::new(config.default_mode));
        Self { config, screen, clock, rng, effects: Vec::new(), best: HashMap::new(), running: true, new_game: false }
    }

    pub fn handle(&mut self, intent: Intent) {
        if intent == Intent::Quit {
            info!("quit requested");
            self.running = false;
            return;
        }
        match &mut self.screen {
            Screen::Menu(menu) => match intent {
                Intent::MenuUp => menu.up(),
                Intent::MenuDown => menu.down(),
                Intent::MenuConfirm => {
                    let mode = menu.selected();
                    self.start(mode);
                }
                _ => {}
            },
            Screen::Game(session) => match intent {
                Intent::ChangeDirection(dir) => {
                    session.change_direction(dir);
                }
                Intent::TogglePause => session.toggle_pause(),
                Intent::Restart if session.phase() == Phase::GameOver => {
                    session.reset(&mut self.rng);
                    self.clock.reset();
                    self.new_game = true;
                }
                _ => {}
            },
        }
    }

    /// Runs at most one tick, gated by the clock at the session's speed.
    pub fn update(&mut self) {
        let Screen::Game(session) = &mut self.screen else {
            return;
        };
        if session.phase() != Phase::Playing || !self.clock.should_advance(session.speed() as f64) {
            return;
        }
        self.effects.extend(session.tick(&mut self.rng));
        if session.phase() == Phase::GameOver {
            let best = self.best.entry(session.mode()).or_default();
            *best = (*best).max(session.score());
        }
    }

    /// One loop iteration minus rendering. Returns false once the player quit.
    pub fn frame<I: IntoIterator<Item = Intent>>(&mut self, intents: I) -> bool {
        for intent in intents {
            self.handle(intent);
            if !self.running {
                return false;
            }
        }
        self.update();
        true
    }

    /// True once after each game start or restart, so leftover cosmetics
    /// from the previous game can be dropped.
    pub fn take_new_game(&mut self) -> bool {
        std::mem::take(&mut self.new_game)
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        match &self.screen {
            Screen::Menu(menu) => {
                Snapshot::Menu(MenuView { options: Mode::ALL, selected: menu.selected_index() })
            }
            Screen::Game(session) => {
                let mut view = session.view();
                view.best = view.best.max(self.best_score(session.mode()));
                Snapshot::Game(view)
            }
        }
    }

    pub fn session(&self) -> Option<&GameSession> {
        match &self.screen {
            Screen::Game(session) => Some(session),
            Screen::Menu(_) => None,
        }
    }

    pub fn in_menu(&self) -> bool {
        matches!(self.screen, Screen::Menu(_))
    }

    /// True while a game is actually moving (not paused, not over).
    pub fn is_playing(&self) -> bool {
        self.session().is_some_and(|s| s.phase() == Phase::Playing)
    }

    pub fn is_running(&self) -> bool { self.running }

    pub fn best_score(&self, mode: Mode) -> u32 {
        self.best.get(&mode).copied().unwrap_or(0)
    }

    fn start(&mut self, mode: Mode) {
        self.screen = Screen::Game(GameSession::new(&self.config, mode, &mut self.rng));
        self.clock.reset();
        self.new_game = true;
    }
}
