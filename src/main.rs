//! Terminal bloc runner (default binary).
//!
//! Main menu, instructions, high scores and the game itself, all drawn into
//! one reused framebuffer. The game runs on fixed 20 ms ticks; input is
//! polled until the next tick is due.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use tui_bloc::core::{AudioSink, GameSnapshot, GameState, HighScoreTable, SimpleRng};
use tui_bloc::input::{
    map_key, map_menu_key, should_exit, InputHandler, MenuCommand, NameEntry, NameEntryStatus,
};
use tui_bloc::term::{
    BellAudio, FrameBuffer, GameView, Menu, MenuItem, MenuView, TerminalRenderer, Viewport,
};
use tui_bloc::types::TICK_MS;
use tui_bloc::{store, AppConfig};

/// Whether to keep going or leave the program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Result of waiting for a key outside the game loop
enum Wait {
    Key(KeyEvent),
    Redraw,
    Exit,
}

enum Overlay<'a> {
    None,
    Message(&'a str),
    NameEntry(&'a str),
}

struct App {
    config: AppConfig,
    scores: HighScoreTable,
    term: TerminalRenderer,
    fb: FrameBuffer,
    game_view: GameView,
    menu_view: MenuView,
    bell: BellAudio,
    /// Printed after the terminal is restored
    deferred: Vec<String>,
}

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    let scores = store::load(&config.scores_file);

    let mut app = App::new(config, scores);
    app.term.enter()?;

    let result = app.run();

    // Always try to restore terminal state.
    let _ = app.term.exit();
    for line in &app.deferred {
        eprintln!("{line}");
    }
    result
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

impl App {
    fn new(config: AppConfig, scores: HighScoreTable) -> Self {
        let bell = BellAudio::new(config.audio);
        Self {
            config,
            scores,
            term: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            game_view: GameView::default(),
            menu_view: MenuView::new(),
            bell,
            deferred: Vec::new(),
        }
    }

    fn run(&mut self) -> Result<()> {
        let mut menu = Menu::new();
        loop {
            self.menu_view
                .render_menu_into(&menu, viewport(), &mut self.fb);
            self.term.draw_swap(&mut self.fb)?;

            let key = match self.wait_key()? {
                Wait::Key(key) => key,
                Wait::Redraw => continue,
                Wait::Exit => return Ok(()),
            };

            let flow = match map_menu_key(key) {
                Some(MenuCommand::Up) => {
                    menu.up();
                    Flow::Continue
                }
                Some(MenuCommand::Down) => {
                    menu.down();
                    Flow::Continue
                }
                Some(MenuCommand::Select) => match menu.selected() {
                    MenuItem::NewGame => self.play()?,
                    MenuItem::Instructions => self.show_instructions()?,
                    MenuItem::HighScores => self.show_high_scores()?,
                    MenuItem::Exit => Flow::Exit,
                },
                Some(MenuCommand::Back) => Flow::Exit,
                None => Flow::Continue,
            };
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Block until a key press, Ctrl-C or a resize.
    fn wait_key(&mut self) -> Result<Wait> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_exit(key) {
                        return Ok(Wait::Exit);
                    }
                    return Ok(Wait::Key(key));
                }
                Event::Resize(..) => {
                    self.term.invalidate();
                    return Ok(Wait::Redraw);
                }
                _ => {}
            }
        }
    }

    fn show_instructions(&mut self) -> Result<Flow> {
        loop {
            self.menu_view
                .render_instructions_into(viewport(), &mut self.fb);
            self.term.draw_swap(&mut self.fb)?;
            match self.wait_key()? {
                Wait::Key(_) => return Ok(Flow::Continue),
                Wait::Redraw => {}
                Wait::Exit => return Ok(Flow::Exit),
            }
        }
    }

    fn show_high_scores(&mut self) -> Result<Flow> {
        loop {
            self.menu_view
                .render_high_scores_into(&self.scores, viewport(), &mut self.fb);
            self.term.draw_swap(&mut self.fb)?;
            match self.wait_key()? {
                Wait::Key(_) => return Ok(Flow::Continue),
                Wait::Redraw => {}
                Wait::Exit => return Ok(Flow::Exit),
            }
        }
    }

    fn draw_game(&mut self, snap: &GameSnapshot, overlay: Overlay<'_>) -> Result<()> {
        self.game_view.render_into(snap, viewport(), &mut self.fb);
        match overlay {
            Overlay::None => {}
            Overlay::Message(text) => self.menu_view.draw_message_box(&mut self.fb, text),
            Overlay::NameEntry(name) => self.menu_view.draw_name_entry(&mut self.fb, name),
        }
        if self.bell.take_pending() {
            self.term.ring_bell();
        }
        self.term.draw_swap(&mut self.fb)
    }

    fn play(&mut self) -> Result<Flow> {
        let rng = self
            .config
            .seed
            .map(SimpleRng::new)
            .unwrap_or_else(SimpleRng::from_clock);
        let mut game = GameState::with_rng(rng);
        let mut input = InputHandler::new();
        let mut snap = GameSnapshot::default();

        let tick = Duration::from_millis(TICK_MS as u64);
        let mut next_tick = Instant::now() + tick;

        while !game.finished() {
            game.snapshot_into(&mut snap);
            self.draw_game(&snap, Overlay::None)?;

            // Input with timeout until next tick.
            loop {
                let timeout = next_tick.saturating_duration_since(Instant::now());
                if !event::poll(timeout)? {
                    break;
                }
                match event::read()? {
                    Event::Key(key) => {
                        if should_exit(key) {
                            return Ok(Flow::Exit);
                        }
                        match key.kind {
                            KeyEventKind::Press | KeyEventKind::Repeat => {
                                if let Some(ev) = input.handle_key_press(key.code) {
                                    game.handle(ev);
                                } else if key.kind == KeyEventKind::Press {
                                    if let Some(ev) = map_key(key) {
                                        game.handle(ev);
                                    }
                                }
                            }
                            KeyEventKind::Release => {
                                if let Some(ev) = input.handle_key_release(key.code) {
                                    game.handle(ev);
                                }
                            }
                        }
                    }
                    Event::Resize(..) => self.term.invalidate(),
                    _ => {}
                }
            }

            for ev in input.update() {
                game.handle(ev);
            }
            game.tick();
            for cue in game.drain_cues() {
                self.bell.play(cue);
            }

            next_tick += tick;
            // Late frames run immediately instead of piling up.
            let now = Instant::now();
            if next_tick < now {
                next_tick = now;
            }
        }

        for cue in game.drain_cues() {
            self.bell.play(cue);
        }
        game.snapshot_into(&mut snap);

        if !game.game_over() {
            // Quit from the game returns to the menu without a high score.
            return Ok(Flow::Continue);
        }
        self.finish_game(&snap)
    }

    fn finish_game(&mut self, snap: &GameSnapshot) -> Result<Flow> {
        if !self.scores.is_qualifying(snap.score) {
            return self.wait_return(snap, "Game over! Press Return");
        }

        if self.wait_return(snap, "New high score! Press Return")? == Flow::Exit {
            return Ok(Flow::Exit);
        }

        let mut entry = NameEntry::new();
        loop {
            self.draw_game(snap, Overlay::NameEntry(entry.name()))?;
            match self.wait_key()? {
                Wait::Key(key) => {
                    if entry.handle_key(key) == NameEntryStatus::Done {
                        break;
                    }
                }
                Wait::Redraw => {}
                Wait::Exit => return Ok(Flow::Exit),
            }
        }

        self.scores.insert(snap.score, entry.name());
        if let Err(e) = store::save(&self.scores, &self.config.scores_file) {
            self.deferred.push(format!("[Scores] {e:#}"));
        }
        Ok(Flow::Continue)
    }

    fn wait_return(&mut self, snap: &GameSnapshot, message: &str) -> Result<Flow> {
        loop {
            self.draw_game(snap, Overlay::Message(message))?;
            match self.wait_key()? {
                Wait::Key(key) if key.code == KeyCode::Enter => return Ok(Flow::Continue),
                Wait::Key(_) | Wait::Redraw => {}
                Wait::Exit => return Ok(Flow::Exit),
            }
        }
    }
}
