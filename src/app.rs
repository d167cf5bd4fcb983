use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};
use tracing::{debug, info};
use yearprog_core::app::{ClockCommand, SimulatedClock, TICK_INTERVAL_MS};
use yearprog_core::ports::Clock;
use yearprog_core::Speed;

use crate::config::Settings;
use crate::ticker::Ticker;
use crate::ui;

pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS as u64);

pub struct App<C: Clock> {
    pub should_quit: bool,
    pub clock: SimulatedClock<C>,
    pub settings: Settings,
}

impl<C: Clock> App<C> {
    pub fn new(clock: SimulatedClock<C>, settings: Settings) -> Self {
        App {
            should_quit: false,
            clock,
            settings,
        }
    }

    pub fn debug_controls(&self) -> bool {
        self.settings.debug_controls()
    }

    /// Map a key press to a clock transition. Debug keys are inert in production.
    pub fn key_command(&self, key: KeyCode) -> Option<ClockCommand> {
        if !self.debug_controls() {
            return None;
        }

        let speed = self.clock.speed();
        let command = match key {
            KeyCode::Char('d') => ClockCommand::add_day(),
            KeyCode::Char('m') => ClockCommand::add_month(),
            KeyCode::Char('r') => ClockCommand::Reset,
            KeyCode::Left | KeyCode::Char('h') => ClockCommand::SetSpeed(speed.nudged(-1)),
            KeyCode::Right | KeyCode::Char('l') => ClockCommand::SetSpeed(speed.nudged(1)),
            KeyCode::Char('[') => ClockCommand::SetSpeed(speed.nudged(-10)),
            KeyCode::Char(']') => ClockCommand::SetSpeed(speed.nudged(10)),
            KeyCode::Char('{') => ClockCommand::SetSpeed(speed.nudged(-100)),
            KeyCode::Char('}') => ClockCommand::SetSpeed(speed.nudged(100)),
            KeyCode::Home => ClockCommand::SetSpeed(Speed::NORMAL),
            KeyCode::End => ClockCommand::SetSpeed(Speed::clamped(i64::from(Speed::MAX))),
            _ => return None,
        };
        Some(command)
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Char('q') => {
                info!("Quit requested by user");
                self.should_quit = true;
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                info!("Ctrl+C pressed, quitting");
                self.should_quit = true;
            }
            KeyCode::Esc => {
                info!("Escape pressed, quitting");
                self.should_quit = true;
            }
            _ => {
                if let Some(command) = self.key_command(key) {
                    debug!(?command, "Applying clock command");
                    self.clock.apply(command);
                }
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.clock.apply(ClockCommand::Tick);
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut ticker = Ticker::start(TICK_INTERVAL);

        loop {
            terminal.draw(|f| ui::render(self, f))?;

            let timeout = ticker.timeout(Instant::now()).unwrap_or(TICK_INTERVAL);
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if ticker.poll(Instant::now()) {
                self.on_tick();
            }

            if self.should_quit {
                break;
            }
        }

        ticker.stop();
        Ok(())
    }
}
