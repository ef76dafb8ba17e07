use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;

use costgrid::cli::StartupConfig;
use costgrid::commands::Cmd;
use costgrid::effects;
use costgrid::keymap::{load_default_keymap, Keymap};
use costgrid::messages::{Msg, RemoteMsg, UiMsg};
use costgrid::model::AppModel;
use costgrid::remote::RemoteStore;
use costgrid::update::update;

use super::input::handle_key;
use super::mouse::handle_mouse;
use crate::view;

/// How long to wait for terminal input before checking worker results
const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Status expiry check interval
const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub struct App {
    model: AppModel,
    keymap: Keymap,
    store: Arc<dyn RemoteStore>,
    fetch_on_start: bool,
    /// Whole terminal, for mapping mouse positions
    screen: Rect,
    last_tick: Instant,
    needs_redraw: bool,
    should_quit: bool,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl App {
    pub fn new(startup: StartupConfig, store: Arc<dyn RemoteStore>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let keymap = Keymap::with_bindings(load_default_keymap());

        Self {
            model: AppModel::new(startup.editor),
            keymap,
            store,
            fetch_on_start: startup.fetch_on_start,
            screen: Rect::default(),
            last_tick: Instant::now(),
            needs_redraw: true,
            should_quit: false,
            msg_tx,
            msg_rx,
        }
    }

    /// Run until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let size = terminal.size().context("Failed to read terminal size")?;
        let msg = self.resize(size.width, size.height);
        self.apply(msg);

        if self.fetch_on_start {
            self.apply(Msg::Remote(RemoteMsg::FetchAll));
        }

        while !self.should_quit {
            if self.needs_redraw {
                terminal
                    .draw(|frame| view::render(frame, &self.model, &self.keymap))
                    .context("Failed to draw frame")?;
                self.needs_redraw = false;
            }

            if event::poll(POLL_INTERVAL).context("Failed to poll terminal events")? {
                let event = event::read().context("Failed to read terminal event")?;
                if let Some(cmd) = self.handle_event(event) {
                    self.process_cmd(cmd);
                }
            }

            self.process_async_messages();

            let now = Instant::now();
            if now.duration_since(self.last_tick) >= TICK_INTERVAL {
                self.last_tick = now;
                self.apply(Msg::Ui(UiMsg::Tick));
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }

    /// Record the new terminal size and build the matching grid resize
    fn resize(&mut self, width: u16, height: u16) -> Msg {
        self.screen = Rect::new(0, 0, width, height);
        let (cells_width, cells_height) = view::grid_cell_area(width, height);
        Msg::resize(cells_width, cells_height)
    }

    fn handle_event(&mut self, event: Event) -> Option<Cmd> {
        match event {
            // Windows terminals also report key releases
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                handle_key(&mut self.model, &self.keymap, &key)
            }
            Event::Mouse(mouse) => handle_mouse(&mut self.model, self.screen, &mouse),
            Event::Resize(width, height) => {
                let msg = self.resize(width, height);
                update(&mut self.model, msg)
            }
            _ => None,
        }
    }

    /// Run one message through `update` and execute its command
    fn apply(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        if cmd.needs_redraw() {
            self.needs_redraw = true;
        }

        for cmd in effects::flatten(cmd) {
            match cmd {
                Cmd::Quit => self.should_quit = true,
                cmd if cmd.is_remote() => {
                    let store = Arc::clone(&self.store);
                    let tx = self.msg_tx.clone();
                    std::thread::spawn(move || {
                        if let Some(msg) = effects::perform(store.as_ref(), cmd) {
                            let _ = tx.send(msg);
                        }
                    });
                }
                _ => {}
            }
        }
    }

    fn process_async_messages(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.needs_redraw = true;
            self.apply(msg);
        }
    }
}
