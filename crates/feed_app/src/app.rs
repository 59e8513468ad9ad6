use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use feed_core::{update, AppState, Msg};
use feed_engine::EngineHandle;
use feed_logging::{feed_debug, feed_info, feed_warn};

use crate::command::{self, Command};
use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::render;

const INPUT_POLL: Duration = Duration::from_millis(50);
const STARTUP_WAIT: Duration = Duration::from_secs(2);

pub fn run_app(config: &AppConfig) -> anyhow::Result<()> {
    feed_info!(
        "Starting feed for user_id={} filter={}",
        config.user_id,
        config.filter
    );
    let engine = EngineHandle::with_mocks()?;
    let mut session = Session::new(config, EffectRunner::new(engine), io::stdout());

    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    session.dispatch(Msg::Started)?;
    // User and feed are gathered concurrently; draw them before prompting.
    for _ in 0..2 {
        if !session.pump_blocking(STARTUP_WAIT)? {
            break;
        }
    }
    writeln!(session.out, "{}", command::HELP)?;

    loop {
        match line_rx.recv_timeout(INPUT_POLL) {
            Ok(line) => match command::parse_line(&line) {
                Ok(Some(Command::Dispatch(msg))) => session.dispatch(msg)?,
                Ok(Some(Command::Help)) => writeln!(session.out, "{}", command::HELP)?,
                Ok(Some(Command::Quit)) => break,
                Ok(None) => {}
                Err(err) => writeln!(session.out, "{err}")?,
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                feed_info!("Input closed");
                break;
            }
        }
        session.pump()?;
    }

    feed_info!("Feed session ended");
    Ok(())
}

/// One user's feed: owns the state and redraws to `out` whenever it changes.
pub struct Session<W: Write> {
    state: AppState,
    effects: EffectRunner,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: &AppConfig, effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(config.user_id.clone(), config.filter),
            effects,
            out,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        feed_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;
        self.effects.enqueue(effects);

        if was_dirty {
            let frame = render::render(&view);
            if !frame.is_empty() {
                self.out.write_all(frame.as_bytes())?;
                self.out.flush()?;
            }
        }
        Ok(())
    }

    /// Applies every engine result that has arrived so far.
    pub fn pump(&mut self) -> io::Result<()> {
        for msg in self.effects.poll() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Blocks until the next engine result arrives or `timeout` elapses.
    pub fn pump_blocking(&mut self, timeout: Duration) -> io::Result<bool> {
        match self.effects.wait(timeout) {
            Some(msg) => {
                self.dispatch(msg)?;
                Ok(true)
            }
            None => {
                feed_warn!("No engine result within {:?}", timeout);
                Ok(false)
            }
        }
    }
}
