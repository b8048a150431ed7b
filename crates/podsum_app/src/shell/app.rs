use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use podsum_core::{update, AppState, Msg, ViewState};
use podsum_engine::{ensure_output_dir, EngineEvent, EngineHandle, ExportWriter};
use podsum_logging::{podsum_debug, podsum_info, podsum_warn};

use super::effects::{engine_event_to_msg, EffectRunner};
use super::input::{parse_command, Command};
use super::ui::{self, RenderStyle};
use super::ShellConfig;

enum ShellEvent {
    Input(String),
    Resolved(Msg),
    InputClosed,
}

pub fn run_app(config: ShellConfig) -> anyhow::Result<()> {
    ensure_output_dir(&config.output_dir).with_context(|| {
        format!(
            "preparing output directory {}",
            config.output_dir.display()
        )
    })?;
    let (engine, engine_events) =
        EngineHandle::new(config.client.clone()).context("creating API client")?;
    podsum_info!(
        "Shell starting: api={} output={:?}",
        config.client.base_url,
        config.output_dir
    );

    let (event_tx, event_rx) = mpsc::channel::<ShellEvent>();
    spawn_input_reader(event_tx.clone());
    spawn_engine_forwarder(engine_events, event_tx);

    let mut shell = Shell {
        state: AppState::new(),
        runner: EffectRunner::new(engine, ExportWriter::new(config.output_dir)),
        style: RenderStyle { color: config.color },
    };
    shell.redraw()?;
    if let Some(url) = config.initial_url {
        shell.dispatch(Msg::UrlSubmitted(url))?;
    }

    let mut input_open = true;
    for event in event_rx {
        match event {
            ShellEvent::Input(line) => match parse_command(&line, &shell.state.view()) {
                Command::Msg(msg) => shell.dispatch(msg)?,
                Command::Help => shell.print(&ui::help_lines())?,
                Command::Invalid(reason) => shell.print(&[reason])?,
                Command::Quit => break,
            },
            ShellEvent::Resolved(msg) => shell.dispatch(msg)?,
            ShellEvent::InputClosed => input_open = false,
        }
        // Piped input may end before a pending request answers.
        if !input_open && !shell.awaiting_response() {
            break;
        }
    }

    podsum_info!("Shell exiting");
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(ShellEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    podsum_warn!("Reading stdin failed: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(ShellEvent::InputClosed);
    });
}

fn spawn_engine_forwarder(events: mpsc::Receiver<EngineEvent>, tx: mpsc::Sender<ShellEvent>) {
    thread::spawn(move || {
        for event in events {
            if tx
                .send(ShellEvent::Resolved(engine_event_to_msg(event)))
                .is_err()
            {
                break;
            }
        }
    });
}

struct Shell {
    state: AppState,
    runner: EffectRunner,
    style: RenderStyle,
}

impl Shell {
    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            podsum_debug!("dispatch {:?}", msg);
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.runner.run(effects));
        }
        if self.state.consume_dirty() {
            self.redraw()?;
        }
        Ok(())
    }

    fn awaiting_response(&self) -> bool {
        match self.state.view_state() {
            ViewState::Loading { .. } => true,
            ViewState::History(history) => history.pending_request().is_some(),
            _ => false,
        }
    }

    fn redraw(&self) -> io::Result<()> {
        self.print(&ui::render(&self.state.view(), self.style))
    }

    fn print(&self, lines: &[String]) -> io::Result<()> {
        let mut out = io::stdout().lock();
        for line in lines {
            writeln!(out, "{line}")?;
        }
        write!(out, "> ")?;
        out.flush()
    }
}
