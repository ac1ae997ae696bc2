use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use springboard_wm::config::{Cli, ShellConfig};
use springboard_wm::desktop::{Desktop, TerminalViewport};
use springboard_wm::drivers::OutputDriver;
use springboard_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use springboard_wm::event_loop::{ControlFlow, EventLoop};
use springboard_wm::tracing_sub;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match ShellConfig::try_from(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("springboard: {err}");
            return ExitCode::from(2);
        }
    };
    if let Err(err) = tracing_sub::init(config.log_file.as_deref()) {
        eprintln!("springboard: cannot open log file: {err}");
        return ExitCode::from(2);
    }
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "shell exited with error");
            eprintln!("springboard: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &ShellConfig) -> io::Result<()> {
    let provider = TerminalViewport { cell: config.cell };
    let mut desktop = Desktop::new(config, &provider).map_err(io::Error::other)?;
    info!(
        viewport = ?desktop.viewport(),
        poll = ?config.poll_interval,
        "springboard starting"
    );

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut events = EventLoop::new(ConsoleInputDriver::new(), config.poll_interval);
    let result = events.run(|_, event| {
        match event {
            Some(event) => desktop.handle_event(&event),
            None => output.draw(|mut frame| desktop.render(&mut frame))?,
        }
        if desktop.should_quit() {
            Ok(ControlFlow::Quit)
        } else {
            Ok(ControlFlow::Continue)
        }
    });
    output.exit()?;
    info!("springboard stopped");
    result
}
