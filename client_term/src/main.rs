mod input;
mod term;

use std::{
    io::{self, stdout, Write},
    path::PathBuf,
    process::exit,
    thread::sleep,
    time::{Duration, Instant},
};

use clap::Parser;
use game_core::{
    new_match, step, systems::draw_frame, CommandBuffer, Config, Events, GameEvent, GameRng,
    InputQueue, PlayerId, Scoreboard, Time,
};
use input::{action_for_key, Action, HeldKeys};
use log::info;
use term::TermLib;
use termion::{clear, cursor, cursor::HideCursor, input::TermRead, raw::IntoRawMode};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser)]
#[command(about = "Two-player Pong in the terminal. W/S move Player 1, Up/Down move Player 2, Q quits.")]
struct Cli {
    /// TOML file overriding the default game settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for serve directions
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Serve from the center after every point instead of bouncing
    #[arg(long)]
    reset_on_point: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}: {err}", path.display());
                exit(1);
            }
        },
        None => Config::new(),
    };
    if cli.reset_on_point {
        config.reset_ball_on_point = true;
    }

    match run(&config, cli.seed) {
        Ok(Some(winner)) => println!("{winner} won!"),
        Ok(None) => {}
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    }
}

/// Run the game until someone wins or the players quit
fn run(config: &Config, seed: u64) -> io::Result<Option<PlayerId>> {
    let (cols, rows) = termion::terminal_size()?;
    let mut stdout = HideCursor::from(stdout()).into_raw_mode()?;
    let mut keys = termion::async_stdin().keys();

    let (mut world, map) = new_match(config);
    let mut time = Time::new(0.0, 0.0);
    let mut scoreboard = Scoreboard::new();
    let mut events = Events::new();
    let mut input_queue = InputQueue::new();
    let mut rng = GameRng::new(seed);
    let mut held = HeldKeys::new();
    let mut lib = TermLib::new(cols, rows, map.width, map.height);
    let mut frame = CommandBuffer::new();
    let mut last_frame = CommandBuffer::new();
    info!("starting match on a {cols}x{rows} terminal");

    let mut last = Instant::now();
    let winner = loop {
        let frame_start = Instant::now();

        for key in keys.by_ref() {
            match action_for_key(key?) {
                Some(Action::Quit) => {
                    write!(stdout, "{}{}", clear::All, cursor::Goto(1, 1))?;
                    return Ok(None);
                }
                Some(Action::Move(player, dir)) => held.press(player, dir),
                None => {}
            }
        }
        held.flush(&mut input_queue);

        time.dt = last.elapsed().as_secs_f64() * 1000.0;
        last = Instant::now();
        step(
            &mut world,
            &mut time,
            &map,
            config,
            &mut scoreboard,
            &mut events,
            &mut input_queue,
            &mut rng,
        );

        // Only repaint the terminal when the frame changed
        frame.clear();
        draw_frame(&world, &scoreboard, &mut frame);
        if frame.commands != last_frame.commands {
            lib.clear();
            frame.replay(&mut lib);
            lib.present(&mut stdout)?;
            std::mem::swap(&mut frame, &mut last_frame);
        }

        if let Some(GameEvent::Won(player)) = events
            .events
            .iter()
            .find(|e| matches!(e, GameEvent::Won(_)))
        {
            break *player;
        }

        sleep(FRAME.saturating_sub(frame_start.elapsed()));
    };

    write!(stdout, "{}{}", clear::All, cursor::Goto(1, 1))?;
    stdout.flush()?;
    Ok(Some(winner))
}
