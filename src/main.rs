use std::io::{self, Stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use log::{error, info};

use street_cash::commentary::{CannedCommentary, MessageLog, Radio};
use street_cash::config::Settings;
use street_cash::error::Result;
use street_cash::input::{self, Command};
use street_cash::render::Renderer;
use street_cash::world::{clamp_dt, tick, GameWorld};

fn main() {
    env_logger::init();
    info!("street-cash starting up");

    let settings = Settings::from_env();
    if let Err(e) = play(&settings) {
        error!("fatal error: {e}");
        eprintln!("street-cash: {e}");
        std::process::exit(1);
    }
    info!("street-cash shut down cleanly");
}

fn play(settings: &Settings) -> Result<()> {
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, settings);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout, settings: &Settings) -> Result<()> {
    let mut world = GameWorld::default();
    let radio = if settings.radio {
        Some(Radio::spawn(Box::new(CannedCommentary::new(settings.seed)))?)
    } else {
        None
    };
    let mut messages = MessageLog::default();
    let mut renderer = Renderer::new(&world);
    let frame_time = Duration::from_micros(1_000_000 / settings.render_fps.max(1));
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                match input::command_for_event(key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(command) => input::apply(&mut world, command),
                    None => {}
                }
            }
        }

        let now = Instant::now();
        let dt = clamp_dt(now.duration_since(last_tick).as_secs_f32());
        last_tick = now;
        tick(&mut world, dt);

        for event in world.drain_events() {
            if let Some(radio) = &radio {
                radio.announce(&event);
            }
        }
        if let Some(radio) = &radio {
            radio.poll(&mut messages);
        }

        renderer.render(stdout, &world, &messages)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}
