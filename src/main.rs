mod app;
mod config;
mod event;
mod games;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::thread;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use config::LaunchOptions;
use event::CrosstermKeys;
use games::Game;

fn init_logging(opts: &LaunchOptions) -> io::Result<()> {
    // The game owns the terminal, so records only ever go to a file.
    let Some(path) = &opts.log_file else { return Ok(()) };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let mut keys = CrosstermKeys;
    loop {
        let intent = event::sample(&mut keys)?;
        app.on_frame(intent);
        terminal.draw(|frame| ui::render(frame, app))?;
        thread::sleep(app.game.frame_delay());

        if app.should_quit {
            return Ok(());
        }
    }
}

fn main() -> io::Result<()> {
    let opts = LaunchOptions::from_env();
    init_logging(&opts)?;

    let rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    if let Some(raw) = &opts.rejected_seed {
        log::warn!("ignoring DODGEBALL_SEED={raw:?}: not an unsigned integer");
    }
    log::info!("starting, seed {:?}", opts.seed);

    let (cols, rows) = terminal::size()?;
    let mut app = App::new(cols, rows, rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    result?;

    log::info!(
        "finished after {} frames ({:?})",
        app.game.frames(),
        app.game.end_reason()
    );
    println!("Game Over\nScore: {}", app.game.get_score());
    Ok(())
}
