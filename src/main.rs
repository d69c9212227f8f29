use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use cyber_typer::input::{map_key, process_input, InputResult};
use cyber_typer::ui::{draw_ui, viewport_for};
use cyber_typer::utils::build_info::version_line;
use cyber_typer::utils::frame_timer::FrameTimer;
use cyber_typer::utils::logging::init_file_logger;
use cyber_typer::{GameConfig, GameSession};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn print_help() {
    println!("Cyber Typer - Terminal Typing Game\n");
    println!("Usage: cyber-typer [options]\n");
    println!("Options:");
    println!("  --seed <N>   Use a fixed random seed");
    println!("  --version    Show version information");
    println!("  --help       Show this help message");
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut seed: Option<u64> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(n)) => seed = Some(n),
                _ => {
                    eprintln!("--seed expects a non-negative integer");
                    std::process::exit(1);
                }
            },
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'cyber-typer --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let log_path = init_file_logger();
    let config = GameConfig::load();
    log::info!("starting with {:?} (log: {:?})", config, log_path);

    let mut session = match seed {
        Some(seed) => GameSession::seeded(config, seed),
        None => GameSession::new(config),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main loop: input, clock, draw - one frame at a time.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut GameSession,
) -> io::Result<()> {
    let frame = Duration::from_millis(session.config().frame_ms);
    let mut clock = FrameTimer::new();

    loop {
        let size = terminal.size()?;
        session.set_viewport(viewport_for(size));

        terminal.draw(|f| draw_ui(f, session))?;

        // Wait out the rest of the frame for input
        let timeout = frame.saturating_sub(clock.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key_event) = event::read()? {
                if process_input(session, map_key(key_event)) == InputResult::Quit {
                    break;
                }
            }
        }

        if clock.elapsed() >= frame {
            session.advance(clock.take_ms());
        }
    }

    Ok(())
}
