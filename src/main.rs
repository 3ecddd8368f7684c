// algoviz: step-by-step algorithm visualiser for the terminal

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algoviz::catalog::{self, args::USAGE, Algorithm, InfoCard};
use algoviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they never mix with --json output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let options = match catalog::args::parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    if options.list {
        if options.json {
            let infos: Vec<_> = Algorithm::ALL.iter().map(|a| a.info()).collect();
            println!("{}", serde_json::to_string_pretty(&infos)?);
        } else {
            print_catalogue();
        }
        return Ok(());
    }

    let request = match options.request {
        Some(request) if !options.help => request,
        _ => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    if options.info {
        let info = request.algorithm.info();
        if options.json {
            println!("{}", serde_json::to_string_pretty(&InfoCard::from(info))?);
        } else {
            print!("{}", info);
        }
        return Ok(());
    }

    let steps = match catalog::run(&request, &options.config) {
        Ok(steps) => steps,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(steps, request.algorithm.info(), options.config.playback);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn print_catalogue() {
    let mut family = None;
    for &algorithm in Algorithm::ALL {
        if family != Some(algorithm.family()) {
            family = Some(algorithm.family());
            println!();
            println!("{}", algorithm.family().name());
        }
        let info = algorithm.info();
        println!(
            "  {:<16} {:<28} time {:<10} space {:<8} {}",
            info.id, info.name, info.time, info.space, info.usage
        );
    }
}
