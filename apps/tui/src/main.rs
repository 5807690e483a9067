use clap::Parser;
use color_eyre::Result;
use digest_tui::app::App;
use digest_tui::cli::CliArgs;
use digest_tui::logging::{self, LogSink};
use digest_tui::source::Transport;
use digest_tui::{config, event, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    let headless = args.headless || !is_terminal();
    if let Some(LogSink::File(path)) = logging::init_tracing(args.debug, LogSink::for_mode(headless))? {
        eprintln!("Logging to {}", path.display());
    }

    let sources = match config::init_sources(&args.source_overrides()) {
        Ok(sources) => sources,
        Err(error) => {
            eprintln!("{error}\n");
            eprintln!("{}", CliArgs::help_text());
            std::process::exit(2);
        }
    };
    tracing::debug!(?sources, "resolved candidate locations");

    let mut app = App::new(sources);
    let transport = Transport::new();

    if headless {
        return event::run_headless(&mut app, &transport, args.json).await;
    }

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app, &transport).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
