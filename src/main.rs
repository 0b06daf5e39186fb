use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;

use setcolor::tui::Terminal;
use setcolor::{config, logging, App, ColorChoiceDialog, Config, DialogOutcome, Error, Rgba};

#[derive(Parser)]
#[command(
    name = "setcolor",
    version,
    about = "Choose the color of a named setting in a terminal dialog",
    after_help = "Colors: #rgb, #rrggbb, #aarrggbb or a name such as red, orange, gray.

Examples:
  setcolor -m Wire -c '#ff0000' -s '#418dd9'    Pick a wire color
  setcolor -m Background --ask-prefs           Standard color from config
  setcolor -m Wire -s blue --theme classic     16-color theme

On OK prints `color=#rrggbb` and `make_default=true|false`; Cancel exits with 1."
)]
struct Args {
    /// Name of the setting being colored (e.g. Wire, Background)
    #[arg(short, long, default_value = "Color")]
    message: String,

    /// Color currently in use (defaults to the standard color)
    #[arg(short, long, value_name = "COLOR")]
    current: Option<Rgba>,

    /// Standard color (defaults to standard_colors.<message> from config)
    #[arg(short, long, value_name = "COLOR")]
    standard: Option<Rgba>,

    /// Offer a "make this the default" checkbox
    #[arg(long)]
    ask_prefs: bool,

    /// Theme preset (default, classic)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load()?;
    if let Some(theme) = args.theme {
        config.theme.preset = Some(theme);
    }

    let _log_guard = logging::init(&config);
    // Config is read before the subscriber exists, so report its sources now
    for path in config::config_sources(&std::env::current_dir()?) {
        tracing::info!(path = %path.display(), "using config file");
    }

    let standard = match args.standard {
        Some(color) => color,
        None => config
            .standard_color(&args.message)
            .ok_or_else(|| Error::MissingStandardColor(args.message.clone()))?,
    };
    let current = args.current.unwrap_or(standard);

    let dialog = ColorChoiceDialog::new(args.message, current, standard, args.ask_prefs);
    let mut app = App::new(dialog, &config);

    // Terminal is restored before anything is printed
    let outcome = {
        let mut terminal = Terminal::new()?;
        app.run(&mut terminal)?
    };

    match outcome {
        DialogOutcome::Accepted => {
            println!("{}", app.dialog.report());
            Ok(ExitCode::SUCCESS)
        }
        DialogOutcome::Cancelled => {
            eprintln!("cancelled");
            Ok(ExitCode::FAILURE)
        }
    }
}
