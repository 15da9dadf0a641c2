use anyhow::Context;
use clap::Parser;
use fb_kiosk::app::commands::{is_confirmation, parse_command, Command, HELP};
use fb_kiosk::core::browse::{CATEGORIES, DIETARY_TAGS};
use fb_kiosk::utils::{logger, validation::Validate};
use fb_kiosk::{CliConfig, CsvCatalog, Feedback, Intent, KioskController, View};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    match settings.log_level.as_deref() {
        Some(level) if !cli.verbose => logger::init_configured_logger(level, settings.log_json),
        _ => logger::init_cli_logger(cli.verbose),
    }
    tracing::debug!("Settings: {:?}", settings);

    if let Err(e) = settings.validate() {
        tracing::error!(severity = ?e.severity(), "Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let catalog = CsvCatalog::new(&settings.catalog_path);
    let mut controller = KioskController::new(catalog, settings.max_per_item);
    tracing::info!(
        "Starting {} (catalog: {}, max per item: {})",
        settings.name,
        settings.catalog_path,
        settings.max_per_item
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", settings.name)?;
    writeln!(stdout, "Type 'help' for the list of commands.")?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line.context("failed to read from stdin")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(stdout, "{}", HELP)?,
            Command::Categories => {
                writeln!(stdout, "Categories: {}", CATEGORIES.join(", "))?;
                writeln!(stdout, "Dietary: {}", DIETARY_TAGS.join(", "))?;
            }
            Command::Run(Intent::Submit) if !controller.cart().is_empty() && !cli.yes => {
                write!(stdout, "Submit your order? [y/N] ")?;
                stdout.flush()?;
                let answer = match lines.next() {
                    Some(answer) => answer.context("failed to read from stdin")?,
                    None => break,
                };
                if is_confirmation(&answer) {
                    render(&mut stdout, &controller.handle(Intent::Submit))?;
                }
            }
            Command::Run(intent) => render(&mut stdout, &controller.handle(intent))?,
        }
    }

    tracing::info!("Kiosk session ended");
    Ok(())
}

fn render(out: &mut impl Write, feedback: &Feedback) -> io::Result<()> {
    match &feedback.view {
        View::Nothing => {}
        View::Items(items) => {
            for item in items {
                if item.has_tag() {
                    writeln!(out, "  {}  [{}]  Diet: {}", item.name, item.category, item.tag)?;
                } else {
                    writeln!(out, "  {}  [{}]", item.name, item.category)?;
                }
            }
        }
        View::Cart(lines) => {
            for line in lines {
                writeln!(out, "  {} x {}", line.item_name, line.quantity)?;
            }
        }
        View::Receipt(receipt) => {
            writeln!(
                out,
                "Order at {} ({} units):",
                receipt.submitted_at.format("%Y-%m-%d %H:%M:%S UTC"),
                receipt.total_units
            )?;
            for line in &receipt.lines {
                writeln!(out, "  {} x {}", line.item_name, line.quantity)?;
            }
        }
    }

    if !feedback.message.is_empty() {
        let marker = if feedback.ok { "✅" } else { "❌" };
        writeln!(out, "{} {}", marker, feedback.message)?;
    }
    Ok(())
}
