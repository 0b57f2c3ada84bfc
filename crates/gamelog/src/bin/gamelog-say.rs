use anyhow::Context;
use clap::Parser;
use gamelog::logging::LoggingOpts;
use gamelog::{Decoration, Severity, DEFAULT_CATEGORY};

/// Log a decorated message through gamelog
#[derive(Debug, Parser)]
#[clap(name = "gamelog-say")]
struct SayArgs {
    /// The message to log
    #[clap(required = true)]
    message: Vec<String>,

    /// The severity to log the message with
    #[clap(long, default_value = "info")]
    severity: Severity,

    /// The category of the message
    #[clap(short, long, default_value = DEFAULT_CATEGORY)]
    category: String,

    /// A decoration to apply: `bold`, `italic`, `light`, `dark` or a `#RRGGBB` color.
    /// Decorations are applied in the order given.
    #[clap(long = "decorate", value_name = "DECORATION")]
    decorations: Vec<Decoration>,

    /// Clear the console before logging
    #[clap(long)]
    clear: bool,

    #[clap(flatten)]
    logging: LoggingOpts,
}

fn main() -> anyhow::Result<()> {
    let args = SayArgs::parse();
    args.logging
        .init_root_logger()
        .context("couldn't set as global logger")?;
    args.logging
        .apply_to(gamelog::debugger())
        .context("couldn't apply category settings")?;

    if args.clear {
        gamelog::clear_console().context("couldn't clear the console")?;
    }

    let message = args.message.join(" ");
    gamelog::debugger().log(
        args.severity,
        message.as_str(),
        &args.category,
        &args.decorations,
    );
    Ok(())
}
