use anyhow::Context;
use clap::{Parser, Subcommand};
use flokit::config::Corner;
use flokit::layout;
use flokit::platform::Platform;
use flokit::theme::{self, Button, ColorScheme, CustomColors, CssColor, Fill};

#[derive(Parser, Debug)]
#[command(name = "flokit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print the expanded offset of every item.
    Layout {
        /// Number of items
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// Arrangement mode (stack, fan, grid); anything else collapses all items
        #[arg(short, long, default_value = "stack")]
        mode: String,

        /// Screen corner (bottom-right, bottom-left)
        #[arg(short, long, default_value = "bottom-right")]
        corner: String,
    },
    /// Print the resolved fill of a button.
    Style {
        /// Preset name or "custom"
        #[arg(short, long, default_value = "blue")]
        color: String,

        /// Custom primary color, used with --color custom
        #[arg(long)]
        primary: Option<CssColor>,

        /// Resolve for an item of this platform instead of the toggle
        #[arg(short, long)]
        platform: Option<Platform>,

        /// Apply the platform's brand color
        #[arg(short, long)]
        brand: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            count,
            mode,
            corner,
        } => print_layout(count, &mode, &corner)?,
        Commands::Style {
            color,
            primary,
            platform,
            brand,
        } => print_style(&color, primary, platform, brand),
    }
    Ok(())
}

fn parse_corner(corner: &str) -> anyhow::Result<Corner> {
    corner
        .trim()
        .parse()
        .with_context(|| format!("Unknown corner '{}' (bottom-right, bottom-left)", corner))
}

fn print_layout(count: usize, mode: &str, corner: &str) -> anyhow::Result<()> {
    let corner = parse_corner(corner)?;
    for index in 0..count {
        let o = layout::offset_for_key(index, count, mode, corner);
        println!("{}\t{:.3}\t{:.3}", index, o.x, o.y);
    }
    Ok(())
}

fn print_style(color: &str, primary: Option<CssColor>, platform: Option<Platform>, brand: bool) {
    let scheme: ColorScheme = color.parse().unwrap_or_default();
    let custom = primary.map(|p| CustomColors {
        primary: p,
        secondary: p,
        hover: p,
    });
    let button = platform.map_or(Button::Toggle, Button::Item);

    match theme::resolve_style(button, scheme, custom.as_ref(), brand).fill {
        Fill::Solid(c) => println!("solid {}", theme::to_hex(c)),
        Fill::Gradient { from, to } => println!(
            "linear-gradient({}deg, {}, {})",
            theme::GRADIENT_ANGLE_DEG,
            theme::to_hex(from),
            theme::to_hex(to)
        ),
    }
}
