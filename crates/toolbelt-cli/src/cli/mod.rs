//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use toolbelt_config::{ColorMode, Config};
use toolbelt_engine as engine;
use toolbelt_syntax::{json_spans, markup_spans, reflow};

mod render;

#[derive(Parser)]
#[command(name = "toolbelt")]
#[command(version)]
#[command(about = "Developer text utilities: formatters, codecs, generators")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// When to color formatted output (overrides config)
    #[arg(long, value_enum, global = true)]
    color: Option<ColorArg>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorMode {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorMode::Auto,
            ColorArg::Always => ColorMode::Always,
            ColorArg::Never => ColorMode::Never,
        }
    }
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Validate, prettify and highlight JSON
    Json {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Reflow and highlight XML
    Xml {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Highlight without re-deriving indentation
        #[arg(long)]
        no_reflow: bool,
    },
    /// Base64 encode or decode text
    Base64 {
        #[command(subcommand)]
        direction: Direction,
    },
    /// Hex encode or decode text
    Hex {
        #[command(subcommand)]
        direction: Direction,
    },
    /// Convert text to or from a comma-separated decimal byte list
    Bytes {
        #[command(subcommand)]
        direction: Direction,
    },
    /// SHA-256 digest of the input, as lowercase hex
    Sha256 {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Generate a random password
    Password {
        /// Password length (6..=64)
        #[arg(short, long)]
        length: Option<usize>,

        /// Exclude uppercase letters
        #[arg(long)]
        no_upper: bool,

        /// Exclude lowercase letters
        #[arg(long)]
        no_lower: bool,

        /// Exclude digits
        #[arg(long)]
        no_digits: bool,

        /// Include symbols
        #[arg(long, conflicts_with = "no_symbols")]
        symbols: bool,

        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
    },
    /// Render text as a QR code in the terminal
    Qr {
        /// The text to encode
        text: String,
    },
    /// Encode a file as a base64 data URI
    DataUri {
        /// The file to encode
        file: PathBuf,
    },
    /// Decode base64 (or a data URI) and write the bytes to a file
    FromBase64 {
        /// Input file holding the base64 text (stdin when omitted)
        file: Option<PathBuf>,

        /// Output path (default: `decoded.<sniffed extension>`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum Direction {
    /// Encode text read from FILE or stdin
    Encode { file: Option<PathBuf> },
    /// Decode text read from FILE or stdin
    Decode { file: Option<PathBuf> },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Write a config file with the default settings
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()
        .context("failed to load config")?
        .unwrap_or_default();
    let color_mode = cli.color.map(ColorMode::from).unwrap_or(config.color);

    match cli.command {
        Commands::Json { file } => {
            let input = read_input(file.as_deref())?;
            let pretty = engine::prettify_json(&input).context("invalid JSON")?;
            let spans = json_spans(&pretty);
            println!("{}", render::render(&spans, render::should_color(color_mode)));
        }
        Commands::Xml { file, no_reflow } => {
            let input = read_input(file.as_deref())?;
            let formatted = if no_reflow { input } else { reflow(&input) };
            let spans = markup_spans(&formatted);
            println!("{}", render::render(&spans, render::should_color(color_mode)));
        }
        Commands::Base64 { direction } => match direction {
            Direction::Encode { file } => {
                let input = read_input(file.as_deref())?;
                println!("{}", engine::text_to_base64(&input));
            }
            Direction::Decode { file } => {
                let input = read_input(file.as_deref())?;
                println!("{}", engine::base64_to_text(&input)?);
            }
        },
        Commands::Hex { direction } => match direction {
            Direction::Encode { file } => {
                let input = read_input(file.as_deref())?;
                println!("{}", engine::text_to_hex(&input));
            }
            Direction::Decode { file } => {
                let input = read_input(file.as_deref())?;
                println!("{}", engine::hex_to_text(&input)?);
            }
        },
        Commands::Bytes { direction } => match direction {
            Direction::Encode { file } => {
                let input = read_input(file.as_deref())?;
                println!("{}", engine::text_to_byte_list(&input));
            }
            Direction::Decode { file } => {
                let input = read_input(file.as_deref())?;
                println!("{}", engine::byte_list_to_text(&input)?);
            }
        },
        Commands::Sha256 { file } => {
            let input = read_input(file.as_deref())?;
            println!("{}", engine::sha256_hex(&input));
        }
        Commands::Password {
            length,
            no_upper,
            no_lower,
            no_digits,
            symbols,
            no_symbols,
        } => {
            let mut options = config.password.clone();
            if let Some(length) = length {
                options.length = length;
            }
            if no_upper {
                options.upper = false;
            }
            if no_lower {
                options.lower = false;
            }
            if no_digits {
                options.digits = false;
            }
            if symbols {
                options.symbols = true;
            }
            if no_symbols {
                options.symbols = false;
            }
            println!("{}", engine::generate_password(&options)?);
        }
        Commands::Qr { text } => {
            println!("{}", engine::qr_unicode(&text)?);
        }
        Commands::DataUri { file } => {
            let uri = engine::file_to_data_uri(&file)
                .with_context(|| format!("failed to encode {}", file.display()))?;
            println!("{uri}");
        }
        Commands::FromBase64 { file, output } => {
            let input = read_input(file.as_deref())?;
            let (bytes, extension) = engine::decode_blob(&input)?;
            let output = output.unwrap_or_else(|| PathBuf::from(format!("decoded.{extension}")));
            fs::write(&output, &bytes)
                .with_context(|| format!("failed to write {}", output.display()))?;
            println!("wrote {} bytes to {}", bytes.len(), output.display());
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => println!("{}", Config::config_path().display()),
            ConfigCommands::Init => {
                let path = Config::config_path();
                Config::default().save().context("failed to save config")?;
                println!("wrote {}", path.display());
            }
        },
    }

    Ok(())
}

/// Read the input text from a file, or from stdin when no file is given.
/// A single trailing newline is stripped from stdin so piped single-line
/// input encodes the line, not the line plus its terminator.
fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            if buffer.ends_with('\n') {
                buffer.pop();
            }
            Ok(buffer)
        }
    }
}
