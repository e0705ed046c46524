//! nvdactl
//!
//! Command-line driver for a running NVDA screen reader, via the
//! controller client library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nvdactl")]
#[command(about = "Drive a running NVDA screen reader from the command line")]
#[command(version)]
struct Cli {
    /// Path to the controller client DLL (default: nvdaControllerClient.dll
    /// from the normal library search path)
    #[arg(long, global = true)]
    library: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Speak text through NVDA's current synthesizer
    Speak {
        /// Text to speak
        #[arg(short, long)]
        text: String,

        /// Cancel in-progress speech before speaking
        #[arg(short, long)]
        interrupt: bool,
    },

    /// Cancel any in-progress speech
    Cancel,

    /// Flash a message on the braille display
    Braille {
        /// Text to display
        #[arg(short, long)]
        text: String,
    },

    /// Check whether NVDA is reachable (exit code 0 if so, 1 if not)
    Status,

    /// Notify NVDA of an input-language change
    LangChange {
        /// Thread whose keyboard layout changed
        #[arg(long)]
        thread_id: i32,

        /// Keyboard layout handle (HKL), e.g. 0x04090409 for en-US
        #[arg(long, value_parser = parse_hkl)]
        hkl: u32,

        /// Layout description string, e.g. "00000409"
        #[arg(long)]
        layout: String,
    },
}

/// Accept HKL values in decimal or 0x-prefixed hex.
fn parse_hkl(s: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    parsed.map_err(|e| format!("invalid HKL '{}': {}", s, e))
}

#[cfg(windows)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use nvdactrl::Controller;

    let cli = Cli::parse();

    let controller = match cli.library {
        Some(ref path) => Controller::with_library(path)?,
        None => Controller::new()?,
    };

    match cli.command {
        Commands::Speak { text, interrupt } => {
            if interrupt {
                controller.cancel_speech()?;
            }
            controller.speak_text(&text)?;
            eprintln!("Spoke: \"{}\"", text);
        }

        Commands::Cancel => {
            controller.cancel_speech()?;
            eprintln!("Cancelled speech.");
        }

        Commands::Braille { text } => {
            controller.braille_message(&text)?;
            eprintln!("Sent braille message: \"{}\"", text);
        }

        Commands::Status => match controller.test_if_running() {
            Ok(()) => println!("NVDA is running."),
            Err(e) => {
                println!("NVDA is not reachable: {}", e);
                std::process::exit(1);
            }
        },

        Commands::LangChange {
            thread_id,
            hkl,
            layout,
        } => {
            controller.input_lang_change_notify(thread_id, hkl, &layout)?;
            eprintln!(
                "Notified language change: thread {}, HKL 0x{:08X}, layout \"{}\"",
                thread_id, hkl, layout
            );
        }
    }

    Ok(())
}

#[cfg(not(windows))]
fn main() {
    eprintln!("This program requires Windows with an NVDA controller client library.");
    eprintln!("The nvdactrl-stub shim and nvdactrl marshaling layer build everywhere.");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hkl_decimal_and_hex() {
        assert_eq!(parse_hkl("1033").unwrap(), 1033);
        assert_eq!(parse_hkl("0x04090409").unwrap(), 0x0409_0409);
        assert!(parse_hkl("nope").is_err());
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
