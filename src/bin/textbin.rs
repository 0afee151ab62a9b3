use std::io::{self, Read};

use clap::{Parser, Subcommand};
use textbin::{DEFAULT_SEPARATOR, decode, encode, logger};

const AFTER_HELP: &str = "\
Examples:
  textbin encode \"Halo dunia\"
  textbin encode \"Halo\" --nosep
  textbin decode \"01001000 01100001 01101100 01101111\"
  echo \"Halo\" | textbin encode";

/// Convert text to binary (UTF-8) and back.
#[derive(Parser, Debug)]
#[command(name = "textbin", author, version, after_help = AFTER_HELP)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert text to binary (UTF-8).
    Encode {
        /// Text to convert. Read from stdin when omitted.
        text: Option<String>,

        /// Do not separate byte groups.
        #[arg(long)]
        nosep: bool,
    },
    /// Convert binary back to text (UTF-8).
    Decode {
        /// Binary string, space separated or contiguous. Read from stdin when omitted.
        binary: Option<String>,
    },
}

fn read_stdin() -> io::Result<String> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::setup_logger();

    match cli.command {
        Commands::Encode { text, nosep } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            let sep = if nosep { "" } else { DEFAULT_SEPARATOR };
            println!("{}", encode(&text, sep));
        }
        Commands::Decode { binary } => {
            let binary = match binary {
                Some(binary) => binary,
                None => read_stdin()?,
            };
            match decode(&binary) {
                Ok(text) => println!("{text}"),
                Err(e) => {
                    log::debug!("Decode failed: {e:?}");
                    eprintln!("Error: {e}");
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}
