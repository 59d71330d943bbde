//! seedphrase: BIP-39 mnemonic tool
//!
//! Generates mnemonics, converts between entropy and words, validates
//! checksums and derives seeds.
//!
//! # Usage
//!
//! ```bash
//! seedphrase generate --bits 128
//! seedphrase encode 7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f
//! echo "abandon ... about" | seedphrase seed --passphrase TREZOR
//! ```

mod commands;
mod config;

use anyhow::{Context, Result};
use commands::{Action, PASSPHRASE_ENV};
use config::{CliConfig, DEFAULT_CONFIG_FILE};
use std::path::Path;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = commands::parse_args(&args)?;

    let command = match invocation.action {
        Action::Help => {
            print_help();
            return Ok(());
        }
        Action::Version => {
            println!("seedphrase {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Action::Run(command) => command,
    };

    // Load config: an explicit path must exist, the default one is optional
    let mut cli_config = match &invocation.config_path {
        Some(path) => CliConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CliConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?,
    };

    cli_config.apply_env_overrides();

    cli_config
        .validate()
        .context("Configuration validation failed")?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli_config.general.log_level.as_str()),
    )
    .init();

    log::debug!("Running {}", command.name());

    let output = commands::run(&command, &cli_config, &mut std::io::stdin().lock())?;
    println!("{}", output.as_str());

    Ok(())
}

fn print_help() {
    println!(
        r#"seedphrase: BIP-39 mnemonic tool

USAGE:
    seedphrase [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
    generate [--bits N]                 New mnemonic (N = 128, 160, 192, 224, 256)
    encode <HEX>                        Mnemonic for hex-encoded entropy
    decode [WORDS...]                   Entropy (hex) for a mnemonic
    validate [WORDS...]                 Check words and checksum
    seed [--passphrase P] [WORDS...]    64-byte seed (hex)
    wordlist                            Print the English word list

    Commands taking WORDS read them from stdin when none are given.

OPTIONS:
    -c, --config <PATH>   Config file path (default: ./{config})
    -h, --help            Show this help message
    -V, --version         Show version

ENVIRONMENT VARIABLES (override config file):
    SEEDPHRASE_LOG_LEVEL      Log level (off/error/warn/info/debug/trace)
    SEEDPHRASE_ENTROPY_BITS   Default entropy size for generate
    SEEDPHRASE_SHOW_ENTROPY   Also print generated entropy (true/false)
    {passphrase}     Passphrase for seed when --passphrase is absent

EXAMPLES:
    # 12-word mnemonic
    seedphrase generate --bits 128

    # Seed without putting the mnemonic in shell history
    seedphrase seed < mnemonic.txt
"#,
        config = DEFAULT_CONFIG_FILE,
        passphrase = PASSPHRASE_ENV,
    );
}
