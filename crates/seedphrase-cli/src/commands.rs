//! Command parsing and execution
//!
//! Arguments are parsed by hand (no clap). Every command renders its output
//! to a string so it can be tested without touching stdout.

use crate::config::CliConfig;
use anyhow::{Context, Result};
use seedphrase_core::{
    entropy_from_mnemonic, generate_entropy, mnemonic_from_entropy, seed_from_mnemonic,
    word_list, WordCount,
};
use std::io::Read;
use std::path::PathBuf;
use zeroize::Zeroizing;

/// Env var consulted by `seed` when `--passphrase` is not given
pub const PASSPHRASE_ENV: &str = "SEEDPHRASE_PASSPHRASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New mnemonic from OS entropy
    Generate { bits: Option<usize> },
    /// Mnemonic for hex-encoded entropy
    Encode { entropy_hex: String },
    /// Entropy (hex) for a mnemonic
    Decode { words: Vec<String> },
    /// Check a mnemonic's words and checksum
    Validate { words: Vec<String> },
    /// 64-byte seed (hex)
    Seed {
        passphrase: Option<String>,
        words: Vec<String>,
    },
    /// Print the word list
    Wordlist,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate { .. } => "generate",
            Command::Encode { .. } => "encode",
            Command::Decode { .. } => "decode",
            Command::Validate { .. } => "validate",
            Command::Seed { .. } => "seed",
            Command::Wordlist => "wordlist",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Run(Command),
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config_path: Option<PathBuf>,
    pub action: Action,
}

/// Parse the arguments following the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation> {
    let mut config_path = None;
    let mut rest = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--config requires a path argument"))?;
                config_path = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                return Ok(Invocation {
                    config_path,
                    action: Action::Help,
                });
            }
            "--version" | "-V" => {
                return Ok(Invocation {
                    config_path,
                    action: Action::Version,
                });
            }
            _ => rest.push(args[i].clone()),
        }
        i += 1;
    }

    let (name, tail) = rest
        .split_first()
        .ok_or_else(|| anyhow::anyhow!("No command given (try --help)"))?;

    let command = match name.as_str() {
        "generate" => Command::Generate {
            bits: parse_generate_flags(tail)?,
        },
        "encode" => match tail {
            [hex] => Command::Encode {
                entropy_hex: hex.clone(),
            },
            _ => anyhow::bail!("encode takes exactly one hex argument"),
        },
        "decode" => Command::Decode {
            words: tail.to_vec(),
        },
        "validate" => Command::Validate {
            words: tail.to_vec(),
        },
        "seed" => {
            let (passphrase, words) = parse_seed_flags(tail)?;
            Command::Seed { passphrase, words }
        }
        "wordlist" => {
            anyhow::ensure!(tail.is_empty(), "wordlist takes no arguments");
            Command::Wordlist
        }
        other => anyhow::bail!("Unknown command: {}", other),
    };

    Ok(Invocation {
        config_path,
        action: Action::Run(command),
    })
}

fn parse_generate_flags(args: &[String]) -> Result<Option<usize>> {
    match args {
        [] => Ok(None),
        [flag, value] if flag == "--bits" || flag == "-b" => {
            let bits = value
                .parse::<usize>()
                .with_context(|| format!("Invalid --bits value: {}", value))?;
            Ok(Some(bits))
        }
        _ => anyhow::bail!("usage: generate [--bits N]"),
    }
}

fn parse_seed_flags(args: &[String]) -> Result<(Option<String>, Vec<String>)> {
    let mut passphrase = None;
    let mut words = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--passphrase" | "-p" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| anyhow::anyhow!("--passphrase requires a value"))?;
                passphrase = Some(value.clone());
            }
            _ => words.push(args[i].clone()),
        }
        i += 1;
    }

    Ok((passphrase, words))
}

/// Passphrase from the flag, then the environment, then empty.
pub fn resolve_passphrase(flag: Option<&str>, env: Option<String>) -> Zeroizing<String> {
    match flag {
        Some(p) => Zeroizing::new(p.to_string()),
        None => Zeroizing::new(env.unwrap_or_default()),
    }
}

/// Words from the command line, or all of `input` when none were given.
fn mnemonic_text(words: &[String], input: &mut dyn Read) -> Result<Zeroizing<String>> {
    if !words.is_empty() {
        return Ok(Zeroizing::new(words.join(" ")));
    }
    let mut text = Zeroizing::new(String::new());
    input
        .read_to_string(&mut text)
        .context("Failed to read mnemonic from stdin")?;
    Ok(text)
}

/// Execute a command and return what should be printed.
pub fn run(command: &Command, config: &CliConfig, input: &mut dyn Read) -> Result<Zeroizing<String>> {
    match command {
        Command::Generate { bits } => {
            let bits = bits.unwrap_or(config.generate.entropy_bits);
            let word_count = WordCount::from_entropy_bits(bits)
                .context("Entropy must be 128, 160, 192, 224 or 256 bits")?;
            log::info!("Generating {}-word mnemonic", word_count.word_count());

            let entropy = generate_entropy(bits)?;
            let mut output = Zeroizing::new(mnemonic_from_entropy(&entropy)?);
            if config.generate.show_entropy {
                output.push('\n');
                output.push_str(&hex::encode(entropy.as_slice()));
            }
            Ok(output)
        }
        Command::Encode { entropy_hex } => {
            let entropy = Zeroizing::new(
                hex::decode(entropy_hex.trim()).context("Entropy must be hex-encoded")?,
            );
            let mnemonic = mnemonic_from_entropy(&entropy).context("Cannot encode entropy")?;
            Ok(Zeroizing::new(mnemonic))
        }
        Command::Decode { words } => {
            let mnemonic = mnemonic_text(words, input)?;
            let entropy = entropy_from_mnemonic(&mnemonic).context("Invalid mnemonic")?;
            Ok(Zeroizing::new(hex::encode(entropy.as_slice())))
        }
        Command::Validate { words } => {
            let mnemonic = mnemonic_text(words, input)?;
            entropy_from_mnemonic(&mnemonic).context("Invalid mnemonic")?;
            let count = mnemonic.split_whitespace().count();
            Ok(Zeroizing::new(format!("✅ Mnemonic is valid ({} words)", count)))
        }
        Command::Seed { passphrase, words } => {
            let mnemonic = mnemonic_text(words, input)?;
            // Normalize separators; the seed is taken over single-spaced words
            let mnemonic = Zeroizing::new(mnemonic.split_whitespace().collect::<Vec<_>>().join(" "));
            let passphrase =
                resolve_passphrase(passphrase.as_deref(), std::env::var(PASSPHRASE_ENV).ok());

            let seed = Zeroizing::new(seed_from_mnemonic(&mnemonic, &passphrase));
            Ok(Zeroizing::new(hex::encode(seed.as_slice())))
        }
        Command::Wordlist => Ok(Zeroizing::new(word_list().join("\n"))),
    }
}
