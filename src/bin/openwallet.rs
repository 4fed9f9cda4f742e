//! `openwallet`: open, probe and create wallet files from the command line.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use openwallet::consts::WALLET_PBKDF2_ITERATIONS;
use openwallet::{
    decode, encode, is_wallet, Padding, PasswordString, PlainText, WalletError, WalletFormat,
};
use secure_gate::RevealSecret;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "openwallet",
    version,
    about = "Decode password-protected wallet files"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decrypt a wallet and print its payload
    Open {
        /// Path to the wallet file
        file: PathBuf,

        #[command(flatten)]
        key: KeyArgs,

        /// Write the payload here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep trailing padding bytes
        #[arg(long)]
        raw: bool,
    },
    /// Check whether files are wallet containers (no password needed)
    Check {
        /// Files to probe
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Create a wallet from a plaintext file
    Seal {
        /// Plaintext payload
        input: PathBuf,

        /// Wallet file to write
        output: PathBuf,

        #[command(flatten)]
        key: KeyArgs,
    },
}

#[derive(clap::Args)]
struct KeyArgs {
    /// Wallet password
    #[arg(short, long, env = "OPENWALLET_PASSWORD", hide_env_values = true)]
    password: String,

    /// PBKDF2 iteration count (only for non-standard test files)
    #[arg(long, default_value_t = WALLET_PBKDF2_ITERATIONS, hide = true)]
    iterations: u32,
}

impl KeyArgs {
    fn format(&self) -> WalletFormat {
        WalletFormat::default().with_kdf_iterations(self.iterations)
    }

    /// Move the password out of the parsed arguments into a zeroizing wrapper.
    fn take_password(&mut self) -> PasswordString {
        PasswordString::new(std::mem::take(&mut self.password))
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open(
    file: PathBuf,
    mut key: KeyArgs,
    output: Option<PathBuf>,
    raw: bool,
) -> anyhow::Result<ExitCode> {
    let bytes =
        fs::read(&file).with_context(|| format!("could not read {}", file.display()))?;

    let mut format = key.format();
    if raw {
        format = format.with_padding(Padding::None);
    }

    let password = key.take_password();
    let plaintext = match decode(bytes, &password, &format) {
        Ok(plaintext) => plaintext,
        Err(WalletError::IncorrectPassword) => {
            eprintln!("Incorrect password!");
            return Ok(ExitCode::SUCCESS);
        }
        Err(e) => {
            return Err(anyhow::Error::new(e).context(format!("could not open {}", file.display())))
        }
    };

    match output {
        Some(path) => {
            fs::write(&path, plaintext.expose_secret())
                .with_context(|| format!("could not write {}", path.display()))?;
            tracing::info!(path = %path.display(), "payload written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(plaintext.expose_secret())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn check(files: Vec<PathBuf>) -> anyhow::Result<ExitCode> {
    let mut all_wallets = true;
    for file in files {
        let bytes =
            fs::read(&file).with_context(|| format!("could not read {}", file.display()))?;
        if is_wallet(&bytes) {
            println!("{}: wallet", file.display());
        } else {
            println!("{}: not a wallet", file.display());
            all_wallets = false;
        }
    }
    Ok(if all_wallets {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn seal(input: PathBuf, output: PathBuf, mut key: KeyArgs) -> anyhow::Result<ExitCode> {
    let plaintext = PlainText::new(
        fs::read(&input).with_context(|| format!("could not read {}", input.display()))?,
    );
    let password = key.take_password();
    let wallet = encode(&password, plaintext.expose_secret(), &key.format())?;
    fs::write(&output, wallet).with_context(|| format!("could not write {}", output.display()))?;
    tracing::info!(path = %output.display(), "wallet written");
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Open {
            file,
            key,
            output,
            raw,
        } => open(file, key, output, raw),
        Commands::Check { files } => check(files),
        Commands::Seal { input, output, key } => seal(input, output, key),
    }
}
