//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{decrypt, encrypt, padded_len, Ecb, KeySchedule, KeySize};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES-ECB CLI.
#[derive(Parser)]
#[command(name = "aes-ecb", version, author, about = "AES-128/192/256 in ECB mode")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv per-round trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file; the last partial block is zero-extended.
    Enc {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input plaintext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Decrypt a file produced by `enc`.
    Dec {
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input ciphertext path.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output plaintext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
        /// Original plaintext length; strips the zero extension added by `enc`.
        #[arg(long, value_name = "BYTES")]
        length: Option<usize>,
    },
    /// Run the standard known-answer vectors plus random round trips.
    Check {
        /// Number of random round trips per key size.
        #[arg(long, default_value_t = 16)]
        samples: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Encrypt and decrypt a random message with a random key.
    Demo {
        /// Key size in bits.
        #[arg(long, default_value_t = 128, value_parser = parse_key_bits)]
        key_bits: u16,
        /// Message length in bytes.
        #[arg(long, default_value_t = 20)]
        len: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

const KNOWN_ANSWERS: [(&str, &str); 3] = [
    (
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];
const KNOWN_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_log(cli.verbose);
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Dec {
            key_hex,
            input,
            output,
            length,
        } => cmd_dec(&key_hex, &input, &output, length),
        Commands::Check { samples, seed } => cmd_check(samples, seed),
        Commands::Demo {
            key_bits,
            len,
            seed,
        } => cmd_demo(key_bits, len, seed),
    }
}

fn setup_log(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn cmd_enc(key_hex: &str, input_path: &Path, output_path: &Path) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    let ciphertext = encrypt(&data, &key).context("encrypt")?;
    if ciphertext.len() != data.len() {
        info!(
            "zero-extended {} bytes to {}; pass --length {} to dec to strip it",
            data.len(),
            ciphertext.len(),
            data.len()
        );
    }
    fs::write(output_path, ciphertext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_dec(
    key_hex: &str,
    input_path: &Path,
    output_path: &Path,
    length: Option<usize>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    let data = fs::read(input_path).with_context(|| format!("read {}", input_path.display()))?;
    if data.len() % 16 != 0 {
        bail!("ciphertext length must be a multiple of 16 bytes");
    }
    let mut plaintext = decrypt(&data, &key).context("decrypt")?;
    if let Some(len) = length {
        if padded_len(len) != plaintext.len() {
            bail!(
                "--length {} does not fit a {}-byte ciphertext",
                len,
                plaintext.len()
            );
        }
        plaintext.truncate(len);
    }
    fs::write(output_path, plaintext)
        .with_context(|| format!("write {}", output_path.display()))?;
    Ok(())
}

fn cmd_check(samples: usize, seed: Option<u64>) -> Result<()> {
    let plaintext = hex::decode(KNOWN_PLAINTEXT).context("decode plaintext hex")?;
    for (key_hex, expected) in KNOWN_ANSWERS {
        let key = parse_key_hex(key_hex)?;
        let ciphertext = encrypt(&plaintext, &key)?;
        if hex::encode(&ciphertext) != expected {
            bail!("AES-{} known-answer mismatch", key.len() * 8);
        }
        if decrypt(&ciphertext, &key)? != plaintext {
            bail!("AES-{} known-answer decryption mismatch", key.len() * 8);
        }
        info!("AES-{} known answer ok", key.len() * 8);
    }

    let mut rng = seeded_rng(seed);
    for key_len in [16usize, 24, 32] {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        let schedule = KeySchedule::new(&key)?;
        for _ in 0..samples {
            let mut message = vec![0u8; rng.gen_range(1..=64)];
            rng.fill_bytes(&mut message);
            let ciphertext = Ecb.encrypt_with(&message, &schedule);
            let mut decrypted = Ecb.decrypt_with(&ciphertext, &schedule);
            decrypted.truncate(message.len());
            if decrypted != message {
                bail!("AES-{} round trip failed", key_len * 8);
            }
        }
    }
    println!("all checks passed");
    Ok(())
}

fn cmd_demo(key_bits: u16, len: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key = vec![0u8; usize::from(key_bits) / 8];
    rng.fill_bytes(&mut key);
    let mut plaintext = vec![0u8; len];
    rng.fill_bytes(&mut plaintext);

    let ciphertext = encrypt(&plaintext, &key)?;
    let mut decrypted = decrypt(&ciphertext, &key)?;
    decrypted.truncate(len);

    println!("demo key: {}", hex::encode(&key));
    println!("plaintext: {}", hex::encode(&plaintext));
    println!("ciphertext: {}", hex::encode(&ciphertext));
    println!("decrypted: {}", hex::encode(&decrypted));
    if decrypted != plaintext {
        bail!("demo roundtrip failed");
    }
    Ok(())
}

fn parse_key_bits(value: &str) -> std::result::Result<u16, String> {
    match value {
        "128" => Ok(128),
        "192" => Ok(192),
        "256" => Ok(256),
        other => Err(format!("unsupported key size {other}; use 128, 192 or 256")),
    }
}

fn parse_key_hex(hex_str: &str) -> Result<Vec<u8>> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    KeySize::from_key_len(bytes.len())?;
    Ok(bytes)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    let mut seed_bytes = [0u8; 32];
    match seed {
        Some(value) => seed_bytes[..8].copy_from_slice(&value.to_le_bytes()),
        None => rand::rngs::OsRng.fill_bytes(&mut seed_bytes),
    }
    ChaCha20Rng::from_seed(seed_bytes)
}
