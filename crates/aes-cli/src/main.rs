//! Command-line interface for `aes-core`.

#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use aes_core::{
    decrypt_cbc, decrypt_ecb, encrypt_block, encrypt_cbc, encrypt_ecb, Block, KeySize, MasterKey,
};
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{debug, info};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// AES CLI.
#[derive(Parser)]
#[command(
    name = "aes",
    version,
    author,
    about = "AES-128/192/256 encryption in ECB and CBC modes with PKCS#7 padding"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Electronic codebook: blocks enciphered independently.
    Ecb,
    /// Cipher block chaining: requires `--iv-hex`.
    Cbc,
}

#[derive(Subcommand)]
enum Commands {
    /// Pad and encrypt a message.
    Encrypt {
        /// Block cipher mode.
        #[arg(long, value_enum, default_value_t = Mode::Cbc)]
        mode: Mode,
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// 16-byte IV as 32 hex characters (CBC only).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Plaintext given as UTF-8 text.
        #[arg(long, conflicts_with_all = ["hex", "input"])]
        text: Option<String>,
        /// Plaintext given as hex.
        #[arg(long, value_name = "HEX", conflicts_with = "input")]
        hex: Option<String>,
        /// Plaintext read from a file.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write raw ciphertext here instead of printing hex.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt a message and strip its padding.
    Decrypt {
        /// Block cipher mode.
        #[arg(long, value_enum, default_value_t = Mode::Cbc)]
        mode: Mode,
        /// AES key as 32, 48 or 64 hex characters.
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// 16-byte IV as 32 hex characters (CBC only).
        #[arg(long, value_name = "HEX")]
        iv_hex: Option<String>,
        /// Ciphertext given as hex.
        #[arg(long, value_name = "HEX", conflicts_with = "input")]
        hex: Option<String>,
        /// Ciphertext read from a file.
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Write raw plaintext here instead of printing it.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Print the plaintext as UTF-8 text rather than hex.
        #[arg(long, default_value_t = false)]
        text: bool,
    },
    /// Run a local demo: random key and IV, encrypt a sample text, decrypt back.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
        /// Key size in bits.
        #[arg(long, default_value_t = 128, value_parser = parse_key_bits)]
        key_bits: u16,
    },
    /// Check the block cipher against the FIPS-197 Appendix C vectors.
    Kat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Encrypt {
            mode,
            key_hex,
            iv_hex,
            text,
            hex,
            input,
            output,
        } => {
            let plaintext = read_source(text.as_deref(), hex.as_deref(), input.as_deref())?;
            cmd_encrypt(mode, &key_hex, iv_hex.as_deref(), &plaintext, output.as_deref())
        }
        Commands::Decrypt {
            mode,
            key_hex,
            iv_hex,
            hex,
            input,
            output,
            text,
        } => {
            let ciphertext = read_source(None, hex.as_deref(), input.as_deref())?;
            cmd_decrypt(
                mode,
                &key_hex,
                iv_hex.as_deref(),
                &ciphertext,
                output.as_deref(),
                text,
            )
        }
        Commands::Demo { seed, key_bits } => cmd_demo(seed, key_bits),
        Commands::Kat => cmd_kat(),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn cmd_encrypt(
    mode: Mode,
    key_hex: &str,
    iv_hex: Option<&str>,
    plaintext: &[u8],
    output: Option<&Path>,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    info!(
        "encrypting {} bytes with {:?} in {:?} mode",
        plaintext.len(),
        key.size(),
        mode
    );
    let ciphertext = match mode {
        Mode::Ecb => {
            reject_iv(iv_hex)?;
            encrypt_ecb(plaintext, &key).context("ECB encryption")?
        }
        Mode::Cbc => {
            let iv = require_iv(iv_hex)?;
            encrypt_cbc(plaintext, &key, &iv).context("CBC encryption")?
        }
    };
    match output {
        Some(path) => {
            fs::write(path, &ciphertext).with_context(|| format!("write {}", path.display()))?
        }
        None => println!("{}", hex::encode(&ciphertext)),
    }
    Ok(())
}

fn cmd_decrypt(
    mode: Mode,
    key_hex: &str,
    iv_hex: Option<&str>,
    ciphertext: &[u8],
    output: Option<&Path>,
    as_text: bool,
) -> Result<()> {
    let key = parse_key_hex(key_hex)?;
    info!(
        "decrypting {} bytes with {:?} in {:?} mode",
        ciphertext.len(),
        key.size(),
        mode
    );
    let plaintext = match mode {
        Mode::Ecb => {
            reject_iv(iv_hex)?;
            decrypt_ecb(ciphertext, &key).context("ECB decryption")?
        }
        Mode::Cbc => {
            let iv = require_iv(iv_hex)?;
            decrypt_cbc(ciphertext, &key, &iv).context("CBC decryption")?
        }
    };
    match output {
        Some(path) => {
            fs::write(path, &plaintext).with_context(|| format!("write {}", path.display()))?
        }
        None if as_text => {
            let text = String::from_utf8(plaintext).context("plaintext is not valid UTF-8")?;
            println!("{text}");
        }
        None => println!("{}", hex::encode(&plaintext)),
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>, key_bits: u16) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = vec![0u8; usize::from(key_bits / 8)];
    rng.fill_bytes(&mut key_bytes);
    let key = MasterKey::from_bytes(&key_bytes).context("demo key")?;
    let mut iv = [0u8; 16];
    rng.fill_bytes(&mut iv);

    let sample = "z7E9PEB!h9xS5LfWbaq*$$EkKGFp9rze8Us@yBViBey4Ry";
    println!("demo key: {}", hex::encode(&key_bytes));
    println!("demo iv: {}", hex::encode(iv));
    println!("plaintext: {sample}");

    let ecb = encrypt_ecb(sample.as_bytes(), &key)?;
    let ecb_back = decrypt_ecb(&ecb, &key)?;
    println!("ecb ciphertext: {}", hex::encode(&ecb));

    let cbc = encrypt_cbc(sample.as_bytes(), &key, &iv)?;
    let cbc_back = decrypt_cbc(&cbc, &key, &iv)?;
    println!("cbc ciphertext: {}", hex::encode(&cbc));

    if ecb_back != sample.as_bytes() || cbc_back != sample.as_bytes() {
        bail!("demo roundtrip failed");
    }
    println!("decrypted: {}", String::from_utf8(cbc_back)?);
    Ok(())
}

// FIPS-197 Appendix C: common plaintext, then key and expected ciphertext per size.
const KAT_PLAIN: &str = "00112233445566778899aabbccddeeff";
const KAT_VECTORS: [(KeySize, &str, &str); 3] = [
    (
        KeySize::Aes128,
        "000102030405060708090a0b0c0d0e0f",
        "69c4e0d86a7b0430d8cdb78070b4c55a",
    ),
    (
        KeySize::Aes192,
        "000102030405060708090a0b0c0d0e0f1011121314151617",
        "dda97ca4864cdfe06eaf70a0ec0d7191",
    ),
    (
        KeySize::Aes256,
        "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        "8ea2b7ca516745bfeafc49904b496089",
    ),
];

fn cmd_kat() -> Result<()> {
    let plain = parse_block_hex(KAT_PLAIN, "plaintext")?;
    for (size, key_hex, expected) in KAT_VECTORS {
        let key = parse_key_hex(key_hex)?;
        let actual = hex::encode(encrypt_block(&plain, &key.expand()));
        debug!("{size:?}: expected {expected}, got {actual}");
        if actual != expected {
            bail!("{size:?} known-answer mismatch: expected {expected}, got {actual}");
        }
        println!("{size:?}: ok");
    }
    Ok(())
}

fn read_source(
    text: Option<&str>,
    hex_str: Option<&str>,
    input: Option<&Path>,
) -> Result<Vec<u8>> {
    match (text, hex_str, input) {
        (Some(text), None, None) => Ok(text.as_bytes().to_vec()),
        (None, Some(hex_str), None) => hex::decode(hex_str.trim()).context("decode input hex"),
        (None, None, Some(path)) => {
            fs::read(path).with_context(|| format!("read {}", path.display()))
        }
        _ => bail!("provide exactly one input source"),
    }
}

fn parse_key_bits(value: &str) -> std::result::Result<u16, String> {
    match value {
        "128" => Ok(128),
        "192" => Ok(192),
        "256" => Ok(256),
        other => Err(format!("unsupported key size {other}; expected 128, 192 or 256")),
    }
}

fn parse_key_hex(hex_str: &str) -> Result<MasterKey> {
    let bytes = hex::decode(hex_str.trim()).context("decode key hex")?;
    MasterKey::from_bytes(&bytes)
        .context("AES key must be 16, 24 or 32 bytes (32, 48 or 64 hex characters)")
}

fn parse_block_hex(hex_str: &str, what: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).with_context(|| format!("decode {what} hex"))?;
    if bytes.len() != 16 {
        bail!("{what} must be 16 bytes (32 hex characters)");
    }
    let mut block = [0u8; 16];
    block.copy_from_slice(&bytes);
    Ok(block)
}

fn require_iv(iv_hex: Option<&str>) -> Result<Block> {
    match iv_hex {
        Some(hex_str) => parse_block_hex(hex_str, "IV"),
        None => bail!("CBC mode requires --iv-hex"),
    }
}

fn reject_iv(iv_hex: Option<&str>) -> Result<()> {
    if iv_hex.is_some() {
        bail!("ECB mode does not take an IV");
    }
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
