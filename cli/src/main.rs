//! blockpipe — chunked parallel file encryption.
//!
//! Usage:
//!   blockpipe keygen                      - Write fresh key and IV files
//!   blockpipe encrypt <file>              - Encrypt to <file>.enc
//!   blockpipe decrypt <file>.enc          - Restore the original file
//!
//! Decrypt must run with the same chunk size as the encrypt pass; the
//! ciphertext carries no framing.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use blockpipe_core::cipher::KeystreamCipher;
use blockpipe_core::parallelism::ParallelismProfile;
use blockpipe_core::pipeline::{run_decrypt_pipeline, run_encrypt_pipeline};
use blockpipe_core::telemetry::TelemetrySnapshot;
use blockpipe_core::{sidecar, utils, KeyMaterial};

#[derive(Parser)]
#[command(name = "blockpipe")]
#[command(version = "0.1.0")]
#[command(about = "Chunked parallel file encryption")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh key and IV pair
    Keygen {
        /// Key file to write (32 bytes)
        #[arg(long, default_value = "key.bin")]
        key: PathBuf,

        /// IV file to write (16 bytes)
        #[arg(long, default_value = "iv.bin")]
        iv: PathBuf,
    },

    /// Encrypt a file
    Encrypt {
        /// Input file
        input: PathBuf,

        /// Output file (default: <input>.enc)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        opts: PipelineOpts,
    },

    /// Decrypt a file
    Decrypt {
        /// Encrypted input file
        input: PathBuf,

        /// Output file (default: input with the .enc suffix stripped)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        opts: PipelineOpts,
    },
}

#[derive(clap::Args)]
struct PipelineOpts {
    /// Key file (32 bytes)
    #[arg(long, default_value = "key.bin")]
    key: PathBuf,

    /// IV file (16 bytes)
    #[arg(long, default_value = "iv.bin")]
    iv: PathBuf,

    /// Chunk size in bytes (rounded to the allowed table)
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Worker threads (default: sized from the machine)
    #[arg(long)]
    workers: Option<usize>,

    /// Print the run telemetry as JSON
    #[arg(long)]
    telemetry: bool,
}

impl PipelineOpts {
    fn chunk_size(&self) -> usize {
        utils::best_chunk_size(self.chunk_size)
    }

    fn profile(&self, chunk_size: usize) -> ParallelismProfile {
        match self.workers {
            Some(1) => ParallelismProfile::single_threaded(),
            Some(n) => ParallelismProfile::fixed(n, n * 4),
            None => ParallelismProfile::dynamic(chunk_size, 0.25, 64),
        }
    }

    fn keys(&self) -> Result<KeyMaterial> {
        KeyMaterial::load(&self.key, &self.iv).context("loading key material")
    }
}

fn report(snapshot: &TelemetrySnapshot, telemetry: bool) {
    if telemetry {
        println!("{}", snapshot.to_json());
    } else {
        println!(
            "{} chunks, {} bytes in {} ms ({:.1} MiB/s, {} workers)",
            snapshot.chunks_processed,
            snapshot.bytes_out,
            snapshot.elapsed_ms,
            snapshot.throughput_mib_s,
            snapshot.workers
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Keygen { key, iv } => {
            if key.exists() || iv.exists() {
                bail!(
                    "refusing to overwrite existing {} / {}",
                    key.display(),
                    iv.display()
                );
            }
            KeyMaterial::generate()
                .save(&key, &iv)
                .context("writing key material")?;
            println!("wrote {} and {}", key.display(), iv.display());
        }

        Commands::Encrypt { input, output, opts } => {
            let chunk_size = opts.chunk_size();
            let profile = opts.profile(chunk_size);
            let keys = opts.keys()?;
            let output = output.unwrap_or_else(|| sidecar::encrypted_path(&input));

            let cipher = KeystreamCipher::new();
            let snapshot = run_encrypt_pipeline(
                &input,
                &output,
                &cipher,
                &keys,
                chunk_size,
                &profile,
            )
            .with_context(|| format!("encrypting {}", input.display()))?;

            report(&snapshot, opts.telemetry);
            println!("encrypted to {}", output.display());
        }

        Commands::Decrypt { input, output, opts } => {
            let chunk_size = opts.chunk_size();
            let profile = opts.profile(chunk_size);
            let keys = opts.keys()?;
            let output = match output {
                Some(path) => path,
                None => sidecar::restored_path(&input)
                    .context("deriving the output name; pass --output explicitly")?,
            };

            let cipher = KeystreamCipher::new();
            let snapshot = run_decrypt_pipeline(
                &input,
                &output,
                &cipher,
                &keys,
                chunk_size,
                &profile,
            )
            .with_context(|| format!("decrypting {}", input.display()))?;

            report(&snapshot, opts.telemetry);
            println!("decrypted to {}", output.display());
        }
    }

    Ok(())
}
