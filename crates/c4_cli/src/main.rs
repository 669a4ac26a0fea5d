use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use c4_core::{decode, encode, hasher::id_of_reader, C4Id, Digest, ReduceConfig, Reducer};

#[derive(Parser)]
#[command(name = "c4", version, about = "C4 ID (SMPTE ST 2114) ids and hash of hashes")]
struct Cli {
    /// JSON reducer config, e.g. {"parallel_threshold": 64}
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Pairs per round before a round runs in parallel (overrides --config)
    #[arg(long, global = true, value_name = "N")]
    parallel_threshold: Option<usize>,

    /// -v info, -vv debug, -vvv trace (RUST_LOG wins when set)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// C4 ID of each file, or of stdin when no file is given
    Id {
        files: Vec<PathBuf>,
        /// Also print the hash of hashes of all files (needs at least one file)
        #[arg(long, default_value_t = false, requires = "files")]
        aggregate: bool,
    },

    /// 128 hex chars (a SHA-512 digest) to a C4 ID
    Encode { hex: String },

    /// C4 ID to its SHA-512 digest in hex
    Decode { id: String },

    /// Hash of hashes of the given ids (one per line on stdin when none given)
    Reduce { ids: Vec<String> },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, threshold: Option<usize>) -> Result<ReduceConfig> {
    let mut cfg = match path {
        Some(p) => {
            let s = fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str(&s).with_context(|| format!("parsing config {}", p.display()))?
        }
        None => ReduceConfig::default(),
    };
    if let Some(t) = threshold {
        cfg.parallel_threshold = t;
    }
    debug!(?cfg, "reducer config");
    Ok(cfg)
}

fn file_id(path: &Path) -> Result<C4Id> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    id_of_reader(BufReader::new(f)).with_context(|| format!("reading {}", path.display()))
}

fn stdin_ids() -> Result<Vec<String>> {
    let mut out = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let t = line.trim();
        if !t.is_empty() {
            out.push(t.to_string());
        }
    }
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let reducer = Reducer::new(load_config(cli.config.as_deref(), cli.parallel_threshold)?);

    match cli.cmd {
        Cmd::Id { files, aggregate } => {
            if files.is_empty() {
                let id = id_of_reader(io::stdin().lock()).context("reading stdin")?;
                println!("{id}");
                return Ok(());
            }
            let mut ids = Vec::with_capacity(files.len());
            for path in &files {
                let id = file_id(path)?;
                println!("{id}  {}", path.display());
                ids.push(id);
            }
            if aggregate {
                let agg = reducer.reduce(&ids)?;
                info!(files = ids.len(), "aggregated");
                println!("{agg}");
            }
        }
        Cmd::Encode { hex } => {
            let digest = Digest::from_hex(&hex).context("encode: bad digest")?;
            println!("{}", encode(&digest));
        }
        Cmd::Decode { id } => {
            let digest = decode(id.trim()).with_context(|| format!("decode: {id}"))?;
            println!("{digest}");
        }
        Cmd::Reduce { ids } => {
            let ids = if ids.is_empty() { stdin_ids()? } else { ids };
            if ids.is_empty() {
                bail!("reduce: no ids given");
            }
            let out = reducer.reduce(&ids).context("reduce")?;
            info!(inputs = ids.len(), "reduced");
            println!("{out}");
        }
    }
    Ok(())
}
