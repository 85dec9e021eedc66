//! OxiLZW CLI - LZW text compression from the command line
//!
//! Compresses UTF-8 text into LZW code streams and back, with a configurable
//! seed alphabet, table cap and reset policy.

mod codes;
mod commands;
mod error;
mod session;
mod utils;

use clap::{Parser, Subcommand};
use commands::{
    CodeSource, CompressOptions, DecompressOptions, ParamArgs, SweepOptions, cmd_compress,
    cmd_decompress, cmd_roundtrip, cmd_sessions_list, cmd_sessions_remove, cmd_sessions_show,
    cmd_sweep,
};
use error::Result;
use session::{DEFAULT_STORE_DIR, SessionStore};
use std::path::PathBuf;
use utils::resolve_encoding;

#[derive(Parser)]
#[command(name = "oxilzw")]
#[command(author, version, about = "LZW text compression with a configurable table")]
#[command(long_about = "
OxiLZW compresses UTF-8 text with LZW. The table is seeded with the first
--initial code points, stops learning at --max entries, and can optionally
be discarded whenever it reaches --reset.

Codes are written as space-separated decimal integers.

Examples:
  oxilzw compress notes.txt
  oxilzw compress notes.txt --initial 128 --max 2048 -o notes.codes
  oxilzw compress notes.txt --session draft
  oxilzw decompress notes.txt.lzw -o notes.out.txt
  oxilzw decompress --session draft --verify notes.txt
  oxilzw roundtrip notes.txt --preset compact
  oxilzw sweep notes.txt --write-dir out/
  oxilzw sessions list
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Session store directory
    #[arg(long, global = true, env = "OXILZW_STORE", default_value = DEFAULT_STORE_DIR)]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a text file into LZW codes
    #[command(alias = "c")]
    Compress {
        /// Text file to compress
        input: PathBuf,

        /// Output file for the codes (default: <input>.lzw unless --session is given)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also store the result as a session under this id
        #[arg(short, long)]
        session: Option<String>,

        #[command(flatten)]
        params: ParamArgs,

        /// Input text encoding label (default: UTF-8)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Decompress LZW codes back into text
    #[command(alias = "d")]
    Decompress {
        /// File holding the codes
        #[arg(required_unless_present = "session", conflicts_with = "session")]
        input: Option<PathBuf>,

        /// Decompress a stored session using its recorded parameters
        #[arg(short, long)]
        session: Option<String>,

        /// Output file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Number of seeded code points the codes were produced with
        #[arg(long = "initial", default_value_t = 256, conflicts_with = "session")]
        initial_dict_size: u32,

        /// Cap the decode table at this size
        #[arg(long = "max", conflicts_with = "session")]
        max_table_size: Option<u32>,

        /// Fail unless the result matches this text file
        #[arg(long)]
        verify: Option<PathBuf>,

        /// Encoding of the output and reference files (default: UTF-8)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Compress and decompress a file and check the result is lossless
    #[command(alias = "t")]
    Roundtrip {
        /// Text file to check
        input: PathBuf,

        #[command(flatten)]
        params: ParamArgs,

        /// Input text encoding label (default: UTF-8)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Compare every preset on one file
    Sweep {
        /// Text file to compress
        input: PathBuf,

        /// Write each preset's codes into this directory
        #[arg(short, long)]
        write_dir: Option<PathBuf>,

        /// Input text encoding label (default: UTF-8)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,
    },

    /// Manage stored sessions
    Sessions {
        #[command(subcommand)]
        action: SessionsAction,
    },
}

#[derive(Subcommand)]
enum SessionsAction {
    /// List stored sessions
    #[command(alias = "ls")]
    List {
        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show one session with its codes
    Show {
        /// Session id
        id: String,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Delete a session
    #[command(alias = "rm")]
    Remove {
        /// Session id
        id: String,
    },
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let store = SessionStore::open(cli.store);

    match cli.command {
        Commands::Compress {
            input,
            output,
            session,
            params,
            encoding,
            json,
        } => cmd_compress(
            &input,
            &params.config(),
            &store,
            &CompressOptions {
                output: output.as_deref(),
                session: session.as_deref(),
                encoding: resolve_encoding(encoding.as_deref())?,
                json,
            },
        ),
        Commands::Decompress {
            input,
            session,
            output,
            initial_dict_size,
            max_table_size,
            verify,
            encoding,
            json,
        } => {
            let source = match (&input, &session) {
                (_, Some(id)) => CodeSource::Session(id),
                (Some(path), None) => CodeSource::File(path),
                (None, None) => unreachable!("clap requires an input or a session"),
            };
            cmd_decompress(
                &source,
                &store,
                &DecompressOptions {
                    output: output.as_deref(),
                    initial_dict_size,
                    max_table_size,
                    verify: verify.as_deref(),
                    encoding: resolve_encoding(encoding.as_deref())?,
                    json,
                },
            )
        }
        Commands::Roundtrip {
            input,
            params,
            encoding,
            json,
        } => cmd_roundtrip(
            &input,
            &params.config(),
            resolve_encoding(encoding.as_deref())?,
            json,
        ),
        Commands::Sweep {
            input,
            write_dir,
            encoding,
            json,
            progress,
        } => cmd_sweep(
            &input,
            &SweepOptions {
                write_dir: write_dir.as_deref(),
                encoding: resolve_encoding(encoding.as_deref())?,
                json,
                progress,
            },
        ),
        Commands::Sessions { action } => match action {
            SessionsAction::List { json } => cmd_sessions_list(&store, json),
            SessionsAction::Show { id, json } => cmd_sessions_show(&store, &id, json),
            SessionsAction::Remove { id } => cmd_sessions_remove(&store, &id),
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
