use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use engine::persist::{load_context, load_meta, ArtifactPaths};
use engine::{EngineConfig, LexiconTagger, NearestPolicy, VectorSpace};
use recommender::{read_profile, run};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "recommender")]
#[command(about = "Recommend job postings and application vocabulary for a body of project text", long_about = None)]
struct Cli {
    /// Directory holding vectorizer.bin, vectors.bin, postings.jsonl and meta.json
    #[arg(long, env = "MATCHER_ARTIFACTS", default_value = "./artifacts", global = true)]
    artifacts: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Nearest {
    /// Skip the single nearest posting
    Drop,
    /// Keep the nearest posting
    Keep,
    /// Skip only postings within --epsilon of the profile
    Identical,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank postings against profile text (a file or a directory of .md/.txt files)
    Recommend {
        #[arg(long)]
        profile: PathBuf,
        /// Number of postings to return
        #[arg(long, default_value_t = 10)]
        k: usize,
        /// Tokens shown per part of speech
        #[arg(long, default_value_t = 10)]
        top_terms: usize,
        #[arg(long, value_enum, default_value_t = Nearest::Drop)]
        nearest: Nearest,
        #[arg(long, default_value_t = 1e-4)]
        epsilon: f32,
        /// Search URL prefix for posting links
        #[arg(long, env = "MATCHER_SEARCH_URL", default_value = engine::format::DEFAULT_SEARCH_URL)]
        search_url: String,
        /// Print JSON instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show what the artifact directory contains
    Inspect,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    let paths = ArtifactPaths::new(&cli.artifacts);

    match cli.command {
        Commands::Recommend { profile, k, top_terms, nearest, epsilon, search_url, json } => {
            let nearest = match nearest {
                Nearest::Drop => NearestPolicy::DropNearest,
                Nearest::Keep => NearestPolicy::KeepNearest,
                Nearest::Identical => NearestPolicy::DropIdentical { epsilon },
            };
            let config = EngineConfig { top_k: k, top_terms, nearest, search_url };
            config.validate()?;

            let ctx = load_context(&paths)?;
            let texts = read_profile(&profile)?;
            match run(&ctx, &config, &LexiconTagger::new(), &texts) {
                Ok(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
                Ok(report) => print!("{}", report.render_text()),
                Err(err) => {
                    tracing::warn!(error = %err, "recommendation failed");
                    eprintln!("{}", err.status_message());
                    std::process::exit(2);
                }
            }
        }
        Commands::Inspect => {
            let meta = load_meta(&paths)?;
            let ctx = load_context(&paths)?;
            println!("artifact version: {}", meta.version);
            println!("postings:         {}", ctx.corpus().len());
            println!("dimensions:       {}", ctx.space().dim());
            println!("vocabulary:       {}", ctx.space().vocabulary_len());
        }
    }
    Ok(())
}
