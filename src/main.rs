use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use reviewlens::config::{Config, SimilarityBackend};
use reviewlens::output::{json, round_to, terminal};
use reviewlens::pipeline::analysis::{analyze_file, AnalysisOptions};
use reviewlens::pipeline::context::AnalysisContext;

/// reviewlens: sentiment and similarity analysis for product reviews.
///
/// Cleans review text, labels each review Positive / Neutral / Negative, and
/// measures how similar two chosen reviews are.
#[derive(Parser)]
#[command(name = "reviewlens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a review CSV: normalized preview, sentiment sample, similarity
    Run {
        /// Review CSV file (default: REVIEWLENS_CSV_PATH or ./amazon_product_reviews.csv)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Name of the review text column (default: reviews.text)
        #[arg(long)]
        column: Option<String>,

        /// Number of normalized reviews to preview
        #[arg(long, default_value = "10")]
        preview: usize,

        /// Number of reviews to classify
        #[arg(long, default_value = "5")]
        sample: usize,

        /// Original row indices of the two reviews to compare
        #[arg(long, num_args = 2, value_names = ["FIRST", "SECOND"], default_values_t = [5, 150])]
        pair: Vec<usize>,

        /// Skip the similarity comparison
        #[arg(long)]
        no_similarity: bool,

        /// Also write the report as JSON to this path ("-" for stdout only)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Use lexical similarity even if the embedding model is available
        #[arg(long)]
        lexical: bool,
    },

    /// Normalize and classify a single piece of text
    Text {
        /// The review text
        text: String,

        /// Score the text as written instead of its normalized form, so
        /// negations and intensifiers ("not", "very") are taken into account
        #[arg(long)]
        raw: bool,
    },

    /// Normalize two texts and print their similarity
    Compare {
        first: String,
        second: String,

        /// Use lexical similarity even if the embedding model is available
        #[arg(long)]
        lexical: bool,
    },

    /// Download the ONNX sentence embedding model (~90 MB)
    DownloadModel,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reviewlens=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            csv,
            column,
            preview,
            sample,
            pair,
            no_similarity,
            json: json_path,
            lexical,
        } => {
            let mut config = Config::load()?;
            if let Some(csv) = csv {
                config.csv_path = csv;
            }
            if let Some(column) = column {
                config.text_column = column;
            }
            if lexical {
                config.similarity_backend = SimilarityBackend::Lexical;
            }
            config.require_csv()?;

            let options = AnalysisOptions {
                preview,
                sample,
                pair: match pair.as_slice() {
                    [first, second] if !no_similarity => Some((*first, *second)),
                    _ => None,
                },
            };

            info!(path = %config.csv_path.display(), column = %config.text_column, "Starting analysis");

            let ctx = AnalysisContext::from_config(&config)?;
            let report = analyze_file(&ctx, &config.csv_path, &config.text_column, &options)?;

            let json_to_stdout = json_path.as_deref() == Some(std::path::Path::new("-"));
            if !json_to_stdout {
                terminal::display_report(&report);
            }
            if let Some(path) = json_path {
                json::write_report(&report, &path)?;
            }
        }

        Commands::Text { text, raw } => {
            let ctx = AnalysisContext::lexical();
            let normalized = ctx.normalize(&text);
            let result = if raw {
                ctx.classify(&text)?
            } else {
                ctx.classify(&normalized)?
            };

            println!("Normalized: {}", normalized.bold());
            println!("{}", terminal::sentiment_line(1, &result));
        }

        Commands::Compare {
            first,
            second,
            lexical,
        } => {
            let mut config = Config::load()?;
            if lexical {
                config.similarity_backend = SimilarityBackend::Lexical;
            }
            let ctx = AnalysisContext::from_config(&config)?;

            let a = ctx.normalize(&first);
            let b = ctx.normalize(&second);
            let score = ctx.compare(&a, &b)?;

            println!("  {}", a.dimmed());
            println!("  {}", b.dimmed());
            println!(
                "Similarity is {} (model: {}).",
                round_to(score, 2),
                ctx.similarity.name()
            );
        }

        Commands::DownloadModel => {
            let config = Config::load()?;
            let model_dir = &config.model_dir;

            println!("Downloading ONNX model...");
            println!("  Destination: {}", model_dir.display());

            reviewlens::similarity::download::download_model(model_dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
            println!("`reviewlens run` will now use semantic similarity.");
        }
    }

    Ok(())
}
