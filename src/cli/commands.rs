// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `predict`.
// Every default reproduces the reference IMDB run, so a bare
// `review-sentiment train` trains the same network the same way.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};

use crate::application::train_use_case::TrainConfig;
use crate::domain::sentiment::Thresholds;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the sentiment model on the IMDB reviews
    Train(TrainArgs),

    /// Classify a piece of text with the trained model
    Predict(PredictArgs),
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Extracted aclImdb directory (contains train/ and test/)
    #[arg(long, default_value = "aclImdb")]
    pub data_dir: String,

    /// Where the tokenizer, checkpoints and metrics.csv are written
    #[arg(long, default_value = "checkpoints")]
    pub output_dir: String,

    /// Target size of the subword vocabulary
    #[arg(long, default_value_t = 8185)]
    pub vocab_size: usize,

    /// Width of each token embedding
    #[arg(long, default_value_t = 20)]
    pub embedding_dim: usize,

    /// Reviews per batch
    #[arg(long, default_value_t = 38)]
    pub batch_size: usize,

    /// Size of the shuffle window over the training stream
    #[arg(long, default_value_t = 1000)]
    pub shuffle_buffer: usize,

    /// Number of full passes through the training data
    #[arg(long, default_value_t = 15)]
    pub epochs: usize,

    /// Test batches evaluated after each epoch
    #[arg(long, default_value_t = 50)]
    pub validation_steps: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-3)]
    pub lr: f64,

    /// Seed for the shuffle; random if omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use at most this many reviews per split
    #[arg(long)]
    pub limit: Option<usize>,

    /// Length the sample predictions are padded to when padding is on
    #[arg(long, default_value_t = 64)]
    pub pad_length: usize,

    /// Scores at or above this are POSITIVE
    #[arg(long, default_value_t = 0.5, allow_hyphen_values = true)]
    pub positive_threshold: f32,

    /// Scores at or below this are NEGATIVE
    #[arg(long, default_value_t = -1.0, allow_hyphen_values = true)]
    pub negative_threshold: f32,

    /// Skip the terminal charts
    #[arg(long)]
    pub no_plot: bool,
}

/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            data_dir:         a.data_dir,
            output_dir:       a.output_dir,
            vocab_size:       a.vocab_size,
            embedding_dim:    a.embedding_dim,
            batch_size:       a.batch_size,
            shuffle_buffer:   a.shuffle_buffer,
            epochs:           a.epochs,
            validation_steps: a.validation_steps,
            lr:               a.lr,
            seed:             a.seed,
            limit:            a.limit,
            pad_length:       a.pad_length,
            thresholds:       Thresholds::new(a.positive_threshold, a.negative_threshold),
            plot:             !a.no_plot,
        }
    }
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// The review text to classify
    #[arg(long)]
    pub text: String,

    /// Zero-pad the encoded text to the trained pad length
    #[arg(long)]
    pub pad: bool,

    /// Directory written by `train`
    #[arg(long, default_value = "checkpoints")]
    pub output_dir: String,
}
