use burn::{
    nn::{
        loss::BinaryCrossEntropyLossConfig,
        Embedding, EmbeddingConfig,
        Linear, LinearConfig,
    },
    prelude::*,
};

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize.
#[derive(Config, Debug)]
pub struct SentimentModelConfig {
    pub vocab_size: usize,
    #[config(default = 20)]
    pub embedding_dim: usize,
}

impl SentimentModelConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> SentimentModel<B> {
        let embedding = EmbeddingConfig::new(self.vocab_size, self.embedding_dim).init(device);
        let output    = LinearConfig::new(self.embedding_dim, 1).init(device);
        SentimentModel { embedding, output }
    }
}

/// Embedding lookup → mean over tokens → one logit.
///
/// Padding positions take part in the mean; the pad id has an
/// embedding row like any other token.
#[derive(Module, Debug)]
pub struct SentimentModel<B: Backend> {
    pub embedding: Embedding<B>,
    pub output:    Linear<B>,
}

impl<B: Backend> SentimentModel<B> {
    /// tokens: [batch, seq_len] → logits: [batch]
    pub fn forward(&self, tokens: Tensor<B, 2, Int>) -> Tensor<B, 1> {
        let embedded = self.embedding.forward(tokens); // [batch, seq_len, dim]
        let [batch_size, _, dim] = embedded.dims();

        let pooled = embedded.mean_dim(1).reshape([batch_size, dim]);
        self.output.forward(pooled).reshape([batch_size])
    }

    /// Binary cross-entropy on raw logits, plus the logits for metrics.
    pub fn forward_loss(
        &self,
        tokens: Tensor<B, 2, Int>,
        labels: Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 1>) {
        let logits = self.forward(tokens);
        let loss = BinaryCrossEntropyLossConfig::new()
            .with_logits(true)
            .init(&logits.device())
            .forward(logits.clone(), labels);
        (loss, logits)
    }

    /// Layer table with parameter counts, printed before training.
    pub fn summary(&self) -> String {
        let [vocab, dim] = self.embedding.weight.dims();
        let embedding_params = vocab * dim;
        let output_params    = self.num_params() - embedding_params;

        let mut out = String::new();
        out.push_str("Layer                      Output shape          Params\n");
        out.push_str("────────────────────────────────────────────────────────\n");
        out.push_str(&format!("{:<27}{:<22}{}\n", "embedding (Embedding)", format!("[batch, seq, {dim}]"), embedding_params));
        out.push_str(&format!("{:<27}{:<22}{}\n", "pooling (mean over seq)", format!("[batch, {dim}]"), 0));
        out.push_str(&format!("{:<27}{:<22}{}\n", "output (Linear)", "[batch]", output_params));
        out.push_str("────────────────────────────────────────────────────────\n");
        out.push_str(&format!("Total params: {}\n", self.num_params()));
        out
    }
}

/// Logit above which a row counts as a positive prediction in the
/// accuracy metric. 0 is the sigmoid 0.5 point; comparing raw logits
/// against 0.5 would undercount positives.
pub const DECISION_LOGIT: f64 = 0.0;

/// Number of rows whose logit lands on the right side of DECISION_LOGIT.
pub fn count_correct<B: Backend>(logits: Tensor<B, 1>, labels: Tensor<B, 1, Int>) -> usize {
    let predicted = logits.greater_elem(DECISION_LOGIT).int();
    predicted
        .equal(labels)
        .int()
        .sum()
        .into_scalar()
        .elem::<i64>() as usize
}
