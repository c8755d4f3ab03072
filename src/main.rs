//! Simscore CLI entrypoint.
//!
//! Protocol: one JSON object on stdin (`{"submission": "...", "others":
//! [...]}`), one JSON array of cosine scores on stdout. Diagnostics go to
//! stderr; any failure exits non-zero without emitting partial output.

use std::io::Read;

use mimalloc::MiMalloc;

use simscore::config::Config;
use simscore::embedding::{MiniLmConfig, MiniLmEmbedder};
use simscore::pipeline::{ScoreRequest, ScoringPipeline};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> anyhow::Result<()> {
    // stdout is the result channel; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let minilm_config = if config.embedder_stub {
        tracing::warn!(
            "{} is set, scores will be synthetic",
            Config::ENV_EMBEDDER_STUB
        );
        MiniLmConfig::stub()
    } else if let Some(model_dir) = &config.model_path {
        let minilm = MiniLmConfig::new(model_dir.clone());
        match &config.tokenizer_path {
            Some(tokenizer_path) => minilm.with_tokenizer_path(tokenizer_path.clone()),
            None => minilm,
        }
    } else {
        anyhow::bail!(
            "{} is not set; set it to the MiniLM model directory (or set {}=1 for a deterministic stub)",
            Config::ENV_MODEL_PATH,
            Config::ENV_EMBEDDER_STUB,
        );
    };

    let embedder = MiniLmEmbedder::load(minilm_config)?;
    tracing::info!(embedder = ?embedder, "Embedder ready");

    let pipeline = ScoringPipeline::new(embedder);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let request: ScoreRequest = serde_json::from_str(&input)?;

    tracing::info!(
        submission_len = request.submission.len(),
        num_others = request.others.len(),
        "Scoring request received"
    );

    let scores = pipeline.run_request(&request)?;

    // Serialize fully before touching stdout so a failure can never leave
    // a truncated array behind.
    let rendered = serde_json::to_string(&scores)?;
    println!("{rendered}");

    Ok(())
}
