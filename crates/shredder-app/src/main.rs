use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use shredder_anki::{AnkiConnectClient, NoteModel};
use shredder_config::Config;
use shredder_core::{Dictionary, LineSource, Pipeline, PipelineOutput, PipelineSettings};
use shredder_lang_japanese::{DirectorySource, FileListSource, JMdictLoader, MecabTagger};
use tracing_subscriber::EnvFilter;

mod report;

#[cfg(test)]
mod tests;

/// Mine Japanese subtitles for vocabulary
#[derive(Debug, Parser)]
#[command(name = "shredder", version)]
struct Cli {
    /// Files to process instead of scanning the input directory
    files: Vec<PathBuf>,

    #[arg(long)]
    input_dir: Option<PathBuf>,

    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// jmdict-simplified JSON dictionary
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// MeCab executable
    #[arg(long)]
    mecab: Option<String>,

    #[arg(long)]
    mecab_dicdir: Option<PathBuf>,

    /// Dialogue style kept from .ass files
    #[arg(long)]
    style: Option<String>,

    /// Minimum frequency for a flashcard
    #[arg(long)]
    threshold: Option<usize>,

    #[arg(long)]
    max_examples: Option<usize>,

    /// JSON config file used instead of environment variables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Push flashcards to Anki through AnkiConnect
    #[arg(long)]
    anki: bool,

    #[arg(long)]
    anki_url: Option<String>,

    #[arg(long)]
    deck: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::new(),
        };

        if !self.files.is_empty() {
            config.input.files = self.files;
        }
        if let Some(dir) = self.input_dir {
            config.input.dir = dir;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        if let Some(path) = self.dictionary {
            config.dictionary.path = path;
        }
        if let Some(command) = self.mecab {
            config.tagger.command = command;
        }
        if let Some(dir) = self.mecab_dicdir {
            config.tagger.dicdir = Some(dir);
        }
        if let Some(style) = self.style {
            config.input.style = style;
        }
        if let Some(threshold) = self.threshold {
            config.flashcard_threshold = threshold;
        }
        if let Some(max) = self.max_examples {
            config.max_examples = max;
        }
        if self.anki {
            config.anki.enabled = true;
        }
        if let Some(url) = self.anki_url {
            config.anki.url = url;
        }
        if let Some(deck) = self.deck {
            config.anki.deck = deck;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<()> {
    let config = Arc::new(config);

    let shred_config = Arc::clone(&config);
    let output = tokio::task::spawn_blocking(move || shred(&shred_config))
        .await
        .context("Pipeline task panicked")??;

    report::write_outputs(&config.output_dir, &output)?;

    if config.anki.enabled {
        let client = AnkiConnectClient::new(config.anki.url.as_str());
        let model = NoteModel::flashcard(config.anki.model.as_str());
        if let Err(e) =
            shredder_anki::export_flashcards(&client, &config.anki.deck, &model, &output.flashcards)
                .await
        {
            tracing::error!("Anki export failed: {:#}", e);
        }
    }

    Ok(())
}

/// Read the input, tag it and analyze it; nothing is written here
fn shred(config: &Config) -> Result<PipelineOutput> {
    let source: Box<dyn LineSource> = if config.input.files.is_empty() {
        Box::new(DirectorySource::new(&config.input.dir, config.input.style.as_str()))
    } else {
        Box::new(FileListSource::new(
            config.input.files.clone(),
            config.input.style.as_str(),
        ))
    };

    let lines = source.lines()?;
    tracing::info!("Processing {} lines from {}", lines.len(), source.describe());

    let dictionary = JMdictLoader::load_with_additional(
        &config.dictionary.path,
        &config.dictionary.additional_paths,
    );
    let metadata = dictionary.metadata();
    tracing::info!("Using {} ({} entries)", metadata.name, metadata.entry_count);
    let mut tagger = MecabTagger::spawn(&config.tagger.command, config.tagger.dicdir.as_deref())?;

    let pipeline = Pipeline::new(&dictionary).with_settings(PipelineSettings {
        max_examples: config.max_examples,
        flashcard_threshold: config.flashcard_threshold,
    });
    Ok(pipeline.run_lines(&mut tagger, &lines)?)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
