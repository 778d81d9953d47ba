use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use tldw::cli::{Cli, Command};
use tldw::client::ApiClient;
use tldw::config::Config;
use tldw::logging;
use tldw::server::SummarizeServer;
use tldw::submit::{self, StdoutPage};
use tldw::summarize::TranscriptSummarizer;
use tldw::ui;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // The UI keeps its loop on this thread and only borrows the runtime for
    // submit tasks, so the runtime is built here rather than with a main
    // macro.
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    match cli.into_command() {
        Command::Ui => {
            logging::init_for_tui();
            ui::runtime::run(&config, runtime.handle().clone())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve(args) => {
            logging::init();
            let bind_addr = args.bind.unwrap_or_else(|| config.server.bind_addr.clone());
            let summarizer = Arc::new(TranscriptSummarizer::new(
                config.summarizer.language.clone(),
                config.summarizer.max_sentences,
            ));
            runtime.block_on(async {
                let mut server = SummarizeServer::new(summarizer);
                server.bind(&bind_addr).await?;
                server.run().await
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Summarize(args) => {
            logging::init();
            let client = ApiClient::new(config.client.base_url.clone());
            let mut page = StdoutPage::new(args.url);
            runtime.block_on(submit::submit(&mut page, &client));

            let failed = page.last_outcome().is_some_and(|outcome| outcome.is_error());
            Ok(if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
