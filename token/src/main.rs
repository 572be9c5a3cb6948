// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::{Context, Result};
use clap::Parser;
use eks_token::clock::SystemClock;
use eks_token::configuration::TokenOptions;
use eks_token::{cli, hook::EksTokenSource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        // stdout carries the credential response, logs go to stderr.
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    let options = TokenOptions::parse();

    tracing::debug!("[token] {:?}", &options);

    let mut stdout = std::io::stdout();
    cli::run(options, EksTokenSource::new, &SystemClock, &mut stdout)
        .await
        .context("failed to issue EKS token")
}
