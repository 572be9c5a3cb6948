// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use anyhow::Result;
use clap::Parser;
use kms_envelope::configuration::EnvelopeOptions;
use kms_envelope::envelope::Envelope;
use kms_envelope::{cli, service::AwsKmsService};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        // stdout carries ciphertext or plaintext, logs go to stderr.
        .with_writer(std::io::stderr)
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .init();

    let options = EnvelopeOptions::parse();

    tracing::debug!("[envelope] {:?}", &options);

    let service =
        AwsKmsService::from_env(options.aws_conn_id.clone(), options.region_name.clone()).await;
    let envelope = Envelope::with_options(service, options.call_options());

    let mut stdout = std::io::stdout();
    cli::run(&options.command, &envelope, std::io::stdin(), &mut stdout).await
}
