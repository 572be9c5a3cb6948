// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::models::{CallOptions, RetryPolicy};

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Encrypt and decrypt with a managed KMS key", long_about = None)]
pub struct EnvelopeOptions {
    #[command(subcommand)]
    pub command: Command,
    #[arg(long, global = true, env("KMS_ENVELOPE_REGION_NAME"))]
    pub region_name: Option<String>,
    #[arg(long, global = true, env("KMS_ENVELOPE_AWS_CONN_ID"))]
    pub aws_conn_id: Option<String>,
    /// Override the client's maximum attempts for this call
    #[arg(long, global = true)]
    pub max_attempts: Option<u32>,
    /// Operation timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Encrypt plaintext read from stdin, print base64 ciphertext
    Encrypt {
        #[arg(long, env("KMS_ENVELOPE_KEY_ID"))]
        key_id: String,
        /// Additional authenticated data bound to the ciphertext
        #[arg(long)]
        aad: Option<String>,
    },
    /// Decrypt base64 ciphertext read from stdin, print plaintext
    Decrypt {
        #[arg(long, env("KMS_ENVELOPE_KEY_ID"))]
        key_id: String,
        /// Additional authenticated data given at encryption time
        #[arg(long)]
        aad: Option<String>,
    },
}

impl EnvelopeOptions {
    pub fn call_options(&self) -> CallOptions {
        CallOptions {
            retry: self
                .max_attempts
                .map(|max_attempts| RetryPolicy { max_attempts }),
            timeout: self.timeout_secs.map(Duration::from_secs),
            metadata: Vec::new(),
        }
    }
}
