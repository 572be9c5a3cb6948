// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use clap::Parser;

use crate::emitter::OutputFormat;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Get a token for authentication with an EKS cluster", long_about = None)]
pub struct TokenOptions {
    /// The name of the cluster to generate kubeconfig file for
    #[arg(long, env("EKS_TOKEN_CLUSTER_NAME"))]
    pub cluster_name: String,
    /// AWS region name; defaults to the configured region
    #[arg(long, env("EKS_TOKEN_REGION_NAME"))]
    pub region_name: Option<String>,
    /// AWS profile used to resolve credentials; defaults to the standard chain
    #[arg(long, env("EKS_TOKEN_AWS_CONN_ID"))]
    pub aws_conn_id: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env("EKS_TOKEN_OUTPUT"))]
    pub output: OutputFormat,
}

impl Default for TokenOptions {
    fn default() -> Self {
        TokenOptions {
            cluster_name: String::new(),
            region_name: None,
            aws_conn_id: None,
            output: OutputFormat::Text,
        }
    }
}
