// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # EKS Token
//!
//! Issues short-lived bearer tokens that authenticate a Kubernetes client to
//! an EKS control plane with AWS IAM identity.
//!
//! ## Architecture
//!
//! ```text
//! CLI -> EksTokenSource -> CredentialProvider (aws-config)
//!             |
//!             +-> signer  (aws-sigv4 presigned STS GetCallerIdentity)
//!             +-> encoder (k8s-aws-v1.<base64url>)
//!        emitter -> stdout
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command entry point wiring the pieces together
//! - [`clock`]: Injectable time source
//! - [`configuration`]: CLI argument parsing with clap
//! - [`constants`]: Token format and signing constants
//! - [`credentials`]: IAM credential and region resolution
//! - [`emitter`]: Credential response rendering (text, ExecCredential JSON)
//! - [`encoder`]: Bearer token encoding and expiration
//! - [`errors`]: Error types
//! - [`hook`]: `IdentityTokenSource` capability and its EKS implementation
//! - [`models`]: Cluster name, credential and token types with validation
//! - [`signer`]: STS endpoint resolution and SigV4 query presigning
//!
//! ## Usage
//!
//! ```bash
//! eks-token --cluster-name my-cluster --region-name us-east-1 --aws-conn-id my-profile
//! ```
//!
//! ## Security Considerations
//!
//! - Tokens are bound to one cluster through the signed `x-k8s-aws-id` header
//! - STS accepts the presigned request for 60 seconds; clients are told to
//!   discard the token 14 minutes after minting
//! - Credential material is zeroized on drop
//! - The STS host is resolved from the SDK endpoint rules for the region's partition
//! - Logs go to stderr and never contain credentials or tokens

pub mod cli;
pub mod clock;
pub mod configuration;
pub mod constants;
pub mod credentials;
pub mod emitter;
pub mod encoder;
pub mod errors;
pub mod hook;
pub mod models;
pub mod signer;
