// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! # KMS Envelope
//!
//! Encrypts and decrypts small payloads with a managed KMS key, optionally
//! binding additional authenticated data, and moves ciphertext around as
//! base64 text.
//!
//! ## Modules
//!
//! - [`cli`]: Command entry point
//! - [`configuration`]: CLI argument parsing with clap
//! - [`constants`]: Limits and KMS error codes
//! - [`envelope`]: The encrypt/decrypt wrapper
//! - [`errors`]: Error types
//! - [`models`]: Request/response types and per-call options
//! - [`service`]: `KeyCryptoService` capability and the AWS KMS implementation
//! - [`utils`]: base64 helpers
//!
//! ## Usage
//!
//! ```bash
//! echo -n 'secret' | kms-envelope encrypt --key-id alias/vault --aad tenant-1
//! echo 'AQICAHh...' | kms-envelope decrypt --key-id alias/vault --aad tenant-1
//! ```

pub mod cli;
pub mod configuration;
pub mod constants;
pub mod envelope;
pub mod errors;
pub mod models;
pub mod service;
pub mod utils;
