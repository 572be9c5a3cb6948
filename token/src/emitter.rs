// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Rendering and emission of the credential response.
//!
//! A [`CredentialResponse`] is built once and rendered through an
//! [`OutputFormat`]:
//!
//! | Format | Output |
//! |--------|--------|
//! | `text` | `expiration_timestamp: 1995-02-14T00:14:00Z, token: k8s-aws-v1....` |
//! | `json` | `ExecCredential` document for `client.authentication.k8s.io/v1beta1` |

use std::io::Write;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::constants::{EXEC_CREDENTIAL_API_VERSION, EXEC_CREDENTIAL_KIND, TIMESTAMP_FORMAT};
use crate::errors::TokenError;
use crate::models::BearerToken;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `expiration_timestamp: <timestamp>, token: <token>`
    #[default]
    Text,
    /// Kubernetes `ExecCredential` JSON
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialResponse {
    token: BearerToken,
    expiration: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecCredential<'a> {
    kind: &'static str,
    api_version: &'static str,
    spec: ExecCredentialSpec,
    status: ExecCredentialStatus<'a>,
}

#[derive(Serialize)]
struct ExecCredentialSpec {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecCredentialStatus<'a> {
    expiration_timestamp: String,
    token: &'a str,
}

impl CredentialResponse {
    pub fn new(token: BearerToken, expiration: DateTime<Utc>) -> Self {
        Self { token, expiration }
    }

    pub fn token(&self) -> &BearerToken {
        &self.token
    }

    pub fn expiration(&self) -> DateTime<Utc> {
        self.expiration
    }

    /// Expiration as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn expiration_timestamp(&self) -> String {
        self.expiration.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, TokenError> {
        match format {
            OutputFormat::Text => Ok(format!(
                "expiration_timestamp: {}, token: {}\n",
                self.expiration_timestamp(),
                self.token
            )),
            OutputFormat::Json => {
                let document = ExecCredential {
                    kind: EXEC_CREDENTIAL_KIND,
                    api_version: EXEC_CREDENTIAL_API_VERSION,
                    spec: ExecCredentialSpec {},
                    status: ExecCredentialStatus {
                        expiration_timestamp: self.expiration_timestamp(),
                        token: self.token.as_str(),
                    },
                };
                let mut rendered = serde_json::to_string(&document)?;
                rendered.push('\n');
                Ok(rendered)
            }
        }
    }
}

/// Writes the rendered response to `out` in a single write.
///
/// # Errors
///
/// - [`TokenError::OutputWrite`] - the channel rejected the write or flush
pub fn emit<W: Write>(
    response: &CredentialResponse,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), TokenError> {
    let rendered = response.render(format)?;
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| {
            tracing::error!("[token] failed to write credential response: {:?}", e);
            TokenError::OutputWrite(e)
        })
}
