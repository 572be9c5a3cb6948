// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use aws_credential_types::provider::error::CredentialsError;
use aws_sigv4::http_request::SigningError;
use validator::ValidationErrors;

#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("invalid cluster identifier: {0}")]
    InvalidClusterIdentifier(String),
    #[error("invalid region: {0}")]
    InvalidRegion(String),
    #[error("unable to resolve IAM credentials: {0}")]
    CredentialResolution(String),
    #[error("unable to sign caller identity request: {0}")]
    Signing(String),
    #[error("unable to write credential response: {0}")]
    OutputWrite(#[source] std::io::Error),
    #[error("unable to render credential response: {0}")]
    Render(String),
}

impl From<CredentialsError> for TokenError {
    fn from(source: CredentialsError) -> Self {
        tracing::error!("{:?}", source);
        TokenError::CredentialResolution(source.to_string())
    }
}

impl From<ValidationErrors> for TokenError {
    fn from(source: ValidationErrors) -> Self {
        tracing::error!("{:?}", source);
        TokenError::InvalidClusterIdentifier(source.to_string())
    }
}

impl From<SigningError> for TokenError {
    fn from(source: SigningError) -> Self {
        tracing::error!("{:?}", source);
        TokenError::Signing(source.to_string())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(source: serde_json::Error) -> Self {
        tracing::error!("{:?}", source);
        TokenError::Render(source.to_string())
    }
}
