// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;

use aws_credential_types::Credentials;
use chrono::{DateTime, Utc};
use validator::{Validate, ValidationError};
use zeroize::ZeroizeOnDrop;

use crate::constants::MAX_CLUSTER_NAME_LENGTH;
use crate::errors::TokenError;

/// Name of the target cluster. Bound into every signed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ClusterName {
    #[validate(
        length(min = 1, max = MAX_CLUSTER_NAME_LENGTH),
        custom(function = "validate_cluster_name_charset")
    )]
    name: String,
}

impl ClusterName {
    /// Validates an EKS cluster name: 1-100 characters, starting with an
    /// alphanumeric character, followed by alphanumerics, hyphens or underscores.
    pub fn parse(name: &str) -> Result<Self, TokenError> {
        let cluster = Self {
            name: name.to_string(),
        };
        cluster.validate()?;
        Ok(cluster)
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ClusterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn validate_cluster_name_charset(name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();
    let valid_first = chars.next().is_none_or(|c| c.is_ascii_alphanumeric());
    if !valid_first || !chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::new("invalid_cluster_name"));
    }
    Ok(())
}

#[derive(Clone, ZeroizeOnDrop)]
pub struct Credential {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

// Custom Debug implementation to prevent accidental logging of sensitive data
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &"[REDACTED]")
            .field("secret_access_key", &"[REDACTED]")
            .field("session_token", &"[REDACTED]")
            .finish()
    }
}

impl From<Credentials> for Credential {
    fn from(credential: Credentials) -> Self {
        Self {
            access_key_id: credential.access_key_id().to_string(),
            secret_access_key: credential.secret_access_key().to_string(),
            session_token: credential.session_token().map(str::to_string),
        }
    }
}

/// A presigned STS `GetCallerIdentity` request.
///
/// Self-contained: whoever holds it can present it to STS without further
/// signing. The presigned request is only accepted by STS for
/// [`crate::constants::PRESIGN_EXPIRES_SECS`] after `signed_at`.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedIdentityAssertion {
    pub(crate) endpoint: String,
    pub(crate) cluster: ClusterName,
    pub(crate) signed_at: DateTime<Utc>,
    pub(crate) url: String,
    pub(crate) signature: String,
}

impl SignedIdentityAssertion {
    /// Target endpoint, e.g. `https://sts.us-east-1.amazonaws.com/`.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn cluster(&self) -> &ClusterName {
        &self.cluster
    }

    pub fn signed_at(&self) -> DateTime<Utc> {
        self.signed_at
    }

    /// Full presigned URL, signature included.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Lowercase hex SigV4 signature.
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

impl fmt::Debug for SignedIdentityAssertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedIdentityAssertion")
            .field("endpoint", &self.endpoint)
            .field("cluster", &self.cluster)
            .field("signed_at", &self.signed_at)
            .field("url", &"[REDACTED]")
            .finish()
    }
}

/// Opaque bearer token handed to the cluster client.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken([REDACTED])")
    }
}
