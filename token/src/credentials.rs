// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! IAM identity resolution.
//!
//! The signer never reads process-wide configuration itself. Credentials and
//! the signing region are obtained through a [`CredentialProvider`], which
//! the AWS implementation backs with the standard SDK resolution chain
//! (environment, shared profile, web identity, container and IMDS).

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::provider::ProvideCredentials;

use crate::errors::TokenError;
use crate::models::Credential;
use crate::signer::endpoint_params;

/// Credentials together with the region they should sign for.
#[derive(Debug, Clone)]
pub struct ResolvedIdentity {
    pub credential: Credential,
    pub region: String,
}

#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn resolve(&self) -> Result<ResolvedIdentity, TokenError>;
}

/// Resolves credentials through `aws-config`, optionally pinned to a named
/// profile and an explicit region.
#[derive(Debug, Clone, Default)]
pub struct AwsCredentialProvider {
    profile: Option<String>,
    region: Option<String>,
}

impl AwsCredentialProvider {
    pub fn new(profile: Option<String>, region: Option<String>) -> Self {
        Self { profile, region }
    }
}

#[async_trait]
impl CredentialProvider for AwsCredentialProvider {
    #[tracing::instrument(skip(self))]
    async fn resolve(&self) -> Result<ResolvedIdentity, TokenError> {
        if let Some(region) = &self.region {
            endpoint_params(region)?;
        }

        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let config = loader.load().await;

        let region = config
            .region()
            .map(|region| region.as_ref().to_string())
            .ok_or_else(|| {
                TokenError::CredentialResolution("no AWS region configured".to_string())
            })?;
        endpoint_params(&region)?;

        let provider = config.credentials_provider().ok_or_else(|| {
            TokenError::CredentialResolution("no credentials provider configured".to_string())
        })?;
        let credentials = provider.provide_credentials().await?;

        tracing::debug!(
            "[token] resolved credentials for region {}, expires_at: {:?}",
            region,
            credentials.expiry()
        );

        Ok(ResolvedIdentity {
            credential: credentials.into(),
            region,
        })
    }
}

/// Serves a fixed credential, e.g. keys supplied explicitly by the caller.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    identity: ResolvedIdentity,
}

impl StaticCredentialProvider {
    pub fn new(credential: Credential, region: impl Into<String>) -> Self {
        Self {
            identity: ResolvedIdentity {
                credential,
                region: region.into(),
            },
        }
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentialProvider {
    async fn resolve(&self) -> Result<ResolvedIdentity, TokenError> {
        endpoint_params(&self.identity.region)?;
        Ok(self.identity.clone())
    }
}
