// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::sync::Arc;

use async_trait::async_trait;

use crate::clock::{Clock, SystemClock};
use crate::credentials::{AwsCredentialProvider, CredentialProvider};
use crate::encoder::encode_token;
use crate::errors::TokenError;
use crate::models::{BearerToken, ClusterName};
use crate::signer::presign_caller_identity;

/// Anything able to mint a bearer token for a cluster.
#[async_trait]
pub trait IdentityTokenSource: Send + Sync {
    async fn fetch_access_token_for_cluster(
        &self,
        cluster: &ClusterName,
    ) -> Result<BearerToken, TokenError>;
}

/// Mints EKS tokens from IAM credentials by presigning STS `GetCallerIdentity`.
#[derive(Clone)]
pub struct EksTokenSource {
    provider: Arc<dyn CredentialProvider>,
    clock: Arc<dyn Clock>,
}

impl EksTokenSource {
    /// `credential_selector` names an AWS profile; `region` overrides the
    /// configured region. `None` falls back to the SDK defaults for either.
    pub fn new(credential_selector: Option<String>, region: Option<String>) -> Self {
        Self::with_provider(
            Arc::new(AwsCredentialProvider::new(credential_selector, region)),
            Arc::new(SystemClock),
        )
    }

    pub fn with_provider(provider: Arc<dyn CredentialProvider>, clock: Arc<dyn Clock>) -> Self {
        Self { provider, clock }
    }
}

#[async_trait]
impl IdentityTokenSource for EksTokenSource {
    #[tracing::instrument(skip(self))]
    async fn fetch_access_token_for_cluster(
        &self,
        cluster: &ClusterName,
    ) -> Result<BearerToken, TokenError> {
        let identity = self.provider.resolve().await.map_err(|e| {
            tracing::error!("[token] failed to resolve credentials: {:?}", e);
            e
        })?;

        let assertion = presign_caller_identity(
            cluster,
            &identity.credential,
            &identity.region,
            self.clock.now(),
        )
        .await?;

        Ok(encode_token(&assertion))
    }
}
