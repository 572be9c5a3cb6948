// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Presigning of STS `GetCallerIdentity` requests (SigV4, query string).
//!
//! The presigned request is computed locally from credential material; no
//! network call is made. The cluster name is sent as the signed
//! `x-k8s-aws-id` header, so the signature (and therefore the token) only
//! proves identity for that one cluster.
//!
//! The STS host comes from the SDK endpoint rules for the region's
//! partition, e.g. `sts.cn-north-1.amazonaws.com.cn` for China regions.

use std::time::{Duration, SystemTime};

use aws_credential_types::Credentials;
use aws_sdk_sts::config::endpoint::{DefaultResolver, Params, ResolveEndpoint};
use aws_sigv4::http_request::{
    SignableBody, SignableRequest, SignatureLocation, SigningParams, SigningSettings, sign,
};
use aws_sigv4::sign::v4;
use aws_smithy_http::query_writer::QueryWriter;
use aws_smithy_runtime_api::client::identity::Identity;
use chrono::{DateTime, Utc};

use crate::constants::{
    CLUSTER_ID_HEADER, PRESIGN_EXPIRES_SECS, SIGNING_PROVIDER_NAME, STS_ACTION, STS_SERVICE,
    STS_VERSION,
};
use crate::errors::TokenError;
use crate::models::{ClusterName, Credential, SignedIdentityAssertion};

/// Endpoint rule parameters for `region`.
///
/// Only a single ASCII DNS label is accepted, so the region can never add a
/// domain of its own to the STS host.
pub fn endpoint_params(region: &str) -> Result<Params, TokenError> {
    if !region.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(TokenError::InvalidRegion(region.to_string()));
    }
    Params::builder().region(region).build().map_err(|e| {
        tracing::error!("[token] rejected region {:?}: {}", region, e);
        TokenError::InvalidRegion(region.to_string())
    })
}

/// Resolves the regional STS endpoint, without a trailing slash.
pub async fn resolve_sts_endpoint(region: &str) -> Result<String, TokenError> {
    let params = endpoint_params(region)?;
    let resolver = DefaultResolver::new();
    let endpoint = ResolveEndpoint::resolve_endpoint(&resolver, &params)
        .await
        .map_err(|e| {
            tracing::error!("[token] no STS endpoint for region {:?}: {}", region, e);
            TokenError::InvalidRegion(region.to_string())
        })?;
    Ok(endpoint.url().trim_end_matches('/').to_string())
}

fn signing_settings() -> SigningSettings {
    let mut settings = SigningSettings::default();
    settings.signature_location = SignatureLocation::QueryParams;
    settings.expires_in = Some(Duration::from_secs(PRESIGN_EXPIRES_SECS));
    settings
}

/// Builds a presigned `GetCallerIdentity` request bound to `cluster`.
///
/// # Errors
///
/// - [`TokenError::CredentialResolution`] - the credential has no access key id or secret
/// - [`TokenError::InvalidRegion`] - the region has no usable STS endpoint
/// - [`TokenError::Signing`] - the request could not be signed
#[tracing::instrument(skip(credential))]
pub async fn presign_caller_identity(
    cluster: &ClusterName,
    credential: &Credential,
    region: &str,
    signed_at: DateTime<Utc>,
) -> Result<SignedIdentityAssertion, TokenError> {
    if credential.access_key_id.is_empty() || credential.secret_access_key.is_empty() {
        return Err(TokenError::CredentialResolution(
            "resolved credentials are incomplete".to_string(),
        ));
    }

    let endpoint = format!("{}/", resolve_sts_endpoint(region).await?);
    let base_url = format!("{endpoint}?Action={STS_ACTION}&Version={STS_VERSION}");

    let identity: Identity = Credentials::new(
        credential.access_key_id.as_str(),
        credential.secret_access_key.as_str(),
        credential.session_token.clone(),
        None,
        SIGNING_PROVIDER_NAME,
    )
    .into();
    let params: SigningParams<'_> = v4::SigningParams::builder()
        .identity(&identity)
        .region(region)
        .name(STS_SERVICE)
        .time(SystemTime::from(signed_at))
        .settings(signing_settings())
        .build()
        .map_err(|e| TokenError::Signing(e.to_string()))?
        .into();

    let headers = [(CLUSTER_ID_HEADER, cluster.as_str())];
    let request = SignableRequest::new(
        "GET",
        base_url.as_str(),
        headers.into_iter(),
        SignableBody::Bytes(&[]),
    )?;
    let (instructions, signature) = sign(request, &params)?.into_parts();

    let mut query =
        QueryWriter::new_from_string(&base_url).map_err(|e| TokenError::Signing(e.to_string()))?;
    for (name, value) in instructions.params() {
        query.insert(name, value);
    }

    tracing::debug!("[token] presigned caller identity request for {}", cluster);

    Ok(SignedIdentityAssertion {
        endpoint,
        cluster: cluster.clone(),
        signed_at,
        url: query.build_uri().to_string(),
        signature,
    })
}
