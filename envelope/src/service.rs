// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Key management service boundary.
//!
//! [`KeyCryptoService`] is the narrow capability the envelope wrapper talks
//! to. [`AwsKmsService`] implements it on top of AWS KMS:
//!
//! | Request field | KMS parameter |
//! |---------------|---------------|
//! | `name` | `KeyId` |
//! | `plaintext` / `ciphertext` | `Plaintext` / `CiphertextBlob` |
//! | `additional_authenticated_data` | `EncryptionContext` `{"aad": base64}` |
//!
//! Retry and timeout overrides are applied as a per-call config override and
//! metadata pairs become request headers. Nothing is retried locally.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_kms::Client;
use aws_sdk_kms::config::retry::RetryConfig;
use aws_sdk_kms::config::timeout::TimeoutConfig;
use aws_sdk_kms::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_kms::primitives::Blob;

use crate::constants::{AAD_CONTEXT_KEY, KEY_ACCESS_ERROR_CODES};
use crate::errors::CryptoError;
use crate::models::{
    CallOptions, DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse,
};
use crate::utils::base64_encode;

#[async_trait]
pub trait KeyCryptoService: Send + Sync {
    async fn encrypt(
        &self,
        request: EncryptRequest,
        options: &CallOptions,
    ) -> Result<EncryptResponse, CryptoError>;

    async fn decrypt(
        &self,
        request: DecryptRequest,
        options: &CallOptions,
    ) -> Result<DecryptResponse, CryptoError>;
}

/// Maps a KMS error code onto the local error taxonomy.
pub fn classify_service_error(code: Option<&str>, message: String) -> CryptoError {
    match code {
        Some(code) if KEY_ACCESS_ERROR_CODES.contains(&code) => CryptoError::KeyAccess(message),
        _ => CryptoError::CryptoService(message),
    }
}

/// Encryption context carrying the authenticated data, if any.
fn encryption_context(aad: Option<&[u8]>) -> Option<HashMap<String, String>> {
    aad.map(|aad| HashMap::from([(AAD_CONTEXT_KEY.to_string(), base64_encode(aad))]))
}

/// Moves the plaintext into a request body, leaving `request` empty.
fn plaintext_blob(request: &mut EncryptRequest) -> Blob {
    Blob::new(std::mem::take(&mut request.plaintext))
}

fn config_override(options: &CallOptions) -> Option<aws_sdk_kms::config::Builder> {
    if options.retry.is_none() && options.timeout.is_none() {
        return None;
    }

    let mut builder = aws_sdk_kms::config::Builder::default();
    if let Some(retry) = options.retry {
        builder = builder.retry_config(RetryConfig::standard().with_max_attempts(retry.max_attempts));
    }
    if let Some(timeout) = options.timeout {
        builder = builder.timeout_config(TimeoutConfig::builder().operation_timeout(timeout).build());
    }
    Some(builder)
}

macro_rules! send_with_options {
    ($fluent:expr, $options:expr) => {{
        let mut operation = $fluent.customize();
        if let Some(config) = config_override($options) {
            operation = operation.config_override(config);
        }
        if !$options.metadata.is_empty() {
            let metadata = $options.metadata.clone();
            operation = operation.mutate_request(move |request| {
                for (name, value) in &metadata {
                    if let Err(err) = request.headers_mut().try_insert(name.clone(), value.clone()) {
                        tracing::warn!("[envelope] dropping invalid metadata {}: {:?}", name, err);
                    }
                }
            });
        }
        operation.send().await
    }};
}

pub struct AwsKmsService {
    client: Client,
}

impl AwsKmsService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a KMS client from the standard AWS configuration chain.
    pub async fn from_env(profile: Option<String>, region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;
        Self::new(Client::new(&config))
    }
}

#[async_trait]
impl KeyCryptoService for AwsKmsService {
    #[tracing::instrument(skip(self, request, options), fields(key = %request.name))]
    async fn encrypt(
        &self,
        mut request: EncryptRequest,
        options: &CallOptions,
    ) -> Result<EncryptResponse, CryptoError> {
        let fluent = self
            .client
            .encrypt()
            .key_id(&request.name)
            .plaintext(plaintext_blob(&mut request))
            .set_encryption_context(encryption_context(
                request.additional_authenticated_data.as_deref(),
            ));

        let output = send_with_options!(fluent, options).map_err(|e| {
            tracing::error!("[envelope] KMS encrypt failed: {}", DisplayErrorContext(&e));
            classify_service_error(e.code(), DisplayErrorContext(&e).to_string())
        })?;

        let ciphertext = output
            .ciphertext_blob()
            .map(|blob| blob.as_ref().to_vec())
            .ok_or_else(|| CryptoError::CryptoService("response contained no ciphertext".to_string()))?;

        Ok(EncryptResponse { ciphertext })
    }

    #[tracing::instrument(skip(self, request, options), fields(key = %request.name))]
    async fn decrypt(
        &self,
        request: DecryptRequest,
        options: &CallOptions,
    ) -> Result<DecryptResponse, CryptoError> {
        let fluent = self
            .client
            .decrypt()
            .key_id(&request.name)
            .ciphertext_blob(Blob::new(request.ciphertext))
            .set_encryption_context(encryption_context(
                request.additional_authenticated_data.as_deref(),
            ));

        let output = send_with_options!(fluent, options).map_err(|e| {
            tracing::error!("[envelope] KMS decrypt failed: {}", DisplayErrorContext(&e));
            classify_service_error(e.code(), DisplayErrorContext(&e).to_string())
        })?;

        let plaintext = output
            .plaintext()
            .map(|blob| blob.as_ref().to_vec())
            .ok_or_else(|| CryptoError::CryptoService("response contained no plaintext".to_string()))?;

        Ok(DecryptResponse { plaintext })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::models::RetryPolicy;

    #[test]
    fn test_classify_key_access_errors() {
        for code in ["NotFoundException", "DisabledException", "AccessDeniedException"] {
            assert_eq!(
                classify_service_error(Some(code), "denied".to_string()),
                CryptoError::KeyAccess("denied".to_string())
            );
        }
    }

    #[test]
    fn test_classify_other_errors_as_service_errors() {
        assert_eq!(
            classify_service_error(Some("InvalidCiphertextException"), "bad".to_string()),
            CryptoError::CryptoService("bad".to_string())
        );
        assert_eq!(
            classify_service_error(None, "timeout".to_string()),
            CryptoError::CryptoService("timeout".to_string())
        );
    }

    #[test]
    fn test_encryption_context_absent_without_aad() {
        assert_eq!(encryption_context(None), None);
    }

    #[test]
    fn test_encryption_context_distinguishes_empty_aad() {
        let context = encryption_context(Some(&b""[..])).unwrap();
        assert_eq!(context.get("aad").map(String::as_str), Some(""));

        let context = encryption_context(Some(&b"Test authdata"[..])).unwrap();
        assert_eq!(context.get("aad").map(String::as_str), Some("VGVzdCBhdXRoZGF0YQ=="));
    }

    #[test]
    fn test_plaintext_blob_leaves_no_copy_in_request() {
        let mut request = EncryptRequest {
            name: "test-key".to_string(),
            plaintext: b"Test plaintext".to_vec(),
            additional_authenticated_data: None,
        };

        let blob = plaintext_blob(&mut request);

        assert_eq!(blob.as_ref(), b"Test plaintext");
        assert!(request.plaintext.is_empty());
    }

    #[test]
    fn test_no_config_override_by_default() {
        assert!(config_override(&CallOptions::default()).is_none());
    }

    #[test]
    fn test_config_override_when_policy_given() {
        let options = CallOptions {
            retry: Some(RetryPolicy { max_attempts: 5 }),
            timeout: Some(Duration::from_secs(3)),
            metadata: Vec::new(),
        };
        assert!(config_override(&options).is_some());
    }
}
