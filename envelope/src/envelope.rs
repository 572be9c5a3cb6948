// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! Encrypt/decrypt through a managed key service.
//!
//! The wrapper only shapes requests and responses: ciphertext travels as
//! standard base64 text, authenticated data is threaded through untouched and
//! every service failure is returned as-is. A mismatched authenticated data
//! value is reported by the service on decrypt, it is not checked here.

use crate::errors::CryptoError;
use crate::models::{CallOptions, DecryptRequest, EncryptRequest};
use crate::service::KeyCryptoService;
use crate::utils::{base64_decode, base64_encode};

pub struct Envelope<S> {
    service: S,
    options: CallOptions,
}

impl<S> Envelope<S> {
    pub fn service(&self) -> &S {
        &self.service
    }
}

impl<S: KeyCryptoService> Envelope<S> {
    pub fn new(service: S) -> Self {
        Self::with_options(service, CallOptions::default())
    }

    pub fn with_options(service: S, options: CallOptions) -> Self {
        Self { service, options }
    }

    /// Encrypts `plaintext` under `key`, returning base64 ciphertext.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::KeyAccess`] - the key is missing, disabled or not permitted
    /// - [`CryptoError::CryptoService`] - any other service failure
    #[tracing::instrument(skip(self, plaintext, aad))]
    pub async fn encrypt(
        &self,
        key: &str,
        plaintext: &[u8],
        aad: Option<&[u8]>,
    ) -> Result<String, CryptoError> {
        let request = EncryptRequest {
            name: key.to_string(),
            plaintext: plaintext.to_vec(),
            additional_authenticated_data: aad.map(<[u8]>::to_vec),
        };

        let response = self.service.encrypt(request, &self.options).await?;

        Ok(base64_encode(&response.ciphertext))
    }

    /// Decrypts base64 `ciphertext` under `key`, returning raw plaintext.
    ///
    /// `aad` must be the value given at encryption time.
    ///
    /// # Errors
    ///
    /// - [`CryptoError::CiphertextEncoding`] - `ciphertext` is not valid base64
    /// - [`CryptoError::KeyAccess`] - the key is missing, disabled or not permitted
    /// - [`CryptoError::CryptoService`] - any other service failure
    #[tracing::instrument(skip(self, ciphertext, aad))]
    pub async fn decrypt(
        &self,
        key: &str,
        ciphertext: &str,
        aad: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        let request = DecryptRequest {
            name: key.to_string(),
            ciphertext: base64_decode(ciphertext)?,
            additional_authenticated_data: aad.map(<[u8]>::to_vec),
        };

        let mut response = self.service.decrypt(request, &self.options).await?;

        Ok(std::mem::take(&mut response.plaintext))
    }
}
