// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CryptoError {
    #[error("key is not accessible: {0}")]
    KeyAccess(String),
    #[error("key management service error: {0}")]
    CryptoService(String),
    #[error("ciphertext is not valid base64: {0}")]
    CiphertextEncoding(String),
}

impl From<data_encoding::DecodeError> for CryptoError {
    fn from(source: data_encoding::DecodeError) -> Self {
        tracing::error!("{:?}", source);
        CryptoError::CiphertextEncoding(source.to_string())
    }
}
