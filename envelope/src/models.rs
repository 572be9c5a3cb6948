// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::fmt;
use std::time::Duration;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Retry override passed through to the key service client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
}

/// Per-call policy forwarded unmodified to the key service.
///
/// The default is no retry override, no timeout and no metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    pub retry: Option<RetryPolicy>,
    pub timeout: Option<Duration>,
    pub metadata: Vec<(String, String)>,
}

#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EncryptRequest {
    pub name: String,
    pub plaintext: Vec<u8>,
    pub additional_authenticated_data: Option<Vec<u8>>,
}

impl fmt::Debug for EncryptRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptRequest")
            .field("name", &self.name)
            .field("plaintext", &"[REDACTED]")
            .field(
                "additional_authenticated_data",
                &self.additional_authenticated_data,
            )
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptResponse {
    pub ciphertext: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptRequest {
    pub name: String,
    pub ciphertext: Vec<u8>,
    pub additional_authenticated_data: Option<Vec<u8>>,
}

#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DecryptResponse {
    pub plaintext: Vec<u8>,
}

impl fmt::Debug for DecryptResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptResponse")
            .field("plaintext", &"[REDACTED]")
            .finish()
    }
}
