// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

/// Encryption context entry carrying the authenticated data (base64 encoded).
pub const AAD_CONTEXT_KEY: &str = "aad";

/// Maximum bytes read from stdin by the command line tool.
pub const MAX_INPUT_SIZE: u64 = 64 * 1024; // 64 KiB

/// KMS error codes meaning the key cannot be used by this caller.
pub const KEY_ACCESS_ERROR_CODES: &[&str] = &[
    "AccessDeniedException",
    "DisabledException",
    "IncorrectKeyException",
    "InvalidKeyUsageException",
    "KMSInvalidStateException",
    "KeyUnavailableException",
    "NotFoundException",
];
