// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::time::Duration;

/// Identifies the bearer token format, distinct from a raw presigned URL.
pub const TOKEN_PREFIX: &str = "k8s-aws-v1.";
pub const TOKEN_VALIDITY: Duration = Duration::from_secs(15 * 60); // 15 minutes
pub const TOKEN_EXPIRATION_MARGIN: Duration = Duration::from_secs(60); // expire 60s early
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// STS GetCallerIdentity presigning
pub const STS_SERVICE: &str = "sts";
pub const STS_ACTION: &str = "GetCallerIdentity";
pub const STS_VERSION: &str = "2011-06-15";
/// Lifetime of the presigned request itself, enforced by STS.
pub const PRESIGN_EXPIRES_SECS: u64 = 60;
pub const CLUSTER_ID_HEADER: &str = "x-k8s-aws-id";
pub const SIGNING_PROVIDER_NAME: &str = "eks-token";

// ExecCredential discriminator
pub const EXEC_CREDENTIAL_KIND: &str = "ExecCredential";
pub const EXEC_CREDENTIAL_API_VERSION: &str = "client.authentication.k8s.io/v1beta1";

// Validation constants
pub const MAX_CLUSTER_NAME_LENGTH: u64 = 100;
