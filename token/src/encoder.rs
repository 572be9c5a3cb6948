// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use chrono::{DateTime, Duration, Utc};
use data_encoding::BASE64URL_NOPAD;

use crate::constants::{TOKEN_EXPIRATION_MARGIN, TOKEN_PREFIX, TOKEN_VALIDITY};
use crate::emitter::CredentialResponse;
use crate::models::{BearerToken, SignedIdentityAssertion};

/// Wraps a presigned request into a `k8s-aws-v1.` bearer token.
pub fn encode_token(assertion: &SignedIdentityAssertion) -> BearerToken {
    BearerToken::new(format!(
        "{TOKEN_PREFIX}{}",
        BASE64URL_NOPAD.encode(assertion.url().as_bytes())
    ))
}

/// Moment a token minted at `now` must be discarded by the client.
pub fn expiration_from(now: DateTime<Utc>) -> DateTime<Utc> {
    let lifetime = TOKEN_VALIDITY.saturating_sub(TOKEN_EXPIRATION_MARGIN);
    now + Duration::seconds(lifetime.as_secs() as i64)
}

/// Pairs a token with the expiration derived from its mint time.
pub fn issue(token: BearerToken, minted_at: DateTime<Utc>) -> CredentialResponse {
    CredentialResponse::new(token, expiration_from(minted_at))
}
