// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::io::Write;

use crate::clock::Clock;
use crate::configuration::TokenOptions;
use crate::emitter::emit;
use crate::encoder::issue;
use crate::errors::TokenError;
use crate::hook::IdentityTokenSource;
use crate::models::ClusterName;

/// Mints a token for `options.cluster_name` and writes the response to `out`.
///
/// The token source is built by `make_source` from the credential selector
/// and region, after the cluster name has been validated.
///
/// # Errors
///
/// - [`TokenError::InvalidClusterIdentifier`] - the cluster name is malformed
/// - [`TokenError::CredentialResolution`] - no usable IAM identity
/// - [`TokenError::OutputWrite`] - `out` could not be written
#[tracing::instrument(skip(make_source, clock, out))]
pub async fn run<S, F, W>(
    options: TokenOptions,
    make_source: F,
    clock: &dyn Clock,
    out: &mut W,
) -> Result<(), TokenError>
where
    S: IdentityTokenSource,
    F: FnOnce(Option<String>, Option<String>) -> S,
    W: Write,
{
    let cluster = ClusterName::parse(&options.cluster_name)?;

    let source = make_source(options.aws_conn_id.clone(), options.region_name.clone());

    let now = clock.now();
    let token = source.fetch_access_token_for_cluster(&cluster).await?;
    let response = issue(token, now);

    tracing::debug!(
        "[token] issued token for {}, expires at {}",
        cluster,
        response.expiration_timestamp()
    );

    emit(&response, options.output, out)
}
