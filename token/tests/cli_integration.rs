// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! End-to-end tests for the `eks-token` command.
//!
//! These tests drive [`cli::run`] with parsed arguments, a stubbed token
//! source and a frozen clock, and inspect what was written to the output.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use clap::Parser;
use data_encoding::BASE64URL_NOPAD;
use eks_token::cli;
use eks_token::clock::FixedClock;
use eks_token::configuration::TokenOptions;
use eks_token::credentials::StaticCredentialProvider;
use eks_token::errors::TokenError;
use eks_token::hook::{EksTokenSource, IdentityTokenSource};
use eks_token::models::{BearerToken, ClusterName, Credential};

const STUB_TOKEN: &str = "k8s-aws-v1.aHR0cDovL2V4YW1wbGUuY29t";

/// Records how the token source was constructed and used.
#[derive(Default)]
struct Calls {
    constructed: Vec<(Option<String>, Option<String>)>,
    fetched: Vec<String>,
}

struct StubSource {
    calls: Arc<Mutex<Calls>>,
    result: Result<&'static str, &'static str>,
}

#[async_trait]
impl IdentityTokenSource for StubSource {
    async fn fetch_access_token_for_cluster(
        &self,
        cluster: &ClusterName,
    ) -> Result<BearerToken, TokenError> {
        self.calls
            .lock()
            .unwrap()
            .fetched
            .push(cluster.as_str().to_string());
        self.result
            .map(BearerToken::new)
            .map_err(|e| TokenError::CredentialResolution(e.to_string()))
    }
}

fn stub_factory(
    calls: Arc<Mutex<Calls>>,
    result: Result<&'static str, &'static str>,
) -> impl FnOnce(Option<String>, Option<String>) -> StubSource {
    move |conn_id, region| {
        calls.lock().unwrap().constructed.push((conn_id, region));
        StubSource { calls, result }
    }
}

fn frozen_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(1995, 2, 14, 0, 0, 0).unwrap())
}

async fn run_with_args(args: &[&str]) -> (Arc<Mutex<Calls>>, String) {
    let options = TokenOptions::try_parse_from(args).unwrap();
    let calls = Arc::new(Mutex::new(Calls::default()));
    let mut out = Vec::new();

    cli::run(
        options,
        stub_factory(calls.clone(), Ok(STUB_TOKEN)),
        &frozen_clock(),
        &mut out,
    )
    .await
    .unwrap();

    (calls, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_run_with_all_arguments() {
    let (calls, output) = run_with_args(&[
        "eks-token",
        "--region-name",
        "test-region",
        "--aws-conn-id",
        "test-id",
        "--cluster-name",
        "test-cluster",
    ])
    .await;

    let parts: Vec<&str> = output.split(',').collect();
    assert_eq!(parts[1].trim(), format!("token: {STUB_TOKEN}"));
    let expiration = parts[0].split_once(':').unwrap().1.trim();
    assert!(expiration.starts_with("1995-02-"));

    let calls = calls.lock().unwrap();
    assert_eq!(
        calls.constructed,
        [(Some("test-id".to_string()), Some("test-region".to_string()))]
    );
    assert_eq!(calls.fetched, ["test-cluster"]);
}

#[tokio::test]
async fn test_run_without_credential_selector() {
    let (calls, output) = run_with_args(&[
        "eks-token",
        "--region-name",
        "test-region",
        "--cluster-name",
        "test-cluster",
    ])
    .await;

    assert!(output.contains(&format!("token: {STUB_TOKEN}")));
    let calls = calls.lock().unwrap();
    assert_eq!(calls.constructed, [(None::<String>, Some("test-region".to_string()))]);
    assert_eq!(calls.fetched, ["test-cluster"]);
}

#[tokio::test]
async fn test_run_with_cluster_name_only() {
    let (calls, _) = run_with_args(&["eks-token", "--cluster-name", "test-cluster"]).await;

    let calls = calls.lock().unwrap();
    assert_eq!(calls.constructed, [(None::<String>, None::<String>)]);
    assert_eq!(calls.fetched, ["test-cluster"]);
}

#[tokio::test]
async fn test_run_writes_exact_line_at_frozen_clock() {
    let (_, output) = run_with_args(&["eks-token", "--cluster-name", "test-cluster"]).await;

    assert_eq!(
        output,
        format!("expiration_timestamp: 1995-02-14T00:14:00Z, token: {STUB_TOKEN}\n")
    );
}

#[tokio::test]
async fn test_run_writes_exec_credential() {
    let (_, output) = run_with_args(&[
        "eks-token",
        "--cluster-name",
        "test-cluster",
        "--output",
        "json",
    ])
    .await;

    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["kind"], "ExecCredential");
    assert_eq!(json["apiVersion"], "client.authentication.k8s.io/v1beta1");
    assert_eq!(json["status"]["expirationTimestamp"], "1995-02-14T00:14:00Z");
    assert_eq!(json["status"]["token"], STUB_TOKEN);
}

#[tokio::test]
async fn test_run_rejects_invalid_cluster_before_building_source() {
    let options = TokenOptions::try_parse_from(["eks-token", "--cluster-name", "not a cluster"]).unwrap();
    let calls = Arc::new(Mutex::new(Calls::default()));
    let mut out = Vec::new();

    let err = cli::run(
        options,
        stub_factory(calls.clone(), Ok(STUB_TOKEN)),
        &frozen_clock(),
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TokenError::InvalidClusterIdentifier(_)));
    assert!(calls.lock().unwrap().constructed.is_empty());
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_run_propagates_source_failure_without_output() {
    let options = TokenOptions::try_parse_from(["eks-token", "--cluster-name", "test-cluster"]).unwrap();
    let calls = Arc::new(Mutex::new(Calls::default()));
    let mut out = Vec::new();

    let err = cli::run(
        options,
        stub_factory(calls.clone(), Err("no credentials")),
        &frozen_clock(),
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, TokenError::CredentialResolution(_)));
    assert_eq!(calls.lock().unwrap().fetched.len(), 1);
    assert!(out.is_empty());
}

#[tokio::test]
async fn test_run_with_presigning_source() {
    let options = TokenOptions::try_parse_from(["eks-token", "--cluster-name", "test-cluster"]).unwrap();
    let credential = Credential {
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
        session_token: Some("session-token".to_string()),
    };
    let provider = Arc::new(StaticCredentialProvider::new(credential, "us-east-1"));
    let clock = frozen_clock();
    let mut out = Vec::new();

    cli::run(
        options,
        |_, _| EksTokenSource::with_provider(provider, Arc::new(clock)),
        &clock,
        &mut out,
    )
    .await
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("expiration_timestamp: 1995-02-14T00:14:00Z, token: k8s-aws-v1."));
    let token = output.trim_end().rsplit_once("token: ").unwrap().1;
    assert!(!token.contains('='));
}

#[tokio::test]
async fn test_run_targets_partition_sts_host() {
    let options = TokenOptions::try_parse_from(["eks-token", "--cluster-name", "test-cluster"]).unwrap();
    let credential = Credential {
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
        session_token: None,
    };
    let provider = Arc::new(StaticCredentialProvider::new(credential, "cn-north-1"));
    let clock = frozen_clock();
    let mut out = Vec::new();

    cli::run(
        options,
        |_, _| EksTokenSource::with_provider(provider, Arc::new(clock)),
        &clock,
        &mut out,
    )
    .await
    .unwrap();

    let output = String::from_utf8(out).unwrap();
    let token = output.trim_end().rsplit_once("token: k8s-aws-v1.").unwrap().1;
    let url = String::from_utf8(BASE64URL_NOPAD.decode(token.as_bytes()).unwrap()).unwrap();
    assert!(url.starts_with("https://sts.cn-north-1.amazonaws.com.cn/?Action=GetCallerIdentity"));
    assert!(url.contains("X-Amz-Credential=AKIDEXAMPLE%2F19950214%2Fcn-north-1%2Fsts%2Faws4_request"));
}
