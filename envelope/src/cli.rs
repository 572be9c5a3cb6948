// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use std::io::{Read, Write};

use anyhow::{Context, Result, ensure};
use zeroize::Zeroizing;

use crate::configuration::Command;
use crate::constants::MAX_INPUT_SIZE;
use crate::envelope::Envelope;
use crate::service::KeyCryptoService;

/// Runs one encrypt or decrypt `command`, reading from `input` and writing to `out`.
///
/// Encrypt writes the base64 ciphertext followed by a newline, decrypt writes
/// the raw plaintext bytes.
pub async fn run<S, R, W>(
    command: &Command,
    envelope: &Envelope<S>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: KeyCryptoService,
    R: Read,
    W: Write,
{
    let mut buffer = Zeroizing::new(Vec::new());
    input
        .take(MAX_INPUT_SIZE + 1)
        .read_to_end(&mut buffer)
        .context("failed to read input")?;
    ensure!(
        buffer.len() as u64 <= MAX_INPUT_SIZE,
        "input exceeds {MAX_INPUT_SIZE} bytes"
    );

    match command {
        Command::Encrypt { key_id, aad } => {
            let ciphertext = envelope
                .encrypt(key_id, &buffer, aad.as_ref().map(String::as_bytes))
                .await?;
            out.write_all(format!("{ciphertext}\n").as_bytes())
                .context("failed to write ciphertext")?;
        }
        Command::Decrypt { key_id, aad } => {
            let ciphertext =
                std::str::from_utf8(&buffer).context("ciphertext input is not valid UTF-8")?;
            let plaintext = Zeroizing::new(
                envelope
                    .decrypt(key_id, ciphertext, aad.as_ref().map(String::as_bytes))
                    .await?,
            );
            out.write_all(&plaintext)
                .context("failed to write plaintext")?;
        }
    }

    out.flush().context("failed to flush output")
}
