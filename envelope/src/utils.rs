// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

use data_encoding::BASE64;

use crate::errors::CryptoError;

#[inline]
pub fn base64_encode(input: &[u8]) -> String {
    BASE64.encode(input)
}

#[inline]
pub fn base64_decode(input: &str) -> Result<Vec<u8>, CryptoError> {
    let decoded = BASE64.decode(input.trim().as_bytes())?;
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_decode() {
        let input = "VGVzdCBjaXBoZXJ0ZXh0";
        let actual = base64_decode(input).unwrap();
        assert_eq!(actual, b"Test ciphertext");
    }

    #[test]
    fn test_base64_decode_ignores_trailing_newline() {
        assert_eq!(base64_decode("VGVzdA==\n").unwrap(), b"Test");
    }

    #[test]
    fn test_base64_decode_rejects_invalid_input() {
        let err = base64_decode("not base64!").unwrap_err();
        assert!(matches!(err, CryptoError::CiphertextEncoding(_)));
    }

    #[test]
    fn test_base64_encode() {
        assert_eq!(base64_encode(b"Test plaintext"), "VGVzdCBwbGFpbnRleHQ=");
    }
}
