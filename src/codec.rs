// Byte-to-text decoding for previews: UTF-8, then GBK, then the locale's 8-bit encoding

use encoding_rs::{DecoderResult, Encoding, UTF_8, WINDOWS_1252};
use std::env;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// Encodings tried in order before falling back to the locale encoding.
pub static CANDIDATES: [&Encoding; 2] = [&encoding_rs::UTF_8_INIT, &encoding_rs::GBK_INIT];

/// Result of decoding a byte buffer
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded {
    pub text: String,
    /// Encoding that produced `text`; `None` for empty input
    pub encoding: Option<&'static Encoding>,
    /// True when no candidate decoded cleanly
    pub fallback: bool,
}

/// Decode `bytes` to text. Never fails; may be lossy.
pub fn decode(bytes: &[u8]) -> String {
    detect(bytes).text
}

/// Decode `bytes` and report which encoding was used.
pub fn detect(bytes: &[u8]) -> Decoded {
    decode_with(bytes, &CANDIDATES, local_encoding())
}

/// Accept the first candidate that decodes without a single malformed
/// sequence; otherwise decode lossily with `fallback`.
pub fn decode_with(
    bytes: &[u8],
    candidates: &[&'static Encoding],
    fallback: &'static Encoding,
) -> Decoded {
    if bytes.is_empty() {
        return Decoded {
            text: String::new(),
            encoding: None,
            fallback: false,
        };
    }

    for &encoding in candidates {
        let (text, invalid) = decode_counting(encoding, bytes);
        if invalid == 0 {
            return Decoded {
                text,
                encoding: Some(encoding),
                fallback: false,
            };
        }
        trace!(encoding = encoding.name(), invalid, "rejected candidate encoding");
    }

    let (text, _) = fallback.decode_without_bom_handling(bytes);
    Decoded {
        text: text.into_owned(),
        encoding: Some(fallback),
        fallback: true,
    }
}

/// Decode the buffer, replacing each malformed sequence with U+FFFD and
/// returning how many were found.
///
/// The buffer is usually a cut-off file head, so an incomplete sequence at
/// the very end is dropped rather than counted.
pub fn decode_counting(encoding: &'static Encoding, bytes: &[u8]) -> (String, usize) {
    let mut decoder = encoding.new_decoder_with_bom_removal();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len().saturating_mul(3));
    let mut text = String::with_capacity(capacity);
    let mut invalid = 0;
    let mut input = bytes;

    loop {
        // Not the last chunk: a trailing partial sequence stays pending in the decoder
        let (result, read) = decoder.decode_to_string_without_replacement(input, &mut text, false);
        input = &input[read..];
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => {
                let more = decoder
                    .max_utf8_buffer_length_without_replacement(input.len())
                    .unwrap_or(input.len().saturating_mul(3));
                text.reserve(more.max(4));
            }
            DecoderResult::Malformed(_, _) => {
                invalid += 1;
                text.push('\u{FFFD}');
            }
        }
    }

    (text, invalid)
}

/// The platform's local 8-bit encoding, resolved once per process.
pub fn local_encoding() -> &'static Encoding {
    static LOCAL: OnceLock<&'static Encoding> = OnceLock::new();
    LOCAL.get_or_init(|| {
        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .filter_map(|key| env::var(key).ok())
            .find(|value| !value.is_empty());
        let encoding = locale.as_deref().map(encoding_for_locale).unwrap_or(UTF_8);
        debug!(locale = ?locale, encoding = encoding.name(), "resolved local encoding");
        encoding
    })
}

/// Map a POSIX locale name (`language_TERRITORY.charset@modifier`) to an encoding.
pub fn encoding_for_locale(locale: &str) -> &'static Encoding {
    let locale = locale.split('@').next().unwrap_or(locale);
    if locale == "C" || locale == "POSIX" {
        return WINDOWS_1252;
    }
    match locale.split_once('.') {
        Some((_, charset)) => Encoding::for_label(charset.as_bytes()).unwrap_or(UTF_8),
        None => UTF_8,
    }
}
