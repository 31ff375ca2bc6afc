//! Character decoding of the input document.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::Encoding;
use regex::bytes::Regex;

use crate::config::FALLBACK_ENCODING;

/// Number of leading bytes searched for a charset declaration.
const CHARSET_SNIFF_LIMIT: usize = 4096;

/// Charset declared in a `<meta>` tag, either `charset="..."` or inside
/// `content="text/html; charset=..."`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CHARSET_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([a-z0-9_:.\-]+)"#).expect("valid regex")
});

/// Find the charset label declared in the head of the document.
pub fn declared_charset(bytes: &[u8]) -> Option<String> {
    let head = &bytes[..bytes.len().min(CHARSET_SNIFF_LIMIT)];
    let caps = CHARSET_DECLARATION.captures(head)?;
    let label = caps.get(1)?;
    Some(String::from_utf8_lossy(label.as_bytes()).into_owned())
}

/// Decode raw document bytes to text.
///
/// Tries, in order:
/// 1. UTF-8 (a BOM is handled by `encoding_rs`)
/// 2. The charset declared in the document
/// 3. [`FALLBACK_ENCODING`]
pub fn decode_document(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    let declared = declared_charset(bytes)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .filter(|encoding| *encoding != encoding_rs::UTF_8);

    let encoding = declared.unwrap_or_else(|| {
        Encoding::for_label(FALLBACK_ENCODING.as_bytes()).unwrap_or(encoding_rs::WINDOWS_1254)
    });

    let (result, _, malformed) = encoding.decode(bytes);
    if malformed {
        tracing::warn!(
            encoding = encoding.name(),
            "Input contains bytes that are invalid in the detected encoding"
        );
    } else {
        tracing::debug!(encoding = encoding.name(), "Decoded input with legacy encoding");
    }
    result
}
