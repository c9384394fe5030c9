use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported encoding '{label}' in XML declaration")]
    UnknownEncoding { label: String },
    #[error("document is not valid {encoding}")]
    Malformed { encoding: &'static str },
}

fn declared_encoding_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^<\?xml\s[^>]*?\bencoding\s*=\s*["']([A-Za-z][A-Za-z0-9._-]*)["']"#)
            .expect("valid regex")
    })
}

/// The encoding label named in a leading XML declaration, if any.
pub fn declared_encoding(bytes: &[u8]) -> Option<&str> {
    let captures = declared_encoding_regex().captures(bytes)?;
    std::str::from_utf8(captures.get(1)?.as_bytes()).ok()
}

/// Decodes SVG bytes to text.
///
/// A byte order mark wins over the declaration; with neither, the input is
/// read as UTF-8. The mark itself is not part of the returned text.
pub fn decode_svg(bytes: &[u8]) -> Result<Cow<'_, str>, DecodeError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => match declared_encoding(bytes) {
            Some(label) => {
                let encoding = Encoding::for_label(label.as_bytes())
                    .filter(|encoding| encoding.is_ascii_compatible())
                    .ok_or_else(|| DecodeError::UnknownEncoding {
                        label: label.to_string(),
                    })?;
                (encoding, bytes)
            }
            None => (UTF_8, bytes),
        },
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or(DecodeError::Malformed {
            encoding: encoding.name(),
        })
}
