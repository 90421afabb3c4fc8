use subplus_models::{SubtitleContent, TextEncoding};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes subtitle bytes as UTF-8, falling back to GBK.
///
/// Returns `None` when the bytes are valid in neither encoding.
pub fn decode_subtitle(bytes: &[u8]) -> Option<SubtitleContent> {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    if let Ok(text) = std::str::from_utf8(body) {
        return Some(SubtitleContent {
            text: text.to_string(),
            encoding: TextEncoding::Utf8,
        });
    }

    decode_gbk_strict(bytes).map(|text| SubtitleContent {
        text,
        encoding: TextEncoding::Gbk,
    })
}

/// `encoding_rs::GBK` is the GB18030 decoder: it also takes the lone 0x80 euro
/// byte, four-byte sequences and the user-defined areas. None of those are GBK.
fn decode_gbk_strict(bytes: &[u8]) -> Option<String> {
    if !has_gbk_structure(bytes) {
        return None;
    }

    let text = encoding_rs::GBK.decode_without_bom_handling_and_without_replacement(bytes)?;

    // User-defined GBK rows decode into the private use area
    if text.chars().any(|c| ('\u{E000}'..='\u{F8FF}').contains(&c)) {
        return None;
    }

    Some(text.into_owned())
}

/// ASCII bytes, or a 0x81-0xFE lead followed by a 0x40-0x7E / 0x80-0xFE trail
fn has_gbk_structure(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        if lead < 0x80 {
            i += 1;
            continue;
        }

        if !(0x81..=0xFE).contains(&lead) {
            return false;
        }

        match bytes.get(i + 1) {
            Some(0x40..=0x7E | 0x80..=0xFE) => i += 2,
            _ => return false,
        }
    }
    true
}
