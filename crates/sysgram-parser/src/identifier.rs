//! Identifier cleanup and classifier symbol detection.

/// Normalize a raw token into an identifier.
///
/// Strips surrounding separators (`,`, `;`, braces, spaces), decodes HTML
/// entities, removes enclosing quotes and drops a trailing multiplicity such
/// as `[4]` or `[0..*]`. May return an empty string.
pub(crate) fn clean_identifier(token: &str) -> String {
    let trimmed = token.trim_matches(|c: char| matches!(c, ' ' | ',' | ';' | '{' | '}'));
    let decoded = decode_entities(trimmed);
    let unquoted = decoded.trim_matches(|c: char| c == '\'' || c == '"');
    strip_multiplicity(unquoted).trim().to_string()
}

fn strip_multiplicity(name: &str) -> &str {
    if !name.ends_with(']') {
        return name;
    }
    match name.rfind('[') {
        Some(open) => &name[..open],
        None => name,
    }
}

/// Decode HTML character references.
///
/// Handles the XML named entities, `&nbsp;`, and decimal or hexadecimal
/// numeric references. Anything unrecognized is kept as written.
pub(crate) fn decode_entities(text: &str) -> String {
    let mut decoded = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        decoded.push_str(&rest[..amp]);
        let candidate = &rest[amp..];

        match candidate
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&candidate[1..semi]).map(|ch| (ch, semi)))
        {
            Some((ch, semi)) => {
                decoded.push(ch);
                rest = &candidate[semi + 1..];
            }
            None => {
                decoded.push('&');
                rest = &candidate[1..];
            }
        }
    }
    decoded.push_str(rest);
    decoded
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let number = entity.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Byte range of the first `:`, `:>` or `:>>` that is not part of `::`.
///
/// Used to detach classifier symbols glued to names, as in `x:T` or `a:>B`.
pub(crate) fn find_classifier(token: &str) -> Option<(usize, usize)> {
    let bytes = token.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] != b':' {
            idx += 1;
            continue;
        }
        if bytes.get(idx + 1) == Some(&b':') {
            idx += 2;
            continue;
        }
        let mut end = idx + 1;
        while end < bytes.len() && end - idx < 3 && bytes[end] == b'>' {
            end += 1;
        }
        return Some((idx, end));
    }
    None
}
