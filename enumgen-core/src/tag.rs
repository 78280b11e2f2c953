//! Field annotation scanner for the `key:"value" key2:"value2"` micro-format.
//!
//! Single pass, no backtracking. Any malformed segment ends the scan for the
//! whole annotation, so a lookup past a broken pair reports not-found.

/// Iterator over the raw `(key, quoted_value)` pairs of an annotation.
///
/// The quoted value still carries its surrounding quotes and escapes;
/// pass it to [`unquote`] to decode it.
#[derive(Debug, Clone)]
pub struct Pairs<'a> {
    rest: &'a str,
}

/// Returns an iterator over the `(key, quoted_value)` pairs of `tag`.
pub fn pairs(tag: &str) -> Pairs<'_> {
    Pairs { rest: tag }
}

impl<'a> Iterator for Pairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.rest.trim_start_matches(' ');
        let bytes = tag.as_bytes();

        // Key: anything above space except ':', '"' and DEL.
        let mut i = 0;
        while i < bytes.len()
            && bytes[i] > b' '
            && bytes[i] != b':'
            && bytes[i] != b'"'
            && bytes[i] != 0x7f
        {
            i += 1;
        }
        if i == 0 || i + 1 >= bytes.len() || bytes[i] != b':' || bytes[i + 1] != b'"' {
            self.rest = "";
            return None;
        }
        let key = &tag[..i];
        let value_start = i + 1;

        let mut j = value_start + 1;
        while j < bytes.len() && bytes[j] != b'"' {
            if bytes[j] == b'\\' {
                j += 1;
            }
            j += 1;
        }
        if j >= bytes.len() {
            self.rest = "";
            return None;
        }

        let quoted = &tag[value_start..=j];
        self.rest = &tag[j + 1..];
        Some((key, quoted))
    }
}

/// Looks up `key` in an annotation and returns its decoded value.
///
/// Returns `None` when the key is absent, when a malformed segment is hit
/// before it, or when its value fails to decode.
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    for (name, quoted) in pairs(tag) {
        if name == key {
            return unquote(quoted);
        }
    }
    None
}

/// Decodes a double-quoted literal, resolving backslash escapes.
///
/// Returns `None` for a missing quote, an unescaped quote or newline inside
/// the literal, or an invalid escape sequence. `\'` is only valid in
/// single-quoted literals and is rejected here. Byte escapes (`\xHH`, `\NNN`)
/// must stay in the ASCII range since the result is UTF-8 text.
pub fn unquote(quoted: &str) -> Option<String> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    if !inner.contains('\\') {
        if inner.contains('"') || inner.contains('\n') {
            return None;
        }
        return Some(inner.to_string());
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return None,
            '\\' => out.push(unescape(&mut chars)?),
            c => out.push(c),
        }
    }
    Some(out)
}

fn unescape(chars: &mut std::str::Chars<'_>) -> Option<char> {
    let c = chars.next()?;
    let decoded = match c {
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0c}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0b}',
        '\\' => '\\',
        '"' => '"',
        'x' => ascii(hex(chars, 2)?)?,
        'u' => char::from_u32(hex(chars, 4)?)?,
        'U' => char::from_u32(hex(chars, 8)?)?,
        '0'..='7' => {
            let mut value = c.to_digit(8)?;
            for _ in 0..2 {
                value = value * 8 + chars.next()?.to_digit(8)?;
            }
            ascii(value)?
        }
        _ => return None,
    };
    Some(decoded)
}

fn ascii(value: u32) -> Option<char> {
    u8::try_from(value)
        .ok()
        .filter(u8::is_ascii)
        .map(char::from)
}

fn hex(chars: &mut std::str::Chars<'_>, digits: usize) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    Some(value)
}
