use crate::error::DecodeError;

/// Number of binary digits rendered per byte.
pub const GROUP_WIDTH: usize = 8;

/// Separator used between byte groups in canonical form.
pub const DEFAULT_SEPARATOR: &str = " ";

/// Renders the UTF-8 bytes of `text` as 8-digit binary groups, MSB first,
/// joined by `sep`.
pub fn encode<T>(text: T, sep: &str) -> String
where
    T: AsRef<str>,
{
    let bytes = text.as_ref().as_bytes();
    log::debug!("[encode] {} byte(s), separator {sep:?}", bytes.len());

    bytes
        .iter()
        .map(|byte| format!("{byte:08b}"))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Parses a binary string back into text.
///
/// Input containing any whitespace is split on whitespace runs, otherwise it
/// is read as a contiguous bit string cut into 8-digit groups. Nothing is
/// returned unless every group is valid and the bytes form UTF-8.
pub fn decode<T>(input: T) -> Result<String, DecodeError>
where
    T: AsRef<str>,
{
    let raw = input.as_ref().trim();
    if raw.is_empty() {
        return Ok(String::new());
    }

    let groups = if raw.chars().any(char::is_whitespace) {
        log::debug!("[decode] whitespace separated input");
        raw.split_whitespace().collect::<Vec<_>>()
    } else {
        let len = raw.chars().count();
        if len % GROUP_WIDTH != 0 {
            return Err(DecodeError::InvalidLength { len });
        }
        log::debug!("[decode] contiguous input of {len} digit(s)");
        contiguous_groups(raw)
    };

    let bytes = groups
        .into_iter()
        .map(parse_group)
        .collect::<Result<Vec<u8>, _>>()?;

    Ok(String::from_utf8(bytes)?)
}

/// Cuts `raw` into consecutive slices of `GROUP_WIDTH` characters.
fn contiguous_groups(raw: &str) -> Vec<&str> {
    let mut bounds = raw
        .char_indices()
        .map(|(i, _)| i)
        .step_by(GROUP_WIDTH)
        .collect::<Vec<_>>();
    bounds.push(raw.len());

    bounds.windows(2).map(|w| &raw[w[0]..w[1]]).collect()
}

fn parse_group(group: &str) -> Result<u8, DecodeError> {
    let len = group.chars().count();
    if len != GROUP_WIDTH {
        return Err(DecodeError::InvalidGroupLength {
            group: group.to_string(),
            len,
        });
    }
    if group.bytes().any(|b| b != b'0' && b != b'1') {
        return Err(DecodeError::InvalidDigit {
            group: group.to_string(),
        });
    }

    Ok(group
        .bytes()
        .fold(0u8, |acc, digit| (acc << 1) | (digit - b'0')))
}
