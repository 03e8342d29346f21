/// Parse a delimiter given on the command line or in a config file.
///
/// Accepts a single ASCII character, or one of the names `\t`, `tab`, `comma`,
/// `space`, `semicolon`, `pipe`.
pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "\\t" | "tab" | "TAB" => return Ok(b'\t'),
        "comma" => return Ok(b','),
        "space" => return Ok(b' '),
        "semicolon" => return Ok(b';'),
        "pipe" => return Ok(b'|'),
        _ => {}
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(format!(
            "Invalid delimiter '{}': expected a single ASCII character or one of \\t, tab, comma, space, semicolon, pipe",
            value.escape_default()
        )),
    }
}
