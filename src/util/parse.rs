use crate::error::port::PortError;

/// Parses the HTTP port from the first positional startup argument
///
/// # Arguments
/// - `value` - The raw argument, if one was supplied
///
/// # Returns
/// - `Ok(u16)` - Successfully parsed a port in `1..=65535`
/// - `Err(PortError::Missing)` - No argument was supplied
/// - `Err(PortError::NotDecimal)` - The argument is empty or has a non-digit, sign included
/// - `Err(PortError::Invalid)` - The argument is a base-10 integer too large for a port
/// - `Err(PortError::Zero)` - The argument parsed to port 0
pub fn parse_port(value: Option<&str>) -> Result<u16, PortError> {
    let value = value.ok_or(PortError::Missing)?;

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PortError::NotDecimal {
            value: value.to_string(),
        });
    }

    let port = value
        .parse::<u16>()
        .map_err(|e| PortError::Invalid {
            value: value.to_string(),
            source: e,
        })?;

    if port == 0 {
        return Err(PortError::Zero);
    }

    Ok(port)
}
