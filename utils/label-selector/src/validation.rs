//! Syntax checks for label keys and values.
//! A key is a qualified name: an optional DNS subdomain prefix and a `/`, followed by a name.

const NAME_MAX_LEN: usize = 63;
const VALUE_MAX_LEN: usize = 63;
const PREFIX_MAX_LEN: usize = 253;

/// Check that the key is a valid qualified name, returning the reason if it's not.
pub(crate) fn key(key: &str) -> Result<(), String> {
    let name = match key.split_once('/') {
        None => key,
        Some((prefix, name)) => {
            if name.contains('/') {
                return Err(
                    "must consist of an optional prefix and a name separated by a single '/'"
                        .to_string(),
                );
            }
            if prefix.is_empty() {
                return Err("prefix part must be non-empty".to_string());
            }
            dns_subdomain(prefix).map_err(|reason| format!("prefix part {reason}"))?;
            name
        }
    };
    if name.is_empty() {
        return Err("name part must be non-empty".to_string());
    }
    if name.len() > NAME_MAX_LEN {
        return Err(format!(
            "name part must be no more than {NAME_MAX_LEN} characters"
        ));
    }
    if !is_name(name) {
        return Err("name part must consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character".to_string());
    }
    Ok(())
}

/// Check that the value is a valid label value, returning the reason if it's not.
pub(crate) fn value(value: &str) -> Result<(), String> {
    if value.len() > VALUE_MAX_LEN {
        return Err(format!("must be no more than {VALUE_MAX_LEN} characters"));
    }
    if !value.is_empty() && !is_name(value) {
        return Err("a valid label must be an empty string or consist of alphanumeric characters, '-', '_' or '.', and must start and end with an alphanumeric character".to_string());
    }
    Ok(())
}

fn is_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes
                    .iter()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        }
        _ => false,
    }
}

fn dns_subdomain(subdomain: &str) -> Result<(), String> {
    if subdomain.len() > PREFIX_MAX_LEN {
        return Err(format!("must be no more than {PREFIX_MAX_LEN} characters"));
    }
    let valid = subdomain.split('.').all(|label| {
        let bytes = label.as_bytes();
        match (bytes.first(), bytes.last()) {
            (Some(first), Some(last)) => {
                is_lower_alphanumeric(*first)
                    && is_lower_alphanumeric(*last)
                    && bytes.iter().all(|b| is_lower_alphanumeric(*b) || *b == b'-')
            }
            _ => false,
        }
    });
    match valid {
        true => Ok(()),
        false => Err("must be a lowercase RFC 1123 subdomain".to_string()),
    }
}

fn is_lower_alphanumeric(b: u8) -> bool {
    b.is_ascii_lowercase() || b.is_ascii_digit()
}
