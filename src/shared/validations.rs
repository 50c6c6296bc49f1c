//! Input normalisation and format checks shared by several contexts.

const DNI_LETTERS: &[u8; 23] = b"TRWAGMYFPDXBNJZSQVHLCKE";

/// Upper-case a DNI/NIE and strip spaces, dashes and dots.
pub fn normalize_dni_nie(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.'))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Check a normalised DNI (8 digits + letter) or NIE (X/Y/Z + 7 digits + letter).
pub fn is_valid_dni_nie(value: &str) -> bool {
    if value.len() != 9 || !value.is_ascii() {
        return false;
    }

    let bytes = value.as_bytes();
    let prefix = match bytes[0] {
        b'X' => b'0',
        b'Y' => b'1',
        b'Z' => b'2',
        d if d.is_ascii_digit() => d,
        _ => return false,
    };

    let mut digits = String::with_capacity(8);
    digits.push(prefix as char);
    digits.push_str(&value[1..8]);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let Ok(number) = digits.parse::<u32>() else {
        return false;
    };
    DNI_LETTERS[(number % 23) as usize] == bytes[8]
}

/// Lower-case and trim an e-mail address.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Spanish postal codes: five digits, province prefix 01..=52.
pub fn is_valid_spanish_postal_code(value: &str) -> bool {
    if value.len() != 5 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    matches!(value[..2].parse::<u8>(), Ok(1..=52))
}

/// Blank strings become `None`, everything else is trimmed.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dni() {
        assert!(is_valid_dni_nie("12345678Z"));
        assert!(is_valid_dni_nie("00000000T"));
    }

    #[test]
    fn dni_with_wrong_letter() {
        assert!(!is_valid_dni_nie("12345678A"));
    }

    #[test]
    fn valid_nie() {
        // X1234567 -> 01234567 % 23 = 19 -> L
        assert!(is_valid_dni_nie("X1234567L"));
        assert!(!is_valid_dni_nie("X1234567A"));
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(!is_valid_dni_nie(""));
        assert!(!is_valid_dni_nie("1234567Z"));
        assert!(!is_valid_dni_nie("A2345678Z"));
        assert!(!is_valid_dni_nie("1234X678Z"));
    }

    #[test]
    fn normalization_strips_separators() {
        assert_eq!(normalize_dni_nie(" 12.345.678-z "), "12345678Z");
        assert_eq!(normalize_email("  Ana@Example.COM "), "ana@example.com");
    }

    #[test]
    fn postal_codes() {
        assert!(is_valid_spanish_postal_code("28013"));
        assert!(!is_valid_spanish_postal_code("99000"));
        assert!(!is_valid_spanish_postal_code("2801"));
        assert!(!is_valid_spanish_postal_code("28O13"));
    }

    #[test]
    fn non_blank_trims() {
        assert_eq!(non_blank(Some("  x ".into())), Some("x".into()));
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(None), None);
    }
}
