//! Per-field-type validity predicates.

/// Type discriminator of an input control, as in its `type` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Checkbox,
}

impl InputType {
    /// Unknown discriminators fall back to [`InputType::Text`].
    pub fn parse(discriminator: &str) -> Self {
        match discriminator.trim().to_ascii_lowercase().as_str() {
            "email" => Self::Email,
            "password" => Self::Password,
            "checkbox" => Self::Checkbox,
            _ => Self::Text,
        }
    }
}

/// Lengths are measured in UTF-16 code units, as browsers report them.
pub const MIN_PASSWORD_UNITS: usize = 7;

pub fn is_valid(input_type: InputType, value: &str) -> bool {
    match input_type {
        InputType::Email => looks_like_email(value),
        InputType::Password => utf16_len(value) >= MIN_PASSWORD_UNITS,
        InputType::Text | InputType::Checkbox => utf16_len(value) > 0,
    }
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Loose `local@domain.tld` shape check: at least one unit before the `@`,
/// two before the final `.`, two after it. Not anchored, single line.
fn looks_like_email(value: &str) -> bool {
    value
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .any(line_looks_like_email)
}

fn line_looks_like_email(line: &str) -> bool {
    const AT: u16 = b'@' as u16;
    const DOT: u16 = b'.' as u16;

    let units = line.encode_utf16().collect::<Vec<_>>();
    if units.len() < 3 {
        return false;
    }

    let Some(at) = units.iter().skip(1).position(|&unit| unit == AT).map(|index| index + 1) else {
        return false;
    };
    let Some(dot) = units[..units.len() - 2].iter().rposition(|&unit| unit == DOT) else {
        return false;
    };

    dot >= at + 3
}
