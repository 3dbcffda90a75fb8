//! Tag content parser for rich-text markup.
//!
//! Parses the content inside `[...]` and the numeric attributes tags carry.

use crate::error::AttributeError;

/// Slider value that maps to an effect speed of 1.0 in `[typewriter speed=..]`.
const TYPEWRITER_SPEED_SCALE: f32 = 50.0;

/// The result of parsing tag content.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag<'a> {
    /// An opening tag: `[color=red]`, `[b]`, `[typewriter speed=50]`.
    Open {
        /// Lowercased tag name.
        name: String,
        /// Everything after the name (`red`, `speed=50`), if non-empty.
        value: Option<&'a str>,
    },
    /// A closing tag: `[/b]`. The name is kept for logging only; closing
    /// tags pop the innermost open tag regardless of name.
    Close(&'a str),
}

impl<'a> Tag<'a> {
    /// Parse tag content (the text inside `[...]`).
    ///
    /// The name ends at the first `=` or whitespace. After `=` the rest is the
    /// value; after whitespace the rest is a `key=value` attribute string.
    /// Spaces around the `=` are allowed (`[color = red]`).
    ///
    /// # Examples
    ///
    /// ```
    /// use rich::parser::Tag;
    ///
    /// assert_eq!(
    ///     Tag::parse("color=red"),
    ///     Tag::Open { name: "color".into(), value: Some("red") }
    /// );
    /// assert_eq!(
    ///     Tag::parse("typewriter speed=50"),
    ///     Tag::Open { name: "typewriter".into(), value: Some("speed=50") }
    /// );
    /// assert_eq!(Tag::parse("/b"), Tag::Close("b"));
    /// ```
    pub fn parse(content: &'a str) -> Self {
        let content = content.trim();

        if let Some(rest) = content.strip_prefix('/') {
            return Tag::Close(rest.trim());
        }

        let split = content
            .find(|c: char| c == '=' || c.is_whitespace())
            .unwrap_or(content.len());
        let (name, rest) = content.split_at(split);
        let rest = rest.trim_start();
        let rest = rest.strip_prefix('=').unwrap_or(rest).trim();

        Tag::Open {
            name: name.to_ascii_lowercase(),
            value: (!rest.is_empty()).then_some(rest),
        }
    }

    /// Check if this is a close tag.
    pub fn is_close(&self) -> bool {
        matches!(self, Tag::Close(_))
    }
}

/// Parse a `[size=..]` multiplier.
///
/// # Examples
///
/// ```
/// use rich::parser::parse_size;
///
/// assert_eq!(parse_size("1.5"), Ok(1.5));
/// assert!(parse_size("-2").is_err());
/// assert!(parse_size("huge").is_err());
/// ```
pub fn parse_size(value: &str) -> Result<f32, AttributeError> {
    parse_positive(value)
}

/// Parse a typewriter value (`50` or `speed=50`) into an effect speed.
///
/// The slider value is divided by 50, so `speed=50` is an effect speed of
/// 1.0 (20 characters per second).
pub fn parse_typewriter_speed(value: &str) -> Result<f32, AttributeError> {
    let value = value.trim();
    let number = match value.split_once('=') {
        Some((key, number)) if key.trim().eq_ignore_ascii_case("speed") => number,
        Some((key, _)) => return Err(AttributeError::UnknownKey(key.trim().to_string())),
        None => value,
    };

    Ok(parse_positive(number)? / TYPEWRITER_SPEED_SCALE)
}

fn parse_positive(value: &str) -> Result<f32, AttributeError> {
    let value = value.trim();
    let number: f32 = value
        .parse()
        .map_err(|_| AttributeError::InvalidNumber(value.to_string()))?;

    if number.is_finite() && number > 0.0 {
        Ok(number)
    } else {
        Err(AttributeError::NonPositive(number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(name: &str, value: Option<&'static str>) -> Tag<'static> {
        Tag::Open {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn parse_bare_tag() {
        assert_eq!(Tag::parse("b"), open("b", None));
        assert_eq!(Tag::parse("wave"), open("wave", None));
    }

    #[test]
    fn parse_name_is_lowercased() {
        assert_eq!(Tag::parse("COLOR=Red"), open("color", Some("Red")));
    }

    #[test]
    fn parse_value_after_equals() {
        assert_eq!(Tag::parse("size=2"), open("size", Some("2")));
        assert_eq!(Tag::parse("color=#FF0000"), open("color", Some("#FF0000")));
    }

    #[test]
    fn parse_attribute_after_space() {
        assert_eq!(
            Tag::parse("typewriter speed=50"),
            open("typewriter", Some("speed=50"))
        );
    }

    #[test]
    fn parse_spaces_around_equals() {
        assert_eq!(Tag::parse("color = red"), open("color", Some("red")));
        assert_eq!(Tag::parse("size =2"), open("size", Some("2")));
        assert_eq!(Tag::parse("color= blue"), open("color", Some("blue")));
    }

    #[test]
    fn parse_empty_value_is_none() {
        assert_eq!(Tag::parse("color="), open("color", None));
        assert_eq!(Tag::parse(""), open("", None));
    }

    #[test]
    fn parse_close() {
        assert_eq!(Tag::parse("/b"), Tag::Close("b"));
        assert_eq!(Tag::parse("/"), Tag::Close(""));
        assert!(Tag::parse("/color").is_close());
        assert!(!Tag::parse("color").is_close());
    }

    #[test]
    fn size_values() {
        assert_eq!(parse_size("2"), Ok(2.0));
        assert_eq!(parse_size(" 0.5 "), Ok(0.5));
        assert_eq!(parse_size("0"), Err(AttributeError::NonPositive(0.0)));
        assert!(matches!(
            parse_size("big"),
            Err(AttributeError::InvalidNumber(_))
        ));
    }

    #[test]
    fn typewriter_speed_forms() {
        assert_eq!(parse_typewriter_speed("50"), Ok(1.0));
        assert_eq!(parse_typewriter_speed("speed=100"), Ok(2.0));
        assert_eq!(parse_typewriter_speed("SPEED = 25"), Ok(0.5));
        assert_eq!(
            parse_typewriter_speed("pace=50"),
            Err(AttributeError::UnknownKey("pace".into()))
        );
        assert!(parse_typewriter_speed("speed=fast").is_err());
        assert!(parse_typewriter_speed("-5").is_err());
    }
}
