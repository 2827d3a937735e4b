use anyhow::{Context, Result};

use super::FIELD_SEP;

/// Splits a data line on the literal `::` separator, requiring exactly
/// `expected` fields. Too few and too many both fail.
pub fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>> {
    let fields: Vec<&str> = line.split(FIELD_SEP).collect();
    if fields.len() != expected {
        anyhow::bail!(
            "expected {} `{}`-separated fields, found {}: {:?}",
            expected,
            FIELD_SEP,
            fields.len(),
            line
        );
    }
    Ok(fields)
}

pub fn parse_u32(s: &str) -> Result<u32> {
    s.parse::<u32>()
        .context(format!("Failed to parse int: {}", s))
}

pub fn parse_f32(s: &str) -> Result<f32> {
    s.parse::<f32>()
        .context(format!("Failed to parse float: {}", s))
}

pub fn parse_i64(s: &str) -> Result<i64> {
    s.parse::<i64>()
        .context(format!("Failed to parse timestamp: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_double_colon() {
        let fields = split_fields("1::122::5::838985046", 4).unwrap();
        assert_eq!(fields, vec!["1", "122", "5", "838985046"]);
    }

    #[test]
    fn rejects_too_few_fields() {
        assert!(split_fields("1::122::5", 4).is_err());
    }

    #[test]
    fn rejects_too_many_fields() {
        assert!(split_fields("1::122::5::838985046::extra", 4).is_err());
    }

    #[test]
    fn single_colons_do_not_delimit() {
        let fields = split_fields("1::Ben-Hur: A Tale of the Christ (1925)::Drama", 3).unwrap();
        assert_eq!(fields[1], "Ben-Hur: A Tale of the Christ (1925)");
    }

    #[test]
    fn numeric_parse_errors_carry_the_value() {
        let err = parse_u32("abc").unwrap_err();
        assert!(err.to_string().contains("abc"));
    }
}
