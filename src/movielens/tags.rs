use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::movielens::parse;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub user_id: u32,
    pub movie_id: u32,
    pub tag: String,
    pub timestamp: i64,
}

impl TryFrom<String> for Tag {
    type Error = anyhow::Error;

    fn try_from(line: String) -> Result<Self> {
        let fields = parse::split_fields(&line, 4)?;

        Ok(Tag {
            user_id: parse::parse_u32(fields[0])?,
            movie_id: parse::parse_u32(fields[1])?,
            tag: fields[2].to_string(),
            timestamp: parse::parse_i64(fields[3])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_tag_row() {
        let tag = Tag::try_from("15::4973::excellent!::1215184630".to_string()).unwrap();

        assert_eq!(tag.user_id, 15);
        assert_eq!(tag.movie_id, 4973);
        assert_eq!(tag.tag, "excellent!");
        assert_eq!(tag.timestamp, 1215184630);
    }

    #[test]
    fn tag_text_is_kept_verbatim() {
        let tag = Tag::try_from("20::1747:: political satire ::1188263867".to_string()).unwrap();
        assert_eq!(tag.tag, " political satire ");
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(Tag::try_from("15::4973::excellent!".to_string()).is_err());
    }
}
