use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::movielens::parse;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: u32,
    pub movie_id: u32,
    pub rating: f32,
    pub timestamp: i64,
}

impl TryFrom<String> for Rating {
    type Error = anyhow::Error;

    fn try_from(line: String) -> Result<Self> {
        let fields = parse::split_fields(&line, 4)?;

        Ok(Rating {
            user_id: parse::parse_u32(fields[0])?,
            movie_id: parse::parse_u32(fields[1])?,
            rating: parse::parse_f32(fields[2])?,
            timestamp: parse::parse_i64(fields[3])?,
        })
    }
}
