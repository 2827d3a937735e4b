use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::movielens::parse;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: u32,
    pub title: String,
    pub genres: Vec<String>,
}

impl TryFrom<String> for Movie {
    type Error = anyhow::Error;

    fn try_from(line: String) -> Result<Self> {
        let fields = parse::split_fields(&line, 3)?;

        Ok(Movie {
            movie_id: parse::parse_u32(fields[0])?,
            title: fields[1].to_string(),
            // Order preserved, no trimming, empty substrings kept
            genres: fields[2].split('|').map(str::to_string).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_movie_row() {
        let line = "1::Toy Story (1995)::Adventure|Animation|Children|Comedy|Fantasy";
        let movie = Movie::try_from(line.to_string()).unwrap();

        assert_eq!(movie.movie_id, 1);
        assert_eq!(movie.title, "Toy Story (1995)");
        assert_eq!(
            movie.genres,
            vec!["Adventure", "Animation", "Children", "Comedy", "Fantasy"]
        );
    }

    #[test]
    fn genre_order_is_preserved() {
        let movie = Movie::try_from("7::Sabrina (1995)::Action|Comedy|Drama".to_string()).unwrap();
        assert_eq!(movie.genres, vec!["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn single_genre_yields_one_label() {
        let movie = Movie::try_from("25::Leaving Las Vegas (1995)::Drama".to_string()).unwrap();
        assert_eq!(movie.genres, vec!["Drama"]);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(Movie::try_from("1::Toy Story (1995)".to_string()).is_err());
        assert!(Movie::try_from("1::Toy Story (1995)::Comedy::extra".to_string()).is_err());
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(Movie::try_from("one::Toy Story (1995)::Comedy".to_string()).is_err());
    }
}
