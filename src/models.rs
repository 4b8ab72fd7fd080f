use serde::{Deserialize, Deserializer, Serialize};

use crate::entities::{director, genre, movie};

/// Output shape for a movie. `genre_id` is stored and filterable but never
/// serialized.
#[derive(Debug, Serialize)]
pub struct MovieOut {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i32>,
    pub rating: Option<f64>,
    pub director_id: Option<i32>,
}

impl From<movie::Model> for MovieOut {
    fn from(m: movie::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            description: m.description,
            trailer: m.trailer,
            year: m.year,
            rating: m.rating,
            director_id: m.director_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NamedOut {
    pub id: i32,
    pub name: Option<String>,
}

impl From<director::Model> for NamedOut {
    fn from(d: director::Model) -> Self {
        Self { id: d.id, name: d.name }
    }
}

impl From<genre::Model> for NamedOut {
    fn from(g: genre::Model) -> Self {
        Self { id: g.id, name: g.name }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMovie {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub trailer: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub genre_id: Option<i32>,
    #[serde(default)]
    pub director_id: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewNamed {
    #[serde(default)]
    pub name: Option<String>,
}

/// Column set for the movie bulk update. Outer `None` means the key was
/// absent and the column stays untouched; `Some(None)` means the key was
/// present with a null value and the column is set to NULL. `id` is not a
/// member, so a payload trying to rewrite the primary key is rejected.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovieColumns {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub trailer: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub rating: Option<Option<f64>>,
    #[serde(default, deserialize_with = "double_option")]
    pub genre_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub director_id: Option<Option<i32>>,
}

impl MovieColumns {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.trailer.is_none()
            && self.year.is_none()
            && self.rating.is_none()
            && self.genre_id.is_none()
            && self.director_id.is_none()
    }
}

/// Merge-update patch for directors and genres.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamePatch {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_movie_rejects_unknown_keys() {
        let err = serde_json::from_str::<NewMovie>(r#"{"title":"Dune","producer":"x"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn movie_columns_distinguish_null_from_absent() {
        let cols: MovieColumns = serde_json::from_str(r#"{"rating":null,"year":1979}"#).unwrap();
        assert_eq!(cols.rating, Some(None));
        assert_eq!(cols.year, Some(Some(1979)));
        assert_eq!(cols.title, None);
    }

    #[test]
    fn movie_columns_reject_id() {
        assert!(serde_json::from_str::<MovieColumns>(r#"{"id":7}"#).is_err());
    }

    #[test]
    fn empty_patch_is_empty() {
        let cols: MovieColumns = serde_json::from_str("{}").unwrap();
        assert!(cols.is_empty());
        let patch: NamePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.name.is_none());
    }

    #[test]
    fn movie_out_drops_genre_id() {
        let model = crate::entities::movie::Model {
            id: 1,
            title: Some("Stalker".into()),
            description: None,
            trailer: None,
            year: Some(1979),
            rating: Some(8.1),
            genre_id: Some(3),
            director_id: Some(2),
        };
        let value = serde_json::to_value(MovieOut::from(model)).unwrap();
        assert!(value.get("genre_id").is_none());
        assert_eq!(value["director_id"], 2);
    }
}
