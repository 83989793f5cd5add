//! Models for the OpenAlex `/works` listing
//!
//! Only the fields needed to enumerate authorships are modelled; everything
//! else in a work object is ignored. Missing arrays and objects deserialize
//! as empty so that sparse records never abort a page.

use serde::Deserialize;

/// One page of `GET /works`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorksResponse {
    /// A missing or `null` list reads as an empty page.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<Work>,
}

/// A scholarly work
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Work {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub authorships: Vec<Authorship>,
}

/// Link between one author and one work
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Authorship {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: Author,
}

/// Dehydrated author object embedded in an authorship
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Author {
    /// OpenAlex author ID, e.g. `https://openalex.org/A5023888391`
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    /// ORCID URL, e.g. `https://orcid.org/0000-0001-6187-6610`
    #[serde(default)]
    pub orcid: Option<String>,
}

impl Author {
    /// ORCID without the `https://orcid.org/` prefix, if one is recorded.
    pub fn short_orcid(&self) -> Option<&str> {
        self.orcid
            .as_deref()
            .filter(|orcid| !orcid.is_empty())
            .map(crate::utils::strip_orcid_prefix)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_works_page() {
        let body = json!({
            "meta": {"count": 1, "page": 1, "per_page": 200},
            "results": [{
                "id": "https://openalex.org/W1",
                "display_name": "A paper",
                "authorships": [
                    {"author": {
                        "id": "https://openalex.org/A1",
                        "display_name": "Ada Lovelace",
                        "orcid": "https://orcid.org/0000-0001-0000-0001"
                    }},
                    {"author": {"id": "https://openalex.org/A2", "display_name": "Bob", "orcid": null}}
                ]
            }]
        });
        let page: WorksResponse = serde_json::from_value(body).unwrap();
        assert_eq!(page.results.len(), 1);
        let authors = &page.results[0].authorships;
        assert_eq!(authors[0].author.short_orcid(), Some("0000-0001-0000-0001"));
        assert_eq!(authors[1].author.short_orcid(), None);
    }

    #[test]
    fn test_sparse_records() {
        let body = json!({
            "results": [
                {"id": "https://openalex.org/W1"},
                {"authorships": null},
                {"authorships": [{"author": null}, {}]}
            ]
        });
        let page: WorksResponse = serde_json::from_value(body).unwrap();
        assert!(page.results[0].authorships.is_empty());
        assert!(page.results[1].authorships.is_empty());
        assert_eq!(page.results[2].authorships[0].author, Author::default());
        assert_eq!(page.results[2].authorships[1].author, Author::default());
    }

    #[test]
    fn test_missing_results_is_empty_page() {
        let page: WorksResponse = serde_json::from_value(json!({})).unwrap();
        assert!(page.results.is_empty());
        let page: WorksResponse = serde_json::from_value(json!({"results": null})).unwrap();
        assert!(page.results.is_empty());
    }
}
