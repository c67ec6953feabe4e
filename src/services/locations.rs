use log::error;

use crate::dto::locations::LocationSuggestion;
use crate::repository::LocationReader;

use super::{ServiceError, ServiceResult};

/// Default cap on the number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: i64 = 8;

/// Location suggestions for the autocomplete field. An empty term returns
/// the default alphabetical page.
pub fn suggest_locations<R>(term: &str, repo: &R) -> ServiceResult<Vec<LocationSuggestion>>
where
    R: LocationReader,
{
    match repo.suggest_locations(term, DEFAULT_SUGGESTION_LIMIT) {
        Ok(locations) => Ok(locations.into_iter().map(Into::into).collect()),
        Err(e) => {
            error!("Failed to suggest locations: {e}");
            Err(ServiceError::from(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::space::Location;
    use crate::domain::types::LocationId;
    use crate::repository::test::TestRepository;

    fn location(id: i32, city: &str, area: &str) -> Location {
        Location {
            id: LocationId::new(id).unwrap(),
            city: city.to_string(),
            area: area.to_string(),
        }
    }

    fn repo() -> TestRepository {
        TestRepository::new(vec![], vec![]).with_locations(vec![
            location(1, "York", "Old Town"),
            location(2, "Leeds", "Docklands"),
            location(3, "Leeds", "Arena Quarter"),
        ])
    }

    #[test]
    fn empty_term_returns_alphabetical_page() {
        let suggestions = suggest_locations("", &repo()).unwrap();
        let labels: Vec<&str> = suggestions.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Arena Quarter, Leeds", "Docklands, Leeds", "Old Town, York"]
        );
    }

    #[test]
    fn term_matches_city_or_area() {
        let suggestions = suggest_locations("dock", &repo()).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].label, "Docklands, Leeds");

        let suggestions = suggest_locations("york", &repo()).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, 1);
    }
}
