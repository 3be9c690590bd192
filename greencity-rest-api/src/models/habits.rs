//! Habit search filter extraction

use greencity_web::{MultiQuery, WebError};

/// Optional filters accepted by `GET /habit/search`
///
/// Every field is independent; an absent parameter places no
/// constraint on the result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitSearchFilters {
    /// Tag names, any match
    pub tags: Option<Vec<String>>,
    /// Restrict to custom (or non-custom) habits
    pub is_custom_habit: Option<bool>,
    /// Complexity levels, any match
    pub complexities: Option<Vec<i32>>,
}

impl HabitSearchFilters {
    /// Pull the filter parameters out of the query string
    pub fn from_query(query: &MultiQuery) -> Result<Self, WebError> {
        Ok(Self {
            tags: query.list("tags"),
            is_custom_habit: query.typed_first("isCustomHabit")?,
            complexities: query.typed_list("complexities")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_all_three_filters() {
        let query = MultiQuery::parse("tags=eco&tags=news&isCustomHabit=true&complexities=1,2");
        let filters = HabitSearchFilters::from_query(&query).unwrap();

        assert_eq!(filters.tags, Some(vec!["eco".to_string(), "news".to_string()]));
        assert_eq!(filters.is_custom_habit, Some(true));
        assert_eq!(filters.complexities, Some(vec![1, 2]));
    }

    #[test]
    fn absent_filters_stay_unconstrained() {
        let query = MultiQuery::parse("locale=en");
        let filters = HabitSearchFilters::from_query(&query).unwrap();
        assert_eq!(filters, HabitSearchFilters::default());
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let query = MultiQuery::parse("isCustomHabit=maybe");
        assert!(HabitSearchFilters::from_query(&query).is_err());
    }
}
