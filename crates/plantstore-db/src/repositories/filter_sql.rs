//! Translation of `PlantFilter` into a SQL `WHERE` clause.

use plantstore_core::PlantFilter;
use sqlx::{QueryBuilder, Sqlite};

/// Append the `WHERE` clause for `filter` (nothing for a match-all filter).
///
/// Search terms arrive lowercased; `search_name` is the lowercased name and
/// categories are stored lowercase, so `instr` gives a case-insensitive
/// substring test without LIKE wildcard escaping.
pub fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &PlantFilter) {
    let mut separator = " WHERE ";

    if let Some(search) = &filter.search {
        qb.push(separator)
            .push("(instr(search_name, ")
            .push_bind(search.clone())
            .push(") > 0 OR EXISTS (SELECT 1 FROM json_each(plants.categories) AS c WHERE instr(lower(c.value), ")
            .push_bind(search.clone())
            .push(") > 0))");
        separator = " AND ";
    }

    if let Some(category) = &filter.category {
        qb.push(separator)
            .push("EXISTS (SELECT 1 FROM json_each(plants.categories) AS c WHERE c.value = ")
            .push_bind(category.clone())
            .push(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plantstore_core::build_query;

    fn sql_for(filter: &PlantFilter) -> String {
        let mut qb = QueryBuilder::<Sqlite>::new("SELECT id FROM plants");
        push_filter(&mut qb, filter);
        qb.sql().to_string()
    }

    #[test]
    fn test_match_all_has_no_where_clause() {
        assert_eq!(sql_for(&build_query(None, None)), "SELECT id FROM plants");
    }

    #[test]
    fn test_search_and_category_are_joined_with_and() {
        let sql = sql_for(&build_query(Some("aloe"), Some("indoor")));
        assert!(sql.contains(" WHERE (instr(search_name, ?)"));
        assert!(sql.contains(" AND EXISTS (SELECT 1 FROM json_each(plants.categories) AS c WHERE c.value = ?)"));
    }

    #[test]
    fn test_category_only() {
        let sql = sql_for(&build_query(None, Some("indoor")));
        assert!(sql.starts_with("SELECT id FROM plants WHERE EXISTS"));
        assert!(!sql.contains("instr"));
    }
}
