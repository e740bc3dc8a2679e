//! `orderBy` query string to SQL `ORDER BY` translation.
//!
//! Only whitelisted column names ever reach the generated clause, so the
//! result is safe to splice into a query string.

/// Build an `ORDER BY` body (without the keyword) from a client expression
/// such as `"age desc, name"`.
///
/// Unknown fields are dropped. Falls back to `default` when nothing usable
/// remains.
pub fn build_order_clause(order_by: Option<&str>, allowed: &[&str], default: &str) -> String {
    let Some(expr) = order_by.map(str::trim).filter(|s| !s.is_empty()) else {
        return default.to_string();
    };

    let terms: Vec<String> = expr
        .split(',')
        .filter_map(|term| {
            let mut parts = term.split_whitespace();
            let field = parts.next()?;
            let column = allowed.iter().find(|c| c.eq_ignore_ascii_case(field))?;
            let direction = match parts.next() {
                Some(d) if d.eq_ignore_ascii_case("desc") => "DESC",
                _ => "ASC",
            };
            Some(format!("{column} {direction}"))
        })
        .collect();

    if terms.is_empty() {
        default.to_string()
    } else {
        terms.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALLOWED: &[&str] = &["name", "age", "position"];

    #[test]
    fn empty_expression_uses_default() {
        assert_eq!(build_order_clause(None, ALLOWED, "name ASC"), "name ASC");
        assert_eq!(build_order_clause(Some("  "), ALLOWED, "name ASC"), "name ASC");
    }

    #[test]
    fn mixed_directions_and_case() {
        assert_eq!(
            build_order_clause(Some("Age desc, NAME"), ALLOWED, "name ASC"),
            "age DESC, name ASC"
        );
    }

    #[test]
    fn unknown_fields_are_dropped() {
        assert_eq!(
            build_order_clause(Some("salary desc; drop table employees"), ALLOWED, "name ASC"),
            "name ASC"
        );
        assert_eq!(
            build_order_clause(Some("salary, position desc"), ALLOWED, "name ASC"),
            "position DESC"
        );
    }
}
