use crate::core::Granularity;

/// SQL expression that truncates a date column to its bucket key.
/// Month and year buckets land on the first day of the period, matching
/// `Granularity::truncate`.
pub fn bucket_expr(granularity: Granularity, column: &str) -> String {
    match granularity {
        Granularity::Day => column.to_string(),
        Granularity::Month => format!("CAST(DATE_FORMAT({column}, '%Y-%m-01') AS DATE)"),
        Granularity::Year => format!("MAKEDATE(YEAR({column}), 1)"),
    }
}

/// Build a `?, ?, ?` placeholder list for a SQL `IN (...)` clause.
///
/// The access resolver never yields an empty location set, but an empty
/// list still produces valid SQL (`IN (NULL)` matches nothing).
pub fn in_placeholders(count: usize) -> String {
    if count == 0 {
        return "NULL".to_string();
    }
    let mut placeholders = String::with_capacity(count * 3);
    for i in 0..count {
        if i > 0 {
            placeholders.push_str(", ");
        }
        placeholders.push('?');
    }
    placeholders
}
