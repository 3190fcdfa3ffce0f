use rusqlite::{ParamsFromIter, ToSql};

/// AND-joined WHERE conditions built from optional filters. Each `?` in a
/// pushed expression is bound to that condition's value.
#[derive(Default)]
pub struct Conditions {
    clauses: Vec<String>,
    values: Vec<Box<dyn ToSql>>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: ToSql + 'static>(&mut self, expression: &str, value: T) {
        self.values.push(Box::new(value));
        let placeholder = format!("?{}", self.values.len());
        self.clauses.push(expression.replace('?', &placeholder));
    }

    pub fn push_opt<T: ToSql + 'static>(&mut self, expression: &str, value: Option<T>) {
        if let Some(value) = value {
            self.push(expression, value);
        }
    }

    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", self.clauses.join(" AND "))
        }
    }

    pub fn params(&self) -> ParamsFromIter<std::slice::Iter<'_, Box<dyn ToSql>>> {
        rusqlite::params_from_iter(self.values.iter())
    }
}

/// `?1, ?2, ...` for an IN list of `count` values
pub fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}
