// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Error, expression::Expression};

/// One generated test case: a forest of root expressions selected from a
/// single source object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryTemplate {
	pub source: String,
	pub select_expressions: Vec<Expression>,
	pub where_expression: Option<Expression>,
}

impl QueryTemplate {
	pub fn new(source: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			select_expressions: Vec::new(),
			where_expression: None,
		}
	}

	/// Select list first, then the where clause, if any.
	pub fn root_expressions(&self) -> impl Iterator<Item = &Expression> {
		self.select_expressions.iter().chain(self.where_expression.as_ref())
	}

	/// True if any expression reachable from the roots satisfies the
	/// predicate, returning on the first hit. With `check_recursively`,
	/// every argument of every call is descended into transitively;
	/// otherwise only the roots themselves are tested. An empty template
	/// matches nothing.
	pub fn matches_any_expression<P>(&self, predicate: P, check_recursively: bool) -> bool
	where
		P: Fn(&Expression) -> bool,
	{
		trace!(check_recursively, "matching predicate against query expressions");
		self.root_expressions().any(|expression| expression.matches(&predicate, check_recursively))
	}

	pub fn render_sql(&self) -> crate::Result<String> {
		if self.select_expressions.is_empty() {
			return Err(Error::EmptySelectList);
		}

		let select = self
			.select_expressions
			.iter()
			.map(|expression| expression.render_sql())
			.collect::<crate::Result<Vec<_>>>()?
			.join(", ");

		let mut sql = format!("SELECT {} FROM {}", select, self.source);
		if let Some(where_expression) = &self.where_expression {
			sql.push_str(" WHERE ");
			sql.push_str(&where_expression.render_sql()?);
		}
		Ok(sql)
	}
}
