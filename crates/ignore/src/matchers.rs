// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

//! Reusable matchers over single expression nodes, combinators to compose
//! them, and the query-wide check the ignore filter uses to decide whether a
//! nested-argument inconsistency entry applies to a generated query.
//!
//! Every matcher is total: a node of the wrong variant is `false`, never an
//! error.

use parity_expr::{Expression, Operation, QueryTemplate};
use tracing::debug;

pub fn matches_x_or_y<X, Y>(expression: &Expression, x: X, y: Y) -> bool
where
	X: Fn(&Expression) -> bool,
	Y: Fn(&Expression) -> bool,
{
	x(expression) || y(expression)
}

pub fn matches_x_and_y<X, Y>(expression: &Expression, x: X, y: Y) -> bool
where
	X: Fn(&Expression) -> bool,
	Y: Fn(&Expression) -> bool,
{
	x(expression) && y(expression)
}

/// True iff the node is a call of the named function. The name must already
/// be lower-case: callers own normalization, a mixed-case argument simply
/// never matches.
pub fn matches_fun_by_name(expression: &Expression, function_name_in_lower_case: &str) -> bool {
	match expression {
		Expression::Call(call) => match &call.operation {
			Operation::Function(function) => function.name() == function_name_in_lower_case,
			Operation::Operator(_) => false,
		},
		_ => false,
	}
}

/// True iff the node is a call of the operator with exactly this pattern.
pub fn matches_op_by_pattern(expression: &Expression, pattern: &str) -> bool {
	match expression {
		Expression::Call(call) => match &call.operation {
			Operation::Operator(operator) => operator.pattern() == pattern,
			Operation::Function(_) => false,
		},
		_ => false,
	}
}

/// Shallow check: a call whose immediate arguments are all leaves. Leaf
/// nodes qualify vacuously, as does a zero-arity call. Grandchildren are
/// never inspected.
pub fn matches_expression_with_only_plain_arguments(expression: &Expression) -> bool {
	match expression {
		Expression::Call(call) => call.args.iter().all(Expression::is_leaf),
		_ => true,
	}
}

/// True iff the node is a call with at least one call among its immediate
/// arguments.
pub fn matches_nested_expression(expression: &Expression) -> bool {
	!matches_expression_with_only_plain_arguments(expression)
}

/// True iff every invocation of the function anywhere in the query uses only
/// plain arguments. A query that never invokes the function at all returns
/// true as well: no counter-example exists, so an inconsistency entry that
/// only applies to nested invocations can be suppressed.
pub fn is_function_invoked_only_with_non_nested_parameters(
	query: &QueryTemplate,
	function_name_in_lower_case: &str,
) -> bool {
	let at_least_one_invocation_with_nested_args = query.matches_any_expression(
		|expression| {
			matches_x_and_y(
				expression,
				|expression| matches_fun_by_name(expression, function_name_in_lower_case),
				matches_nested_expression,
			)
		},
		true,
	);

	if at_least_one_invocation_with_nested_args {
		debug!(
			function = function_name_in_lower_case,
			"query invokes function with nested arguments"
		);
	}

	!at_least_one_invocation_with_nested_args
}
