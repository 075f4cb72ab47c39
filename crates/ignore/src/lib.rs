// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use matchers::{
	is_function_invoked_only_with_non_nested_parameters,
	matches_expression_with_only_plain_arguments, matches_fun_by_name,
	matches_nested_expression, matches_op_by_pattern, matches_x_and_y, matches_x_or_y,
};

mod matchers;
