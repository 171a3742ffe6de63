//! Procedural macros used by the `tuplex` crate to generate its per-arity trait impls.
//!
//! These are implementation details of `tuplex` and are only meaningful when invoked from inside
//! it: the generated impls refer to its traits by the names in scope at the invocation site.

extern crate proc_macro;

use {
    proc_macro::TokenStream,
    syn::{parse_macro_input, LitInt},
};

mod generate;

/// Generate the `Flat` and `List` conversions between flat tuples and inductive lists, for every
/// arity from zero up to and including the given literal.
#[proc_macro]
pub fn impl_tuples(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    match max.base10_parse::<usize>() {
        Ok(max) => generate::tuples(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// Generate the `ToUnary` and `ToConstant` conversions between `Number<N>` and unary type-level
/// numbers, for every `N` from zero up to and including the given literal.
#[proc_macro]
pub fn generate_unary_conversion_impls(input: TokenStream) -> TokenStream {
    let max = parse_macro_input!(input as LitInt);
    match max.base10_parse::<usize>() {
        Ok(max) => generate::unary_conversions(max).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
