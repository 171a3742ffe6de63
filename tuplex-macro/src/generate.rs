use {
    proc_macro2::{Ident, Literal, Span, TokenStream},
    quote::quote,
};

/// Emit `Flat` and `List` impls for every tuple arity in `0..=max`.
pub fn tuples(max: usize) -> TokenStream {
    (0..=max).map(tuple_impls).collect()
}

/// The `Flat` impl for `(T0, .., Tn)` and the `List` impl for `(T0, (.., (Tn, ())))`.
fn tuple_impls(arity: usize) -> TokenStream {
    let params = numbered("T", arity);
    let values = numbered("t", arity);
    let list = nest(&params);
    let pattern = nest(&values);

    quote! {
        impl<#(#params),*> Flat for (#(#params,)*) {
            type AsList = #list;

            fn into_list(self) -> Self::AsList {
                let (#(#values,)*) = self;
                #pattern
            }
        }

        impl<#(#params),*> List for #list {
            type AsFlat = (#(#params,)*);

            fn into_flat(self) -> Self::AsFlat {
                let #pattern = self;
                (#(#values,)*)
            }
        }
    }
}

/// Emit `ToUnary` and `ToConstant` impls pairing `Number<N>` with `S<..S<Z>..>` for `N` in
/// `0..=max`.
pub fn unary_conversions(max: usize) -> TokenStream {
    let mut unary = quote!(Z);
    let mut impls = TokenStream::new();
    for n in 0..=max {
        let constant = Literal::usize_unsuffixed(n);
        impls.extend(quote! {
            impl ToUnary for Number<#constant> {
                type AsUnary = #unary;
            }

            impl ToConstant for #unary {
                type AsConstant = Number<#constant>;
            }
        });
        unary = quote!(S<#unary>);
    }
    impls
}

fn numbered(prefix: &str, count: usize) -> Vec<Ident> {
    (0..count)
        .map(|i| Ident::new(&format!("{}{}", prefix, i), Span::call_site()))
        .collect()
}

/// Right-fold a sequence into the cons-cell shape `(a, (b, (c, ())))`, usable both as a type and
/// as a pattern.
fn nest(items: &[Ident]) -> TokenStream {
    items
        .iter()
        .rev()
        .fold(quote!(()), |tail, head| quote!((#head, #tail)))
}
