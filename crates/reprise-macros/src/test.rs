use proc_macro2::{Span, TokenStream};
use quote::{quote, quote_spanned, ToTokens, TokenStreamExt as _};
use syn::{
    ext::IdentExt as _,
    parse::{Error, ParseStream, Result},
    spanned::Spanned as _,
    Attribute, Ident, ItemFn, Path, Token,
};

macro_rules! try_quote {
    ($e:expr) => {
        match $e {
            Ok(parsed) => parsed,
            Err(err) => return err.to_compile_error(),
        }
    };
}

pub(crate) fn test(args: TokenStream, item: TokenStream) -> TokenStream {
    let mut item = try_quote!(syn::parse2::<ItemFn>(item));

    if !args.is_empty() {
        return Error::new_spanned(&args, "no arguments are accepted").to_compile_error();
    }

    match &item.sig.generics {
        generics if generics.params.is_empty() => (),
        generics => {
            return Error::new_spanned(generics, "test functions cannot take generic parameters")
                .to_compile_error()
        }
    }

    if let Some(asyncness) = &item.sig.asyncness {
        return Error::new_spanned(asyncness, "test functions cannot be async").to_compile_error();
    }

    let style = try_quote!(Style::from_item(&item));

    // extract reprise-specific attributes.
    let params = try_quote!(Params::from_attrs(&mut item.attrs));

    // append bounds to where clause.
    if let syn::ReturnType::Type(_, ref ty) = item.sig.output {
        let where_clause = item.sig.generics.make_where_clause();
        where_clause
            .predicates
            .push(syn::parse_quote!(#ty: __reprise::Termination));
    }

    Generated {
        item: &item,
        params: &params,
        style,
    }
    .to_token_stream()
}

#[derive(Copy, Clone)]
enum Style {
    /// `fn(&Context<'_>)`; cases are registered through `reprise::case`.
    Implicit,
    /// `fn(&Context<'_>, &Register<'_>)`.
    Explicit,
}

impl Style {
    fn from_item(item: &ItemFn) -> Result<Self> {
        match item.sig.inputs.len() {
            1 => Ok(Style::Implicit),
            2 => Ok(Style::Explicit),
            _ => Err(Error::new_spanned(
                &item.sig,
                "test functions must take `&Context<'_>`, optionally followed by `&Register<'_>`",
            )),
        }
    }

    fn as_ident(self) -> Ident {
        match self {
            Style::Implicit => Ident::new("implicit", Span::call_site()),
            Style::Explicit => Ident::new("explicit", Span::call_site()),
        }
    }
}

struct Params {
    crate_path: Path,
}

impl Params {
    fn from_attrs(attrs: &mut Vec<Attribute>) -> Result<Self> {
        let mut crate_path = None;

        let mut parse_attr = |input: ParseStream<'_>| -> Result<()> {
            match input.call(Ident::parse_any)? {
                id if id == "crate" => {
                    let _: Token![=] = input.parse()?;
                    let path = input.call(Path::parse_mod_style)?;
                    crate_path.replace(path);
                    Ok(())
                }
                id => Err(Error::new_spanned(id, "unknown parameter name")),
            }
        };

        let mut errors = Errors::default();
        attrs.retain(|attr| {
            if !attr.path.is_ident("reprise") {
                return true;
            }
            errors.append_if_error(attr.parse_args_with(&mut parse_attr));
            false
        });
        errors.into_result()?;

        Ok(Self {
            crate_path: crate_path.unwrap_or_else(|| syn::parse_quote!(::reprise)),
        })
    }
}

#[derive(Default)]
struct Errors(Option<Error>);

impl Errors {
    fn append_if_error(&mut self, res: Result<()>) {
        match (self.0.as_mut(), res) {
            (Some(errors), Err(error)) => errors.combine(error),
            (None, Err(error)) => self.0 = Some(error),
            (_, Ok(())) => (),
        }
    }

    fn into_result(self) -> Result<()> {
        match self.0 {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }
}

struct Generated<'a> {
    params: &'a Params,
    item: &'a ItemFn,
    style: Style,
}

impl ToTokens for Generated<'_> {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let crate_path = &self.params.crate_path;
        let item = &*self.item;
        let ident = &self.item.sig.ident;
        let location = quote_spanned!(self.item.sig.span() => __reprise::location!());
        let style = self.style.as_ident();

        let test_suite_id = quote::format_ident!("__TEST_SUITE_{}", ident);

        tokens.append_all(Some(quote! {
            #[allow(non_upper_case_globals)]
            const #ident: & #crate_path::_test_reexports::TestSuite = {
                #[allow(unused_imports)]
                use #crate_path::_test_reexports as __reprise;

                #item

                &__reprise::TestSuite {
                    desc: __reprise::TestDesc {
                        name: __reprise::test_name!(#ident),
                        location: #location,
                    },
                    suite_fn: __reprise::suite_fn!(@#style #ident),
                }
            };
        }));

        tokens.append_all(Some(quote! {
            #crate_path::__test_suite! {
                #[allow(non_upper_case_globals)]
                static #test_suite_id: & #crate_path::_test_reexports::TestSuite = #ident;
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use syn::{parse::Parser as _, Item};

    fn parse_items(input: ParseStream) -> Result<Vec<Item>> {
        let mut items = vec![];
        while !input.is_empty() {
            items.push(input.parse()?);
        }
        Ok(items)
    }

    fn read_file<P: AsRef<Path>>(path: P) -> TokenStream {
        let content = std::fs::read_to_string(path).unwrap();
        let items = parse_items.parse_str(&content).unwrap();
        quote!(#(#items)*)
    }

    fn test_expanded(name: &str) {
        let args = TokenStream::new();
        let item = read_file(format!("tests/test/{}.in.rs", name));
        let expected = read_file(format!("tests/test/{}.out.rs", name));
        let output = test(args, item);
        assert_eq!(expected.to_string(), output.to_string());
    }

    fn test_rejected(args: TokenStream, item: TokenStream, message: &str) {
        let output = test(args, item).to_string();
        assert!(output.contains("compile_error"), "{}", output);
        assert!(output.contains(message), "{}", output);
    }

    #[test]
    fn implicit() {
        test_expanded("01-implicit");
    }

    #[test]
    fn explicit() {
        test_expanded("02-explicit");
    }

    #[test]
    fn attributes() {
        test_expanded("03-attributes");
    }

    #[test]
    fn return_result() {
        test_expanded("04-return-result");
    }

    #[test]
    fn rejects_generics() {
        test_rejected(
            TokenStream::new(),
            quote!(
                fn generic<T>(ctx: &Context<'_>) {}
            ),
            "cannot take generic parameters",
        );
    }

    #[test]
    fn rejects_async() {
        test_rejected(
            TokenStream::new(),
            quote!(
                async fn asynchronous(ctx: &Context<'_>) {}
            ),
            "cannot be async",
        );
    }

    #[test]
    fn rejects_wrong_arity() {
        test_rejected(
            TokenStream::new(),
            quote!(
                fn no_args() {}
            ),
            "must take",
        );
        test_rejected(
            TokenStream::new(),
            quote!(
                fn three(a: &Context<'_>, b: &Register<'_>, c: u32) {}
            ),
            "must take",
        );
    }

    #[test]
    fn rejects_arguments() {
        test_rejected(
            quote!(Send),
            quote!(
                fn with_args(ctx: &Context<'_>) {}
            ),
            "no arguments are accepted",
        );
    }

    #[test]
    fn rejects_unknown_parameter() {
        test_rejected(
            TokenStream::new(),
            quote!(
                #[reprise(runtime = tokio)]
                fn unknown(ctx: &Context<'_>) {}
            ),
            "unknown parameter name",
        );
    }
}
