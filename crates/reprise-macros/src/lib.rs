extern crate proc_macro;

mod test;

use proc_macro::TokenStream;

/// Define a test suite.
#[proc_macro_attribute]
pub fn test(args: TokenStream, item: TokenStream) -> TokenStream {
    crate::test::test(args.into(), item.into()).into()
}
