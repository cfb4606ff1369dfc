mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the `ErrorKind` trait from `sym-error` for the given struct.
///
/// The information of the error is customized using the `error` attribute:
///
/// ```ignore
/// use sym_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "division by zero",
///     labels = ["this denominator"],
///     help = "the denominator simplified to zero",
/// )]
/// pub struct DivisionByZero;
/// ```
///
/// The following tags are available:
///
/// | Tag       | Description                                                                    |
/// | --------- | ------------------------------------------------------------------------------ |
/// | `message` | The message displayed at the top of the error when it is displayed.            |
/// | `labels`  | An array of label texts, attached in order to the spans the error carries.     |
/// | `help`    | Optional help text for the error, describing what the user can do to fix it.   |
///
/// Each tag accepts an expression. `message` and each label should evaluate to something that
/// converts into a [`String`]. For structs with named fields, the expressions are evaluated with
/// the fields of the struct in scope (tuple structs are not supported).
///
/// The crate using the derive must depend on `ariadne` and `sym-error`.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl sym_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
