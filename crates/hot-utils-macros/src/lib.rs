use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::{
    parse_macro_input, parse_quote, Attribute, Block, ImplItem, Item, ItemFn, LitStr, Signature,
};

#[derive(Clone, Copy)]
enum Unit {
    Nanos,
    Micros,
    Millis,
    Secs,
}

impl Unit {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "ns" => Some(Unit::Nanos),
            "us" => Some(Unit::Micros),
            "ms" => Some(Unit::Millis),
            "s" => Some(Unit::Secs),
            _ => None,
        }
    }

    fn to_tokens(self) -> proc_macro2::TokenStream {
        match self {
            Unit::Nanos => quote!(hot_utils::timer::TimeUnit::Nanos),
            Unit::Micros => quote!(hot_utils::timer::TimeUnit::Micros),
            Unit::Millis => quote!(hot_utils::timer::TimeUnit::Millis),
            Unit::Secs => quote!(hot_utils::timer::TimeUnit::Secs),
        }
    }
}

/// Prints a `[CALL]` line each time the function is entered.
///
/// The line carries the call site of the function body and its full path,
/// indented by the number of traced calls already active on the thread.
/// Like [`hot_utils::log_call!`](../hot_utils/macro.log_call.html), tracing is
/// compiled in only for debug builds without the `log-off` feature, and follows
/// the runtime switch in `hot_utils::config`.
///
/// ```rust,no_run
/// #[hot_utils::trace_call]
/// fn parse(input: &str) -> usize {
///     input.len()
/// }
/// ```
#[proc_macro_attribute]
pub fn trace_call(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(item as ItemFn);
    *input.block = traced_block(&input.sig, &input.block);
    quote!(#input).into()
}

/// Times the function body with a [`ScopedTimer`](../hot_utils/timer/struct.ScopedTimer.html).
///
/// # Parameters
///
/// * `label` - Label printed with the measurement. Default: the function path
/// * `unit` - `"ns"`, `"us"`, `"ms"` (default) or `"s"`
///
/// ```rust,no_run
/// #[hot_utils::timed(label = "load config", unit = "us")]
/// fn load() {
///     // work
/// }
/// ```
#[proc_macro_attribute]
pub fn timed(attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(item as ItemFn);

    let mut label: Option<LitStr> = None;
    let mut unit = Unit::Millis;

    if !attr.is_empty() {
        let parser = syn::meta::parser(|meta| {
            if meta.path.is_ident("label") {
                label = Some(meta.value()?.parse()?);
                return Ok(());
            }

            if meta.path.is_ident("unit") {
                let lit: LitStr = meta.value()?.parse()?;
                unit = match Unit::parse(&lit.value()) {
                    Some(unit) => unit,
                    None => {
                        return Err(meta.error(format!(
                            "Unknown unit {:?}. Expected one of: \"ns\", \"us\", \"ms\", \"s\"",
                            lit.value()
                        )))
                    }
                };
                return Ok(());
            }

            Err(meta.error("Unknown parameter. Supported: label=\"..\", unit=\"..\""))
        });

        if let Err(e) = parser.parse2(proc_macro2::TokenStream::from(attr)) {
            return e.to_compile_error().into();
        }
    }

    let name = input.sig.ident.to_string();
    let label = match label {
        Some(lit) => quote!(#lit),
        None => quote!(concat!(module_path!(), "::", #name)),
    };
    let unit = unit.to_tokens();
    let block = &input.block;
    let body = quote! {
        let _timer = hot_utils::timer::ScopedTimer::with_unit(#label, #unit);
        #block
    };

    *input.block = body_block(&input.sig, body);
    quote!(#input).into()
}

/// Excludes a function from [`trace_all`](macro@trace_all).
#[proc_macro_attribute]
pub fn skip(_attr: TokenStream, item: TokenStream) -> TokenStream {
    item
}

/// Applies [`trace_call`](macro@trace_call) to every function of a module or impl block.
///
/// Functions marked with [`skip`](macro@skip) are left untouched, and the
/// marker itself is dropped, so a bare `#[skip]` needs no import.
///
/// ```rust,no_run
/// struct Parser;
///
/// #[hot_utils::trace_all]
/// impl Parser {
///     fn parse(&self) {}
///
///     #[hot_utils::skip]
///     fn peek(&self) {}
/// }
/// ```
#[proc_macro_attribute]
pub fn trace_all(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let mut item = parse_macro_input!(item as Item);

    match &mut item {
        Item::Mod(module) => {
            let Some((_, items)) = &mut module.content else {
                return syn::Error::new_spanned(&module.ident, "trace_all needs an inline module body")
                    .to_compile_error()
                    .into();
            };
            for func in items.iter_mut().filter_map(|entry| match entry {
                Item::Fn(func) => Some(func),
                _ => None,
            }) {
                trace_unless_skipped(&mut func.attrs, &func.sig, &mut func.block);
            }
        }
        Item::Impl(block) => {
            for method in block.items.iter_mut().filter_map(|entry| match entry {
                ImplItem::Fn(method) => Some(method),
                _ => None,
            }) {
                trace_unless_skipped(&mut method.attrs, &method.sig, &mut method.block);
            }
        }
        other => {
            return syn::Error::new_spanned(other, "trace_all can only be applied to modules or impl blocks")
                .to_compile_error()
                .into()
        }
    }

    quote!(#item).into()
}

/// `block` preceded by a call guard named after the function.
fn traced_block(sig: &Signature, block: &Block) -> Block {
    let name = sig.ident.to_string();
    body_block(
        sig,
        quote! {
            let _call = hot_utils::log::CallGuard::enter(
                concat!(module_path!(), "::", #name),
                file!(),
                line!()
            );
            #block
        },
    )
}

// Async bodies run the guard inside the future, so it spans every poll.
fn body_block(sig: &Signature, body: proc_macro2::TokenStream) -> Block {
    if sig.asyncness.is_some() {
        parse_quote!({ async { #body }.await })
    } else {
        parse_quote!({ #body })
    }
}

/// Traces one function of a `trace_all` item, unless it carries `skip`.
/// The `skip` marker is removed either way.
fn trace_unless_skipped(attrs: &mut Vec<Attribute>, sig: &Signature, block: &mut Block) {
    let count = attrs.len();
    attrs.retain(|attr| !is_skip(attr));
    if attrs.len() == count {
        *block = traced_block(sig, block);
    }
}

fn is_skip(attr: &Attribute) -> bool {
    let path = attr.path();
    path.is_ident("skip")
        || path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .eq(["hot_utils", "skip"])
}
