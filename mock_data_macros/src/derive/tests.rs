//! End-to-end tests for the expansion driver.

use super::*;
use anyhow::{Context, Result, anyhow, ensure};
use quote::quote;
use rstest::rstest;
use syn::{File, Item, parse_quote};

fn expand_ok(input: &DeriveInput) -> Result<TokenStream> {
    expand(input).map_err(|err| anyhow!("expansion failed: {err}"))
}

fn expand_err(input: &DeriveInput) -> Result<ExpansionError> {
    expand(input)
        .err()
        .ok_or_else(|| anyhow!("expansion should have failed"))
}

#[rstest]
fn book_expands_with_builtin_defaults() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Book {
            title: String,
            subtitle: Option<String>,
            number_of_pages: i32,
        }
    };
    let tokens = expand_ok(&input)?;
    let rendered = tokens.to_string();
    for fragment in [
        quote! { title . unwrap_or_else (|| :: std :: string :: String :: new ()) },
        quote! { subtitle . unwrap_or_else (|| :: core :: option :: Option :: None) },
        quote! { number_of_pages . unwrap_or_else (|| 0) },
        quote! { impl :: mock_data :: MockData for Book },
    ] {
        let fragment = fragment.to_string();
        ensure!(rendered.contains(&fragment), "missing `{fragment}`");
    }
    syn::parse2::<File>(tokens).context("expansion should be a valid file")?;
    Ok(())
}

#[rstest]
fn enum_expands_to_its_first_variant() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        enum BookCategory {
            Thriller,
            Fantasy,
        }
    };
    let rendered = expand_ok(&input)?.to_string();
    let expected = quote! {
        #[automatically_derived]
        impl ::mock_data::MockData for BookCategory {
            fn mock_data() -> Self {
                Self::Thriller
            }
        }
    }
    .to_string();
    ensure!(rendered == expected, "expected {expected}, got {rendered}");
    Ok(())
}

#[rstest]
fn empty_enum_fails_without_output() -> Result<()> {
    let input: DeriveInput = parse_quote! { enum BookCategory {} };
    let err = expand_err(&input)?;
    ensure!(
        matches!(err, ExpansionError::EnumerationEmpty { .. }),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
#[case::tuple(parse_quote! { struct Pages(u32, u32); })]
#[case::union(parse_quote! { union Bits { a: u32, b: f32 } })]
fn unsupported_items_fail_without_output(#[case] input: DeriveInput) -> Result<()> {
    let err = expand_err(&input)?;
    ensure!(
        matches!(err, ExpansionError::UnsupportedDeclaration { .. }),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn vec_of_opaque_type_defaults_to_empty() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Book {
            chapters: Vec<Chapter>,
        }
    };
    let rendered = expand_ok(&input)?.to_string();
    let fragment = quote! { chapters . unwrap_or_else (|| :: std :: vec :: Vec :: new ()) };
    ensure!(
        rendered.contains(&fragment.to_string()),
        "Vec<Chapter> should default to an empty Vec: {rendered}"
    );
    ensure!(
        !rendered.contains("Chapter as"),
        "the element type must not be consulted: {rendered}"
    );
    Ok(())
}

#[rstest]
fn opaque_member_calls_its_own_factory() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Book {
            first_chapter: Chapter,
        }
    };
    let rendered = expand_ok(&input)?.to_string();
    let fragment = quote! {
        first_chapter . unwrap_or_else (|| < Chapter as :: mock_data :: MockData > :: mock_data ())
    };
    ensure!(
        rendered.contains(&fragment.to_string()),
        "opaque member should compose: {rendered}"
    );
    Ok(())
}

#[rstest]
fn crate_alias_reaches_every_runtime_path() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[mock_data(crate = "fixtures")]
        struct Link {
            target: Url,
            first_chapter: Chapter,
        }
    };
    let rendered = expand_ok(&input)?.to_string();
    ensure!(
        !rendered.contains("mock_data ::"),
        "default crate path leaked: {rendered}"
    );
    for fragment in [
        quote! { < Url as fixtures :: MockData > :: mock_data () },
        quote! { < Chapter as fixtures :: MockData > :: mock_data () },
        quote! { impl fixtures :: MockData for Link },
    ] {
        let fragment = fragment.to_string();
        ensure!(rendered.contains(&fragment), "missing `{fragment}`");
    }
    Ok(())
}

#[rstest]
fn field_default_attribute_wins_over_resolution() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Book {
            #[mock_data(default = String::from("Dune"))]
            title: String,
        }
    };
    let rendered = expand_ok(&input)?.to_string();
    let fragment = quote! { title . unwrap_or_else (|| String :: from ("Dune")) };
    ensure!(
        rendered.contains(&fragment.to_string()),
        "override expression should be used: {rendered}"
    );
    Ok(())
}

#[rstest]
fn data_carrying_first_variant_gets_resolved_defaults() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        enum Shelf {
            Stacked { count: u8, #[mock_data(default = 3)] rows: u8, labels: Vec<String> },
            Empty,
        }
    };
    let rendered = expand_ok(&input)?.to_string();
    let fragment = quote! {
        Self::Stacked { count: 0, rows: 3, labels: ::std::vec::Vec::new(), }
    };
    ensure!(
        rendered.contains(&fragment.to_string()),
        "expected `{fragment}` in {rendered}"
    );
    Ok(())
}

#[rstest]
fn expansion_source_text_is_stable() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Event {
            id: Uuid,
            at: SystemTime,
            span: Duration,
        }
    };
    let first = expand_ok(&input)?.to_string();
    let second = expand_ok(&input)?.to_string();
    ensure!(first == second, "expansion should be deterministic");
    ensure!(
        first.contains(&quote! { < Uuid as :: mock_data :: MockData > :: mock_data () }.to_string()),
        "identifier default should go through the runtime impl: {first}"
    );
    ensure!(
        first.contains(&quote! { :: std :: time :: SystemTime :: now () }.to_string()),
        "timestamp default should be a call: {first}"
    );
    Ok(())
}

#[rstest]
fn expansion_only_adds_items() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        pub struct Book {
            pub title: String,
        }
    };
    let file: File = syn::parse2(expand_ok(&input)?).context("valid file")?;
    ensure!(
        !file
            .items
            .iter()
            .any(|item| matches!(item, Item::Struct(s) if s.ident == "Book")),
        "the annotated struct must not be re-emitted"
    );
    Ok(())
}

#[rstest]
fn feature_gated_types_go_through_their_runtime_impls() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Endpoint {
            target: http::Uri,
            docs: url::Url,
            id: uuid::Uuid,
        }
    };
    let rendered = expand_ok(&input)?.to_string();
    ensure!(
        !rendered.contains("placeholder"),
        "placeholder helpers are feature-gated and must not be named: {rendered}"
    );
    for fragment in [
        quote! { target . unwrap_or_else (|| < http :: Uri as :: mock_data :: MockData > :: mock_data ()) },
        quote! { docs . unwrap_or_else (|| < url :: Url as :: mock_data :: MockData > :: mock_data ()) },
        quote! { id . unwrap_or_else (|| < uuid :: Uuid as :: mock_data :: MockData > :: mock_data ()) },
    ] {
        let fragment = fragment.to_string();
        ensure!(rendered.contains(&fragment), "missing `{fragment}` in {rendered}");
    }
    Ok(())
}

#[rstest]
fn third_party_durations_and_clocks_are_not_forced_to_std_types() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Lease {
            ttl: time::Duration,
            grace: chrono::Duration,
            started: tokio::time::Instant,
        }
    };
    let rendered = expand_ok(&input)?.to_string();
    ensure!(
        !rendered.contains("Duration :: ZERO"),
        "std-only duration constant leaked: {rendered}"
    );
    for fragment in [
        quote! { ttl . unwrap_or_else (|| :: core :: default :: Default :: default ()) },
        quote! { grace . unwrap_or_else (|| :: core :: default :: Default :: default ()) },
        quote! {
            started . unwrap_or_else (|| :: core :: convert :: From :: from (:: std :: time :: Instant :: now ()))
        },
    ] {
        let fragment = fragment.to_string();
        ensure!(rendered.contains(&fragment), "missing `{fragment}` in {rendered}");
    }
    Ok(())
}
