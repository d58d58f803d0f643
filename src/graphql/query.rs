//! Query documents for the canned Storefront operations.
//!
//! Arguments are rendered as GraphQL string literals with [`quote_string`],
//! so handles and IDs containing quotes or backslashes cannot break out of
//! the query text.

use std::fmt::Write as _;

use super::fragments::{Fragment, COLLECTION_WITH_PRODUCTS, PRODUCT};

/// Default page size for [`products_query`].
pub const DEFAULT_PRODUCTS_FIRST: u32 = 50;

/// Renders `value` as a double-quoted GraphQL string literal.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::graphql::quote_string;
///
/// assert_eq!(quote_string("shirts"), r#""shirts""#);
/// assert_eq!(quote_string(r#"a"b\c"#), r#""a\"b\\c""#);
/// ```
#[must_use]
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04X}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Builds an anonymous query that selects one root field with a fragment.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::graphql::fragments::PRODUCT;
/// use shopify_storefront::graphql::QueryBuilder;
///
/// let query = QueryBuilder::new(&PRODUCT)
///     .root("productByHandle")
///     .string_arg("handle", "tee")
///     .build();
///
/// assert!(query.contains(r#"productByHandle(handle: "tee")"#));
/// assert!(query.contains("...FragmentProduct"));
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    fragment: &'static Fragment,
    root: String,
    args: Vec<(String, String)>,
    connection: bool,
}

impl QueryBuilder {
    /// Starts a query whose root selection spreads `fragment`.
    #[must_use]
    pub fn new(fragment: &'static Fragment) -> Self {
        Self {
            fragment,
            root: String::new(),
            args: Vec::new(),
            connection: false,
        }
    }

    /// Sets the root field name.
    #[must_use]
    pub fn root(mut self, field: impl Into<String>) -> Self {
        self.root = field.into();
        self
    }

    /// Adds a string argument, quoted and escaped.
    #[must_use]
    pub fn string_arg(mut self, name: impl Into<String>, value: &str) -> Self {
        self.args.push((name.into(), quote_string(value)));
        self
    }

    /// Adds an integer argument.
    #[must_use]
    pub fn int_arg(mut self, name: impl Into<String>, value: u32) -> Self {
        self.args.push((name.into(), value.to_string()));
        self
    }

    /// Marks the root field as a connection, wrapping the spread in `edges { node { } }`.
    #[must_use]
    pub const fn connection(mut self) -> Self {
        self.connection = true;
        self
    }

    /// Renders the full query document, fragment definitions first.
    #[must_use]
    pub fn build(&self) -> String {
        let mut field = self.root.clone();
        if !self.args.is_empty() {
            let args: Vec<String> = self
                .args
                .iter()
                .map(|(name, value)| format!("{name}: {value}"))
                .collect();
            let _ = write!(field, "({})", args.join(", "));
        }

        let spread = self.fragment.spread();
        let selection = if self.connection {
            format!(
                "    {field} {{\n      edges {{\n        node {{\n          {spread}\n        }}\n      }}\n    }}"
            )
        } else {
            format!("    {field} {{\n      {spread}\n    }}")
        };

        format!("{}\n{{\n{selection}\n}}\n", self.fragment.document())
    }
}

/// `products(first: N)` with `FragmentProduct`.
#[must_use]
pub fn products_query(first: u32) -> String {
    QueryBuilder::new(&PRODUCT)
        .root("products")
        .int_arg("first", first)
        .connection()
        .build()
}

/// `node(id: "<id>")` with `FragmentProduct`.
#[must_use]
pub fn product_query(id: &str) -> String {
    QueryBuilder::new(&PRODUCT)
        .root("node")
        .string_arg("id", id)
        .build()
}

/// `productByHandle(handle: "<handle>")` with `FragmentProduct`.
#[must_use]
pub fn product_by_handle_query(handle: &str) -> String {
    QueryBuilder::new(&PRODUCT)
        .root("productByHandle")
        .string_arg("handle", handle)
        .build()
}

/// `collectionByHandle(handle: "<handle>")` with `FragmentCollectionWithProducts`.
#[must_use]
pub fn collection_by_handle_query(handle: &str) -> String {
    QueryBuilder::new(&COLLECTION_WITH_PRODUCTS)
        .root("collectionByHandle")
        .string_arg("handle", handle)
        .build()
}
