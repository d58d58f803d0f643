//! Reusable GraphQL fragments for Storefront queries.
//!
//! Each [`Fragment`] knows the fragments it spreads. [`Fragment::document`]
//! returns the fragment's definition preceded by every fragment it needs,
//! transitively, each exactly once and always before its first use. The
//! composed text is built on first access and cached for the life of the
//! process.
//!
//! # Example
//!
//! ```rust
//! use shopify_storefront::graphql::fragments::{PRODUCT, VARIANT};
//!
//! let document = VARIANT.document();
//! let option_at = document.find("fragment FragmentOption on").unwrap();
//! let variant_at = document.find("fragment FragmentVariant on").unwrap();
//! assert!(option_at < variant_at);
//!
//! assert_eq!(PRODUCT.spread(), "...FragmentProduct");
//! ```

use std::sync::OnceLock;

/// A named GraphQL fragment and the fragments it depends on.
#[derive(Debug)]
pub struct Fragment {
    name: &'static str,
    definition: &'static str,
    requires: &'static [&'static Fragment],
    document: OnceLock<String>,
}

impl Fragment {
    /// The fragment name, e.g. `FragmentProduct`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// This fragment's own `fragment ... on ... { }` definition, without dependencies.
    #[must_use]
    pub const fn definition(&self) -> &'static str {
        self.definition
    }

    /// Fragments spread directly inside this one.
    #[must_use]
    pub const fn requires(&self) -> &'static [&'static Self] {
        self.requires
    }

    /// The spread syntax for this fragment, e.g. `...FragmentProduct`.
    #[must_use]
    pub fn spread(&self) -> String {
        format!("...{}", self.name)
    }

    /// All definitions needed to use this fragment, dependencies first.
    pub fn document(&self) -> &str {
        self.document.get_or_init(|| {
            let mut seen = Vec::new();
            let mut out = String::new();
            self.compose_into(&mut seen, &mut out);
            out
        })
    }

    fn compose_into(&self, seen: &mut Vec<&'static str>, out: &mut String) {
        if seen.contains(&self.name) {
            return;
        }
        for dependency in self.requires {
            dependency.compose_into(seen, out);
        }
        seen.push(self.name);
        out.push_str(self.definition);
    }
}

/// `Image`: dimensions, source URLs (transformed to WEBP) and alt text.
pub static IMAGE: Fragment = Fragment {
    name: "FragmentImage",
    definition: r"
fragment FragmentImage on Image {
  width
  height
  originalSrc
  transformedSrc(preferredContentType: WEBP)
  altText
}
",
    requires: &[],
    document: OnceLock::new(),
};

/// `Collection`: identity and copy.
pub static COLLECTION: Fragment = Fragment {
    name: "FragmentCollection",
    definition: r"
fragment FragmentCollection on Collection {
  id
  handle
  description
  title
}
",
    requires: &[],
    document: OnceLock::new(),
};

/// `SelectedOption`: name/value pair.
pub static SELECTED_OPTION: Fragment = Fragment {
    name: "FragmentOption",
    definition: r"
fragment FragmentOption on SelectedOption {
  name
  value
}
",
    requires: &[],
    document: OnceLock::new(),
};

/// `ProductVariant`: availability, `priceV2`, stock and selected options.
pub static VARIANT: Fragment = Fragment {
    name: "FragmentVariant",
    definition: r"
fragment FragmentVariant on ProductVariant {
  availableForSale
  priceV2 {
    amount
    currencyCode
  }
  quantityAvailable
  requiresShipping
  title
  selectedOptions {
    ...FragmentOption
  }
}
",
    requires: &[&SELECTED_OPTION],
    document: OnceLock::new(),
};

/// `Product`: 8 images, 10 variants, 8 parent collections and the max variant price.
pub static PRODUCT: Fragment = Fragment {
    name: "FragmentProduct",
    definition: r"
fragment FragmentProduct on Product {
  id
  handle
  tags
  title
  images(first: 8) {
    edges {
      node {
        ...FragmentImage
      }
    }
  }
  description
  priceRange {
    maxVariantPrice {
      amount
      currencyCode
    }
  }
  variants(first: 10) {
    edges {
      node {
        ...FragmentVariant
      }
    }
  }
  collections(first: 8) {
    edges {
      node {
        ...FragmentCollection
      }
    }
  }
}
",
    requires: &[&COLLECTION, &IMAGE, &VARIANT],
    document: OnceLock::new(),
};

/// `Collection` plus its first 10 products.
pub static COLLECTION_WITH_PRODUCTS: Fragment = Fragment {
    name: "FragmentCollectionWithProducts",
    definition: r"
fragment FragmentCollectionWithProducts on Collection {
  ...FragmentCollection
  products(first: 10) {
    edges {
      node {
        ...FragmentProduct
      }
    }
  }
}
",
    requires: &[&PRODUCT, &COLLECTION],
    document: OnceLock::new(),
};
