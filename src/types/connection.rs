//! The GraphQL connection wrapper (`{ edges: [{ node }] }`).

use serde::{Deserialize, Serialize};

/// A page of a GraphQL connection.
///
/// `edges` is `None` when the API omitted the field, which happens for empty
/// or errored selections. That is treated as "absent", never as a failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// The edges of this page, in API order.
    pub edges: Option<Vec<Edge<T>>>,
}

/// One edge of a [`Connection`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The wrapped record.
    pub node: T,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: None }
    }
}

impl<T> Connection<T> {
    /// Unwraps the nodes in order, or `None` when there is no `edges` field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shopify_storefront::types::Connection;
    ///
    /// let connection: Connection<u32> =
    ///     serde_json::from_str(r#"{"edges":[{"node":1},{"node":2}]}"#).unwrap();
    /// assert_eq!(connection.into_nodes(), Some(vec![1, 2]));
    ///
    /// let absent: Connection<u32> = serde_json::from_str("{}").unwrap();
    /// assert_eq!(absent.into_nodes(), None);
    /// ```
    #[must_use]
    pub fn into_nodes(self) -> Option<Vec<T>> {
        self.edges
            .map(|edges| edges.into_iter().map(|edge| edge.node).collect())
    }

    /// Unwraps the nodes in order, treating an absent `edges` field as empty.
    #[must_use]
    pub fn into_nodes_or_empty(self) -> Vec<T> {
        self.into_nodes().unwrap_or_default()
    }
}

/// Converts a connection into the ordered sequence of its nodes.
///
/// Returns `None` when the connection has no `edges` field; callers should
/// read that as "empty or absent", not as an error.
#[must_use]
pub fn to_sequence<T>(connection: Connection<T>) -> Option<Vec<T>> {
    connection.into_nodes()
}

/// Same as [`to_sequence`] for an optional connection field, flattening a
/// missing or `null` field into an empty sequence.
pub(crate) fn nodes_of<T>(connection: Option<Connection<T>>) -> Vec<T> {
    connection
        .and_then(Connection::into_nodes)
        .unwrap_or_default()
}
