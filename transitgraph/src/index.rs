use num_traits::{NumCast, PrimInt};
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::Range;

/// An index that may be absent, stored in the same space as a plain index.
/// Absence is encoded as the maximum value of the raw index type, so arrays of back pointers cost no more than arrays of indices.
pub trait OptionalGraphIndex<Index: GraphIndex<Self>>:
    Debug + Eq + Ord + Hash + Copy + From<Index> + From<Option<Index>> + Into<Option<Index>>
{
    /// The raw value of the index, or `None` if the index is absent.
    fn as_usize(self) -> Option<usize>;

    /// The absent index.
    fn new_none() -> Self;

    /// Returns `true` if the index is absent.
    fn is_none(self) -> bool {
        self.as_usize().is_none()
    }

    /// Returns `true` if the index is present.
    fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// An index that always refers to a node or edge.
pub trait GraphIndex<Optional: OptionalGraphIndex<Self>>:
    Debug + Eq + Ord + Hash + Copy + From<usize> + Into<Optional>
{
    /// The raw value of the index.
    fn as_usize(self) -> usize;
}

fn raw_from_usize<Raw: PrimInt>(value: usize) -> Raw {
    match <Raw as NumCast>::from(value) {
        Some(raw) if raw != Raw::max_value() => raw,
        _ => panic!("index {} does not fit into the raw index type", value),
    }
}

fn raw_to_usize<Raw: PrimInt>(raw: Raw) -> usize {
    // Raw values are only ever constructed from usize.
    <usize as NumCast>::from(raw).unwrap_or(usize::MAX)
}

macro_rules! graph_index_types {
    ($(#[$index_doc:meta])* $Index:ident, $(#[$optional_doc:meta])* $Optional:ident) => {
        $(#[$index_doc])*
        #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
        pub struct $Index<Raw>(Raw);

        $(#[$optional_doc])*
        #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
        pub struct $Optional<Raw>(Raw);

        impl<Raw: PrimInt + Hash + Debug> GraphIndex<$Optional<Raw>> for $Index<Raw> {
            fn as_usize(self) -> usize {
                raw_to_usize(self.0)
            }
        }

        impl<Raw: PrimInt + Hash + Debug> OptionalGraphIndex<$Index<Raw>> for $Optional<Raw> {
            fn as_usize(self) -> Option<usize> {
                Option::<$Index<Raw>>::from(self).map(|index| raw_to_usize(index.0))
            }

            fn new_none() -> Self {
                Self(Raw::max_value())
            }
        }

        impl<Raw: PrimInt> From<usize> for $Index<Raw> {
            fn from(value: usize) -> Self {
                Self(raw_from_usize(value))
            }
        }

        impl<Raw> From<$Index<Raw>> for $Optional<Raw> {
            fn from(index: $Index<Raw>) -> Self {
                Self(index.0)
            }
        }

        impl<Raw: PrimInt> From<Option<$Index<Raw>>> for $Optional<Raw> {
            fn from(index: Option<$Index<Raw>>) -> Self {
                Self(index.map(|index| index.0).unwrap_or_else(Raw::max_value))
            }
        }

        impl<Raw: PrimInt> From<$Optional<Raw>> for Option<$Index<Raw>> {
            fn from(optional: $Optional<Raw>) -> Self {
                (optional.0 != Raw::max_value()).then(|| $Index(optional.0))
            }
        }

        impl<Raw: PrimInt + Debug> Debug for $Index<Raw> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:?}", self.0)
            }
        }

        impl<Raw: PrimInt + Debug> Debug for $Optional<Raw> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                match Option::<$Index<Raw>>::from(*self) {
                    Some(index) => write!(f, "{:?}", index),
                    None => write!(f, "None"),
                }
            }
        }
    };
}

graph_index_types!(
    /// The index of a node.
    NodeIndex,
    /// The index of a node, or none.
    OptionalNodeIndex
);
graph_index_types!(
    /// The index of an edge.
    EdgeIndex,
    /// The index of an edge, or none.
    OptionalEdgeIndex
);

/// Iterates the indices `0..count` of the nodes or edges of a graph.
pub struct GraphIndices<Index> {
    range: Range<usize>,
    index: PhantomData<Index>,
}

impl<Index> From<Range<usize>> for GraphIndices<Index> {
    fn from(range: Range<usize>) -> Self {
        Self {
            range,
            index: PhantomData,
        }
    }
}

impl<Index: From<usize>> Iterator for GraphIndices<Index> {
    type Item = Index;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(Index::from)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphIndex, GraphIndices, NodeIndex, OptionalGraphIndex, OptionalNodeIndex};

    #[test]
    fn test_optional_index_none_is_max_value() {
        let none = OptionalNodeIndex::<usize>::new_none();
        assert!(none.is_none());
        assert_eq!(none.as_usize(), None);
        assert_eq!(Option::<NodeIndex<usize>>::from(none), None);
        assert_eq!(OptionalNodeIndex::<usize>::from(Option::<NodeIndex<usize>>::None), none);
        assert_eq!(format!("{:?}", none), "None");

        let some = OptionalNodeIndex::<usize>::from(NodeIndex::<usize>::from(4usize));
        assert!(some.is_some());
        assert_eq!(some.as_usize(), Some(4));
        assert_eq!(Option::<NodeIndex<usize>>::from(some), Some(NodeIndex::from(4usize)));
        assert_eq!(format!("{:?}", some), "4");
    }

    #[test]
    #[should_panic]
    fn test_index_rejects_max_value() {
        let _ = NodeIndex::<u8>::from(255usize);
    }

    #[test]
    fn test_graph_indices_range() {
        let indices: Vec<NodeIndex<usize>> = GraphIndices::from(0..3).collect();
        assert_eq!(indices, vec![0usize.into(), 1usize.into(), 2usize.into()]);
        assert_eq!(indices[2].as_usize(), 2);
        assert_eq!(GraphIndices::<NodeIndex<usize>>::from(0..0).count(), 0);
    }
}
