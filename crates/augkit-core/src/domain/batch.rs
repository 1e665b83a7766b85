//! The single-versus-sequence result convention.

/// One or more values produced from an ordered input.
///
/// Conversions return [`Batch::One`] when exactly one array was passed in and
/// [`Batch::Many`] otherwise, keeping input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Batch<A> {
    /// Exactly one value, not wrapped in a sequence.
    One(A),
    /// Zero or several values in input order.
    Many(Vec<A>),
}

impl<A> Batch<A> {
    /// Builds a batch, unwrapping a single-element vector into [`Batch::One`].
    #[must_use]
    pub fn from_vec(mut items: Vec<A>) -> Self {
        if items.len() == 1 {
            if let Some(item) = items.pop() {
                return Self::One(item);
            }
        }
        Self::Many(items)
    }

    /// Number of values in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Many(items) => items.len(),
        }
    }

    /// Returns true for an empty [`Batch::Many`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the value if this is [`Batch::One`].
    #[must_use]
    pub const fn as_one(&self) -> Option<&A> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(_) => None,
        }
    }

    /// Takes the value if this is [`Batch::One`].
    #[must_use]
    pub fn into_one(self) -> Option<A> {
        match self {
            Self::One(item) => Some(item),
            Self::Many(_) => None,
        }
    }

    /// Flattens into a vector regardless of variant.
    #[must_use]
    pub fn into_vec(self) -> Vec<A> {
        match self {
            Self::One(item) => vec![item],
            Self::Many(items) => items,
        }
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        match self {
            Self::One(item) => std::slice::from_ref(item).iter(),
            Self::Many(items) => items.iter(),
        }
    }

    /// Applies `f` to every value, keeping the variant.
    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> Batch<B> {
        match self {
            Self::One(item) => Batch::One(f(item)),
            Self::Many(items) => Batch::Many(items.into_iter().map(f).collect()),
        }
    }
}

impl<A> IntoIterator for Batch<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Batch<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
