use std::fmt;

///
/// ComparisonMode
///
/// How an actual sequence is matched against an expected one.
/// Order and multiplicity are independent axes; each combination is a
/// named case so call sites say what they mean.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ComparisonMode {
    /// Order-sensitive; duplicates must match in count and position.
    Exact,

    /// Order-sensitive; duplicates collapse to their first occurrence.
    OrderedDistinct,

    /// Order-insensitive; duplicates must match in count.
    Bag,

    /// Order-insensitive; duplicates collapse.
    #[default]
    Set,
}

impl ComparisonMode {
    #[must_use]
    pub const fn from_axes(order_sensitive: bool, multiset: bool) -> Self {
        match (order_sensitive, multiset) {
            (true, true) => Self::Exact,
            (true, false) => Self::OrderedDistinct,
            (false, true) => Self::Bag,
            (false, false) => Self::Set,
        }
    }

    #[must_use]
    pub const fn is_order_sensitive(self) -> bool {
        matches!(self, Self::Exact | Self::OrderedDistinct)
    }

    #[must_use]
    pub const fn is_multiset(self) -> bool {
        matches!(self, Self::Exact | Self::Bag)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::OrderedDistinct => "ordered_distinct",
            Self::Bag => "bag",
            Self::Set => "set",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
