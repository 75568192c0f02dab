mod compare;
mod float;


use crate::key::EntityKey;
use num_bigint::BigInt;
use std::{fmt, sync::OnceLock};
use time::{
    Date, Month, PrimitiveDateTime, Time,
    format_description::{self, BorrowedFormatItem},
};

// re-exports
pub use compare::{canonical_cmp, sort_canonical};
pub(crate) use compare::numeric_within;
pub use float::Float64;

type Format = Option<Vec<BorrowedFormatItem<'static>>>;

static DATE_FORMAT: OnceLock<Format> = OnceLock::new();
static TIMESTAMP_FORMAT: OnceLock<Format> = OnceLock::new();

///
/// Value
///
/// One scalar cell of a query result.
///
/// Null        → SQL NULL; equal to another Null for the oracle.
/// Key         → an entity reference, carried by its external key.
///
/// Int, Uint, IntBig and Float form a single numeric family so the
/// engine's choice of boxed representation never decides a comparison.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Bool(bool),
    Date(Date),
    Float(Float64),
    Int(i64),
    IntBig(BigInt),
    Key(EntityKey),
    Null,
    Text(String),
    Time(Time),
    Timestamp(PrimitiveDateTime),
    Uint(u64),
}

impl Value {
    /// Build a calendar date, `None` if the date does not exist.
    #[must_use]
    pub fn date(year: i32, month: u8, day: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;

        Date::from_calendar_date(year, month, day).ok().map(Self::Date)
    }

    /// Parse an ISO `YYYY-MM-DD` string into a date value.
    #[must_use]
    pub fn parse_date(s: &str) -> Option<Self> {
        let format = DATE_FORMAT
            .get_or_init(|| format_description::parse_borrowed::<2>("[year]-[month]-[day]").ok())
            .as_deref()?;

        Date::parse(s, format).ok().map(Self::Date)
    }

    /// Parse an ISO `YYYY-MM-DD HH:MM:SS` string into a timestamp value.
    #[must_use]
    pub fn parse_timestamp(s: &str) -> Option<Self> {
        let format = TIMESTAMP_FORMAT
            .get_or_init(|| {
                format_description::parse_borrowed::<2>(
                    "[year]-[month]-[day] [hour]:[minute]:[second]",
                )
                .ok()
            })
            .as_deref()?;

        PrimitiveDateTime::parse(s, format)
            .ok()
            .map(Self::Timestamp)
    }

    #[must_use]
    pub fn key(key: impl Into<EntityKey>) -> Self {
        Self::Key(key.into())
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Float(_) | Self::Int(_) | Self::IntBig(_) | Self::Uint(_)
        )
    }

    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Text-like view shared by `Text` and `Key`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Key(key) => Some(key.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Bool(_) => ValueTag::Bool,
            Self::Date(_) => ValueTag::Date,
            Self::Float(_) => ValueTag::Float,
            Self::Int(_) => ValueTag::Int,
            Self::IntBig(_) => ValueTag::IntBig,
            Self::Key(_) => ValueTag::Key,
            Self::Null => ValueTag::Null,
            Self::Text(_) => ValueTag::Text,
            Self::Time(_) => ValueTag::Time,
            Self::Timestamp(_) => ValueTag::Timestamp,
            Self::Uint(_) => ValueTag::Uint,
        }
    }

    /// Comparison family rank; values of different ranks never compare equal.
    pub(crate) const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Float(_) | Self::Int(_) | Self::IntBig(_) | Self::Uint(_) => 2,
            Self::Key(_) | Self::Text(_) => 3,
            Self::Date(_) => 4,
            Self::Time(_) => 5,
            Self::Timestamp(_) => 6,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Date(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}", v = v.get()),
            Self::Int(v) => write!(f, "{v}"),
            Self::IntBig(v) => write!(f, "{v}"),
            Self::Key(v) => write!(f, "#{v}"),
            Self::Null => f.write_str("NULL"),
            Self::Text(v) => write!(f, "'{v}'"),
            Self::Time(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
        }
    }
}

///
/// ValueTag
///
/// Variant discriminant, used to break ties between values that compare
/// equal across representations.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ValueTag {
    Bool,
    Date,
    Float,
    Int,
    IntBig,
    Key,
    Null,
    Text,
    Time,
    Timestamp,
    Uint,
}

impl ValueTag {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Float => "float",
            Self::Int => "int",
            Self::IntBig => "int_big",
            Self::Key => "key",
            Self::Null => "null",
            Self::Text => "text",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Uint => "uint",
        }
    }
}

///
/// CONVERSIONS
///

macro_rules! impl_from_for_value {
    ( $( $ty:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    f32 => Float,
    f64 => Float,
    Float64 => Float,
    BigInt => IntBig,
    EntityKey => Key,
    String => Text,
    Date => Date,
    Time => Time,
    PrimitiveDateTime => Timestamp,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}
