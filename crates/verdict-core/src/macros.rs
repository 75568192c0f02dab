/// Build the expected primary-key set for an order-insensitive entity check.
///
/// `keys!["4", "9"]` expands to a `BTreeSet<String>`.
#[macro_export]
macro_rules! keys {
    () => {
        ::std::collections::BTreeSet::<::std::string::String>::new()
    };
    ( $( $key:expr ),+ $(,)? ) => {{
        let mut set = ::std::collections::BTreeSet::<::std::string::String>::new();
        $( set.insert(::std::string::ToString::to_string(&$key)); )+
        set
    }};
}

/// Build a `Vec<Value>` from anything convertible into a [`Value`](crate::value::Value).
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::value::Value>::new()
    };
    ( $( $value:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::value::Value::from($value) ),+ ]
    };
}

/// Build a [`Tuple`](crate::tuple::Tuple) cell by cell.
#[macro_export]
macro_rules! tuple {
    () => {
        $crate::tuple::Tuple::new(::std::vec::Vec::new())
    };
    ( $( $cell:expr ),+ $(,)? ) => {
        $crate::tuple::Tuple::new(::std::vec![ $( $crate::value::Value::from($cell) ),+ ])
    };
}
