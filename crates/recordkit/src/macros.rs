/// Declares a record shape: a unit struct implementing [`Shape`](crate::Shape).
///
/// Each field is written as `name: Type` where `Type` is a native value type
/// (`String`, `i64`, `bool`, `f64`, [`Date`](crate::Date),
/// [`Time`](crate::Time) or [`DateTime`](crate::DateTime)). The record's type
/// tag defaults to the struct name and can be overridden with `as "Tag"`.
///
/// ```rust
/// use recordkit::{record_shape, Record};
///
/// record_shape! {
///     pub struct Cell as "prison.Cell" {
///         block: String,
///         number: i64,
///         occupied: bool,
///     }
/// }
///
/// assert_eq!(Record::<Cell>::type_tag(), "prison.Cell");
/// assert_eq!(Record::<Cell>::field_names(), ["block", "number", "occupied"]);
/// ```
///
/// Field names must be unique:
///
/// ```compile_fail
/// use recordkit::record_shape;
///
/// record_shape! {
///     struct Twice { id: i64, id: i64 }
/// }
/// ```
#[macro_export]
macro_rules! record_shape {
    (@shape [$($attr:tt)*] [$vis:vis] $name:ident [$tag:expr] { $( $field:ident : $ty:ty ),+ }) => {
        $($attr)*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::Shape for $name {
            type Fields = ( $( $crate::Field<$ty>, )+ );
            const NAME: &'static str = $tag;
            const FIELD_NAMES: &'static [&'static str] = &[ $( stringify!($field) ),+ ];
        }

        const _: () = assert!(
            $crate::model::record::names_are_unique(&[ $( stringify!($field) ),+ ]),
            "record shape field names must be unique"
        );
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident as $tag:literal {
            $( $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $crate::record_shape!(@shape [$(#[$meta])*] [$vis] $name [$tag] { $( $field : $ty ),+ });
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $crate::record_shape!(@shape [$(#[$meta])*] [$vis] $name [stringify!($name)] { $( $field : $ty ),+ });
    };
}
