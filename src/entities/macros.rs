//! Macros for reducing boilerplate when declaring resources

/// Implement [`Resource`](crate::entities::Resource) for a backend record
///
/// The record type must provide `to_request(&self) -> Payload` and
/// `from_request(id, &Payload) -> Self`.
///
/// # Example
///
/// ```rust,ignore
/// impl_resource!(Flight {
///     path: "flights",
///     singular: "flight",
///     id: flight_id,
///     payload: FlightCreateRequest,
///     operations: [List, Get, Create, Update, Delete],
/// });
/// ```
#[macro_export]
macro_rules! impl_resource {
    (
        $type:ident {
            path: $path:expr,
            singular: $singular:expr,
            id: $id_field:ident,
            payload: $payload:ty,
            operations: [ $( $op:ident ),* $(,)? ] $(,)?
        }
    ) => {
        impl $crate::entities::Resource for $type {
            const PATH: &'static str = $path;
            const SINGULAR: &'static str = $singular;
            const OPERATIONS: &'static [$crate::entities::Operation] =
                &[ $( $crate::entities::Operation::$op ),* ];

            type Payload = $payload;

            fn id(&self) -> Option<i64> {
                self.$id_field
            }

            fn to_payload(&self) -> Self::Payload {
                self.to_request()
            }

            fn from_payload(id: i64, payload: &Self::Payload) -> Self {
                Self::from_request(id, payload)
            }
        }
    };
}
