/// Declare a concrete domain event wrapping a payload type.
///
/// Generates a struct holding the payload and its occurrence time, an
/// `EVENT_TYPE` constant equal to the struct name, constructors, payload
/// accessors and the [`DomainEvent`](crate::DomainEvent) impl.
///
/// ```ignore
/// domain_event! {
///     /// A product was created.
///     #[derive(Debug, Clone, PartialEq)]
///     pub struct ProductCreatedEvent(ProductCreated);
/// }
///
/// assert_eq!(ProductCreatedEvent::EVENT_TYPE, "ProductCreatedEvent");
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($payload:ty);
    ) => {
        $(#[$meta])*
        $vis struct $name {
            occurred_at: $crate::__private::DateTime<$crate::__private::Utc>,
            payload: $payload,
        }

        impl $name {
            /// Stable type name used to register handlers for this event.
            pub const EVENT_TYPE: &'static str = stringify!($name);

            /// Build the event, stamped with the current time.
            pub fn new(payload: $payload) -> Self {
                Self::at(payload, $crate::__private::Utc::now())
            }

            pub fn at(
                payload: $payload,
                occurred_at: $crate::__private::DateTime<$crate::__private::Utc>,
            ) -> Self {
                Self { occurred_at, payload }
            }

            pub fn payload(&self) -> &$payload {
                &self.payload
            }

            pub fn into_payload(self) -> $payload {
                self.payload
            }
        }

        impl $crate::DomainEvent for $name {
            fn event_type(&self) -> &'static str {
                Self::EVENT_TYPE
            }

            fn occurred_at(&self) -> $crate::__private::DateTime<$crate::__private::Utc> {
                self.occurred_at
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    };
}
