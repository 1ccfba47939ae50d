//! Proptest generators for property-based testing.

use proptest::prelude::*;

use hostmark_core::IdentityComposer;

/// Generate arbitrary message bytes of specified max length.
pub fn message(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate a component value free of the separator characters.
///
/// Composed messages are only collision-free for values that avoid `|` and
/// `:`; these are the values the composer is specified for.
pub fn component_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._-]{1,64}".prop_map(String::from)
}

/// Parameters for composing an identity.
#[derive(Debug, Clone)]
pub struct IdentityParams {
    pub machine_id: Option<String>,
    pub salt: Option<String>,
}

impl Arbitrary for IdentityParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            prop::option::of(component_value()),
            prop::option::of(component_value()),
        )
            .prop_map(|(machine_id, salt)| IdentityParams { machine_id, salt })
            .boxed()
    }
}

/// Compose the canonical message from parameters.
pub fn compose_from_params(params: &IdentityParams) -> String {
    let mut composer = IdentityComposer::new();

    if let Some(machine_id) = &params.machine_id {
        composer = composer.machine_id(machine_id.clone());
    }
    if let Some(salt) = &params.salt {
        composer = composer.salt(salt.clone());
    }

    composer.compose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostmark_core::{Digest, Sha256};

    proptest! {
        #[test]
        fn test_composition_deterministic(params: IdentityParams) {
            prop_assert_eq!(compose_from_params(&params), compose_from_params(&params));
        }

        #[test]
        fn test_composed_message_shape(params: IdentityParams) {
            let message = compose_from_params(&params);

            // Generated values never contain separators, so component count
            // is recoverable from the message.
            let expected_parts =
                usize::from(params.machine_id.is_some()) + usize::from(params.salt.is_some());
            if expected_parts == 0 {
                prop_assert!(message.is_empty());
            } else {
                prop_assert_eq!(message.split('|').count(), expected_parts);
            }
        }

        #[test]
        fn test_token_is_stable_across_chunking(
            data in message(512),
            boundary in 0usize..512,
        ) {
            let boundary = boundary.min(data.len());

            let mut engine = Sha256::new();
            engine.update(&data[..boundary]);
            engine.update(&data[boundary..]);

            prop_assert_eq!(
                engine.finalize().to_token(),
                Digest::hash(&data).to_token()
            );
        }

        #[test]
        fn test_token_length(data in message(256)) {
            let token = Digest::hash(&data).to_token();
            prop_assert_eq!(token.len(), 43);
        }
    }
}
