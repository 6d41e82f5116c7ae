//! `/hello` — a read-only greeting resource.

use std::collections::BTreeMap;

use restshim_domain::envelope::{Envelope, OK};

use crate::request::ResourceRequest;
use crate::resource::Resource;

/// Answers `GET /hello` with a fixed key/value payload. Every other verb is
/// left to the not-supported providers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelloResource;

impl Resource for HelloResource {
    type Data = BTreeMap<&'static str, &'static str>;

    fn uri(&self) -> &str {
        "/hello"
    }

    fn get(&self, _request: &ResourceRequest) -> Envelope<Self::Data> {
        Envelope::new(OK, "key1", BTreeMap::from([("key1", "value1")]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;
    use crate::resource::Verb;
    use axum::http::Method;

    #[test]
    fn should_encode_fixture_body_on_get() {
        let envelope = HelloResource.get(&ResourceRequest::new(Method::GET));
        let (_, body) = encode(&envelope).unwrap();
        assert_eq!(
            &body[..],
            br#"{"code":200,"message":"key1","data":{"key1":"value1"}}"#
        );
    }

    #[test]
    fn should_reject_every_other_verb() {
        for verb in [Verb::Post, Verb::Put, Verb::Delete] {
            let envelope = verb.dispatch(&HelloResource, &ResourceRequest::default());
            assert_eq!(envelope, Envelope::method_not_allowed(), "{verb:?}");
        }
    }
}
