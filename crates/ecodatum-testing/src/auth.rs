//! Identity helpers for router tests.
//!
//! Services behind the gateway receive `x-ecodatum-user-id`. In tests, `MockAuth`
//! builds that header directly so no real gateway is needed.

use axum::http::{HeaderMap, HeaderName, HeaderValue, request::Builder};
use uuid::Uuid;

use ecodatum_auth_types::USER_ID_HEADER;

/// Identity injected into test requests.
pub struct MockAuth {
    pub user_id: Uuid,
}

impl MockAuth {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(HeaderName::from_static(USER_ID_HEADER), self.header_value());
        map
    }

    /// Attach the identity header to a request builder.
    pub fn apply(&self, builder: Builder) -> Builder {
        builder.header(USER_ID_HEADER, self.header_value())
    }

    fn header_value(&self) -> HeaderValue {
        HeaderValue::from_str(&self.user_id.to_string()).unwrap()
    }
}
