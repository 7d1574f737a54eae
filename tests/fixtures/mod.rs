//! Request fixtures for E2E testing against a live gateway

/// 1x1 transparent PNG.
pub const TINY_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// A scan request body and the status the gateway should answer with.
#[derive(Debug, Clone)]
pub struct ScanFixture {
    pub name: &'static str,
    pub body: &'static str,
    pub expected_status: u16,
    pub description: &'static str,
}

pub const REJECTED_FIXTURES: &[ScanFixture] = &[
    ScanFixture {
        name: "empty_object",
        body: r#"{}"#,
        expected_status: 400,
        description: "No imageBase64 field at all",
    },
    ScanFixture {
        name: "null_image",
        body: r#"{"imageBase64":null}"#,
        expected_status: 400,
        description: "imageBase64 explicitly null",
    },
    ScanFixture {
        name: "empty_image",
        body: r#"{"imageBase64":""}"#,
        expected_status: 400,
        description: "imageBase64 empty string",
    },
];
