//! Attribute schemas (`attrpubapi_v3`).

/// Tag describing how an attribute's `value` bytes are encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ContentType {
    Undefined = 0,
    String = 1,
    Jpeg = 2,
    Date = 3,
    Png = 4,
    Json = 5,
    MultiValue = 6,
    Int = 7,
}

impl ContentType {
    /// Upper-case wire name, e.g. `MULTI_VALUE`.
    pub fn name(&self) -> &'static str {
        match self {
            ContentType::Undefined => "UNDEFINED",
            ContentType::String => "STRING",
            ContentType::Jpeg => "JPEG",
            ContentType::Date => "DATE",
            ContentType::Png => "PNG",
            ContentType::Json => "JSON",
            ContentType::MultiValue => "MULTI_VALUE",
            ContentType::Int => "INT",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered list of attributes making up one profile.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AttributeList {
    #[prost(message, repeated, tag = "1")]
    pub attributes: Vec<Attribute>,
}

/// One shared fact: name, encoded value, content type and provenance.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attribute {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
    #[prost(enumeration = "ContentType", tag = "3")]
    pub content_type: i32,
    #[prost(message, repeated, tag = "4")]
    pub anchors: Vec<Anchor>,
    #[prost(string, tag = "7")]
    pub ephemeral_id: String,
}

/// Provenance record attached to an attribute.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Anchor {
    #[prost(bytes = "vec", tag = "1")]
    pub artifact_link: Vec<u8>,
    /// DER-encoded X.509 certificates.
    #[prost(bytes = "vec", repeated, tag = "2")]
    pub origin_server_certs: Vec<Vec<u8>>,
    #[prost(bytes = "vec", tag = "3")]
    pub artifact_signature: Vec<u8>,
    #[prost(string, tag = "4")]
    pub sub_type: String,
    #[prost(bytes = "vec", tag = "5")]
    pub signature: Vec<u8>,
    /// Encoded [`SignedTimestamp`](super::SignedTimestamp).
    #[prost(bytes = "vec", tag = "6")]
    pub signed_time_stamp: Vec<u8>,
}

/// Value of a `MULTI_VALUE` attribute: a list of tagged values, which may
/// themselves be `MULTI_VALUE`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MultiValue {
    #[prost(message, repeated, tag = "1")]
    pub values: Vec<multi_value::Value>,
}

/// Nested types of [`MultiValue`].
pub mod multi_value {
    /// One tagged item inside a [`MultiValue`](super::MultiValue).
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Value {
        #[prost(enumeration = "super::ContentType", tag = "1")]
        pub content_type: i32,
        #[prost(bytes = "vec", tag = "2")]
        pub data: Vec<u8>,
    }
}
