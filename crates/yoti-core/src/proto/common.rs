//! Common schemas (`compubapi_v3`).

/// AES-encrypted payload with its initialisation vector.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EncryptedData {
    #[prost(bytes = "vec", tag = "1")]
    pub iv: Vec<u8>,
    #[prost(bytes = "vec", tag = "2")]
    pub cipher_text: Vec<u8>,
}

/// Timestamp issued by the platform's signing service for an anchor.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SignedTimestamp {
    #[prost(int32, tag = "1")]
    pub version: i32,
    /// Microseconds since the Unix epoch.
    #[prost(uint64, tag = "2")]
    pub timestamp: u64,
    #[prost(bytes = "vec", tag = "3")]
    pub message_digest: Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub chain_digest: Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub chain_digest_skip1: Vec<u8>,
    #[prost(bytes = "vec", tag = "6")]
    pub chain_digest_skip2: Vec<u8>,
}
