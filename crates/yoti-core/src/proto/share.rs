//! Share schemas (`sharepubapi_v1`).
//!
//! This is the one extra-data schema the SDK understands. The later
//! digital-identity variant, which renames the issuance details, is not
//! decoded here.

/// Container for the non-profile data shared alongside a receipt.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExtraData {
    #[prost(int32, tag = "1")]
    pub version: i32,
    #[prost(message, repeated, tag = "2")]
    pub list: Vec<DataEntry>,
}

/// One typed entry of [`ExtraData`].
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DataEntry {
    #[prost(enumeration = "DataEntryType", tag = "1")]
    pub r#type: i32,
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

/// Discriminator of a [`DataEntry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum DataEntryType {
    Undefined = 0,
    Invoice = 1,
    PaymentTransaction = 2,
    Location = 3,
    Transaction = 4,
    AgeVerificationSecret = 5,
    ThirdPartyAttribute = 6,
}

/// Credential the relying party may issue back to the user.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ThirdPartyAttribute {
    #[prost(bytes = "vec", tag = "1")]
    pub issuance_token: Vec<u8>,
    #[prost(message, optional, tag = "2")]
    pub issuing_attributes: Option<IssuingAttributes>,
}

/// Expiry and definitions of the attributes that may be issued.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssuingAttributes {
    #[prost(string, tag = "1")]
    pub expiry_date: String,
    #[prost(message, repeated, tag = "2")]
    pub definitions: Vec<Definition>,
}

/// Name of an attribute that may be issued.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Definition {
    #[prost(string, tag = "1")]
    pub name: String,
}
