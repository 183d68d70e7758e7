//! Conversion between the uniform invocation request and Bedrock bodies

pub mod request_converter;
pub mod response_converter;
