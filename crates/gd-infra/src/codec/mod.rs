mod base64_encoder;

pub use base64_encoder::Base64InlineEncoder;
