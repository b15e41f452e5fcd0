pub mod postmark_email_client;
pub mod streaming_encoder;

pub use postmark_email_client::PostmarkEmailClient;
pub use streaming_encoder::{EncodeError, EncodedStream, StreamingEncoder, encode_to_vec};
