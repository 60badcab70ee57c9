//! Upload decoding, dialect sniffing and tokenizing.

mod dialect;
mod source;
mod tokenizer;

pub use dialect::{decode, detect_delimiter, detect_encoding, sniff, strip_directive_line, Dialect};
pub use source::{content_hash, SourceMetadata};
pub use tokenizer::{tokenize, RawTable};
