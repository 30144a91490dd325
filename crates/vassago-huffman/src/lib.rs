//! # Vassago Huffman
//!
//! Static Huffman coding of byte streams into self-describing HUF1
//! containers.
//!
//! The encoder counts every byte value, builds an optimal prefix-code tree
//! and writes the counts into a fixed 1036-byte header followed by the
//! packed code bits. The decoder rebuilds the identical tree from the
//! header and walks it bit by bit.
//!
//! ## Features
//!
//! - **Deterministic**: identical input always yields identical containers
//! - **Streaming**: any `Read + Seek` source, any `Write` sink
//! - **Partial recovery**: bytes decoded before a corrupt code are kept
//!
//! ## Example
//!
//! ```ignore
//! use vassago_huffman::HuffmanCodec;
//! use vassago_core::{Codec, Compressor, Decompressor};
//!
//! let codec = HuffmanCodec::new();
//! let container = codec.compress(b"AAABC")?;
//! assert_eq!(codec.decompress(&container)?, b"AAABC");
//! ```

pub mod bitio;
pub mod code;
pub mod codec;
pub mod compress;
pub mod container;
pub mod decompress;
pub mod frequency;
pub mod tree;

// Re-export main types
pub use code::{Code, CodeTable, MAX_CODE_LEN};
pub use codec::HuffmanCodec;
pub use compress::{encode, encode_slice, HuffmanCompressor};
pub use container::{peek_header, ContainerHeader, HEADER_SIZE, MAGIC};
pub use decompress::{decode, decode_slice, HuffmanDecompressor};
pub use frequency::{FrequencyCounter, FrequencyTable, NUM_SYMBOLS};
pub use tree::HuffmanTree;
