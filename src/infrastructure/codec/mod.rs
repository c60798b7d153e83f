//! JSON codecs
//!
//! - `vfs_json` - VFS documents (decode with deferred references, encode)
//! - `descriptor_json` - descriptor tree output

pub mod descriptor_json;
pub mod vfs_json;

pub use descriptor_json::{descriptors_to_vec, write_descriptors};
pub use vfs_json::{decode, decode_str, encode, encode_pretty, encode_to_string, NodeRef};
