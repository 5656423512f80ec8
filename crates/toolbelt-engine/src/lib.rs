pub mod blob;
pub mod codec;
pub mod digest;
pub mod password;
pub mod pretty;
pub mod qr;

// Re-export key functions for easier usage
pub use blob::{data_uri, decode_blob, file_to_data_uri};
pub use codec::{
    base64_to_text, byte_list_to_text, hex_to_text, text_to_base64, text_to_byte_list, text_to_hex,
};
pub use digest::sha256_hex;
pub use password::{PasswordOptions, generate_password};
pub use pretty::prettify_json;
pub use qr::qr_unicode;
