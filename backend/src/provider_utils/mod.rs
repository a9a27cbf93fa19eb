pub mod catalog_client;
pub mod decode_records;
