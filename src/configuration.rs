use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn port(&self) -> u16;
    fn data_file(&self) -> PathBuf;
    fn in_memory(&self) -> bool;
    fn serialize_writes(&self) -> bool;
    fn max_body_bytes(&self) -> usize;
}
