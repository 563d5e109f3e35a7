// Studio Bridge
// C-ABI 오디오 엔진(FMOD Studio) 호출을 out-parameter 없이 쓰기 위한 마샬링 계층

pub mod catalog;
pub mod config;
pub mod error;
pub mod ffi;
pub mod marshal;
pub mod studio;

pub use catalog::{Bridge, InitContext};
pub use config::BridgeConfig;
pub use error::Error;
pub use ffi::types::*;
pub use ffi::NativeApi;
pub use marshal::{Attributes3d, Vector};
pub use studio::{Bank, Bus, EventDescription, EventInstance, Studio};

/// env_logger 설치. RUST_LOG 없으면 warn
///
/// 이미 설치된 경우 무시한다.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}
