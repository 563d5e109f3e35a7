// 브리지 설정
// 기본값 + 환경 변수 오버라이드

use crate::error::Error;

/// 엔진 헤더 버전 (FMOD_VERSION 2.02.22)
pub const DEFAULT_HEADER_VERSION: u32 = 0x0002_0222;

pub const ENV_HEADER_VERSION: &str = "STUDIO_BRIDGE_HEADER_VERSION";
pub const ENV_WARN_ON_FAILURE: &str = "STUDIO_BRIDGE_WARN_ON_FAILURE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Studio_System_Create에 넘기는 헤더 버전
    pub header_version: u32,
    /// 실패 상태 코드를 warn 레벨로 기록할지
    pub warn_on_failure: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            header_version: DEFAULT_HEADER_VERSION,
            warn_on_failure: true,
        }
    }
}

impl BridgeConfig {
    /// 환경 변수에서 읽기. 없는 값은 기본값 유지
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_HEADER_VERSION) {
            config.header_version = parse_hex(&raw).ok_or_else(|| {
                Error::Config(format!(
                    "{} must be a hex number, got {:?}",
                    ENV_HEADER_VERSION, raw
                ))
            })?;
        }

        if let Some(raw) = lookup(ENV_WARN_ON_FAILURE) {
            config.warn_on_failure = parse_flag(&raw).ok_or_else(|| {
                Error::Config(format!(
                    "{} must be one of 0, 1, true, false, got {:?}",
                    ENV_WARN_ON_FAILURE, raw
                ))
            })?;
        }

        log::debug!("bridge config: {:?}", config);
        Ok(config)
    }
}

fn parse_hex(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    u32::from_str_radix(digits, 16).ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}
