// 에러 타입
// 네이티브 상태 코드는 해석하지 않고 함수 이름과 함께 전달한다.

use std::ffi::NulError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 엔진이 성공 외의 FMOD_RESULT를 반환
    Fmod { function: String, code: i32 },
    /// 성공했지만 out-parameter 값을 해석할 수 없음 (알 수 없는 열거형 등)
    UnexpectedValue { function: String },
    /// 입력 문자열에 NUL 바이트 포함
    StringNul(NulError),
    /// 준비 훅 실패 (hook = 등록 순서)
    Setup { hook: usize, reason: String },
    /// 환경 변수 설정 오류
    Config(String),
}

impl Error {
    /// 네이티브 상태 코드 (엔진 오류일 때만)
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::Fmod { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Fmod { function, code } => {
                write!(f, "{} failed with FMOD_RESULT {}", function, code)
            }
            Error::UnexpectedValue { function } => {
                write!(f, "{} returned a value outside the known range", function)
            }
            Error::StringNul(e) => write!(f, "string argument contains NUL: {}", e),
            Error::Setup { hook, reason } => write!(f, "setup hook #{} failed: {}", hook, reason),
            Error::Config(message) => write!(f, "invalid configuration: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::StringNul(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NulError> for Error {
    fn from(e: NulError) -> Self {
        Error::StringNul(e)
    }
}
