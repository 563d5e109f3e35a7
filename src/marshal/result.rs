// Result Tag - 상태 코드와 페이로드를 함께 담는 결과 값
// 모양(상태만 / 값 1개 / 값 2개 / 목록)은 진입점마다 고정된다.

use std::fmt;

use libc::c_int;

use super::slot::{NativeValue, Slot};
use crate::error::Error;
use crate::ffi::types::FMOD_OK;

/// 네이티브 상태 코드 (FMOD_RESULT)
///
/// 성공 센티넬 외의 값은 해석하지 않고 그대로 전달한다.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(c_int);

impl Status {
    pub const OK: Status = Status(FMOD_OK);

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn is_ok(self) -> bool {
        self.0 == FMOD_OK
    }

    fn into_error(self, function: &str) -> Error {
        Error::Fmod {
            function: function.to_string(),
            code: self.0,
        }
    }
}

impl From<c_int> for Status {
    fn from(code: c_int) -> Self {
        Status(code)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "FMOD_OK")
        } else {
            write!(f, "FMOD_RESULT({})", self.0)
        }
    }
}

/// 상태만 (initialize, start, release, set-mute ...)
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusResult {
    status: Status,
}

impl StatusResult {
    pub fn new(status: Status) -> Self {
        Self { status }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    pub fn into_result(self, function: &str) -> Result<(), Error> {
        if self.status.is_ok() {
            Ok(())
        } else {
            Err(self.status.into_error(function))
        }
    }
}

/// 상태 + 값 1개
///
/// 실패 상태에서는 값이 항상 None이다. 슬롯은 성공일 때만 읽는다.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct ValueResult<T> {
    status: Status,
    value: Option<T>,
}

impl<T> ValueResult<T> {
    pub fn new(status: Status, value: T) -> Self {
        if status.is_ok() {
            Self {
                status,
                value: Some(value),
            }
        } else {
            Self::failed(status)
        }
    }

    pub fn failed(status: Status) -> Self {
        Self {
            status,
            value: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn into_result(self, function: &str) -> Result<T, Error> {
        if !self.status.is_ok() {
            return Err(self.status.into_error(function));
        }
        self.value.ok_or_else(|| Error::UnexpectedValue {
            function: function.to_string(),
        })
    }
}

impl<T: NativeValue> ValueResult<T> {
    pub fn from_slot(status: Status, slot: Slot<T>) -> Self {
        if !status.is_ok() {
            return Self::failed(status);
        }
        Self {
            status,
            value: slot.read(),
        }
    }
}

/// 상태 + 값 2개 (요청 값, 엔진 적용 후 최종 값)
///
/// 두 값은 함께 있거나 함께 없다.
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct PairResult<A, B> {
    status: Status,
    values: Option<(A, B)>,
}

impl<A, B> PairResult<A, B> {
    pub fn failed(status: Status) -> Self {
        Self {
            status,
            values: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    pub fn values(&self) -> Option<(&A, &B)> {
        self.values.as_ref().map(|(a, b)| (a, b))
    }

    pub fn first(&self) -> Option<&A> {
        self.values.as_ref().map(|(a, _)| a)
    }

    pub fn second(&self) -> Option<&B> {
        self.values.as_ref().map(|(_, b)| b)
    }

    pub fn into_result(self, function: &str) -> Result<(A, B), Error> {
        if !self.status.is_ok() {
            return Err(self.status.into_error(function));
        }
        self.values.ok_or_else(|| Error::UnexpectedValue {
            function: function.to_string(),
        })
    }
}

impl<A: NativeValue, B: NativeValue> PairResult<A, B> {
    pub fn from_slots(status: Status, first: Slot<A>, second: Slot<B>) -> Self {
        if !status.is_ok() {
            return Self::failed(status);
        }
        let values = match (first.read(), second.read()) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        };
        Self { status, values }
    }
}

/// 상태 + 가변 길이 목록
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub struct ListResult<T> {
    status: Status,
    items: Option<Vec<T>>,
}

impl<T> ListResult<T> {
    pub fn new(status: Status, items: Vec<T>) -> Self {
        if status.is_ok() {
            Self {
                status,
                items: Some(items),
            }
        } else {
            Self::failed(status)
        }
    }

    pub fn failed(status: Status) -> Self {
        Self {
            status,
            items: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }

    pub fn items(&self) -> Option<&[T]> {
        self.items.as_deref()
    }

    pub fn into_result(self, function: &str) -> Result<Vec<T>, Error> {
        if !self.status.is_ok() {
            return Err(self.status.into_error(function));
        }
        self.items.ok_or_else(|| Error::UnexpectedValue {
            function: function.to_string(),
        })
    }
}

pub type I32Result = ValueResult<i32>;
pub type F32Result = ValueResult<f32>;
pub type BoolResult = ValueResult<bool>;
pub type StringResult = ValueResult<String>;
pub type F32F32Result = PairResult<f32, f32>;
