// Value Slot - 포인터 out-parameter 대체
// 호출 직전에 만들고, 네이티브가 주소로 한 번 쓰고, 호출 직후 읽는다.

use std::ffi::CStr;

use libc::{c_char, c_int, c_uint};

use super::composite::{Attributes3d, FlatAttributes3d, Vector};
use crate::ffi::types::{
    BankHandle, BusHandle, EventDescriptionHandle, EventInstanceHandle, EventProperty, FmodBool,
    Init, LoadBank, PlaybackState, StopMode, StudioInit, SystemHandle, FMOD_FALSE, FMOD_TRUE,
};

/// out-parameter로 돌아오는 값의 네이티브 표현
pub trait NativeValue: Sized {
    /// 네이티브가 주소로 쓰는 타입. 슬롯은 이 타입의 기본값으로 시작한다.
    type Native: Default;

    /// 엔진이 알 수 없는 값을 쓴 경우 None
    fn from_native(native: Self::Native) -> Option<Self>;
}

/// 호스트 입력 → 네이티브 인자
pub trait IntoNative {
    type Native;

    fn into_native(self) -> Self::Native;
}

/// 단일 필드 out-parameter 상자
///
/// 호출 하나에만 속하며 재사용하지 않는다. `read`가 값을 소비한다.
pub struct Slot<T: NativeValue> {
    raw: T::Native,
}

impl<T: NativeValue> Slot<T> {
    pub fn new() -> Self {
        Self {
            raw: T::Native::default(),
        }
    }

    /// 네이티브 시그니처의 `T*` 위치에 넘길 주소
    pub fn as_mut_ptr(&mut self) -> *mut T::Native {
        &mut self.raw
    }

    pub fn read(self) -> Option<T> {
        T::from_native(self.raw)
    }
}

impl<T: NativeValue> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! identity_native {
    ($($ty:ty),*) => {
        $(
            impl NativeValue for $ty {
                type Native = $ty;

                fn from_native(native: $ty) -> Option<$ty> {
                    Some(native)
                }
            }

            impl IntoNative for $ty {
                type Native = $ty;

                fn into_native(self) -> $ty {
                    self
                }
            }
        )*
    };
}

identity_native!(
    c_int,
    f32,
    SystemHandle,
    BankHandle,
    EventDescriptionHandle,
    EventInstanceHandle,
    BusHandle
);

impl NativeValue for Vector {
    type Native = Vector;

    fn from_native(native: Vector) -> Option<Vector> {
        Some(native)
    }
}

impl NativeValue for bool {
    type Native = FmodBool;

    fn from_native(native: FmodBool) -> Option<bool> {
        Some(native != FMOD_FALSE)
    }
}

impl IntoNative for bool {
    type Native = FmodBool;

    fn into_native(self) -> FmodBool {
        if self {
            FMOD_TRUE
        } else {
            FMOD_FALSE
        }
    }
}

// getter 방향: 평탄화된 필드를 받아 중첩 값으로 재구성
impl NativeValue for Attributes3d {
    type Native = FlatAttributes3d;

    fn from_native(native: FlatAttributes3d) -> Option<Attributes3d> {
        Some(Attributes3d::from(native))
    }
}

// setter 방향: 중첩 구조체 포인터 그대로
impl<'a> IntoNative for &'a Attributes3d {
    type Native = *const Attributes3d;

    fn into_native(self) -> *const Attributes3d {
        self
    }
}

impl<'a> IntoNative for Option<&'a Vector> {
    type Native = *const Vector;

    fn into_native(self) -> *const Vector {
        match self {
            Some(vector) => vector as *const Vector,
            None => std::ptr::null(),
        }
    }
}

impl<'a> IntoNative for &'a CStr {
    type Native = *const c_char;

    fn into_native(self) -> *const c_char {
        self.as_ptr()
    }
}

impl NativeValue for PlaybackState {
    type Native = c_int;

    fn from_native(native: c_int) -> Option<PlaybackState> {
        let state = PlaybackState::from_raw(native);
        if state.is_none() {
            log::warn!("unknown FMOD_STUDIO_PLAYBACK_STATE value {}", native);
        }
        state
    }
}

impl IntoNative for StopMode {
    type Native = c_int;

    fn into_native(self) -> c_int {
        self as c_int
    }
}

impl IntoNative for EventProperty {
    type Native = c_int;

    fn into_native(self) -> c_int {
        self as c_int
    }
}

macro_rules! flags_native {
    ($($ty:ty),*) => {
        $(
            impl IntoNative for $ty {
                type Native = c_uint;

                fn into_native(self) -> c_uint {
                    self.bits()
                }
            }
        )*
    };
}

flags_native!(Init, StudioInit, LoadBank);
