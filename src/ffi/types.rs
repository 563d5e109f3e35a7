// C-compatible 타입 정의
// 네이티브 엔진과 공유되는 핸들, 열거형, 플래그

use bitflags::bitflags;
use libc::{c_int, c_void};

/// 성공 센티넬 (FMOD_OK). 그 외 값은 엔진 정의 실패 코드
pub const FMOD_OK: c_int = 0;

/// FMOD_ERR_INVALID_PARAM. 호출 전에 걸러낸 인자 오류에 사용
pub const FMOD_ERR_INVALID_PARAM: c_int = 31;

/// FMOD_BOOL
pub type FmodBool = c_int;

pub const FMOD_TRUE: FmodBool = 1;
pub const FMOD_FALSE: FmodBool = 0;

macro_rules! opaque_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(*mut c_void);

        impl $name {
            /// 엔진이 돌려준 포인터로 핸들 생성
            #[cfg(test)]
            pub(crate) fn from_raw(raw: *mut c_void) -> Self {
                Self(raw)
            }

            pub fn as_raw(&self) -> *mut c_void {
                self.0
            }

            pub fn is_null(&self) -> bool {
                self.0.is_null()
            }
        }

        // 슬롯 초기값. 엔진이 채우기 전까지는 null
        impl Default for $name {
            fn default() -> Self {
                Self(std::ptr::null_mut())
            }
        }
    };
}

opaque_handle!(
    /// FMOD_STUDIO_SYSTEM*
    SystemHandle
);
opaque_handle!(
    /// FMOD_STUDIO_BANK*
    BankHandle
);
opaque_handle!(
    /// FMOD_STUDIO_EVENTDESCRIPTION*
    EventDescriptionHandle
);
opaque_handle!(
    /// FMOD_STUDIO_EVENTINSTANCE*
    EventInstanceHandle
);
opaque_handle!(
    /// FMOD_STUDIO_BUS*
    BusHandle
);

// 아래 열거형 값의 기준은 엔진 헤더이므로 숫자를 명시한다

/// FMOD_STUDIO_PLAYBACK_STATE
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Playing = 0,
    Sustaining = 1,
    Stopped = 2,
    Starting = 3,
    Stopping = 4,
}

impl PlaybackState {
    pub fn from_raw(raw: c_int) -> Option<Self> {
        match raw {
            0 => Some(PlaybackState::Playing),
            1 => Some(PlaybackState::Sustaining),
            2 => Some(PlaybackState::Stopped),
            3 => Some(PlaybackState::Starting),
            4 => Some(PlaybackState::Stopping),
            _ => None,
        }
    }
}

/// FMOD_STUDIO_EVENT_PROPERTY
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventProperty {
    ChannelPriority = 0,
    ScheduleDelay = 1,
    ScheduleLookahead = 2,
    MinimumDistance = 3,
    MaximumDistance = 4,
    Cooldown = 5,
}

/// FMOD_STUDIO_STOP_MODE
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
    AllowFadeout = 0,
    Immediate = 1,
}

/// FMOD_STUDIO_LOAD_MEMORY_MODE
///
/// `MemoryPoint`는 엔진이 호출 이후에도 버퍼를 참조하므로 빌린 슬라이스로는
/// 표현할 수 없다. 어댑터는 항상 `Memory`(복사)를 사용한다.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMemoryMode {
    Memory = 0,
    MemoryPoint = 1,
}

bitflags! {
    /// FMOD_INITFLAGS
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Init: u32 {
        const NORMAL = 0x00000000;
        const STREAM_FROM_UPDATE = 0x00000001;
        const MIX_FROM_UPDATE = 0x00000002;
        const RIGHTHANDED_3D = 0x00000004;
        const CLIP_OUTPUT = 0x00000008;
        const CHANNEL_LOWPASS = 0x00000100;
        const CHANNEL_DISTANCEFILTER = 0x00000200;
        const PROFILE_ENABLE = 0x00010000;
        const VOL0_BECOMES_VIRTUAL = 0x00020000;
        const GEOMETRY_USECLOSEST = 0x00040000;
        const PREFER_DOLBY_DOWNMIX = 0x00080000;
        const THREAD_UNSAFE = 0x00100000;
        const PROFILE_METER_ALL = 0x00200000;
        const MEMORY_TRACKING = 0x00400000;
    }

    /// FMOD_STUDIO_INITFLAGS
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StudioInit: u32 {
        const NORMAL = 0x00000000;
        const LIVEUPDATE = 0x00000001;
        const ALLOW_MISSING_PLUGINS = 0x00000002;
        const SYNCHRONOUS_UPDATE = 0x00000004;
        const DEFERRED_CALLBACKS = 0x00000008;
        const LOAD_FROM_UPDATE = 0x00000010;
        const MEMORY_TRACKING = 0x00000020;
    }

    /// FMOD_STUDIO_LOAD_BANK_FLAGS
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LoadBank: u32 {
        const NORMAL = 0x00000000;
        const NONBLOCKING = 0x00000001;
        const DECOMPRESS_SAMPLES = 0x00000002;
        const UNENCRYPTED = 0x00000004;
    }
}
